//! Zaghroota - the celebratory vocal trill.
//!
//! A high voice approximated by a 1100 Hz triangle whose pitch is wobbled
//! ±250 Hz by a 12 Hz sine (the tongue trill). Swells in over 200 ms and
//! fades out linearly by 1.5 s.

use crate::{
    dsp::envelope::Envelope,
    graph::{
        amplify::Amplify,
        envelope::EnvNode,
        extensions::NodeExt,
        modulate::Modulate,
        oscillator::{OscNode, OscParam},
    },
};

pub type Zaghroota = Amplify<Modulate<OscNode, OscNode>, EnvNode>;

const CARRIER_HZ: f32 = 1_100.0;
const TRILL_HZ: f32 = 12.0;
const TRILL_DEPTH_HZ: f32 = 250.0;
const PEAK: f32 = 0.2;
const SWELL: f64 = 0.2;
const LENGTH: f64 = 1.5;

/// Create a vocal trill starting at `at`.
pub fn zaghroota(at: f64) -> Zaghroota {
    let trill = OscNode::sine()
        .with_frequency(TRILL_HZ)
        .start_at(at)
        .stop_at(at + LENGTH);

    let gain = Envelope::new(1.0)
        .set_value_at(0.0, at)
        .linear_ramp_to(PEAK, at + SWELL)
        .linear_ramp_to(0.0, at + LENGTH);

    OscNode::triangle()
        .with_frequency(CARRIER_HZ)
        .start_at(at)
        .stop_at(at + LENGTH)
        .modulate(trill, OscParam::Frequency, TRILL_DEPTH_HZ)
        .amplify(EnvNode::new(gain))
}
