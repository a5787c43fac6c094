//! Clap voice - a single hand clap.
//!
//! Band-passed noise (1.2 kHz, Q 1) with a 5 ms linear attack. The attack is
//! short enough to still sound instant, but removes the click a hard start
//! would add. A double clap is two of these, 80 ms apart.

use crate::{
    dsp::{envelope::Envelope, noise::NoiseBuffer},
    graph::{
        amplify::Amplify, envelope::EnvNode, extensions::NodeExt, filter::FilterNode,
        noise::NoiseNode, through::Through,
    },
    voices::DECAY_FLOOR,
};

pub type Clap = Amplify<Through<NoiseNode, FilterNode>, EnvNode>;

const CENTER_HZ: f32 = 1_200.0;
const Q: f32 = 1.0;
const PEAK: f32 = 0.6;
const ATTACK: f64 = 0.005;
const DECAY: f64 = 0.2;

/// Create a clap starting at `at`.
pub fn clap(at: f64, noise: NoiseBuffer) -> Clap {
    let gain = Envelope::new(1.0)
        .set_value_at(0.0, at)
        .linear_ramp_to(PEAK, at + ATTACK)
        .exponential_ramp_to(DECAY_FLOOR, at + DECAY);

    NoiseNode::new(noise)
        .start_at(at)
        .through(FilterNode::bandpass(CENTER_HZ).with_q(Q))
        .amplify(EnvNode::new(gain))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{dsp::envelope::Curve, voices::test_support::*};

    #[test]
    fn gain_rises_then_decays() {
        let voice = clap(0.0, noise());
        let gain = voice.modulator.envelope();
        let events = gain.events();

        assert_eq!(events.len(), 3);
        assert_eq!((events[0].curve, events[0].value), (Curve::SetValue, 0.0));
        assert_eq!((events[1].curve, events[1].value), (Curve::Linear, 0.6));
        assert_eq!((events[2].curve, events[2].value), (Curve::Exponential, 0.01));

        assert!((gain.value_at(0.0025) - 0.3).abs() < 1e-4);
        assert!((gain.value_at(0.005) - 0.6).abs() < 1e-6);
        assert!((gain.value_at(0.3) - 0.01).abs() < 1e-6);
    }

    #[test]
    fn centred_on_1200_hz() {
        let voice = clap(0.0, noise());
        assert_eq!(voice.signal.filter.cutoff(), 1_200.0);
        assert_eq!(voice.signal.filter.q(), 1.0);
    }

    #[test]
    fn starts_silent() {
        let mut voice = clap(0.0, noise());
        let out = render(&mut voice, 0.0, 0.1);
        assert_eq!(out[0], 0.0);
        assert!(peak(&out) > 0.01);
    }
}
