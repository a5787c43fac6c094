//! Tak - the sharp rim stroke.
//!
//! 1. Square wave falling 2 kHz → 1 kHz in 100 ms: the metallic ring of the
//!    rim, kept quiet (0.2) because a square is loud for its amplitude.
//! 2. High-passed noise (2.5 kHz) for the crack, loud and very short.

use crate::{
    dsp::{envelope::Envelope, noise::NoiseBuffer},
    graph::{envelope::EnvNode, extensions::NodeExt, filter::FilterNode, mix::Mix, oscillator::OscNode},
    voices::{decay_from, noise_hit, NoiseBranch, ToneBranch},
};

pub type Tak = Mix<ToneBranch, NoiseBranch>;

const RING_START_HZ: f32 = 2_000.0;
const RING_END_HZ: f32 = 1_000.0;
const RING_PEAK: f32 = 0.2;
const RING_DECAY: f64 = 0.1;

const CRACK_CUTOFF_HZ: f32 = 2_500.0;
const CRACK_PEAK: f32 = 0.7;
const CRACK_DECAY: f64 = 0.05;

/// Create a rim stroke starting at `at`.
pub fn tak(at: f64, noise: NoiseBuffer) -> Tak {
    let pitch = Envelope::new(RING_START_HZ)
        .set_value_at(RING_START_HZ, at)
        .exponential_ramp_to(RING_END_HZ, at + RING_DECAY);

    let ring = OscNode::square()
        .with_frequency(pitch)
        .start_at(at)
        .stop_at(at + RING_DECAY)
        .amplify(EnvNode::new(decay_from(RING_PEAK, at, RING_DECAY)));

    let crack = noise_hit(
        at,
        noise,
        FilterNode::highpass(CRACK_CUTOFF_HZ),
        CRACK_PEAK,
        CRACK_DECAY,
    );

    ring.mix(crack)
}
