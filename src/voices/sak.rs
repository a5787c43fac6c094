//! Sak - the muted filler stroke.
//!
//! Band-passed noise around 1 kHz at low level, 40 ms long. On its own it
//! barely registers; between the dums and taks it is what makes the rhythm
//! feel played rather than programmed.

use crate::{
    dsp::noise::NoiseBuffer,
    graph::filter::FilterNode,
    voices::{noise_hit, NoiseBranch},
};

pub type Sak = NoiseBranch;

const CENTER_HZ: f32 = 1_000.0;
const Q: f32 = 1.0;
const PEAK: f32 = 0.15;
const DECAY: f64 = 0.04;

/// Create a muted filler stroke starting at `at`.
pub fn sak(at: f64, noise: NoiseBuffer) -> Sak {
    noise_hit(at, noise, FilterNode::bandpass(CENTER_HZ).with_q(Q), PEAK, DECAY)
}
