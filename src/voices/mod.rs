//! The percussion kit.
//!
//! Each voice is a function from a start time (absolute context time, seconds)
//! to a ready-to-render node graph. Every parameter curve is scheduled up
//! front, so a voice needs no further control once it is handed to the
//! renderer, and it retires on its own when its sources finish.
//!
//! # Example
//!
//! ```ignore
//! use tabla_dsp::voices;
//!
//! let t = ctx.current_time();
//! let dum = voices::dum(t, noise_a);     // deep bass hit
//! let tak = voices::tak(t, noise_b);     // sharp rim hit
//! let sak = voices::sak(t, noise_c);     // muted filler
//! let clap = voices::clap(t, noise_d);   // hand clap
//! let trill = voices::zaghroota(t);      // vocal trill
//! ```

mod clap;
mod dum;
mod sak;
mod tak;
mod zaghroota;

pub use clap::{clap, Clap};
pub use dum::{dum, Dum};
pub use sak::{sak, Sak};
pub use tak::{tak, Tak};
pub use zaghroota::{zaghroota, Zaghroota};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    dsp::{envelope::Envelope, noise::NoiseBuffer},
    graph::{
        amplify::Amplify, envelope::EnvNode, extensions::NodeExt, filter::FilterNode,
        noise::NoiseNode, oscillator::OscNode, through::Through, GraphNode,
    },
};

/// Level every exponential decay in the kit lands on (about -40 dB).
pub const DECAY_FLOOR: f32 = 0.01;

/// Gain of a gain stage nobody has automated yet.
const UNITY: f32 = 1.0;

/// An oscillator shaped by a gain curve.
pub type ToneBranch = Amplify<OscNode, EnvNode>;

/// Filtered noise shaped by a gain curve.
pub type NoiseBranch = Amplify<Through<NoiseNode, FilterNode>, EnvNode>;

/// The five synthesized strokes.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VoiceKind {
    /// Deep bass hit from the centre of the skin
    Dum,
    /// Sharp rim hit
    Tak,
    /// Quiet muted filler
    Sak,
    /// Hand clap
    Clap,
    /// Celebratory vocal trill
    Zaghroota,
}

impl VoiceKind {
    /// Whether building this voice consumes a noise buffer.
    pub fn uses_noise(self) -> bool {
        !matches!(self, VoiceKind::Zaghroota)
    }

    /// Build the voice starting at `at`, drawing a noise buffer only if needed.
    pub fn build<F>(self, at: f64, noise: F) -> Box<dyn GraphNode>
    where
        F: FnOnce() -> NoiseBuffer,
    {
        match self {
            VoiceKind::Dum => Box::new(dum(at, noise())),
            VoiceKind::Tak => Box::new(tak(at, noise())),
            VoiceKind::Sak => Box::new(sak(at, noise())),
            VoiceKind::Clap => Box::new(clap(at, noise())),
            VoiceKind::Zaghroota => Box::new(zaghroota(at)),
        }
    }
}

/// Gain curve: `peak` at `at`, decaying exponentially to the floor by `at + decay`.
pub(crate) fn decay_from(peak: f32, at: f64, decay: f64) -> Envelope {
    Envelope::new(UNITY)
        .set_value_at(peak, at)
        .exponential_ramp_to(DECAY_FLOOR, at + decay)
}

/// A burst of filtered noise starting at `at`.
pub(crate) fn noise_hit(
    at: f64,
    noise: NoiseBuffer,
    filter: FilterNode,
    peak: f32,
    decay: f64,
) -> NoiseBranch {
    NoiseNode::new(noise)
        .start_at(at)
        .through(filter)
        .amplify(EnvNode::new(decay_from(peak, at, decay)))
}
