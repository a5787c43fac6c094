//! The fixed rhythm: what to play on each step, independent of timing.
//!
//! `engine::sequencer` drives a `RhythmLoop` from a timer.

pub mod pattern;
pub mod rhythm;

pub use pattern::{Stroke, MAQSUM, STEP_INTERVAL};
pub use rhythm::{RhythmLoop, Step};
