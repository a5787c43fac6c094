//! Low-level DSP primitives used by the higher level graph nodes.
//!
//! These components are allocation-free once built and realtime-safe, making
//! them safe to embed directly inside voices. They stay focused on the
//! signal-processing math so graph nodes can layer on scheduling.

/// Automation timelines (set / linear / exponential breakpoints).
pub mod envelope;
/// State-variable filter implementation with multiple responses.
pub mod filter;
/// White noise buffers.
pub mod noise;
/// Band-limited oscillator waveforms.
pub mod oscillator;

pub use envelope::{Automation, Curve, Envelope};
