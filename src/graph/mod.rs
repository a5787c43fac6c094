//! Composable building blocks for constructing audio-processing graphs.
//!
//! Graph nodes wrap the low-level DSP primitives with what percussion voices
//! need: scheduled start/stop, automation timelines and block-based rendering
//! against an absolute clock. The `extensions` module adds fluent helpers so
//! voices can be authored with a clear, chainable API.

/// Multiply a signal by a gain curve.
pub mod amplify;
/// Node that renders an automation timeline.
pub mod envelope;
/// Fluent combinators (`.amplify()`, `.mix()`, etc.).
pub mod extensions;
/// Topology-preserving filter node with multiple responses.
pub mod filter;
/// Summing junction for parallel branches.
pub mod mix;
/// Audio-rate parameter modulation.
pub mod modulate;
/// Core traits shared by all graph nodes.
pub mod node;
/// One-shot noise buffer playback.
pub mod noise;
/// Scheduled audio-band oscillators.
pub mod oscillator;
/// Serial chaining of two nodes (source → effect).
pub mod through;

pub use node::{GraphNode, Modulatable, RenderCtx};
