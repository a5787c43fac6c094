//! Real-world scenario benchmarks.
//!
//! Whole voices as the engine builds them, and the renderer mixing a busy
//! stretch of the rhythm loop.

mod renderer;
mod voices;

pub use renderer::bench_renderer;
pub use voices::bench_voices;
