//! Audio engine: the context, its lifecycle and everything that triggers voices.
//!
//! - `context`: output device, render queue and the render-thread `Renderer`
//! - `lifecycle`: `AudioEngine`, init gating and voice triggering
//! - `dispatcher`: `AudioEngine::play` for the front-end's sound categories
//! - `sequencer`: `AudioEngine::start_rhythm_loop`

pub mod context;
pub mod dispatcher;
pub mod lifecycle;
pub mod sequencer;

pub use context::{AudioContext, ContextState, MasterGain, Renderer};
pub use dispatcher::{Hit, SoundKind};
pub use lifecycle::AudioEngine;
pub use sequencer::RhythmHandle;
