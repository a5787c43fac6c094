//! Procedural Egyptian percussion.
//!
//! Every sound is synthesized on the fly from oscillators and filtered noise:
//! no samples. Voices are small node graphs (`graph`) built from DSP
//! primitives (`dsp`), handed to a lock-free renderer (`engine`) and driven
//! by a fixed maqsum rhythm (`sequencing`).
//!
//! ```ignore
//! let engine = AudioEngine::new(EngineConfig::default());
//! local.run_until(async {
//!     engine.init().await;
//!     engine.play(SoundKind::Cheer);
//!     let rhythm = engine.start_rhythm_loop(|| pulse());
//!     // ...
//!     rhythm.cancel();
//! }).await;
//! ```

pub mod config;
pub mod decor;
pub mod dsp;
pub mod engine;
pub mod error;
pub mod graph; // Composable audio graph nodes
pub mod hype;
pub mod sequencing; // The fixed rhythm
pub mod voices;

pub use config::EngineConfig;
pub use engine::{AudioEngine, RhythmHandle, SoundKind};
pub use error::EngineError;
pub use voices::VoiceKind;

pub const MAX_BLOCK_SIZE: usize = 2048;
