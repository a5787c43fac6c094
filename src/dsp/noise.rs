//! White noise buffers for percussive transients.
//!
//! Every hit gets its own buffer so simultaneous voices never share noise
//! content. At 48 kHz that is 96 000 samples per hit, traded for simplicity.

use rand::Rng;

/// Length of every noise buffer, in seconds.
pub const NOISE_SECONDS: f32 = 2.0;

/// An immutable block of uniform white noise in [-1, 1).
#[derive(Debug, Clone)]
pub struct NoiseBuffer {
    samples: Box<[f32]>,
    sample_rate: f32,
}

impl NoiseBuffer {
    /// Fill a fresh 2 second buffer at `sample_rate` from `rng`.
    pub fn generate<R: Rng + ?Sized>(sample_rate: f32, rng: &mut R) -> Self {
        let len = (sample_rate * NOISE_SECONDS) as usize;
        let samples = (0..len)
            .map(|_| rng.random::<f32>() * 2.0 - 1.0)
            .collect();

        Self {
            samples,
            sample_rate,
        }
    }

    pub fn samples(&self) -> &[f32] {
        &self.samples
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn sample_rate(&self) -> f32 {
        self.sample_rate
    }

    /// Playback length in seconds.
    pub fn duration(&self) -> f64 {
        self.samples.len() as f64 / self.sample_rate as f64
    }
}
