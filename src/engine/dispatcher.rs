use std::time::Duration;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{engine::AudioEngine, voices::VoiceKind};

/// What the front-end asks for. Each maps to one or more timed voices.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SoundKind {
    /// Double hand clap
    Clap,
    /// Dum, sak, tak flourish
    Drum,
    /// Vocal trill
    Cheer,
}

/// One voice of a sound, offset from the moment the sound was requested.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hit {
    pub delay: Duration,
    pub voice: VoiceKind,
}

const fn hit(delay_ms: u64, voice: VoiceKind) -> Hit {
    Hit {
        delay: Duration::from_millis(delay_ms),
        voice,
    }
}

const CLAP: [Hit; 2] = [hit(0, VoiceKind::Clap), hit(80, VoiceKind::Clap)];
const DRUM: [Hit; 3] = [
    hit(0, VoiceKind::Dum),
    hit(120, VoiceKind::Sak),
    hit(240, VoiceKind::Tak),
];
const CHEER: [Hit; 1] = [hit(0, VoiceKind::Zaghroota)];

impl SoundKind {
    pub fn hits(self) -> &'static [Hit] {
        match self {
            SoundKind::Clap => &CLAP,
            SoundKind::Drum => &DRUM,
            SoundKind::Cheer => &CHEER,
        }
    }
}

impl AudioEngine {
    /// Play a sound. Immediate hits start now; delayed ones are local timer
    /// tasks that cannot be cancelled once spawned.
    ///
    /// # Panics
    ///
    /// Sounds with delayed hits must be played from inside a tokio `LocalSet`.
    pub fn play(&self, sound: SoundKind) {
        if !self.is_enabled() {
            return;
        }

        for &Hit { delay, voice } in sound.hits() {
            if delay.is_zero() {
                self.trigger(voice);
                continue;
            }

            let engine = self.clone();
            tokio::task::spawn_local(async move {
                tokio::time::sleep(delay).await;
                engine.trigger(voice);
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clap_is_a_double_clap() {
        let hits = SoundKind::Clap.hits();
        assert_eq!(hits.len(), 2);
        assert!(hits.iter().all(|h| h.voice == VoiceKind::Clap));
        assert_eq!(hits[1].delay, Duration::from_millis(80));
    }

    #[test]
    fn drum_flourish_order() {
        let voices: Vec<_> = SoundKind::Drum.hits().iter().map(|h| (h.delay.as_millis(), h.voice)).collect();
        assert_eq!(
            voices,
            vec![(0, VoiceKind::Dum), (120, VoiceKind::Sak), (240, VoiceKind::Tak)]
        );
    }

    #[test]
    fn cheer_is_the_trill() {
        assert_eq!(SoundKind::Cheer.hits(), &[hit(0, VoiceKind::Zaghroota)]);
    }
}
