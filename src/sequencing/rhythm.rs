use rand::Rng;

use crate::{
    sequencing::pattern::{stroke_at, Stroke, GHOST_PROBABILITY, HYPE_EVERY},
    voices::VoiceKind,
};

/// What one tick of the loop plays.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Step {
    /// Absolute step number, counting from 0
    pub index: u64,
    pub stroke: Stroke,
    /// The pattern voice, if this step sounds
    pub voice: Option<VoiceKind>,
    /// A trill accent rides on this step
    pub hype: bool,
}

impl Step {
    /// Dum steps drive the visual pulse.
    pub fn main_beat(&self) -> bool {
        self.stroke == Stroke::Dum
    }

    /// Every voice this step triggers, pattern voice first.
    pub fn voices(&self) -> impl Iterator<Item = VoiceKind> {
        self.voice
            .into_iter()
            .chain(self.hype.then_some(VoiceKind::Zaghroota))
    }
}

/// The step machine behind the rhythm loop. Pure: timing lives elsewhere.
#[derive(Debug, Default, Clone)]
pub struct RhythmLoop {
    step: u64,
}

impl RhythmLoop {
    pub fn new() -> Self {
        Self::default()
    }

    /// Index of the next step.
    pub fn position(&self) -> u64 {
        self.step
    }

    /// Produce the next step. `rng` is drawn from on ghost steps only.
    pub fn advance<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Step {
        let index = self.step;
        self.step = self.step.wrapping_add(1);

        let stroke = stroke_at(index);
        let voice = match stroke {
            Stroke::Dum => Some(VoiceKind::Dum),
            Stroke::Tak => Some(VoiceKind::Tak),
            Stroke::Ghost => rng.random_bool(GHOST_PROBABILITY).then_some(VoiceKind::Sak),
        };

        Step {
            index,
            stroke,
            voice,
            hype: index > 0 && index % HYPE_EVERY == 0,
        }
    }
}
