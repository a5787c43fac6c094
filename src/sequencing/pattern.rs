/*
Maqsum
======

The loop plays maqsum, the backbone rhythm of Egyptian pop and baladi, as
eight equal steps:

    step:   0     1     2     3     4     5     6     7
           DUM   .     TAK   .     DUM   .     TAK   .

The dots are ghost steps: a player fills them with soft, muted strokes, not
always, and never quite the same way twice. Here each one sounds a sak with
probability 0.7, which is enough to stop the loop from feeling mechanical.

Tempo
-----

One step every 180 ms, so a full bar takes 1.44 s (about 83 BPM counting a
quarter note per two steps). Tempo and pattern are fixed on purpose.

Every 32 steps (four bars) a zaghroota trill rides on top of the pattern.
*/

use std::time::Duration;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One position of the pattern.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stroke {
    Dum,
    Tak,
    /// Optional filler, decided afresh every time it comes around
    Ghost,
}

pub const MAQSUM: [Stroke; 8] = [
    Stroke::Dum,
    Stroke::Ghost,
    Stroke::Tak,
    Stroke::Ghost,
    Stroke::Dum,
    Stroke::Ghost,
    Stroke::Tak,
    Stroke::Ghost,
];

pub const STEP_INTERVAL: Duration = Duration::from_millis(180);

/// Chance that a ghost step actually sounds.
pub const GHOST_PROBABILITY: f64 = 0.7;

/// Steps between two hype accents.
pub const HYPE_EVERY: u64 = 32;

/// The stroke at absolute step `index`.
pub fn stroke_at(index: u64) -> Stroke {
    MAQSUM[(index % MAQSUM.len() as u64) as usize]
}
