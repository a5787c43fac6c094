//! Floating emoji decoration shown while the hype is on.
//!
//! Pure state: the front-end calls `spawn` every `SPAWN_INTERVAL` and draws
//! whatever `items` returns. Animation is the front-end's business; each item
//! only carries where it starts and how long it takes to float away.

use std::{collections::VecDeque, time::Duration};

use rand::Rng;
#[cfg(feature = "serde")]
use serde::Serialize;

pub const SPAWN_INTERVAL: Duration = Duration::from_millis(300);

/// Only the most recent items are kept.
pub const MAX_ITEMS: usize = 15;

pub const EMOJIS: [&str; 8] = ["🥁", "👏", "🔥", "💃", "🕺", "❤️", "🌟", "🎉"];

/// Items start somewhere in the left 90% so they never hang off the edge.
const MAX_LEFT_PERCENT: f32 = 90.0;
const MIN_DURATION_SECS: f32 = 2.0;
const MAX_DURATION_SECS: f32 = 5.0;

#[cfg_attr(feature = "serde", derive(Serialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct FloatingItem {
    /// Spawn time in milliseconds
    pub id: u64,
    pub emoji: &'static str,
    /// Horizontal start position, percent of the width, in [0, 90)
    pub left: f32,
    /// Seconds to float from bottom to top, in [2, 5)
    pub duration: f32,
}

impl FloatingItem {
    /// Progress through the animation at `now_ms`: 0 at spawn, 1 when gone.
    pub fn progress(&self, now_ms: u64) -> f32 {
        let elapsed = now_ms.saturating_sub(self.id) as f32 / 1000.0;
        (elapsed / self.duration).clamp(0.0, 1.0)
    }
}

#[derive(Debug, Default)]
pub struct FloatingEmojis {
    active: bool,
    items: VecDeque<FloatingItem>,
}

impl FloatingEmojis {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Turning the decoration off clears it at once.
    pub fn set_active(&mut self, active: bool) {
        self.active = active;
        if !active {
            self.items.clear();
        }
    }

    /// Add one random item, dropping the oldest beyond `MAX_ITEMS`.
    pub fn spawn<R: Rng + ?Sized>(&mut self, now_ms: u64, rng: &mut R) {
        if !self.active {
            return;
        }

        let item = FloatingItem {
            id: now_ms,
            emoji: EMOJIS[rng.random_range(0..EMOJIS.len())],
            left: rng.random_range(0.0..MAX_LEFT_PERCENT),
            duration: rng.random_range(MIN_DURATION_SECS..MAX_DURATION_SECS),
        };

        self.items.push_back(item);
        while self.items.len() > MAX_ITEMS {
            self.items.pop_front();
        }
    }

    pub fn items(&self) -> impl Iterator<Item = &FloatingItem> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
