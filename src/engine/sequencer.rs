use tokio::{
    task::AbortHandle,
    time::{interval_at, Instant, MissedTickBehavior},
};

use crate::{
    engine::AudioEngine,
    sequencing::{pattern::STEP_INTERVAL, rhythm::RhythmLoop},
};

/// Handle to a running rhythm loop.
///
/// Dropping the handle does not stop the loop; call `cancel`.
#[derive(Debug, Clone, Default)]
pub struct RhythmHandle {
    abort: Option<AbortHandle>,
}

impl RhythmHandle {
    pub fn cancel(&self) {
        if let Some(abort) = &self.abort {
            abort.abort();
        }
    }

    /// True once the loop has stopped, or if it never started.
    pub fn is_finished(&self) -> bool {
        self.abort.as_ref().map_or(true, AbortHandle::is_finished)
    }
}

impl AudioEngine {
    /// Start the maqsum loop, replacing any loop this engine already runs.
    ///
    /// Every 180 ms one step is played; on each dum `on_main_beat` is called
    /// right after the voices are triggered. The first step sounds one
    /// interval after the call. Late ticks are delayed, never bunched up.
    ///
    /// Without an audio context nothing is started and the handle is inert.
    ///
    /// # Panics
    ///
    /// Must be called from inside a tokio `LocalSet`.
    pub fn start_rhythm_loop<F>(&self, mut on_main_beat: F) -> RhythmHandle
    where
        F: FnMut() + 'static,
    {
        if let Some(previous) = self.inner.rhythm.borrow_mut().take() {
            previous.cancel();
        }

        if self.context().is_none() {
            tracing::warn!("no audio context, rhythm loop not started");
            return RhythmHandle::default();
        }

        let engine = self.clone();
        let task = tokio::task::spawn_local(async move {
            let mut ticker = interval_at(Instant::now() + STEP_INTERVAL, STEP_INTERVAL);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
            let mut rhythm = RhythmLoop::new();

            loop {
                ticker.tick().await;

                let step = {
                    let mut rng = engine.inner.rng.borrow_mut();
                    rhythm.advance(&mut **rng)
                };

                for voice in step.voices() {
                    engine.trigger(voice);
                }
                if step.main_beat() {
                    on_main_beat();
                }
            }
        });

        let handle = RhythmHandle {
            abort: Some(task.abort_handle()),
        };
        *self.inner.rhythm.borrow_mut() = Some(handle.clone());
        tracing::debug!("rhythm loop started");
        handle
    }
}
