use std::{
    cell::{Cell, OnceCell, RefCell},
    rc::Rc,
};

use rand::{rngs::StdRng, RngCore, SeedableRng};

use crate::{
    config::EngineConfig,
    dsp::noise::NoiseBuffer,
    engine::{
        context::{AudioContext, MasterGain},
        sequencer::RhythmHandle,
    },
    error::EngineError,
    voices::VoiceKind,
};

/*
Engine Lifecycle
================

  new()                init().await                 init().await
    │                     │                             │
    ▼                     ▼                             ▼
 ┌──────────┐  resume  ┌──────────┐   (no-op)     ┌──────────┐
 │ disabled │ ───────▶ │ enabled  │ ────────────▶ │ enabled  │
 └──────────┘          └──────────┘               └──────────┘
    │ no device
    ▼
 disabled forever (every trigger is a silent no-op)

The master gain is created on the first successful init and never again.
Triggers before init are dropped without a trace: the audio side stays
quiet, nothing errors.

The engine is a cheap `Rc` handle. Clone it into whatever needs to make
noise; every clone talks to the same context. It is single-threaded and its
timers are local tasks, so it must live inside a tokio `LocalSet`.
*/

pub(crate) struct EngineInner {
    context: Option<AudioContext>,
    master: OnceCell<MasterGain>,
    enabled: Cell<bool>,
    pub(crate) rng: RefCell<Box<dyn RngCore>>,
    pub(crate) rhythm: RefCell<Option<RhythmHandle>>,
    config: EngineConfig,
}

#[derive(Clone)]
pub struct AudioEngine {
    pub(crate) inner: Rc<EngineInner>,
}

impl AudioEngine {
    /// Open the default output device. Without one the engine stays disabled.
    pub fn new(config: EngineConfig) -> Self {
        let context = match AudioContext::open_default(&config) {
            Ok(context) => Some(context),
            Err(err) => {
                tracing::error!(%err, "audio unavailable, sounds disabled");
                None
            }
        };

        Self::from_parts(context, config, StdRng::from_os_rng())
    }

    /// Build an engine around an explicit context and random source.
    pub fn from_parts(
        context: Option<AudioContext>,
        config: EngineConfig,
        rng: impl RngCore + 'static,
    ) -> Self {
        Self {
            inner: Rc::new(EngineInner {
                context,
                master: OnceCell::new(),
                enabled: Cell::new(false),
                rng: RefCell::new(Box::new(rng)),
                rhythm: RefCell::new(None),
                config,
            }),
        }
    }

    /// Resume the context and connect the master gain. Safe to call repeatedly.
    pub async fn init(&self) {
        let Some(context) = self.context() else {
            tracing::warn!("init without an audio context, staying silent");
            return;
        };

        if let Err(err) = context.resume().await {
            tracing::error!(%err, "could not resume audio context");
            return;
        }

        if self.inner.master.get().is_none() {
            match context.create_master_gain(self.inner.config.master_gain) {
                Ok(master) => {
                    let _ = self.inner.master.set(master);
                }
                Err(err) => {
                    tracing::error!(%err, "could not create master gain");
                    return;
                }
            }
        }

        if !self.inner.enabled.replace(true) {
            tracing::info!(gain = self.inner.config.master_gain, "audio engine enabled");
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.inner.enabled.get()
    }

    pub fn context(&self) -> Option<&AudioContext> {
        self.inner.context.as_ref()
    }

    pub fn master_gain(&self) -> Option<MasterGain> {
        self.inner.master.get().copied()
    }

    pub fn config(&self) -> &EngineConfig {
        &self.inner.config
    }

    /// A fresh 2 second noise buffer at the context's sample rate.
    pub fn noise_buffer(&self) -> Result<NoiseBuffer, EngineError> {
        let context = self.context().ok_or(EngineError::NoContext)?;
        let mut rng = self.inner.rng.borrow_mut();
        Ok(NoiseBuffer::generate(context.sample_rate(), &mut **rng))
    }

    /// The context, but only once everything needed to make sound is in place.
    fn live_context(&self) -> Option<&AudioContext> {
        if !self.is_enabled() || self.inner.master.get().is_none() {
            return None;
        }
        self.context()
    }

    /// Start one voice now. Does nothing until `init` has completed.
    pub fn trigger(&self, kind: VoiceKind) {
        let Some(context) = self.live_context() else {
            return;
        };

        let at = context.current_time();
        let voice = kind.build(at, || {
            let mut rng = self.inner.rng.borrow_mut();
            NoiseBuffer::generate(context.sample_rate(), &mut **rng)
        });

        match context.schedule(voice) {
            Ok(()) => tracing::trace!(?kind, at, "voice scheduled"),
            Err(err) => tracing::warn!(%err, ?kind, "voice dropped"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn offline_engine() -> (AudioEngine, crate::engine::Renderer) {
        let config = EngineConfig::default();
        let (context, renderer) = AudioContext::offline(8_000.0, &config);
        let engine = AudioEngine::from_parts(Some(context), config, StdRng::seed_from_u64(1));
        (engine, renderer)
    }

    #[tokio::test]
    async fn disabled_until_init() {
        let (engine, _renderer) = offline_engine();
        assert!(!engine.is_enabled());

        engine.trigger(VoiceKind::Dum);
        assert_eq!(engine.context().map(|c| c.scheduled_voices()), Some(0));

        engine.init().await;
        assert!(engine.is_enabled());
        engine.trigger(VoiceKind::Dum);
        assert_eq!(engine.context().map(|c| c.scheduled_voices()), Some(1));
    }

    #[tokio::test]
    async fn master_gain_created_once() {
        let (engine, _renderer) = offline_engine();
        engine.init().await;
        engine.init().await;

        assert_eq!(engine.master_gain().map(|m| m.gain()), Some(0.8));
    }

    #[tokio::test]
    async fn no_context_stays_disabled() {
        let engine = AudioEngine::from_parts(None, EngineConfig::default(), StdRng::seed_from_u64(1));
        engine.init().await;

        assert!(!engine.is_enabled());
        engine.trigger(VoiceKind::Clap);
        assert!(matches!(engine.noise_buffer(), Err(EngineError::NoContext)));
    }

    #[test]
    fn noise_buffer_matches_sample_rate() {
        let (engine, _renderer) = offline_engine();
        let noise = engine.noise_buffer().expect("context present");
        assert_eq!(noise.len(), 16_000);
        assert_eq!(noise.sample_rate(), 8_000.0);
    }
}
