//! The audio context and its render-thread half.
//!
//! `AudioContext` lives on the control side: it knows the sample rate, reads
//! the clock and hands fully built voices to the renderer. `Renderer` lives
//! in the output callback: it owns the voices, mixes them into the master
//! gain and advances the clock.
//!
//! ```text
//!  control side                       render side (cpal callback)
//!  ────────────                       ───────────────────────────
//!  AudioContext ──rtrb::Producer──▶ Renderer ──▶ device
//!       ▲                                │
//!       └────────── clock (frames) ◀─────┘
//! ```
//!
//! Nothing crosses back except the frame counter, so the render path never
//! locks.

use std::{
    cell::{Cell, RefCell},
    sync::{
        atomic::{AtomicU64, Ordering},
        Arc,
    },
};

use cpal::traits::{DeviceTrait, HostTrait, StreamTrait};
use rtrb::{Consumer, Producer, RingBuffer};

use crate::{
    config::EngineConfig,
    error::EngineError,
    graph::{GraphNode, RenderCtx},
    MAX_BLOCK_SIZE,
};

/// Voices the renderer can hold before it has to grow its list.
const VOICE_CAPACITY: usize = 64;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContextState {
    /// Created but not yet producing sound
    Suspended,
    Running,
}

/// Messages from the control side to the renderer.
pub enum ContextMessage {
    /// Create the master gain stage. Only the first one is honoured.
    Connect { gain: f32 },
    /// Start rendering a voice.
    Play(Box<dyn GraphNode>),
}

/// Handle to the single gain stage every voice sums into.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MasterGain {
    gain: f32,
}

impl MasterGain {
    pub fn gain(&self) -> f32 {
        self.gain
    }
}

enum Output {
    Device(cpal::Stream),
    Offline,
}

pub struct AudioContext {
    sample_rate: f32,
    clock: Arc<AtomicU64>,
    state: Cell<ContextState>,
    tx: RefCell<Producer<ContextMessage>>,
    scheduled: Cell<u64>,
    output: Output,
}

impl AudioContext {
    /// Open the default output device. The stream is built paused.
    pub fn open_default(config: &EngineConfig) -> Result<Self, EngineError> {
        let host = cpal::default_host();
        let device = host
            .default_output_device()
            .ok_or(EngineError::NoOutputDevice)?;
        let supported = device.default_output_config()?;

        let sample_rate = supported.sample_rate().0 as f32;
        let channels = supported.channels() as usize;

        let (context, mut renderer) = Self::with_output(sample_rate, config, Output::Offline);

        let stream = device.build_output_stream(
            &supported.into(),
            move |data: &mut [f32], _: &cpal::OutputCallbackInfo| {
                renderer.render_interleaved(data, channels);
            },
            |err| tracing::error!(%err, "audio stream error"),
            None,
        )?;
        stream.pause()?;

        tracing::info!(sample_rate, channels, "audio context opened");

        Ok(Self {
            output: Output::Device(stream),
            ..context
        })
    }

    /// A context with no device behind it. The caller drives the renderer.
    pub fn offline(sample_rate: f32, config: &EngineConfig) -> (Self, Renderer) {
        Self::with_output(sample_rate, config, Output::Offline)
    }

    fn with_output(sample_rate: f32, config: &EngineConfig, output: Output) -> (Self, Renderer) {
        let (tx, rx) = RingBuffer::<ContextMessage>::new(config.queue_capacity.max(1));
        let clock = Arc::new(AtomicU64::new(0));

        let context = Self {
            sample_rate,
            clock: Arc::clone(&clock),
            state: Cell::new(ContextState::Suspended),
            tx: RefCell::new(tx),
            scheduled: Cell::new(0),
            output,
        };

        (context, Renderer::new(rx, clock, sample_rate))
    }

    /// Start the output. Resuming a running context does nothing.
    pub async fn resume(&self) -> Result<(), EngineError> {
        if self.state.get() == ContextState::Running {
            return Ok(());
        }

        if let Output::Device(stream) = &self.output {
            stream.play()?;
        }
        self.state.set(ContextState::Running);
        tracing::debug!("audio context resumed");
        Ok(())
    }

    pub fn state(&self) -> ContextState {
        self.state.get()
    }

    pub fn sample_rate(&self) -> f32 {
        self.sample_rate
    }

    /// Seconds of audio the renderer has produced so far.
    pub fn current_time(&self) -> f64 {
        self.clock.load(Ordering::Acquire) as f64 / self.sample_rate as f64
    }

    pub fn create_master_gain(&self, gain: f32) -> Result<MasterGain, EngineError> {
        self.send(ContextMessage::Connect { gain })?;
        Ok(MasterGain { gain })
    }

    /// Hand a voice to the renderer. The caller never sees it again.
    pub fn schedule(&self, voice: Box<dyn GraphNode>) -> Result<(), EngineError> {
        self.send(ContextMessage::Play(voice))?;
        self.scheduled.set(self.scheduled.get() + 1);
        Ok(())
    }

    /// Voices handed to the renderer since the context was created.
    pub fn scheduled_voices(&self) -> u64 {
        self.scheduled.get()
    }

    fn send(&self, message: ContextMessage) -> Result<(), EngineError> {
        self.tx
            .borrow_mut()
            .push(message)
            .map_err(|_| EngineError::QueueFull)
    }
}

/// Render-thread half of an `AudioContext`.
pub struct Renderer {
    rx: Consumer<ContextMessage>,
    clock: Arc<AtomicU64>,
    sample_rate: f32,
    master_gain: Option<f32>,
    voices: Vec<Box<dyn GraphNode>>,
    mix_buffer: Vec<f32>,
    voice_buffer: Vec<f32>,
}

impl Renderer {
    fn new(rx: Consumer<ContextMessage>, clock: Arc<AtomicU64>, sample_rate: f32) -> Self {
        Self {
            rx,
            clock,
            sample_rate,
            master_gain: None,
            voices: Vec::with_capacity(VOICE_CAPACITY),
            mix_buffer: vec![0.0; MAX_BLOCK_SIZE],
            voice_buffer: vec![0.0; MAX_BLOCK_SIZE],
        }
    }

    pub fn sample_rate(&self) -> f32 {
        self.sample_rate
    }

    pub fn active_voices(&self) -> usize {
        self.voices.len()
    }

    fn drain_messages(&mut self) {
        while let Ok(message) = self.rx.pop() {
            match message {
                ContextMessage::Connect { gain } => {
                    self.master_gain.get_or_insert(gain);
                }
                // A voice with nowhere to go is dropped
                ContextMessage::Play(voice) if self.master_gain.is_some() => {
                    self.voices.push(voice);
                }
                ContextMessage::Play(_) => {}
            }
        }
    }

    /// Render one block of at most `MAX_BLOCK_SIZE` mono samples.
    pub fn render_block(&mut self, out: &mut [f32]) {
        debug_assert!(out.len() <= MAX_BLOCK_SIZE);
        self.drain_messages();

        let frames = self.clock.load(Ordering::Relaxed);
        let ctx = RenderCtx::new(self.sample_rate, frames as f64 / self.sample_rate as f64);

        out.fill(0.0);
        for voice in &mut self.voices {
            let buffer = &mut self.voice_buffer[..out.len()];
            buffer.fill(0.0);
            voice.render_block(buffer, &ctx);

            for (o, v) in out.iter_mut().zip(buffer.iter()) {
                *o += v;
            }
        }

        let gain = self.master_gain.unwrap_or(0.0);
        for sample in out.iter_mut() {
            *sample *= gain;
        }

        self.voices.retain(|voice| voice.is_active());
        self.clock.fetch_add(out.len() as u64, Ordering::Release);
    }

    /// Render any number of mono samples.
    pub fn render(&mut self, out: &mut [f32]) {
        for block in out.chunks_mut(MAX_BLOCK_SIZE) {
            self.render_block(block);
        }
    }

    /// Fill an interleaved device buffer, copying mono to every channel.
    pub fn render_interleaved(&mut self, data: &mut [f32], channels: usize) {
        let channels = channels.max(1);
        let mut block = std::mem::take(&mut self.mix_buffer);

        for frame_chunk in data.chunks_mut(MAX_BLOCK_SIZE * channels) {
            let frames = frame_chunk.len() / channels;
            let mono = &mut block[..frames];
            self.render_block(mono);

            for (frame, &sample) in frame_chunk.chunks_mut(channels).zip(mono.iter()) {
                frame.fill(sample);
            }
        }

        self.mix_buffer = block;
    }
}
