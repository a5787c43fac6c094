use crate::dsp::envelope::Envelope;
use crate::dsp::oscillator::{OscillatorBlock, OscillatorWaveform};
use crate::graph::node::{GraphNode, Modulatable, RenderCtx};
use crate::MAX_BLOCK_SIZE;

/*
Scheduled Oscillator
====================

A one-shot tone source. It is silent until its start time, runs until its
stop time, and is never restarted: a new hit builds a new node.

Waveforms used by the voices:
-----------------------------

Sine: a single partial. The dum body, swept from 110 Hz down to 45 Hz,
  is what reads as "deep" - there is nothing above the fundamental.

Square: odd harmonics falling off as 1/n. At 2 kHz the harmonics sit in
  the presence range and give the tak its metallic ring.

Triangle: odd harmonics falling off as 1/n². Soft and flute-like, a good
  stand-in for a high voice in the zaghroota.

Frequency
---------

The frequency is an automation `Envelope`, so a pitch drop is just:

  OscNode::sine()
      .with_frequency(Envelope::new(440.0)
          .set_value_at(110.0, t)
          .exponential_ramp_to(45.0, t + 0.2))
      .start_at(t)
      .stop_at(t + 0.35)

A plain number works too (`.with_frequency(1100.0)`). Audio-rate offsets can
be added on top through `Modulatable` (see `Modulate`) - that is how the
zaghroota's 12 Hz trill is made.
*/

/// Default frequency of a freshly created oscillator.
const DEFAULT_FREQUENCY: f32 = 440.0;

pub struct OscNode {
    osc: OscillatorBlock,
    frequency: Envelope,
    start: f64,
    stop: Option<f64>,
    /// Per-sample frequency offsets for the next block
    fm_buffer: Vec<f32>,
    fm_len: usize,
    /// Context time up to which this node has been rendered
    rendered_until: f64,
}

/// Parameters that can be modulated on an oscillator
#[derive(Clone, Copy, Debug)]
pub enum OscParam {
    /// Oscillator frequency in Hz
    Frequency,
}

impl OscNode {
    fn new(osc: OscillatorBlock) -> Self {
        Self {
            osc,
            frequency: Envelope::new(DEFAULT_FREQUENCY),
            start: 0.0,
            stop: None,
            fm_buffer: vec![0.0; MAX_BLOCK_SIZE],
            fm_len: 0,
            rendered_until: 0.0,
        }
    }

    pub fn sine() -> Self {
        Self::new(OscillatorBlock::sine())
    }

    pub fn sawtooth() -> Self {
        Self::new(OscillatorBlock::sawtooth())
    }

    pub fn square() -> Self {
        Self::new(OscillatorBlock::square())
    }

    pub fn triangle() -> Self {
        Self::new(OscillatorBlock::triangle())
    }

    /// Set the frequency: a constant in Hz, or a scheduled `Envelope`.
    pub fn with_frequency(mut self, frequency: impl Into<Envelope>) -> Self {
        self.frequency = frequency.into();
        self
    }

    /// Begin producing sound at context time `time`.
    pub fn start_at(mut self, time: f64) -> Self {
        self.start = time;
        self
    }

    /// Stop for good at context time `time`.
    pub fn stop_at(mut self, time: f64) -> Self {
        self.stop = Some(time);
        self
    }

    pub fn waveform(&self) -> OscillatorWaveform {
        self.osc.waveform()
    }

    pub fn frequency(&self) -> &Envelope {
        &self.frequency
    }

    pub fn start_time(&self) -> f64 {
        self.start
    }

    pub fn stop_time(&self) -> Option<f64> {
        self.stop
    }

    #[inline]
    fn is_sounding(&self, time: f64) -> bool {
        time >= self.start && self.stop.map_or(true, |stop| time < stop)
    }
}

impl GraphNode for OscNode {
    fn render_block(&mut self, out: &mut [f32], ctx: &RenderCtx) {
        let fm = &self.fm_buffer[..self.fm_len.min(out.len())];

        for (i, sample) in out.iter_mut().enumerate() {
            let time = ctx.time_at(i);
            *sample = if self.is_sounding(time) {
                let offset = fm.get(i).copied().unwrap_or(0.0);
                let freq = self.frequency.value_at(time) + offset;
                self.osc.next_sample(freq, ctx.sample_rate)
            } else {
                0.0
            };
        }

        // Offsets only apply to the block they were supplied for
        self.fm_len = 0;
        self.rendered_until = ctx.end_time(out.len());
    }

    fn is_active(&self) -> bool {
        self.stop.map_or(true, |stop| self.rendered_until < stop)
    }
}

impl Modulatable for OscNode {
    type Param = OscParam;

    fn modulate_block(&mut self, param: Self::Param, offsets: &[f32]) {
        match param {
            OscParam::Frequency => {
                let len = offsets.len().min(self.fm_buffer.len());
                self.fm_buffer[..len].copy_from_slice(&offsets[..len]);
                self.fm_len = len;
            }
        }
    }
}
