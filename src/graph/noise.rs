use crate::dsp::noise::NoiseBuffer;
use crate::graph::node::{GraphNode, RenderCtx};

/// One-shot playback of a noise buffer.
///
/// Starts at its scheduled time (or immediately, if that time has already
/// passed when the renderer first sees it), plays the buffer once from the
/// beginning and then stays silent for good.
pub struct NoiseNode {
    buffer: NoiseBuffer,
    start: f64,
    position: usize,
}

impl NoiseNode {
    pub fn new(buffer: NoiseBuffer) -> Self {
        Self {
            buffer,
            start: 0.0,
            position: 0,
        }
    }

    pub fn start_at(mut self, time: f64) -> Self {
        self.start = time;
        self
    }

    pub fn start_time(&self) -> f64 {
        self.start
    }

    pub fn buffer(&self) -> &NoiseBuffer {
        &self.buffer
    }
}

impl GraphNode for NoiseNode {
    fn render_block(&mut self, out: &mut [f32], ctx: &RenderCtx) {
        let samples = self.buffer.samples();

        for (i, sample) in out.iter_mut().enumerate() {
            *sample = if ctx.time_at(i) >= self.start && self.position < samples.len() {
                let value = samples[self.position];
                self.position += 1;
                value
            } else {
                0.0
            };
        }
    }

    fn is_active(&self) -> bool {
        self.position < self.buffer.len()
    }
}
