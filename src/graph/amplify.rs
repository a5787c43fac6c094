use crate::{
    graph::node::{GraphNode, RenderCtx},
    MAX_BLOCK_SIZE,
};

/// Multiplies a signal by a control signal, sample by sample.
///
/// In every voice the modulator is an `EnvNode` gain curve, which makes this
/// the equivalent of a gain stage with automated gain. The node lives as long
/// as its signal: a gain curve on its own never keeps a voice alive.
pub struct Amplify<N, M> {
    pub signal: N,
    pub modulator: M,
    temp_buffer: Vec<f32>,
}

impl<N, M> Amplify<N, M> {
    pub fn new(signal: N, modulator: M) -> Self {
        Self {
            signal,
            modulator,
            temp_buffer: vec![0.0; MAX_BLOCK_SIZE],
        }
    }
}

impl<N: GraphNode, M: GraphNode> GraphNode for Amplify<N, M> {
    fn render_block(&mut self, out: &mut [f32], ctx: &RenderCtx) {
        // Render signal into output
        self.signal.render_block(out, ctx);

        // Slice temp buffer to match output size (RT-safe, no allocation)
        let frames = &mut self.temp_buffer[..out.len()];
        frames.fill(0.0);
        self.modulator.render_block(frames, ctx);

        for (o, m) in out.iter_mut().zip(frames.iter()) {
            *o *= *m;
        }
    }

    fn is_active(&self) -> bool {
        self.signal.is_active()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        dsp::envelope::Envelope,
        graph::{envelope::EnvNode, extensions::NodeExt, oscillator::OscNode},
    };

    #[test]
    fn scales_signal_by_envelope() {
        let ctx = RenderCtx::new(48_000.0, 0.0);
        let mut plain = OscNode::sine().with_frequency(220.0);
        let mut quiet = OscNode::sine()
            .with_frequency(220.0)
            .amplify(EnvNode::new(Envelope::new(0.25)));

        let mut a = vec![0.0f32; 256];
        let mut b = vec![0.0f32; 256];
        plain.render_block(&mut a, &ctx);
        quiet.render_block(&mut b, &ctx);

        for (x, y) in a.iter().zip(&b) {
            assert!((x * 0.25 - y).abs() < 1e-6);
        }
    }

    #[test]
    fn lifetime_follows_signal() {
        let mut node = OscNode::sine()
            .stop_at(0.001)
            .amplify(EnvNode::new(Envelope::new(1.0)));
        assert!(node.is_active());

        let mut out = vec![0.0f32; 128];
        node.render_block(&mut out, &RenderCtx::new(48_000.0, 0.0));
        assert!(!node.is_active());
    }
}
