use crate::{
    graph::node::{GraphNode, RenderCtx},
    MAX_BLOCK_SIZE,
};

/*
Parallel Signal Mixing
======================

The Mix node sums two signals at unity gain, like several sources connected to
the same input. It is the additive counterpart to Amplify (which multiplies).

How it works:
1. Render source A into the output buffer
2. Render source B into a temporary buffer
3. output = A + B

No balance control: each branch already carries its own gain curve, so a drum
body and its noise transient are simply layered.

  let dum = body.mix(thud);   // tone branch + noise branch

The sum lives until BOTH sides are done, so a long tail on one branch keeps
the whole voice alive.
*/

pub struct Mix<A, B> {
    pub source_a: A,
    pub source_b: B,
    temp_buffer: Vec<f32>,
}

impl<A, B> Mix<A, B> {
    pub fn new(source_a: A, source_b: B) -> Self {
        Mix {
            source_a,
            source_b,
            temp_buffer: vec![0.0; MAX_BLOCK_SIZE],
        }
    }
}

impl<A: GraphNode, B: GraphNode> GraphNode for Mix<A, B> {
    fn render_block(&mut self, out: &mut [f32], ctx: &RenderCtx) {
        self.source_a.render_block(out, ctx);

        let frames = &mut self.temp_buffer[..out.len()];
        frames.fill(0.0);
        self.source_b.render_block(frames, ctx);

        for (o, b) in out.iter_mut().zip(frames.iter()) {
            *o += *b;
        }
    }

    fn is_active(&self) -> bool {
        self.source_a.is_active() || self.source_b.is_active()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::{extensions::NodeExt, oscillator::OscNode};

    #[test]
    fn sums_at_unity() {
        let ctx = RenderCtx::new(48_000.0, 0.0);
        let mut single = OscNode::sine().with_frequency(300.0);
        let mut doubled = OscNode::sine()
            .with_frequency(300.0)
            .mix(OscNode::sine().with_frequency(300.0));

        let mut a = vec![0.0; 256];
        let mut b = vec![0.0; 256];
        single.render_block(&mut a, &ctx);
        doubled.render_block(&mut b, &ctx);

        for (x, y) in a.iter().zip(&b) {
            assert!((2.0 * x - y).abs() < 1e-5);
        }
    }

    #[test]
    fn active_while_either_side_is() {
        let mut mixed = OscNode::sine().stop_at(0.001).mix(OscNode::sine().stop_at(0.1));
        let mut buffer = vec![0.0; 512];

        mixed.render_block(&mut buffer, &RenderCtx::new(48_000.0, 0.0));
        assert!(!mixed.source_a.is_active());
        assert!(mixed.is_active());

        mixed.render_block(&mut buffer, &RenderCtx::new(48_000.0, 0.1));
        assert!(!mixed.is_active());
    }

    #[test]
    fn handles_multiple_block_sizes() {
        for &size in &[64, 128, 256, 512, 1024, MAX_BLOCK_SIZE] {
            let mut mixed = OscNode::sine().mix(OscNode::sawtooth());
            let mut buffer = vec![0.0; size];
            mixed.render_block(&mut buffer, &RenderCtx::new(48_000.0, 0.0));

            assert!(buffer.iter().any(|&s| s.abs() > 0.0), "block size {size}");
            assert!(buffer.iter().all(|&s| s.is_finite() && s.abs() <= 2.0));
        }
    }
}
