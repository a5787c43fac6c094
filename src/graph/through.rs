use crate::graph::node::{GraphNode, RenderCtx};

/*
Serial Signal Chain (Through)
=============================

Through connects two nodes in series, passing the output of the first (source)
into the second (effect). Every noise branch in the kit is one of these:

     let snap = NoiseNode::new(noise)
         .start_at(t)
         .through(FilterNode::highpass(2500.0))
         .amplify(EnvNode::new(gain));

   - Noise → filter (shape timbre) → envelope (shape volume)

How It Works:
-------------
1. Render the source into the output buffer
2. Pass that buffer through the effect (in-place processing)

Through vs Amplify vs Mix:
--------------------------
- Through: Serial processing (source → effect → output)
- Amplify: Multiplication (signal × envelope)
- Mix:     Summing junction (a + b)

Signal Flow Diagram:
--------------------
  Through: [Source] ──→ [Effect] ──→ output

  Amplify: [Signal] ──┬──→ (×) ──→ output
           [Env]    ──┘

  Mix:     [A] ──────┬──→ (+) ──→ output
           [B] ──────┘

The chain lives as long as its source: a filter has no notion of being done.
*/

pub struct Through<S, F> {
    pub source: S,
    pub filter: F,
}

impl<S, F> Through<S, F> {
    pub fn new(source: S, filter: F) -> Self {
        Self { source, filter }
    }
}

impl<S: GraphNode, F: GraphNode> GraphNode for Through<S, F> {
    fn render_block(&mut self, out: &mut [f32], ctx: &RenderCtx) {
        self.source.render_block(out, ctx);
        self.filter.render_block(out, ctx);
    }

    fn is_active(&self) -> bool {
        self.source.is_active()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::{extensions::NodeExt, filter::FilterNode, oscillator::OscNode};

    fn ctx() -> RenderCtx {
        RenderCtx::new(48_000.0, 0.0)
    }

    #[test]
    fn renders_source_then_filter() {
        let mut node = OscNode::square()
            .with_frequency(5_000.0)
            .through(FilterNode::lowpass(300.0));
        let mut buffer = vec![0.0; 1024];
        node.render_block(&mut buffer, &ctx());

        let peak = buffer[512..].iter().fold(0.0f32, |acc, &x| acc.max(x.abs()));
        assert!(peak < 0.2, "high tone should be attenuated, got {peak}");
        assert!(buffer.iter().all(|&sample| sample.is_finite()));
    }

    #[test]
    fn lifetime_follows_source() {
        let mut node = OscNode::sine().stop_at(0.001).through(FilterNode::lowpass(300.0));
        let mut buffer = vec![0.0; 128];
        node.render_block(&mut buffer, &ctx());
        assert!(!node.is_active());
    }
}
