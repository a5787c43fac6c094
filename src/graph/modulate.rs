use crate::{
    graph::node::{GraphNode, Modulatable, RenderCtx},
    MAX_BLOCK_SIZE,
};

/*
Modulate Node
=============

Connects a modulation source to a parameter on another node at audio rate.
This is frequency modulation in the "LFO into the frequency param" sense:

  // Trill: 12 Hz sine wobbling a 1100 Hz triangle by ±250 Hz
  let trill = OscNode::triangle()
      .with_frequency(1100.0)
      .modulate(OscNode::sine().with_frequency(12.0), OscParam::Frequency, 250.0);


Understanding Depth
-------------------

    modulated_value[n] = base_value[n] + (mod[n] × depth)

With base=1100, depth=250, mod swinging -1 to +1:
    mod = -1.0  →   850 Hz
    mod =  0.0  →  1100 Hz
    mod = +1.0  →  1350 Hz


How It Works
------------

1. Render the modulator into a scratch buffer
2. Scale it by depth
3. Hand the per-sample offsets to the target (`Modulatable::modulate_block`)
4. Render the target, which adds the offsets to its own automation

The offsets are consumed by that one render; nothing is left applied.
*/

pub struct Modulate<S, L>
where
    S: GraphNode + Modulatable,
    L: GraphNode,
{
    pub source: S,
    pub lfo: L,
    param: S::Param,
    depth: f32,
    lfo_buffer: Vec<f32>,
}

impl<S, L> Modulate<S, L>
where
    S: GraphNode + Modulatable,
    L: GraphNode,
{
    pub fn new(source: S, lfo: L, param: S::Param, depth: f32) -> Self {
        Self {
            source,
            lfo,
            param,
            depth,
            lfo_buffer: vec![0.0; MAX_BLOCK_SIZE],
        }
    }

    pub fn param(&self) -> S::Param {
        self.param
    }

    pub fn depth(&self) -> f32 {
        self.depth
    }
}

impl<S, L> GraphNode for Modulate<S, L>
where
    S: GraphNode + Modulatable,
    L: GraphNode,
{
    fn render_block(&mut self, out: &mut [f32], ctx: &RenderCtx) {
        let offsets = &mut self.lfo_buffer[..out.len()];
        self.lfo.render_block(offsets, ctx);

        for offset in offsets.iter_mut() {
            *offset *= self.depth;
        }

        self.source.modulate_block(self.param, offsets);
        self.source.render_block(out, ctx);
    }

    fn is_active(&self) -> bool {
        self.source.is_active()
    }
}
