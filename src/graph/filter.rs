use crate::{
    dsp::filter::{FilterType, SVFilter},
    graph::node::{GraphNode, RenderCtx},
};

/*
State-Variable Filter (SVF)
===========================

Every percussive voice here is noise pushed through a filter, so the filter
choice *is* the timbre:

Lowpass (LP): Passes frequencies BELOW the cutoff.
  - 300 Hz on noise = the soft skin impact under a dum
  - Removes everything that would sound like "hiss"

Highpass (HP): Passes frequencies ABOVE the cutoff.
  - 2500 Hz on noise = the bright snap of a tak on the rim
  - Nothing of the body survives, only the crack

Bandpass (BP): Passes frequencies AROUND the cutoff.
  - 1000 Hz, Q 1 = the muted sak filler, a dull papery slap
  - 1200 Hz, Q 1 = a hand clap, a little brighter and louder

Parameters:
-----------

Cutoff (Hz): Where the filter takes effect (band centre for BP).

Q: Width/emphasis. Q = 1 on a bandpass is about an octave and a half wide;
  higher Q narrows the band and rings longer.

Why "State-Variable"?
---------------------
The SVF gives LP, HP and BP from the same two integrators, stays stable when
cutoff changes, and the TPT (topology-preserving transform) form keeps the
digital response close to the analog prototype right up to Nyquist.

Example usage:
  let snap = NoiseNode::new(noise).through(FilterNode::highpass(2500.0));
  let slap = NoiseNode::new(noise).through(FilterNode::bandpass(1000.0).with_q(1.0));
*/

pub struct FilterNode {
    filter: SVFilter,
}

impl FilterNode {
    pub fn lowpass(cutoff_hz: f32) -> Self {
        FilterNode {
            filter: SVFilter::lowpass(cutoff_hz),
        }
    }

    pub fn highpass(cutoff_hz: f32) -> Self {
        FilterNode {
            filter: SVFilter::highpass(cutoff_hz),
        }
    }

    pub fn bandpass(cutoff_hz: f32) -> Self {
        FilterNode {
            filter: SVFilter::bandpass(cutoff_hz),
        }
    }

    pub fn with_q(mut self, q: f32) -> Self {
        self.filter.set_q(q);
        self
    }

    pub fn filter_type(&self) -> FilterType {
        self.filter.filter_type()
    }

    pub fn cutoff(&self) -> f32 {
        self.filter.cutoff_hz
    }

    pub fn q(&self) -> f32 {
        self.filter.q
    }
}

impl GraphNode for FilterNode {
    fn render_block(&mut self, out: &mut [f32], ctx: &RenderCtx) {
        self.filter.render(out, ctx);
    }
}
