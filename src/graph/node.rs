/// Context passed to graph nodes during rendering
///
/// Contains information about what to render:
/// - sample_rate: Audio sample rate (e.g., 48000.0)
/// - time: Absolute context time of the first sample in the block, in seconds
///
/// Every scheduled event (source start/stop, automation breakpoints) is
/// expressed on this same clock, so envelopes stay sample-accurate no matter
/// when the voice was handed to the renderer.
#[derive(Debug, Clone, Copy)]
pub struct RenderCtx {
    pub sample_rate: f32,
    pub time: f64,
}

impl RenderCtx {
    pub fn new(sample_rate: f32, time: f64) -> Self {
        Self { sample_rate, time }
    }

    /// Absolute time of sample `index` within the block.
    #[inline]
    pub fn time_at(&self, index: usize) -> f64 {
        self.time + index as f64 / self.sample_rate as f64
    }

    /// Absolute time just past the end of a block of `len` samples.
    #[inline]
    pub fn end_time(&self, len: usize) -> f64 {
        self.time_at(len)
    }
}

/// Trait for nodes whose parameters can be driven by another signal at audio rate
pub trait Modulatable: Send {
    type Param: Copy + Send;

    /// Offsets to add to `param` for each sample of the next rendered block.
    fn modulate_block(&mut self, param: Self::Param, offsets: &[f32]);
}

/// Core trait for audio processing graph nodes
pub trait GraphNode: Send {
    fn render_block(&mut self, out: &mut [f32], ctx: &RenderCtx);

    /// Check if this node is still producing sound
    ///
    /// Used by the renderer to know when a voice can be dropped.
    fn is_active(&self) -> bool {
        true
    }
}

/// Allow boxed graph nodes to be used as graph nodes (for dynamic dispatch)
impl GraphNode for Box<dyn GraphNode> {
    fn render_block(&mut self, out: &mut [f32], ctx: &RenderCtx) {
        (**self).render_block(out, ctx)
    }

    fn is_active(&self) -> bool {
        (**self).is_active()
    }
}
