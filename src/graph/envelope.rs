use crate::{
    dsp::envelope::Envelope,
    graph::node::{GraphNode, RenderCtx},
};

/// Renders an automation timeline as a control signal.
///
/// Used as the modulator side of `Amplify`, so a gain curve reads:
///
/// ```ignore
/// OscNode::sine().amplify(EnvNode::new(
///     Envelope::new(1.0)
///         .set_value_at(1.0, t)
///         .exponential_ramp_to(0.01, t + 0.35),
/// ))
/// ```
pub struct EnvNode {
    env: Envelope,
}

impl EnvNode {
    pub fn new(env: Envelope) -> Self {
        Self { env }
    }

    pub fn envelope(&self) -> &Envelope {
        &self.env
    }
}

impl From<Envelope> for EnvNode {
    fn from(env: Envelope) -> Self {
        Self::new(env)
    }
}

impl GraphNode for EnvNode {
    fn render_block(&mut self, out: &mut [f32], ctx: &RenderCtx) {
        self.env.render(out, ctx.time, ctx.sample_rate);
    }
}
