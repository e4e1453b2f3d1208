/// Context passed to graph nodes during rendering.
pub struct RenderCtx {
    pub sample_rate: f32,
}

impl RenderCtx {
    pub fn new(sample_rate: f32) -> Self {
        Self { sample_rate }
    }
}

/// A node that renders a mono signal block (sources and control signals).
pub trait MonoNode: Send {
    fn render_block(&mut self, out: &mut [f32], ctx: &RenderCtx);
}

/// A processing stage spliced into the stereo chain, operating in place.
///
/// Keeping one signature for every series stage means the engine's chain
/// routine can splice stages in a fixed order without per-stage wiring code
/// at the call sites.
pub trait StereoStage: Send {
    fn process_block(&mut self, left: &mut [f32], right: &mut [f32], ctx: &RenderCtx);
}
