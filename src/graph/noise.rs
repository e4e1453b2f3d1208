use crate::dsp::noise::{BrownNoise, PinkNoise, WhiteNoise};
use crate::engine::settings::NoiseType;
use crate::graph::node::{MonoNode, RenderCtx};

/// A looping background-noise source.
///
/// The engine consumes this through the single `create` factory call and
/// owns starting, routing, and dropping the returned node; the synthesis
/// itself lives in `dsp::noise`. There is no explicit start/stop - a noise
/// generator is stateless in time, so existing *is* playing.
pub enum NoiseNode {
    White(WhiteNoise),
    Pink(PinkNoise),
    Brown(BrownNoise),
}

impl NoiseNode {
    /// Build a ready-to-render source for the requested color.
    ///
    /// Returns `None` for `NoiseType::None`: no node is created, and the
    /// noise gain has nothing to feed it.
    pub fn create(noise_type: NoiseType) -> Option<Self> {
        match noise_type {
            NoiseType::White => Some(Self::White(WhiteNoise::new())),
            NoiseType::Pink => Some(Self::Pink(PinkNoise::new())),
            NoiseType::Brown => Some(Self::Brown(BrownNoise::new())),
            NoiseType::None => None,
        }
    }
}

impl MonoNode for NoiseNode {
    fn render_block(&mut self, out: &mut [f32], _ctx: &RenderCtx) {
        match self {
            Self::White(n) => n.render(out),
            Self::Pink(n) => n.render(out),
            Self::Brown(n) => n.render(out),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn factory_returns_node_for_each_color() {
        for kind in [NoiseType::White, NoiseType::Pink, NoiseType::Brown] {
            let mut node = NoiseNode::create(kind).expect("factory should build a source");
            let mut buffer = vec![0.0f32; 1024];
            node.render_block(&mut buffer, &RenderCtx::new(48_000.0));
            assert!(buffer.iter().any(|&s| s.abs() > 1e-4));
        }
    }

    #[test]
    fn factory_returns_none_for_no_noise() {
        assert!(NoiseNode::create(NoiseType::None).is_none());
    }
}
