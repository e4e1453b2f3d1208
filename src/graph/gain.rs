use crate::dsp::param::RampedParam;
use crate::graph::node::{RenderCtx, StereoStage};

/// A gain applied in series, with click-free level changes.
///
/// The three persistent gains of the engine (carrier mix, noise, master) are
/// all `GainNode`s. They outlive every graph rebuild: `stop` tears down
/// sources and modulation stages but leaves these in place, so a rebuild
/// never disturbs the output level.
pub struct GainNode {
    level: RampedParam,
}

impl GainNode {
    pub fn new(level: f32) -> Self {
        Self {
            level: RampedParam::new(level),
        }
    }

    /// Jump to `level` immediately (used when (re)building a graph).
    pub fn set(&mut self, level: f32) {
        self.level.set(level);
    }

    /// Glide to `level` over `seconds` (used by smooth settings updates).
    pub fn ramp_to(&mut self, level: f32, seconds: f32, sample_rate: f32) {
        self.level.ramp_to(level, seconds, sample_rate);
    }

    pub fn level(&self) -> &RampedParam {
        &self.level
    }

    /// Scale a mono buffer in place (noise path).
    pub fn process_mono(&mut self, out: &mut [f32]) {
        for sample in out.iter_mut() {
            *sample *= self.level.next_value();
        }
    }
}

impl StereoStage for GainNode {
    fn process_block(&mut self, left: &mut [f32], right: &mut [f32], _ctx: &RenderCtx) {
        for (l, r) in left.iter_mut().zip(right.iter_mut()) {
            let gain = self.level.next_value();
            *l *= gain;
            *r *= gain;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn applies_static_gain() {
        let ctx = RenderCtx::new(48_000.0);
        let mut gain = GainNode::new(0.5);
        let mut left = vec![1.0f32; 64];
        let mut right = vec![-1.0f32; 64];
        gain.process_block(&mut left, &mut right, &ctx);

        assert!(left.iter().all(|&s| s == 0.5));
        assert!(right.iter().all(|&s| s == -0.5));
    }

    #[test]
    fn ramp_moves_gain_within_block() {
        let ctx = RenderCtx::new(48_000.0);
        let mut gain = GainNode::new(0.0);
        gain.ramp_to(1.0, 0.001, 48_000.0); // 48-sample ramp

        let mut left = vec![1.0f32; 64];
        let mut right = vec![1.0f32; 64];
        gain.process_block(&mut left, &mut right, &ctx);

        assert!(left[0] < 0.1);
        assert_abs_diff_eq!(left[63], 1.0, epsilon = 1e-6);
        assert!(!gain.level().is_ramping());
    }
}
