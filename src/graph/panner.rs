use crate::dsp::param::RampedParam;
use crate::graph::lfo::LfoNode;
use crate::graph::node::{MonoNode, RenderCtx, StereoStage};
use crate::MAX_BLOCK_SIZE;

/*
Stereo Auto-Pan Stage
=====================

Sweeps the signal between the ears at the beat frequency. The pan position
for each sample is

    pan = lfo * scale          (pan in [-1, +1])

where `scale` is the stereo depth setting applied directly: the pan
parameter's native range is already +/-1, so depth 1.0 sweeps hard
left-to-hard-right and depth 0.3 sways gently around center.

The pan law is linear attenuation of the far channel - center passes both
channels untouched, full left silences the right channel. Linear rather than
equal-power for the same reason this codebase mixes linearly elsewhere:
simple, predictable math, and at sweep rates this slow the 3 dB center "bump"
of the equal-power law is not worth the trigonometry.
*/

pub struct PanStage {
    lfo: LfoNode,
    scale: RampedParam,
    lfo_buffer: Vec<f32>,
}

impl PanStage {
    pub fn new(beat_frequency: f32, depth: f32) -> Self {
        Self {
            lfo: LfoNode::sine(beat_frequency),
            scale: RampedParam::new(depth),
            lfo_buffer: vec![0.0; MAX_BLOCK_SIZE],
        }
    }

    /// Glide the sweep width to `depth`.
    pub fn ramp_depth(&mut self, depth: f32, seconds: f32, sample_rate: f32) {
        self.scale.ramp_to(depth, seconds, sample_rate);
    }

    pub fn scale(&self) -> &RampedParam {
        &self.scale
    }
}

impl StereoStage for PanStage {
    fn process_block(&mut self, left: &mut [f32], right: &mut [f32], ctx: &RenderCtx) {
        let len = left.len();
        let lfo = &mut self.lfo_buffer[..len];
        lfo.fill(0.0);
        self.lfo.render_block(lfo, ctx);

        for i in 0..len {
            let pan = (lfo[i] * self.scale.next_value()).clamp(-1.0, 1.0);
            if pan > 0.0 {
                // Toward the right ear: attenuate left.
                left[i] *= 1.0 - pan;
            } else {
                right[i] *= 1.0 + pan;
            }
        }
    }
}
