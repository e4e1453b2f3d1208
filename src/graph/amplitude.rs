use crate::dsp::param::RampedParam;
use crate::graph::lfo::LfoNode;
use crate::graph::node::{MonoNode, RenderCtx, StereoStage};
use crate::MAX_BLOCK_SIZE;

/*
Amplitude Modulation Stage
==========================

Pulses the carrier's loudness at the beat frequency - the isochronic side of
entrainment. The per-sample gain is

    gain = resting + lfo * swing

with the two scaling values derived from the depth setting:

    resting = 1 - depth/2
    swing   = depth/2

so the gain traverses [1 - depth, 1]: at full depth the trough dips exactly
to silence and the peak never exceeds unity, at depth 0.5 the signal pulses
between half and full level. Centering below unity (rather than boosting
above it) means enabling the stage can never clip a mix that was already at
headroom.

`resting` and `swing` are ramped parameters: a smooth depth change glides
both, so the pulse deepens or relaxes over a few tens of milliseconds instead
of snapping.
*/

pub struct AmStage {
    lfo: LfoNode,
    resting: RampedParam,
    swing: RampedParam,
    lfo_buffer: Vec<f32>,
}

impl AmStage {
    pub fn new(beat_frequency: f32, depth: f32) -> Self {
        Self {
            lfo: LfoNode::sine(beat_frequency),
            resting: RampedParam::new(1.0 - depth / 2.0),
            swing: RampedParam::new(depth / 2.0),
            lfo_buffer: vec![0.0; MAX_BLOCK_SIZE],
        }
    }

    /// Glide the stage's gains to the values implied by `depth`.
    pub fn ramp_depth(&mut self, depth: f32, seconds: f32, sample_rate: f32) {
        self.resting.ramp_to(1.0 - depth / 2.0, seconds, sample_rate);
        self.swing.ramp_to(depth / 2.0, seconds, sample_rate);
    }

    pub fn resting(&self) -> &RampedParam {
        &self.resting
    }

    pub fn swing(&self) -> &RampedParam {
        &self.swing
    }
}

impl StereoStage for AmStage {
    fn process_block(&mut self, left: &mut [f32], right: &mut [f32], ctx: &RenderCtx) {
        let len = left.len();
        let lfo = &mut self.lfo_buffer[..len];
        lfo.fill(0.0);
        self.lfo.render_block(lfo, ctx);

        for i in 0..len {
            let gain = (self.resting.next_value() + lfo[i] * self.swing.next_value()).max(0.0);
            left[i] *= gain;
            right[i] *= gain;
        }
    }
}
