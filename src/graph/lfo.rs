use crate::dsp::oscillator::OscillatorBlock;
use crate::graph::node::{MonoNode, RenderCtx};

/*
LFO (Low Frequency Oscillator)
==============================

Every modulation stage in the engine is driven by an LFO running at the beat
frequency - that is the defining constraint of entrainment synthesis: the
amplitude pulse, the pan sweep, and the pitch wobble all cycle at the target
brainwave rate.

Output is bipolar in [-1.0, +1.0]. Stages scale it to their parameter's
range themselves (amplitude centers it around a resting gain, pan feeds the
native +/-1 pan position, FM multiplies by a deviation in Hz).

The LFO ignores everything about the audible path; it only knows its own
fixed frequency.
*/

pub struct LfoNode {
    osc: OscillatorBlock,
    frequency: f32,
}

impl LfoNode {
    pub fn sine(frequency: f32) -> Self {
        Self {
            osc: OscillatorBlock::sine(),
            frequency,
        }
    }

    pub fn frequency(&self) -> f32 {
        self.frequency
    }
}

impl MonoNode for LfoNode {
    fn render_block(&mut self, out: &mut [f32], ctx: &RenderCtx) {
        self.osc.render(out, self.frequency, ctx.sample_rate);
    }
}
