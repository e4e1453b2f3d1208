use crate::dsp::oscillator::OscillatorBlock;
use crate::graph::node::{MonoNode, RenderCtx};

/*
Carrier Oscillator
==================

The audible tone of the engine. Entrainment carriers are pure sines - the
point is a clean perceptual beat, not timbre - so only the sine shape is
exposed here.

The node carries two frequency inputs:

  frequency    The fixed base frequency chosen at graph build time. For a
               binaural pair this already includes the +/- half-split.

  fm_offset    A block-rate offset in Hz written by the frequency-modulation
               stage before each block. Zero when no FM stage exists.

The sum is clamped to a sane audible band before rendering so a deep FM
swing can never drive the phase accumulator backwards.
*/

pub struct OscNode {
    osc: OscillatorBlock,
    frequency: f32,
    fm_offset: f32,
}

impl OscNode {
    pub fn sine(frequency: f32) -> Self {
        Self {
            osc: OscillatorBlock::sine(),
            frequency,
            fm_offset: 0.0,
        }
    }

    pub fn frequency(&self) -> f32 {
        self.frequency
    }

    /// Set the frequency offset applied for subsequent blocks (Hz).
    pub fn set_fm_offset(&mut self, offset_hz: f32) {
        self.fm_offset = offset_hz;
    }
}

impl MonoNode for OscNode {
    fn render_block(&mut self, out: &mut [f32], ctx: &RenderCtx) {
        let frequency = (self.frequency + self.fm_offset).clamp(0.0, 20_000.0);
        self.osc.render(out, frequency, ctx.sample_rate);
    }
}
