use crate::dsp::modulate::block_average;
use crate::dsp::param::RampedParam;
use crate::graph::lfo::LfoNode;
use crate::graph::node::{MonoNode, RenderCtx};
use crate::MAX_BLOCK_SIZE;

/*
Frequency Modulation Stage
==========================

Unlike the amplitude and pan stages, this one is not spliced into the signal
path - it modulates a parameter. Before each block the engine asks for one
offset value and writes it onto the carrier oscillator(s)' frequency input;
both sides of a binaural pair receive the same offset so the beat separation
is preserved while the pair wobbles together.

The offset is block-rate: the LFO is rendered for the block and averaged
(see `dsp::modulate`), then scaled by the deviation parameter:

    offset_hz = avg(lfo) * deviation

`deviation` is the 0-1 depth setting scaled by the engine's configured
maximum deviation in Hz. It is a ramped parameter, so smooth depth updates
glide the wobble width.
*/

pub struct FmStage {
    lfo: LfoNode,
    deviation: RampedParam,
    lfo_buffer: Vec<f32>,
}

impl FmStage {
    /// `deviation_hz` is the full-scale frequency swing for this stage.
    pub fn new(beat_frequency: f32, deviation_hz: f32) -> Self {
        Self {
            lfo: LfoNode::sine(beat_frequency),
            deviation: RampedParam::new(deviation_hz),
            lfo_buffer: vec![0.0; MAX_BLOCK_SIZE],
        }
    }

    /// Glide the frequency swing to `deviation_hz`.
    pub fn ramp_deviation(&mut self, deviation_hz: f32, seconds: f32, sample_rate: f32) {
        self.deviation.ramp_to(deviation_hz, seconds, sample_rate);
    }

    pub fn deviation(&self) -> &RampedParam {
        &self.deviation
    }

    /// Render one block of the LFO and return the frequency offset (Hz) to
    /// apply to the carrier(s) for this block.
    pub fn offset_for_block(&mut self, frames: usize, ctx: &RenderCtx) -> f32 {
        let lfo = &mut self.lfo_buffer[..frames];
        lfo.fill(0.0);
        self.lfo.render_block(lfo, ctx);
        block_average(lfo) * self.deviation.advance(frames)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE_RATE: f32 = 48_000.0;

    #[test]
    fn offset_is_bounded_by_deviation() {
        let ctx = RenderCtx::new(SAMPLE_RATE);
        let mut stage = FmStage::new(10.0, 100.0);

        for _ in 0..100 {
            let offset = stage.offset_for_block(128, &ctx);
            assert!(offset.abs() <= 100.0, "offset {offset} exceeds deviation");
        }
    }

    #[test]
    fn offset_varies_over_a_cycle() {
        let ctx = RenderCtx::new(SAMPLE_RATE);
        let mut stage = FmStage::new(10.0, 100.0);

        let offsets: Vec<f32> = (0..40).map(|_| stage.offset_for_block(128, &ctx)).collect();
        let max = offsets.iter().cloned().fold(f32::NEG_INFINITY, f32::max);
        let min = offsets.iter().cloned().fold(f32::INFINITY, f32::min);
        assert!(max > 50.0, "max offset {max} too small");
        assert!(min < -50.0, "min offset {min} too small");
    }

    #[test]
    fn ramp_deviation_moves_target() {
        let mut stage = FmStage::new(10.0, 20.0);
        stage.ramp_deviation(60.0, 0.05, SAMPLE_RATE);
        assert_eq!(stage.deviation().target(), 60.0);
        assert!(stage.deviation().is_ramping());
    }
}
