//! Block-rate modulation helpers.
//!
//! Frequency modulation in this engine is applied at block rate: the LFO is
//! rendered for the block, collapsed to a single representative value, and
//! that value offsets the oscillator frequency for the whole block. At
//! entrainment rates (LFOs below ~40 Hz against 64-2048 sample blocks) the
//! stepping this introduces is far below audibility, and it keeps the
//! oscillator's inner loop free of per-sample parameter math.
//!
//! Averaging is used rather than sampling the first LFO value, so the chosen
//! value represents the middle of the block instead of its leading edge.

/// Calculate the modulated parameter value: `base + modulator * depth`.
#[inline]
pub fn apply_modulation(base_value: f32, modulator: f32, depth: f32) -> f32 {
    base_value + (modulator * depth)
}

/// Average of a modulator signal over one block.
#[inline]
pub fn block_average(samples: &[f32]) -> f32 {
    if samples.is_empty() {
        return 0.0;
    }
    samples.iter().sum::<f32>() / samples.len() as f32
}
