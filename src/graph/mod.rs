//! Composable building blocks for constructing audio-processing graphs.
//!
//! Graph nodes wrap the low-level DSP primitives with what the signal engine
//! needs to assemble a live chain: block-based rendering, ramped parameters,
//! and a uniform in-place stereo stage interface so the chain order lives in
//! exactly one place (`engine::graph`).

/// Amplitude-modulation stage (isochronic pulsing).
pub mod amplitude;
/// Frequency-modulation stage feeding oscillator frequency inputs.
pub mod freqmod;
/// Ramped gain applied in series.
pub mod gain;
/// Low frequency oscillators for parameter modulation.
pub mod lfo;
/// Looping colored-noise source factory.
pub mod noise;
/// Core traits shared by all graph nodes.
pub mod node;
/// Audio-band carrier oscillators.
pub mod oscillator;
/// Stereo auto-pan stage.
pub mod panner;
