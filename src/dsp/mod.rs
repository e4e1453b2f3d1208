//! Low-level DSP primitives used by the higher level graph nodes.
//!
//! These components are allocation-free and realtime-safe, making them safe to
//! run inside the audio callback. They intentionally stay focused on the
//! signal-processing math so graph nodes can layer on orchestration and the
//! engine can layer on lifecycle.

/// Block-rate modulation helpers.
pub mod modulate;
/// Colored noise generators (white, pink, brown).
pub mod noise;
/// Audio-band and control-rate oscillator waveforms.
pub mod oscillator;
/// Click-free parameter values with scheduled linear ramps.
pub mod param;
