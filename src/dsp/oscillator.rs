use std::f32::consts::TAU;

/*
Oscillator Waveforms
====================

One phase-accumulator oscillator serves both roles in this crate:

  audio-rate    The carrier tone(s) the listener hears. Entrainment carriers
                sit well below typical synth territory (100-500 Hz), so a
                naive (non-bandlimited) waveform is fine - aliasing products
                of a low sine are inaudible.

  control-rate  The LFOs driving amplitude, pan, and frequency modulation.
                These run at the beat frequency (0-40 Hz) and output bipolar
                control values in [-1.0, +1.0].

Phase is kept in [0, 1) and carried across blocks, so a rebuilt buffer
boundary never clicks. Frequency is passed per render call, which lets the
caller vary it between blocks (frequency modulation) without resetting phase.
*/

#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Waveform {
    Sine,
    Triangle,
    Square,
}

/// Phase-accumulator oscillator rendering one block at a time.
pub struct OscillatorBlock {
    waveform: Waveform,
    phase: f32, // [0, 1)
}

impl OscillatorBlock {
    pub fn new(waveform: Waveform) -> Self {
        Self {
            waveform,
            phase: 0.0,
        }
    }

    pub fn sine() -> Self {
        Self::new(Waveform::Sine)
    }

    pub fn triangle() -> Self {
        Self::new(Waveform::Triangle)
    }

    pub fn square() -> Self {
        Self::new(Waveform::Square)
    }

    /// Fill `out` with one block at `frequency` Hz.
    ///
    /// Phase continues from the previous call. A zero frequency holds the
    /// current phase and outputs a constant sample.
    pub fn render(&mut self, out: &mut [f32], frequency: f32, sample_rate: f32) {
        let step = frequency / sample_rate;

        for sample in out.iter_mut() {
            *sample = match self.waveform {
                Waveform::Sine => (TAU * self.phase).sin(),
                Waveform::Triangle => 1.0 - 4.0 * (self.phase - 0.5).abs(),
                Waveform::Square => {
                    if self.phase < 0.5 {
                        1.0
                    } else {
                        -1.0
                    }
                }
            };

            self.phase += step;
            if self.phase >= 1.0 {
                self.phase -= 1.0;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE_RATE: f32 = 48_000.0;

    #[test]
    fn sine_matches_closed_form() {
        let mut osc = OscillatorBlock::sine();
        let mut buffer = vec![0.0f32; 128];
        osc.render(&mut buffer, 440.0, SAMPLE_RATE);

        // sample n should be sin(2pi f n / sr)
        let n = 12;
        let expected = (TAU * 440.0 * n as f32 / SAMPLE_RATE).sin();
        assert!(
            (buffer[n] - expected).abs() < 1e-5,
            "expected {expected}, got {}",
            buffer[n]
        );
    }

    #[test]
    fn phase_continues_across_blocks() {
        let mut split = OscillatorBlock::sine();
        let mut a = vec![0.0f32; 64];
        let mut b = vec![0.0f32; 64];
        split.render(&mut a, 200.0, SAMPLE_RATE);
        split.render(&mut b, 200.0, SAMPLE_RATE);

        let mut whole = OscillatorBlock::sine();
        let mut full = vec![0.0f32; 128];
        whole.render(&mut full, 200.0, SAMPLE_RATE);

        for (i, (&split_sample, &full_sample)) in a.iter().chain(b.iter()).zip(&full).enumerate() {
            assert!(
                (split_sample - full_sample).abs() < 1e-5,
                "discontinuity at sample {i}"
            );
        }
    }

    #[test]
    fn triangle_and_square_stay_bipolar() {
        for mut osc in [OscillatorBlock::triangle(), OscillatorBlock::square()] {
            let mut buffer = vec![0.0f32; 1024];
            osc.render(&mut buffer, 7.0, SAMPLE_RATE);
            for &sample in &buffer {
                assert!((-1.0..=1.0).contains(&sample), "sample {sample} out of range");
            }
        }
    }

    #[test]
    fn zero_frequency_holds_value() {
        let mut osc = OscillatorBlock::sine();
        let mut buffer = vec![1.0f32; 256];
        osc.render(&mut buffer, 0.0, SAMPLE_RATE);
        assert!(buffer.iter().all(|&s| s == 0.0));
    }
}
