use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/*
Colored Noise
=============

Background noise for entrainment sessions comes in three colors, named for
the slope of their power spectra:

  white   Equal energy per Hz. Bright, hissy. Raw PRNG samples.

  pink    Energy falls 3 dB per octave (equal energy per octave). The most
          "natural" sounding wash. Produced here with Paul Kellet's economy
          filter: a small bank of one-pole lowpass filters fed by white
          noise, summed with tuned coefficients. Accurate to within a
          fraction of a dB across the audible band, and far cheaper than a
          spectral method.

  brown   Energy falls 6 dB per octave. Deep rumble, like distant surf.
          A leaky integrator over white noise; the leak keeps the random
          walk from wandering off and the output scaled back to roughly
          unit range.

Generators are seeded from entropy per instance, so two noise sources never
correlate. `SmallRng` keeps the generator `Send` (the audio callback owns
it) without dragging in the cryptographic default.
*/

/// Uniform white noise in [-1.0, 1.0].
pub struct WhiteNoise {
    rng: SmallRng,
}

impl WhiteNoise {
    pub fn new() -> Self {
        Self {
            rng: SmallRng::from_entropy(),
        }
    }

    #[inline]
    pub fn next_sample(&mut self) -> f32 {
        self.rng.gen_range(-1.0..=1.0)
    }

    pub fn render(&mut self, out: &mut [f32]) {
        for sample in out.iter_mut() {
            *sample = self.next_sample();
        }
    }
}

impl Default for WhiteNoise {
    fn default() -> Self {
        Self::new()
    }
}

/// Pink noise via Paul Kellet's filter cascade.
pub struct PinkNoise {
    white: WhiteNoise,
    b: [f32; 7],
}

impl PinkNoise {
    pub fn new() -> Self {
        Self {
            white: WhiteNoise::new(),
            b: [0.0; 7],
        }
    }

    #[inline]
    pub fn next_sample(&mut self) -> f32 {
        let w = self.white.next_sample();
        let b = &mut self.b;

        b[0] = 0.99886 * b[0] + w * 0.0555179;
        b[1] = 0.99332 * b[1] + w * 0.0750759;
        b[2] = 0.96900 * b[2] + w * 0.1538520;
        b[3] = 0.86650 * b[3] + w * 0.3104856;
        b[4] = 0.55000 * b[4] + w * 0.5329522;
        b[5] = -0.7616 * b[5] - w * 0.0168980;

        let pink = b.iter().sum::<f32>() + w * 0.5362;
        b[6] = w * 0.115926;

        // The cascade sums to roughly +/-9; scale back toward unit range.
        (pink * 0.11).clamp(-1.0, 1.0)
    }

    pub fn render(&mut self, out: &mut [f32]) {
        for sample in out.iter_mut() {
            *sample = self.next_sample();
        }
    }
}

impl Default for PinkNoise {
    fn default() -> Self {
        Self::new()
    }
}

/// Brown (red) noise via a leaky integrator.
pub struct BrownNoise {
    white: WhiteNoise,
    level: f32,
}

impl BrownNoise {
    pub fn new() -> Self {
        Self {
            white: WhiteNoise::new(),
            level: 0.0,
        }
    }

    #[inline]
    pub fn next_sample(&mut self) -> f32 {
        let w = self.white.next_sample();
        // Leak factor bounds the random walk.
        self.level = (self.level + 0.02 * w) / 1.02;
        (self.level * 3.5).clamp(-1.0, 1.0)
    }

    pub fn render(&mut self, out: &mut [f32]) {
        for sample in out.iter_mut() {
            *sample = self.next_sample();
        }
    }
}

impl Default for BrownNoise {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_bounded_and_alive(buffer: &[f32]) {
        assert!(buffer.iter().all(|s| s.is_finite()));
        assert!(buffer.iter().all(|s| (-1.0..=1.0).contains(s)));
        assert!(buffer.iter().any(|s| s.abs() > 1e-4), "generator is silent");
    }

    #[test]
    fn white_noise_is_bounded() {
        let mut noise = WhiteNoise::new();
        let mut buffer = vec![0.0f32; 4096];
        noise.render(&mut buffer);
        assert_bounded_and_alive(&buffer);
    }

    #[test]
    fn white_noise_is_roughly_zero_mean() {
        let mut noise = WhiteNoise::new();
        let mut buffer = vec![0.0f32; 1 << 16];
        noise.render(&mut buffer);
        let mean = buffer.iter().sum::<f32>() / buffer.len() as f32;
        assert!(mean.abs() < 0.05, "mean {mean} too far from zero");
    }

    #[test]
    fn pink_noise_is_bounded() {
        let mut noise = PinkNoise::new();
        let mut buffer = vec![0.0f32; 4096];
        noise.render(&mut buffer);
        assert_bounded_and_alive(&buffer);
    }

    #[test]
    fn brown_noise_is_bounded() {
        let mut noise = BrownNoise::new();
        let mut buffer = vec![0.0f32; 1 << 16];
        noise.render(&mut buffer);
        assert_bounded_and_alive(&buffer);
    }

    #[test]
    fn brown_noise_has_less_high_frequency_energy_than_white() {
        // Crude spectral check: brown noise changes much less sample-to-sample.
        let mut white = WhiteNoise::new();
        let mut brown = BrownNoise::new();
        let mut wbuf = vec![0.0f32; 8192];
        let mut bbuf = vec![0.0f32; 8192];
        white.render(&mut wbuf);
        brown.render(&mut bbuf);

        let delta_energy = |buf: &[f32]| {
            buf.windows(2).map(|w| (w[1] - w[0]).powi(2)).sum::<f32>() / buf.len() as f32
        };
        assert!(delta_energy(&bbuf) < delta_energy(&wbuf) * 0.5);
    }
}
