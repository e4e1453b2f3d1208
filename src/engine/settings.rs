/*
Settings Snapshots and Deltas
=============================

`ModulationSettings` is the complete, immutable description of the desired
sound. The engine never mutates one in place: applying a delta produces a
new merged snapshot, so "old vs new" comparisons in the update classifier
are always between two well-defined values.

Ranges are documented but not validated here - callers (the preset catalog,
UI sliders) own keeping values in range. The engine trusts its input.
*/

/// Background noise color. `None` disables the noise path entirely (no
/// source node is created, and noise-level updates have nothing to ramp).
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoiseType {
    White,
    Pink,
    Brown,
    None,
}

/// Complete description of the desired sound.
///
/// | field | range | meaning |
/// |---|---|---|
/// | `carrier_frequency` | > 0 Hz | base tone |
/// | `beat_frequency` | >= 0 Hz | entrainment rate; drives every LFO |
/// | `binaural_intensity` | 0-1 | scales the L/R split; 0 = mono path |
/// | `a_mod_depth` | 0-1 | amplitude pulse strength; 0 disables stage |
/// | `stereo_depth` | 0-1 | pan sweep width; 0 disables stage |
/// | `f_mod_depth` | 0-1 | carrier wobble strength; 0 disables stage |
/// | `noise_level` | 0-1 | noise gain |
/// | `mix_level` | 0-1 | carrier-path gain |
/// | `volume` | 0-1 | master gain |
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ModulationSettings {
    pub carrier_frequency: f32,
    pub beat_frequency: f32,
    pub binaural_intensity: f32,
    pub a_mod_depth: f32,
    pub stereo_depth: f32,
    pub f_mod_depth: f32,
    pub noise_type: NoiseType,
    pub noise_level: f32,
    pub mix_level: f32,
    pub volume: f32,
}

impl ModulationSettings {
    /// Produce a new snapshot with `delta`'s present fields applied.
    pub fn merge(&self, delta: &SettingsDelta) -> Self {
        Self {
            carrier_frequency: delta.carrier_frequency.unwrap_or(self.carrier_frequency),
            beat_frequency: delta.beat_frequency.unwrap_or(self.beat_frequency),
            binaural_intensity: delta.binaural_intensity.unwrap_or(self.binaural_intensity),
            a_mod_depth: delta.a_mod_depth.unwrap_or(self.a_mod_depth),
            stereo_depth: delta.stereo_depth.unwrap_or(self.stereo_depth),
            f_mod_depth: delta.f_mod_depth.unwrap_or(self.f_mod_depth),
            noise_type: delta.noise_type.unwrap_or(self.noise_type),
            noise_level: delta.noise_level.unwrap_or(self.noise_level),
            mix_level: delta.mix_level.unwrap_or(self.mix_level),
            volume: delta.volume.unwrap_or(self.volume),
        }
    }
}

/// A partial settings update; absent fields keep their current value.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SettingsDelta {
    pub carrier_frequency: Option<f32>,
    pub beat_frequency: Option<f32>,
    pub binaural_intensity: Option<f32>,
    pub a_mod_depth: Option<f32>,
    pub stereo_depth: Option<f32>,
    pub f_mod_depth: Option<f32>,
    pub noise_type: Option<NoiseType>,
    pub noise_level: Option<f32>,
    pub mix_level: Option<f32>,
    pub volume: Option<f32>,
}

impl SettingsDelta {
    pub fn carrier_frequency(mut self, hz: f32) -> Self {
        self.carrier_frequency = Some(hz);
        self
    }

    pub fn beat_frequency(mut self, hz: f32) -> Self {
        self.beat_frequency = Some(hz);
        self
    }

    pub fn binaural_intensity(mut self, intensity: f32) -> Self {
        self.binaural_intensity = Some(intensity);
        self
    }

    pub fn a_mod_depth(mut self, depth: f32) -> Self {
        self.a_mod_depth = Some(depth);
        self
    }

    pub fn stereo_depth(mut self, depth: f32) -> Self {
        self.stereo_depth = Some(depth);
        self
    }

    pub fn f_mod_depth(mut self, depth: f32) -> Self {
        self.f_mod_depth = Some(depth);
        self
    }

    pub fn noise_type(mut self, noise_type: NoiseType) -> Self {
        self.noise_type = Some(noise_type);
        self
    }

    pub fn noise_level(mut self, level: f32) -> Self {
        self.noise_level = Some(level);
        self
    }

    pub fn mix_level(mut self, level: f32) -> Self {
        self.mix_level = Some(level);
        self
    }

    pub fn volume(mut self, volume: f32) -> Self {
        self.volume = Some(volume);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presets;

    #[test]
    fn merge_applies_present_fields_only() {
        let base = presets::get_default();
        let delta = SettingsDelta::default().volume(0.9).beat_frequency(4.0);
        let merged = base.merge(&delta);

        assert_eq!(merged.volume, 0.9);
        assert_eq!(merged.beat_frequency, 4.0);
        assert_eq!(merged.carrier_frequency, base.carrier_frequency);
        assert_eq!(merged.noise_type, base.noise_type);
    }

    #[test]
    fn merge_does_not_mutate_the_original() {
        let base = presets::get_default();
        let original = base;
        let _ = base.merge(&SettingsDelta::default().volume(0.1));
        assert_eq!(base, original);
    }

    #[test]
    fn empty_delta_merges_to_equal_snapshot() {
        let base = presets::get_default();
        assert_eq!(base.merge(&SettingsDelta::default()), base);
    }
}
