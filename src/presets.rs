//! Static preset catalog.
//!
//! A thin collaborator: the engine knows nothing about presets. Callers
//! resolve an id to a [`ModulationSettings`] snapshot here and hand it to
//! [`SignalEngine::play`](crate::engine::SignalEngine::play).
//!
//! Carrier/beat pairings follow the usual brainwave-band conventions:
//! delta (1-4 Hz) for deep sleep, theta (4-8 Hz) for meditation, alpha
//! (8-13 Hz) for relaxation, beta (13-30 Hz) for focus.

use crate::engine::settings::{ModulationSettings, NoiseType};

#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    DeepSleep,
    Meditation,
    Relaxation,
    Focus,
}

pub struct Preset {
    pub id: &'static str,
    pub name: &'static str,
    pub category: Category,
    pub settings: ModulationSettings,
}

const PRESETS: &[Preset] = &[
    Preset {
        id: "delta-sleep",
        name: "Deep Sleep",
        category: Category::DeepSleep,
        settings: ModulationSettings {
            carrier_frequency: 180.0,
            beat_frequency: 2.5,
            binaural_intensity: 1.0,
            a_mod_depth: 0.0,
            stereo_depth: 0.0,
            f_mod_depth: 0.0,
            noise_type: NoiseType::Brown,
            noise_level: 0.35,
            mix_level: 0.7,
            volume: 0.5,
        },
    },
    Preset {
        id: "theta-meditate",
        name: "Meditation",
        category: Category::Meditation,
        settings: ModulationSettings {
            carrier_frequency: 200.0,
            beat_frequency: 6.0,
            binaural_intensity: 1.0,
            a_mod_depth: 0.3,
            stereo_depth: 0.0,
            f_mod_depth: 0.0,
            noise_type: NoiseType::Pink,
            noise_level: 0.25,
            mix_level: 0.8,
            volume: 0.5,
        },
    },
    Preset {
        id: "alpha-relax",
        name: "Relaxation",
        category: Category::Relaxation,
        settings: ModulationSettings {
            carrier_frequency: 200.0,
            beat_frequency: 10.0,
            binaural_intensity: 1.0,
            a_mod_depth: 0.0,
            stereo_depth: 0.0,
            f_mod_depth: 0.0,
            noise_type: NoiseType::None,
            noise_level: 0.3,
            mix_level: 0.8,
            volume: 0.5,
        },
    },
    Preset {
        id: "beta-focus",
        name: "Focus",
        category: Category::Focus,
        settings: ModulationSettings {
            carrier_frequency: 220.0,
            beat_frequency: 18.0,
            binaural_intensity: 1.0,
            a_mod_depth: 0.5,
            stereo_depth: 0.0,
            f_mod_depth: 0.0,
            noise_type: NoiseType::None,
            noise_level: 0.0,
            mix_level: 0.9,
            volume: 0.5,
        },
    },
];

/// The full catalog, in display order.
pub fn all() -> &'static [Preset] {
    PRESETS
}

pub fn get_by_id(id: &str) -> Option<ModulationSettings> {
    PRESETS.iter().find(|p| p.id == id).map(|p| p.settings)
}

/// The settings used when no preset has been chosen: the alpha preset.
pub fn get_default() -> ModulationSettings {
    PRESETS[2].settings
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_unique() {
        for (i, a) in PRESETS.iter().enumerate() {
            for b in &PRESETS[i + 1..] {
                assert_ne!(a.id, b.id);
            }
        }
    }

    #[test]
    fn lookup_by_id() {
        let settings = get_by_id("delta-sleep").unwrap();
        assert_eq!(settings.beat_frequency, 2.5);
        assert!(get_by_id("nope").is_none());
    }

    #[test]
    fn default_is_the_alpha_preset() {
        assert_eq!(get_default(), get_by_id("alpha-relax").unwrap());
    }

    #[test]
    fn all_presets_are_in_documented_ranges() {
        for preset in all() {
            let s = &preset.settings;
            assert!(s.carrier_frequency > 0.0);
            assert!(s.beat_frequency >= 0.0);
            for value in [
                s.binaural_intensity,
                s.a_mod_depth,
                s.stereo_depth,
                s.f_mod_depth,
                s.noise_level,
                s.mix_level,
                s.volume,
            ] {
                assert!((0.0..=1.0).contains(&value), "{} out of range", preset.id);
            }
        }
    }
}
