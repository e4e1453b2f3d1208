use crate::engine::settings::ModulationSettings;

/*
Structural vs Smooth Classification
===================================

The heart of live reconfiguration: given the current settings and the merged
new settings, decide whether the change can ride on the existing graph as
parameter ramps, or whether the graph has to be torn down and rebuilt.

Structural triggers:

  - carrier_frequency, beat_frequency, binaural_intensity, noise_type:
    these select which nodes exist and what fixed frequencies they were
    built with. Oscillator and LFO frequencies are construction-time values
    in this engine, so changing them means new nodes.

  - any modulation depth crossing zero: the stage itself appears or
    disappears, which is a topology change, not a parameter change.

One structural trigger poisons the whole delta - even if other fields in the
same update were smooth-eligible, everything is applied through the rebuild
(the rebuild reads the fully merged snapshot anyway).

This is a pure function over two snapshots, with no audio context anywhere
near it, precisely so the hardest-to-verify part of the engine is plain
unit-testable logic.
*/

/// One smooth, ramp-applied field change.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SmoothChange {
    Volume(f32),
    MixLevel(f32),
    NoiseLevel(f32),
    AmDepth(f32),
    StereoDepth(f32),
    FmDepth(f32),
}

/// How a settings delta must be applied.
#[derive(Debug, Clone, PartialEq)]
pub enum UpdatePlan {
    /// Tear down and rebuild the graph from the merged snapshot.
    Structural,
    /// Ramp the listed parameters on the live graph.
    Smooth(Vec<SmoothChange>),
}

fn crosses_zero(old: f32, new: f32) -> bool {
    (old == 0.0) != (new == 0.0)
}

/// Classify the transition from `old` to `new`.
pub fn classify(old: &ModulationSettings, new: &ModulationSettings) -> UpdatePlan {
    let structural = old.carrier_frequency != new.carrier_frequency
        || old.beat_frequency != new.beat_frequency
        || old.binaural_intensity != new.binaural_intensity
        || old.noise_type != new.noise_type
        || crosses_zero(old.a_mod_depth, new.a_mod_depth)
        || crosses_zero(old.stereo_depth, new.stereo_depth)
        || crosses_zero(old.f_mod_depth, new.f_mod_depth);

    if structural {
        return UpdatePlan::Structural;
    }

    let mut changes = Vec::new();
    if old.volume != new.volume {
        changes.push(SmoothChange::Volume(new.volume));
    }
    if old.mix_level != new.mix_level {
        changes.push(SmoothChange::MixLevel(new.mix_level));
    }
    if old.noise_level != new.noise_level {
        changes.push(SmoothChange::NoiseLevel(new.noise_level));
    }
    if old.a_mod_depth != new.a_mod_depth {
        changes.push(SmoothChange::AmDepth(new.a_mod_depth));
    }
    if old.stereo_depth != new.stereo_depth {
        changes.push(SmoothChange::StereoDepth(new.stereo_depth));
    }
    if old.f_mod_depth != new.f_mod_depth {
        changes.push(SmoothChange::FmDepth(new.f_mod_depth));
    }

    UpdatePlan::Smooth(changes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::settings::{NoiseType, SettingsDelta};
    use crate::presets;

    fn base() -> ModulationSettings {
        ModulationSettings {
            a_mod_depth: 0.5,
            ..presets::get_default()
        }
    }

    fn classify_delta(old: &ModulationSettings, delta: SettingsDelta) -> UpdatePlan {
        classify(old, &old.merge(&delta))
    }

    #[test]
    fn carrier_change_is_structural() {
        let old = base();
        let plan = classify_delta(&old, SettingsDelta::default().carrier_frequency(300.0));
        assert_eq!(plan, UpdatePlan::Structural);
    }

    #[test]
    fn structural_trigger_wins_over_smooth_fields_in_same_delta() {
        let old = base();
        let delta = SettingsDelta::default().carrier_frequency(300.0).volume(0.9);
        assert_eq!(classify_delta(&old, delta), UpdatePlan::Structural);
    }

    #[test]
    fn beat_intensity_and_noise_type_are_structural() {
        let old = base();
        for delta in [
            SettingsDelta::default().beat_frequency(6.0),
            SettingsDelta::default().binaural_intensity(0.5),
            SettingsDelta::default().noise_type(NoiseType::Brown),
        ] {
            assert_eq!(classify_delta(&old, delta), UpdatePlan::Structural);
        }
    }

    #[test]
    fn depth_crossing_zero_is_structural_both_ways() {
        let old = base(); // a_mod_depth = 0.5, stereo_depth = 0.0 in default
        assert_eq!(
            classify_delta(&old, SettingsDelta::default().a_mod_depth(0.0)),
            UpdatePlan::Structural,
            "disabling a live stage must rebuild"
        );
        assert_eq!(
            classify_delta(&old, SettingsDelta::default().stereo_depth(0.4)),
            UpdatePlan::Structural,
            "enabling a dead stage must rebuild"
        );
    }

    #[test]
    fn nonzero_depth_change_is_smooth() {
        let old = ModulationSettings {
            a_mod_depth: 0.05,
            ..base()
        };
        let plan = classify_delta(&old, SettingsDelta::default().a_mod_depth(0.1));
        assert_eq!(plan, UpdatePlan::Smooth(vec![SmoothChange::AmDepth(0.1)]));
    }

    #[test]
    fn volume_and_mix_are_smooth() {
        let old = base();
        let delta = SettingsDelta::default().volume(0.9).mix_level(0.4);
        assert_eq!(
            classify_delta(&old, delta),
            UpdatePlan::Smooth(vec![
                SmoothChange::Volume(0.9),
                SmoothChange::MixLevel(0.4)
            ])
        );
    }

    #[test]
    fn noise_level_is_smooth_even_without_noise() {
        // Whether a node exists to ramp is the engine's concern, not the
        // classifier's: the plan still records the change.
        let old = ModulationSettings {
            noise_type: NoiseType::None,
            ..base()
        };
        let plan = classify_delta(&old, SettingsDelta::default().noise_level(0.7));
        assert_eq!(plan, UpdatePlan::Smooth(vec![SmoothChange::NoiseLevel(0.7)]));
    }

    #[test]
    fn identical_snapshots_produce_empty_smooth_plan() {
        let old = base();
        assert_eq!(classify(&old, &old), UpdatePlan::Smooth(vec![]));
    }
}
