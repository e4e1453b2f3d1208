//! The signal engine: graph lifecycle, live updates, and the audio context.
//!
//! One stateful component owns the whole lifecycle - context acquisition,
//! graph construction, structural-vs-smooth update classification, ramping,
//! and teardown. Everything around it (presets, noise synthesis, UI) is a
//! data source or leaf utility it calls into.

mod context;
pub mod delta;
mod error;
mod graph;
pub mod settings;

pub use delta::{classify, SmoothChange, UpdatePlan};
pub use error::EngineError;
pub use settings::{ModulationSettings, NoiseType, SettingsDelta};

use crate::engine::context::AudioContext;
use crate::engine::graph::SignalGraph;

/// Tunable constants with no entrainment-literature meaning; exposed as
/// configuration rather than buried as magic numbers.
#[derive(Debug, Clone, Copy)]
pub struct EngineTuning {
    /// Duration of every smooth parameter glide, in seconds. Long enough to
    /// kill clicks, short enough to feel immediate.
    pub ramp_seconds: f32,
    /// Frequency swing at f_mod_depth = 1.0, in Hz.
    pub fm_max_deviation_hz: f32,
}

impl Default for EngineTuning {
    fn default() -> Self {
        Self {
            ramp_seconds: 0.05,
            fm_max_deviation_hz: 100.0,
        }
    }
}

enum ContextMode {
    Device,
    Offline { sample_rate: f32 },
}

/*
State machine:

    Uninitialized -> Initialized -> Playing -> Initialized -> ... -> closed
         ^                                                            |
         +------------------------- cleanup -------------------------+

`play` is re-entrant (Playing -> Playing performs a full stop + rebuild).
`update_settings` is only meaningful while Playing and never changes the
play state. `cleanup` is legal from any state and returns the engine to
Uninitialized; `initialize`/`play` may be called again afterwards.

No public operation returns an error or panics: initialization failure is a
logged condition that leaves the engine "not ready", and `play` detects that
state and refuses with a second, distinct diagnostic. Callers are UI event
handlers with nowhere useful to propagate to.
*/

/// The brainwave-entrainment signal engine.
///
/// Single-threaded, caller-owned: all operations run synchronously on the
/// caller's turn and complete before returning. The audio device renders on
/// its own realtime thread, reached only through the shared render state's
/// short critical sections - there is no reentrancy protection beyond that,
/// and no cross-instance sharing.
pub struct SignalEngine {
    mode: ContextMode,
    tuning: EngineTuning,
    context: Option<AudioContext>,
    settings: Option<ModulationSettings>,
    playing: bool,
}

impl SignalEngine {
    /// An engine that will render to the default audio output device.
    pub fn new() -> Self {
        Self::with_mode(ContextMode::Device)
    }

    /// An engine with no device: the caller pulls blocks via
    /// [`render_offline`](Self::render_offline). Used for bouncing audio to
    /// buffers and for tests.
    pub fn offline(sample_rate: f32) -> Self {
        Self::with_mode(ContextMode::Offline { sample_rate })
    }

    fn with_mode(mode: ContextMode) -> Self {
        Self {
            mode,
            tuning: EngineTuning::default(),
            context: None,
            settings: None,
            playing: false,
        }
    }

    pub fn with_tuning(mut self, tuning: EngineTuning) -> Self {
        self.tuning = tuning;
        self
    }

    /// Acquire the audio context and create the persistent gain stages.
    ///
    /// Idempotent. On failure the engine stays uninitialized and the
    /// failure is reported on the log; nothing is raised. A later `play`
    /// will notice and refuse.
    pub fn initialize(&mut self) {
        if self.context.is_some() {
            return;
        }

        let result = match self.mode {
            ContextMode::Device => AudioContext::open_device(),
            ContextMode::Offline { sample_rate } => Ok(AudioContext::offline(sample_rate)),
        };

        match result {
            Ok(context) => {
                log::debug!("audio context ready at {} Hz", context.sample_rate());
                self.context = Some(context);
            }
            Err(err) => {
                log::error!("failed to acquire audio context: {err}");
            }
        }
    }

    pub fn is_initialized(&self) -> bool {
        self.context.is_some()
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    /// The settings the live graph was built from, merged with every update
    /// applied since.
    pub fn current_settings(&self) -> Option<&ModulationSettings> {
        self.settings.as_ref()
    }

    /// Start playback from a complete settings snapshot.
    ///
    /// A caller-supplied full snapshot is authoritative: if the engine is
    /// already playing it performs a full `stop` first and rebuilds - no
    /// in-place edits on this path. Gains are set immediately (not ramped),
    /// the source path and modulation stages are built per the snapshot,
    /// and every oscillator starts at the moment it is created.
    pub fn play(&mut self, settings: ModulationSettings) {
        self.initialize();
        if self.context.is_none() {
            log::error!("cannot play: engine is not properly initialized");
            return;
        }

        if self.playing {
            self.stop();
        }

        if let Some(context) = &self.context {
            let mut state = context.state();
            state.master_gain.set(settings.volume);
            state.mix_gain.set(settings.mix_level);
            state.noise_gain.set(settings.noise_level);
            state.graph = Some(SignalGraph::build(&settings, &self.tuning));
            state.generation += 1;
            log::debug!(
                "signal graph built (generation {}): carrier {} Hz, beat {} Hz",
                state.generation,
                settings.carrier_frequency,
                settings.beat_frequency
            );
        }

        self.settings = Some(settings);
        self.playing = true;
    }

    /// Stop playback, releasing every transient node.
    ///
    /// No-op when not playing. The persistent gains stay in place. Dropping
    /// the graph value releases every oscillator, LFO, pan stage, and noise
    /// source at once, so no orphaned node or connection can survive.
    pub fn stop(&mut self) {
        if !self.playing {
            return;
        }

        if let Some(context) = &self.context {
            context.state().graph = None;
            log::debug!("signal graph torn down");
        }
        self.playing = false;
    }

    /// Apply a partial settings update to the running sound.
    ///
    /// No-op when not playing. The delta is classified (see
    /// [`classify`]): structural changes merge and replay the full
    /// snapshot; smooth changes ramp the live parameters over the tuned
    /// ramp duration. Either way the current settings end fully merged -
    /// including smooth values that had no live node to ramp (a stored
    /// noise level with noise off, a depth tweak on an inactive stage).
    pub fn update_settings(&mut self, delta: &SettingsDelta) {
        if !self.playing {
            return;
        }
        let Some(old) = self.settings else {
            return;
        };

        let merged = old.merge(delta);
        match classify(&old, &merged) {
            UpdatePlan::Structural => {
                log::debug!("structural settings change: rebuilding graph");
                self.play(merged);
            }
            UpdatePlan::Smooth(changes) => {
                if let Some(context) = &self.context {
                    let sample_rate = context.sample_rate();
                    let ramp = self.tuning.ramp_seconds;
                    let mut state = context.state();

                    for change in changes {
                        match change {
                            SmoothChange::Volume(v) => {
                                state.master_gain.ramp_to(v, ramp, sample_rate);
                            }
                            SmoothChange::MixLevel(v) => {
                                state.mix_gain.ramp_to(v, ramp, sample_rate);
                            }
                            SmoothChange::NoiseLevel(v) => {
                                // Only ramp when a noise node exists to hear it.
                                if state.graph.as_ref().is_some_and(SignalGraph::has_noise) {
                                    state.noise_gain.ramp_to(v, ramp, sample_rate);
                                }
                            }
                            SmoothChange::AmDepth(depth) => {
                                if let Some(stage) =
                                    state.graph.as_mut().and_then(SignalGraph::am_mut)
                                {
                                    stage.ramp_depth(depth, ramp, sample_rate);
                                }
                            }
                            SmoothChange::StereoDepth(depth) => {
                                if let Some(stage) =
                                    state.graph.as_mut().and_then(SignalGraph::pan_mut)
                                {
                                    stage.ramp_depth(depth, ramp, sample_rate);
                                }
                            }
                            SmoothChange::FmDepth(depth) => {
                                if let Some(stage) =
                                    state.graph.as_mut().and_then(SignalGraph::fm_mut)
                                {
                                    stage.ramp_deviation(
                                        depth * self.tuning.fm_max_deviation_hz,
                                        ramp,
                                        sample_rate,
                                    );
                                }
                            }
                        }
                    }
                }
                self.settings = Some(merged);
            }
        }
    }

    /// Set the master volume.
    #[deprecated(note = "use update_settings with a volume delta")]
    pub fn set_volume(&mut self, volume: f32) {
        log::warn!("set_volume is deprecated; use update_settings with a volume delta");

        if self.playing {
            self.update_settings(&SettingsDelta::default().volume(volume));
            return;
        }

        if let Some(context) = &self.context {
            context.state().master_gain.set(volume);
        }
        if let Some(settings) = &mut self.settings {
            settings.volume = volume;
        }
    }

    /// Stop playback and release the audio context.
    ///
    /// Legal from any state. Context close failures are logged and
    /// swallowed. Afterwards the engine is back to uninitialized;
    /// `initialize`/`play` may be called again.
    pub fn cleanup(&mut self) {
        self.stop();
        if let Some(mut context) = self.context.take() {
            context.close();
        }
        self.settings = None;
    }

    /// Pull one block of audio from an offline engine.
    ///
    /// Returns `false` (leaving the buffers untouched) when the engine is
    /// uninitialized or running on a device, where the stream callback owns
    /// the render clock.
    pub fn render_offline(&mut self, left: &mut [f32], right: &mut [f32]) -> bool {
        match &self.context {
            Some(context) if context.is_offline() => {
                context.state().render(left, right);
                true
            }
            Some(_) => {
                log::warn!("render_offline called on a device-backed engine");
                false
            }
            None => false,
        }
    }
}

impl Default for SignalEngine {
    fn default() -> Self {
        Self::new()
    }
}
