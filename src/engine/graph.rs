use crate::engine::settings::ModulationSettings;
use crate::engine::EngineTuning;
use crate::graph::amplitude::AmStage;
use crate::graph::freqmod::FmStage;
use crate::graph::noise::NoiseNode;
use crate::graph::node::{MonoNode, RenderCtx, StereoStage};
use crate::graph::oscillator::OscNode;
use crate::graph::panner::PanStage;

/*
The Signal Graph Value Object
=============================

Everything transient lives here: source oscillators, modulation stages, and
the noise source. `play` builds one from a settings snapshot; a structural
update drops the whole value and builds a fresh one. Because teardown is
"drop the value", a partial rebuild can never leave a stale oscillator or a
dangling stage behind - the borrow checker owns the bookkeeping that the
loose-nullable-fields approach gets wrong.

Topology, fixed at build time:

    source (mono osc, or binaural pair)        fm stage (parameter tap)
       |                                          |
       v                                          v
    stereo buffers  <-- am stage <-- pan stage    writes carrier fm offset
       |
       v
    mix gain -> (+ noise x noise gain) -> master gain     [persistent, in
                                                           RenderState]

Series stages are spliced by `series_stages` in one fixed order; no other
code decides chain wiring. The persistent gains deliberately live outside
this value, in the render state, so they survive every rebuild.
*/

/// Binaural split: intensity scales the separation, never the carrier.
fn binaural_split(carrier: f32, beat: f32, intensity: f32) -> (f32, f32) {
    let delta = beat * intensity;
    (carrier - delta / 2.0, carrier + delta / 2.0)
}

/// Exactly one source configuration is alive at a time.
pub(crate) enum SourcePath {
    Mono(OscNode),
    Binaural { left: OscNode, right: OscNode },
}

impl SourcePath {
    fn render(&mut self, left: &mut [f32], right: &mut [f32], ctx: &RenderCtx) {
        match self {
            Self::Mono(osc) => {
                osc.render_block(left, ctx);
                right.copy_from_slice(left);
            }
            Self::Binaural { left: l, right: r } => {
                l.render_block(left, ctx);
                r.render_block(right, ctx);
            }
        }
    }

    fn set_fm_offset(&mut self, offset_hz: f32) {
        match self {
            Self::Mono(osc) => osc.set_fm_offset(offset_hz),
            Self::Binaural { left, right } => {
                // Same offset on both sides keeps the beat separation intact.
                left.set_fm_offset(offset_hz);
                right.set_fm_offset(offset_hz);
            }
        }
    }
}

pub(crate) struct SignalGraph {
    source: SourcePath,
    am: Option<AmStage>,
    pan: Option<PanStage>,
    fm: Option<FmStage>,
    noise: Option<NoiseNode>,
}

impl SignalGraph {
    /// Build the graph implied by `settings`: the live node set is exactly
    /// what the nonzero depths and mode flags ask for.
    pub fn build(settings: &ModulationSettings, tuning: &EngineTuning) -> Self {
        let source = if settings.binaural_intensity > 0.0 {
            let (low, high) = binaural_split(
                settings.carrier_frequency,
                settings.beat_frequency,
                settings.binaural_intensity,
            );
            SourcePath::Binaural {
                left: OscNode::sine(low),
                right: OscNode::sine(high),
            }
        } else {
            SourcePath::Mono(OscNode::sine(settings.carrier_frequency))
        };

        let beat = settings.beat_frequency;
        let am = (settings.a_mod_depth > 0.0).then(|| AmStage::new(beat, settings.a_mod_depth));
        let pan =
            (settings.stereo_depth > 0.0).then(|| PanStage::new(beat, settings.stereo_depth));
        let fm = (settings.f_mod_depth > 0.0).then(|| {
            FmStage::new(beat, settings.f_mod_depth * tuning.fm_max_deviation_hz)
        });
        let noise = NoiseNode::create(settings.noise_type);

        Self {
            source,
            am,
            pan,
            fm,
            noise,
        }
    }

    /// Render the carrier/modulation path into `left`/`right` (pre mix-gain).
    pub fn render_main(&mut self, left: &mut [f32], right: &mut [f32], ctx: &RenderCtx) {
        // FM modulates a parameter, not the signal path: applied before the
        // source renders, in parallel with the series chain.
        if let Some(fm) = &mut self.fm {
            let offset = fm.offset_for_block(left.len(), ctx);
            self.source.set_fm_offset(offset);
        }

        self.source.render(left, right, ctx);

        for stage in self.series_stages() {
            stage.process_block(left, right, ctx);
        }
    }

    /// The series chain in splice order: amplitude, then pan. The one place
    /// that decides chain wiring.
    fn series_stages(&mut self) -> impl Iterator<Item = &mut dyn StereoStage> {
        let am = self.am.iter_mut().map(|s| s as &mut dyn StereoStage);
        let pan = self.pan.iter_mut().map(|s| s as &mut dyn StereoStage);
        am.chain(pan)
    }

    pub fn am_mut(&mut self) -> Option<&mut AmStage> {
        self.am.as_mut()
    }

    pub fn pan_mut(&mut self) -> Option<&mut PanStage> {
        self.pan.as_mut()
    }

    pub fn fm_mut(&mut self) -> Option<&mut FmStage> {
        self.fm.as_mut()
    }

    pub fn noise_mut(&mut self) -> Option<&mut NoiseNode> {
        self.noise.as_mut()
    }

    pub fn has_noise(&self) -> bool {
        self.noise.is_some()
    }

    /// Source frequencies as built: `(left_or_mono, Some(right))` for a
    /// binaural pair, `(carrier, None)` for the mono path.
    pub fn source_frequencies(&self) -> (f32, Option<f32>) {
        match &self.source {
            SourcePath::Mono(osc) => (osc.frequency(), None),
            SourcePath::Binaural { left, right } => (left.frequency(), Some(right.frequency())),
        }
    }

    /// Which stages are alive, for structure comparisons: (am, pan, fm, noise).
    pub fn stage_flags(&self) -> (bool, bool, bool, bool) {
        (
            self.am.is_some(),
            self.pan.is_some(),
            self.fm.is_some(),
            self.noise.is_some(),
        )
    }
}
