use std::sync::{Arc, Mutex, MutexGuard};

use cpal::traits::{DeviceTrait, HostTrait, StreamTrait};

use crate::engine::error::EngineError;
use crate::engine::graph::SignalGraph;
use crate::graph::gain::GainNode;
use crate::graph::node::{MonoNode, RenderCtx, StereoStage};
use crate::MAX_BLOCK_SIZE;

/*
Audio Context
=============

Owns the connection between the engine and the rendering clock. Two modes:

  device   The normal path: a cpal output stream on the default device. The
           callback locks the shared render state and pulls blocks, exactly
           the Arc<Mutex> handoff this engine's runtime has always used. The
           engine mutates the same state from the control side between
           callbacks; every operation is a short critical section.

  offline  No device, no thread. The caller pulls blocks explicitly via
           `render_offline` - the bounce-to-buffer workflow, and the test
           vehicle (device acquisition in CI is neither available nor
           deterministic).

Construction failures (no device, config/stream errors) are returned as
`EngineError`; the engine converts them to a reported, non-fatal condition.
*/

/// State shared between the engine and the render callback.
///
/// The three gains are the persistent half of the node set: created when the
/// context is, untouched by graph rebuilds, destroyed only with the context.
pub(crate) struct RenderState {
    pub(crate) graph: Option<SignalGraph>,
    pub(crate) mix_gain: GainNode,
    pub(crate) noise_gain: GainNode,
    pub(crate) master_gain: GainNode,
    /// Incremented on every graph build; rebuild observability.
    pub(crate) generation: u64,
    sample_rate: f32,
    noise_buffer: Vec<f32>,
}

impl RenderState {
    fn new(sample_rate: f32) -> Self {
        Self {
            graph: None,
            mix_gain: GainNode::new(1.0),
            noise_gain: GainNode::new(0.0),
            master_gain: GainNode::new(1.0),
            generation: 0,
            sample_rate,
            noise_buffer: vec![0.0; MAX_BLOCK_SIZE],
        }
    }

    /// Render one block: main path through mix gain, plus noise through
    /// noise gain, summed and scaled by the master gain. Silence when no
    /// graph is live.
    pub(crate) fn render(&mut self, left: &mut [f32], right: &mut [f32]) {
        debug_assert_eq!(left.len(), right.len());
        left.fill(0.0);
        right.fill(0.0);

        let ctx = RenderCtx::new(self.sample_rate);
        let Some(graph) = &mut self.graph else {
            return;
        };

        graph.render_main(left, right, &ctx);
        self.mix_gain.process_block(left, right, &ctx);

        if let Some(noise) = graph.noise_mut() {
            let buffer = &mut self.noise_buffer[..left.len()];
            noise.render_block(buffer, &ctx);
            self.noise_gain.process_mono(buffer);
            for ((l, r), &n) in left.iter_mut().zip(right.iter_mut()).zip(buffer.iter()) {
                *l += n;
                *r += n;
            }
        }

        self.master_gain.process_block(left, right, &ctx);
    }
}

fn lock_state(state: &Mutex<RenderState>) -> MutexGuard<'_, RenderState> {
    // A poisoned lock means a render panic already happened; the state
    // itself is still coherent enough to keep going.
    state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

pub(crate) struct AudioContext {
    stream: Option<cpal::Stream>,
    state: Arc<Mutex<RenderState>>,
    sample_rate: f32,
}

impl AudioContext {
    /// Open the default output device and start its stream.
    pub(crate) fn open_device() -> Result<Self, EngineError> {
        let host = cpal::default_host();
        let device = host
            .default_output_device()
            .ok_or(EngineError::NoOutputDevice)?;
        let config = device.default_output_config()?;

        let sample_rate = config.sample_rate().0 as f32;
        let channels = config.channels() as usize;

        let state = Arc::new(Mutex::new(RenderState::new(sample_rate)));
        let state_for_callback = state.clone();
        let mut left = vec![0.0f32; MAX_BLOCK_SIZE];
        let mut right = vec![0.0f32; MAX_BLOCK_SIZE];

        let stream = device.build_output_stream(
            &config.into(),
            move |data: &mut [f32], _| {
                let mut state = lock_state(&state_for_callback);
                let total_frames = data.len() / channels;
                let mut written = 0;

                while written < total_frames {
                    let frames = (total_frames - written).min(MAX_BLOCK_SIZE);
                    let (l, r) = (&mut left[..frames], &mut right[..frames]);
                    state.render(l, r);

                    let offset = written * channels;
                    for i in 0..frames {
                        let frame = &mut data[offset + i * channels..offset + (i + 1) * channels];
                        if channels == 1 {
                            frame[0] = 0.5 * (l[i] + r[i]);
                        } else {
                            frame[0] = l[i];
                            frame[1] = r[i];
                            for extra in frame.iter_mut().skip(2) {
                                *extra = 0.0;
                            }
                        }
                    }
                    written += frames;
                }
            },
            |err| log::error!("audio stream error: {err}"),
            None,
        )?;
        stream.play()?;

        Ok(Self {
            stream: Some(stream),
            state,
            sample_rate,
        })
    }

    /// A context with no device: blocks are pulled by the caller.
    pub(crate) fn offline(sample_rate: f32) -> Self {
        Self {
            stream: None,
            state: Arc::new(Mutex::new(RenderState::new(sample_rate))),
            sample_rate,
        }
    }

    pub(crate) fn is_offline(&self) -> bool {
        self.stream.is_none()
    }

    pub(crate) fn sample_rate(&self) -> f32 {
        self.sample_rate
    }

    pub(crate) fn state(&self) -> MutexGuard<'_, RenderState> {
        lock_state(&self.state)
    }

    /// Best-effort release of the device. Pause failures are logged and
    /// swallowed; the stream is dropped regardless so the device is freed.
    pub(crate) fn close(&mut self) {
        if let Some(stream) = self.stream.take() {
            if let Err(err) = stream.pause() {
                log::warn!("failed to pause output stream during cleanup: {err}");
            }
        }
    }
}
