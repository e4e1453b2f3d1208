use thiserror::Error;

/// Failures acquiring or driving the host audio context.
///
/// These never escape the engine's public operations: `initialize` converts
/// them into a logged "not ready" condition, and `cleanup` logs and swallows
/// close failures. They are public so embedders using `AudioContext`
/// directly (offline bouncing, custom hosts) can match on the cause.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("no default audio output device available")]
    NoOutputDevice,

    #[error("failed to query output device config: {0}")]
    OutputConfig(#[from] cpal::DefaultStreamConfigError),

    #[error("failed to build output stream: {0}")]
    BuildStream(#[from] cpal::BuildStreamError),

    #[error("failed to start output stream: {0}")]
    StartStream(#[from] cpal::PlayStreamError),
}
