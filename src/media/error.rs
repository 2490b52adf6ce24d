//! Video element errors.

/// Errors a video element can raise when its rate is written.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum MediaError {
    #[error("playbackRate not supported on this video element")]
    RateUnsupported,

    #[error("Playback rate must be finite, got {0}")]
    NonFinite(f64),
}
