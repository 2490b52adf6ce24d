//! Results of speed operations and the reasons an operation is skipped.

use serde::Serialize;

/// Why a speed operation did nothing.
///
/// None of these are fatal: the operation logs the reason and returns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, thiserror::Error)]
#[serde(rename_all = "snake_case")]
pub enum SkipReason {
    #[error("No video element found")]
    NoVideoElement,

    #[error("playbackRate not supported on this video element")]
    RateUnsupported,

    #[error("Requested speed is not a number")]
    NotANumber,
}

/// The result of a speed operation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum SpeedOutcome {
    /// A rate was written to the video element
    Applied { previous: f64, applied: f64 },
    /// Nothing was written; the display was left alone
    Skipped { reason: SkipReason },
}

impl SpeedOutcome {
    /// Create an Applied outcome.
    pub fn applied(previous: f64, applied: f64) -> Self {
        Self::Applied { previous, applied }
    }

    /// Create a Skipped outcome.
    pub fn skipped(reason: SkipReason) -> Self {
        Self::Skipped { reason }
    }

    /// The rate that was written, if any.
    pub fn applied_rate(&self) -> Option<f64> {
        match self {
            Self::Applied { applied, .. } => Some(*applied),
            Self::Skipped { .. } => None,
        }
    }

    /// The skip reason, if the operation was skipped.
    pub fn skip_reason(&self) -> Option<SkipReason> {
        match self {
            Self::Applied { .. } => None,
            Self::Skipped { reason } => Some(*reason),
        }
    }
}
