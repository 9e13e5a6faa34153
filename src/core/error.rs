//! Error types for scheduling operations.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors produced by scheduling components.
#[derive(Debug, Error)]
pub enum SchedulerError {
    /// Configuration is malformed or yields no usable calendar.
    #[error("config error: {0}")]
    Config(String),
    /// The external task store could not be queried.
    #[error("task store unavailable: {0}")]
    StoreUnavailable(String),
    /// No date within the overflow horizon has remaining capacity.
    #[error("capacity exhausted")]
    CapacityExhausted,
    /// A date key is not in `YYYY-MM-DD` form.
    #[error("invalid date key: {0}")]
    InvalidDateKey(String),
}

impl SchedulerError {
    /// Result-level kind for errors that may end a slot search.
    pub const fn slot_error_kind(&self) -> SlotErrorKind {
        match self {
            Self::CapacityExhausted => SlotErrorKind::CapacityExhausted,
            Self::Config(_) | Self::StoreUnavailable(_) | Self::InvalidDateKey(_) => {
                SlotErrorKind::Config
            }
        }
    }
}

/// Failure reason reported on an unsuccessful slot search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SlotErrorKind {
    /// The calendar could not be walked under the active configuration.
    Config,
    /// Every candidate date is at or above its ceiling.
    CapacityExhausted,
}

/// Application-facing result using anyhow for higher-level contexts.
pub type AppResult<T> = Result<T, anyhow::Error>;
