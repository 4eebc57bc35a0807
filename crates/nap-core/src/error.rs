//! Core error type.
//!
//! Downstream crates wrap `ClockError` as one variant of their own error
//! enums via `From` impls.  Derivation itself is total over valid clock
//! values, so this is the only failure the time layer can produce.

use thiserror::Error;

/// The single error kind of the time layer: a wall-clock value outside the
/// 24-hour day.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ClockError {
    #[error("invalid wall-clock time: {0}")]
    InvalidTime(String),
}

/// Shorthand result type for time-boundary operations.
pub type ClockResult<T> = Result<T, ClockError>;
