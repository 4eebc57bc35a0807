use thiserror::Error;

use nap_core::ClockError;

#[derive(Debug, Error)]
pub enum PlanError {
    #[error("invalid wake time: {0}")]
    Clock(#[from] ClockError),

    #[error("batch parse error: {0}")]
    Parse(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type PlanResult<T> = Result<T, PlanError>;
