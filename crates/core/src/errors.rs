use thiserror::Error;

use crate::models::time::Weekday;

/// Errors raised while building slots and schedules from raw input.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SlotError {
    #[error("unknown day: {0}")]
    InvalidDay(String),

    #[error("invalid time {0:?}, expected zero-padded HH:MM")]
    InvalidTime(String),

    #[error("start time {start} must be before end time {end}")]
    EmptyRange { start: String, end: String },

    #[error("a {owner} schedule cannot hold a slot occupied by a {occupant}")]
    OccupantMismatch {
        owner: &'static str,
        occupant: &'static str,
    },

    #[error("slots overlap on {day}: {first} and {second}")]
    Overlap {
        day: Weekday,
        first: String,
        second: String,
    },
}

#[derive(Error, Debug)]
pub enum TimetableError {
    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Schedule conflict: {0}")]
    Conflict(String),

    #[error("Storage error: {0}")]
    Storage(#[from] eyre::Report),

    #[error("Internal server error: {0}")]
    Internal(#[from] Box<dyn std::error::Error + Send + Sync>),
}

impl From<SlotError> for TimetableError {
    fn from(err: SlotError) -> Self {
        TimetableError::Validation(err.to_string())
    }
}

pub type TimetableResult<T> = Result<T, TimetableError>;
