//! Error types.
//!
//! Projection, statistics, and filtering are total and never fail.
//! Errors only arise at the edges: parsing slot times, loading
//! configuration, and fetching the staff roster.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum AvailabilityError {
    #[error("Invalid slot time '{0}': expected HH:MM")]
    InvalidSlotTime(String),

    #[error("Invalid working hours: start {start} is after end {end}")]
    InvalidWorkingHours { start: String, end: String },

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Configuration parse error: {0}")]
    Config(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Roster fetch failed: {0}")]
    RosterFetch(String),
}

pub type Result<T> = std::result::Result<T, AvailabilityError>;
