//! Error types for civil time input.

use thiserror::Error;

/// Errors from constructing an [`crate::Instant`] out of civil input.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum TimeError {
    /// The calendar date does not exist (e.g. 2023-02-30).
    #[error("invalid calendar date {year:04}-{month:02}-{day:02}")]
    InvalidDate { year: i32, month: u32, day: u32 },
    /// Hour, minute or second outside its civil range.
    #[error("invalid time of day {hour:02}:{minute:02}:{second:02}")]
    InvalidTime { hour: u32, minute: u32, second: u32 },
    /// UTC offset beyond ±14 hours.
    #[error("UTC offset of {0} minutes is out of range")]
    InvalidOffset(i32),
    /// Free-form date/time text that could not be parsed.
    #[error("cannot parse date/time: {0}")]
    Parse(String),
}
