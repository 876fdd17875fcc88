//! Error types for time handling.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors from civil-time parsing or instant conversion.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum TimeError {
    /// Date text is not a valid `YYYY-MM-DD` calendar date.
    InvalidDate(String),
    /// Clock text is not a valid `HH:MM` or `HH:MM:SS` time.
    InvalidClock(String),
    /// UTC offset is not finite or lies outside ±14 hours.
    InvalidOffset(f64),
    /// The resolved instant cannot be represented.
    OutOfRange,
}

impl Display for TimeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidDate(text) => write!(f, "invalid date '{text}', expected YYYY-MM-DD"),
            Self::InvalidClock(text) => {
                write!(f, "invalid time '{text}', expected HH:MM or HH:MM:SS")
            }
            Self::InvalidOffset(hours) => write!(f, "invalid UTC offset: {hours} h"),
            Self::OutOfRange => write!(f, "instant outside the representable range"),
        }
    }
}

impl Error for TimeError {}
