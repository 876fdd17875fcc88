//! Chart computation errors.

use kundali_core::EphemerisError;
use kundali_time::TimeError;
use kundali_vedic_base::VedicError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ChartError {
    /// A request field is missing or out of range.
    #[error("malformed input for '{field}': {reason}")]
    MalformedInput { field: &'static str, reason: String },

    /// Birth date, time, or offset could not be resolved.
    #[error("invalid birth time: {0}")]
    Time(#[from] TimeError),

    /// The ephemeris could not serve a body, star, or sidereal time.
    #[error("ephemeris error: {0}")]
    Ephemeris(#[from] EphemerisError),

    /// A Vedic computation rejected its inputs.
    #[error("chart computation error: {0}")]
    Vedic(#[from] VedicError),
}

impl ChartError {
    pub(crate) fn malformed(field: &'static str, reason: impl Into<String>) -> Self {
        Self::MalformedInput {
            field,
            reason: reason.into(),
        }
    }
}
