//! Error types for Vedic calculations.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors from Vedic base calculations.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum VedicError {
    /// An argument was non-finite or outside its domain.
    InvalidInput(&'static str),
    /// Latitude too close to a pole (or non-finite) for the ascendant formula.
    PolarLatitude { latitude_deg: f64 },
    /// A computed date fell outside the representable range.
    DateOutOfRange,
}

impl Display for VedicError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidInput(msg) => write!(f, "invalid input: {msg}"),
            Self::PolarLatitude { latitude_deg } => {
                write!(f, "ascendant undefined at latitude {latitude_deg}")
            }
            Self::DateOutOfRange => write!(f, "date out of range"),
        }
    }
}

impl Error for VedicError {}
