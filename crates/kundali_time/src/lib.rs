//! Time handling for chart computation.
//!
//! This crate provides:
//! - Julian Dates of `chrono` UTC instants
//! - Civil birth time (wall-clock date and time plus a fractional UTC
//!   offset) resolved to a UTC instant
//! - Earth rotation angle and Greenwich mean sidereal time
//!
//! UT1 is taken equal to UTC throughout. The sub-second difference is far
//! below what sign, nakshatra, or ascendant resolution can see.

pub mod civil;
pub mod error;
pub mod julian;
pub mod sidereal;

pub use civil::{CivilTime, MAX_UTC_OFFSET_HOURS, offset_from_hours, parse_clock, parse_date};
pub use error::TimeError;
pub use julian::{
    DAYS_PER_JULIAN_CENTURY, J2000_JD, SECONDS_PER_DAY, UNIX_EPOCH_JD, datetime_to_jd,
    days_since_j2000, julian_centuries,
};
pub use sidereal::{earth_rotation_angle_rad, gmst_hours, gmst_rad};
