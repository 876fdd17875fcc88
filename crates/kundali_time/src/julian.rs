//! Julian Date of UTC instants.
//!
//! `chrono` instants convert through Unix seconds so sub-second precision
//! is kept.

use chrono::{DateTime, Utc};

/// Julian Date of the J2000.0 epoch (2000-01-01T12:00:00).
pub const J2000_JD: f64 = 2_451_545.0;

/// Julian Date of the Unix epoch (1970-01-01T00:00:00Z).
pub const UNIX_EPOCH_JD: f64 = 2_440_587.5;

/// Seconds in one day.
pub const SECONDS_PER_DAY: f64 = 86_400.0;

/// Days in one Julian century.
pub const DAYS_PER_JULIAN_CENTURY: f64 = 36_525.0;

/// Julian Date (UTC) of a UTC instant.
pub fn datetime_to_jd(utc: &DateTime<Utc>) -> f64 {
    let seconds = utc.timestamp() as f64 + f64::from(utc.timestamp_subsec_nanos()) * 1e-9;
    UNIX_EPOCH_JD + seconds / SECONDS_PER_DAY
}

/// Julian centuries since J2000.0.
pub fn julian_centuries(jd: f64) -> f64 {
    (jd - J2000_JD) / DAYS_PER_JULIAN_CENTURY
}

/// Days (including fraction) since J2000.0 for a UTC instant.
pub fn days_since_j2000(utc: &DateTime<Utc>) -> f64 {
    datetime_to_jd(utc) - J2000_JD
}
