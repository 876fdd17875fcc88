//! Earth Rotation Angle and Greenwich Mean Sidereal Time.
//!
//! The ascendant needs the sidereal angle of the Greenwich meridian at the
//! birth instant. UT1 is approximated by UTC (see crate docs).
//!
//! Sources:
//! - ERA: IERS Conventions 2010, Eq. 5.15. Public domain.
//! - GMST polynomial: Capitaine et al. 2003, Table 2. Public domain.

use std::f64::consts::{PI, TAU};

use chrono::{DateTime, Utc};

use crate::julian::{DAYS_PER_JULIAN_CENTURY, J2000_JD, datetime_to_jd};

/// Arcseconds to radians.
const ARCSEC_TO_RAD: f64 = PI / (180.0 * 3600.0);

/// Earth Rotation Angle at a UT Julian Date, radians in [0, 2π).
///
/// θ = 2π × (0.7790572732640 + 1.00273781191135448 × (JD − 2451545.0))
pub fn earth_rotation_angle_rad(jd_ut: f64) -> f64 {
    let du = jd_ut - J2000_JD;
    // Split the integer day off first; it contributes whole turns only.
    let turns = 0.779_057_273_264_0 + 0.002_737_811_911_354_48 * du + du.fract();
    wrap_tau(TAU * turns)
}

/// Greenwich Mean Sidereal Time at a UT Julian Date, radians in [0, 2π).
///
/// GMST = ERA + (0.014506 + 4612.156534 T + 1.3915817 T² − 0.00000044 T³
///        − 0.000029956 T⁴ − 0.0000000368 T⁵)″
pub fn gmst_rad(jd_ut: f64) -> f64 {
    let t = (jd_ut - J2000_JD) / DAYS_PER_JULIAN_CENTURY;
    let poly_arcsec = 0.014506
        + t * (4612.156534 + t * (1.3915817 + t * (-0.00000044 + t * (-0.000029956 - t * 0.0000000368))));
    wrap_tau(earth_rotation_angle_rad(jd_ut) + poly_arcsec * ARCSEC_TO_RAD)
}

/// Greenwich Mean Sidereal Time of a UTC instant, in hours [0, 24).
pub fn gmst_hours(utc: &DateTime<Utc>) -> f64 {
    rad_to_hours(gmst_rad(datetime_to_jd(utc)))
}

/// `rem_euclid` returns exactly 2π for tiny negative inputs.
fn wrap_tau(rad: f64) -> f64 {
    let r = rad.rem_euclid(TAU);
    if r >= TAU { 0.0 } else { r }
}

fn rad_to_hours(rad: f64) -> f64 {
    let h = rad.to_degrees() / 15.0;
    if h >= 24.0 { 0.0 } else { h }
}
