//! Lagna (Ascendant) computation.
//!
//! The ecliptic longitude rising on the eastern horizon, from local sidereal
//! time, geographic latitude, and the obliquity of the ecliptic:
//!
//! ```text
//! y = cos(LST)
//! x = −sin(LST)·cos(ε) + tan(φ)·sin(ε)
//! λ = atan2(y, x)
//! ```
//!
//! `tan(φ)` diverges at the poles, so latitudes within 0.1° of ±90° are
//! rejected instead of producing a meaningless angle.

use crate::error::VedicError;
use crate::util::normalize_360;

/// Largest accepted |latitude|, exclusive, in degrees.
pub const MAX_ABS_LATITUDE_DEG: f64 = 89.9;

/// Local sidereal time in degrees [0, 360) from Greenwich sidereal hours
/// and east longitude.
pub fn local_sidereal_deg(greenwich_sidereal_hours: f64, longitude_deg: f64) -> f64 {
    normalize_360(greenwich_sidereal_hours * 15.0 + longitude_deg)
}

fn check_latitude(latitude_deg: f64) -> Result<(), VedicError> {
    if !latitude_deg.is_finite() || latitude_deg.abs() >= MAX_ABS_LATITUDE_DEG {
        return Err(VedicError::PolarLatitude { latitude_deg });
    }
    Ok(())
}

/// Tropical ascendant in degrees [0, 360).
///
/// `lst_deg` is local sidereal time in degrees, `obliquity_rad` the
/// obliquity of the ecliptic of the same frame.
pub fn tropical_ascendant_deg(
    lst_deg: f64,
    latitude_deg: f64,
    obliquity_rad: f64,
) -> Result<f64, VedicError> {
    check_latitude(latitude_deg)?;
    if !lst_deg.is_finite() || !obliquity_rad.is_finite() {
        return Err(VedicError::InvalidInput(
            "sidereal time and obliquity must be finite",
        ));
    }

    let lst = lst_deg.to_radians();
    let phi = latitude_deg.to_radians();
    let y = lst.cos();
    let x = -lst.sin() * obliquity_rad.cos() + phi.tan() * obliquity_rad.sin();
    Ok(normalize_360(y.atan2(x).to_degrees()))
}

/// Sidereal ascendant in degrees [0, 360).
///
/// `ayanamsha_deg` must be the ayanamsha of the frame of date.
pub fn sidereal_ascendant_deg(
    greenwich_sidereal_hours: f64,
    latitude_deg: f64,
    longitude_deg: f64,
    obliquity_rad: f64,
    ayanamsha_deg: f64,
) -> Result<f64, VedicError> {
    if !greenwich_sidereal_hours.is_finite()
        || !longitude_deg.is_finite()
        || !ayanamsha_deg.is_finite()
    {
        return Err(VedicError::InvalidInput(
            "sidereal time, longitude, and ayanamsha must be finite",
        ));
    }
    let lst = local_sidereal_deg(greenwich_sidereal_hours, longitude_deg);
    let tropical = tropical_ascendant_deg(lst, latitude_deg, obliquity_rad)?;
    Ok(normalize_360(tropical - ayanamsha_deg))
}
