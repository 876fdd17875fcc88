//! Obliquity of the ecliptic.
//!
//! Mean obliquity from the IAU 2006 precession model (Capitaine et al. 2003,
//! also IERS Conventions 2010, Eq. 5.40). True obliquity adds nutation in
//! obliquity Δε.

use crate::nutation::nutation_truncated;

/// Mean obliquity at J2000.0, arcseconds.
pub const OBLIQUITY_J2000_ARCSEC: f64 = 84_381.406;

/// Mean obliquity at J2000.0, degrees (23° 26′ 21.406″).
pub const OBLIQUITY_J2000_DEG: f64 = OBLIQUITY_J2000_ARCSEC / 3600.0;

/// Mean obliquity at J2000.0, radians.
pub const OBLIQUITY_J2000_RAD: f64 = OBLIQUITY_J2000_DEG * std::f64::consts::PI / 180.0;

/// Mean obliquity of date in arcseconds, `t` in Julian centuries.
pub fn mean_obliquity_arcsec(t: f64) -> f64 {
    OBLIQUITY_J2000_ARCSEC
        + t * (-46.836769 + t * (-0.0001831 + t * (0.00200340 + t * (-0.000000576 - t * 0.0000000434))))
}

/// Mean obliquity of date in radians.
pub fn mean_obliquity_rad(t: f64) -> f64 {
    (mean_obliquity_arcsec(t) / 3600.0).to_radians()
}

/// True obliquity of date (mean + Δε) in radians.
pub fn true_obliquity_rad(t: f64) -> f64 {
    let nut = nutation_truncated(t);
    ((mean_obliquity_arcsec(t) + nut.deps_arcsec) / 3600.0).to_radians()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn j2000_value() {
        assert!((OBLIQUITY_J2000_DEG - 23.439_279_4).abs() < 1e-7);
        assert_eq!(mean_obliquity_arcsec(0.0), OBLIQUITY_J2000_ARCSEC);
    }

    #[test]
    fn decreases_over_century() {
        let drop = mean_obliquity_arcsec(0.0) - mean_obliquity_arcsec(1.0);
        assert!((drop - 46.84).abs() < 0.01, "drop = {drop}″");
    }

    #[test]
    fn true_differs_by_nutation_only() {
        let t = 0.24;
        let diff_arcsec = (true_obliquity_rad(t) - mean_obliquity_rad(t)).to_degrees() * 3600.0;
        assert!(diff_arcsec.abs() < 10.0, "Δε = {diff_arcsec}″");
    }
}
