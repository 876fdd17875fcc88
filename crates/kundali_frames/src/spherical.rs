//! Direction vectors ↔ angles.

/// Longitude of a vector in degrees, range [0, 360).
pub fn longitude_deg(xyz: &[f64; 3]) -> f64 {
    let lon = xyz[1].atan2(xyz[0]).to_degrees().rem_euclid(360.0);
    // rem_euclid can round a tiny negative up to exactly 360.0
    if lon >= 360.0 { 0.0 } else { lon }
}

/// Unit vector for a right ascension and declination in degrees.
pub fn radec_to_unit(ra_deg: f64, dec_deg: f64) -> [f64; 3] {
    let (sin_ra, cos_ra) = ra_deg.to_radians().sin_cos();
    let (sin_dec, cos_dec) = dec_deg.to_radians().sin_cos();
    [cos_dec * cos_ra, cos_dec * sin_ra, sin_dec]
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn axes() {
        assert_abs_diff_eq!(longitude_deg(&[0.0, 2.0, 0.0]), 90.0, epsilon = 1e-12);
        assert_abs_diff_eq!(longitude_deg(&[-1.0, 0.0, 0.5]), 180.0, epsilon = 1e-12);
    }

    #[test]
    fn longitude_wraps_negative() {
        let lon = longitude_deg(&[1.0, -1.0, 0.0]);
        assert_abs_diff_eq!(lon, 315.0, epsilon = 1e-12);
        assert!(longitude_deg(&[1.0, -1e-18, 0.0]) < 360.0);
    }

    #[test]
    fn radec_roundtrip() {
        let v = radec_to_unit(201.29825, -11.16132);
        assert_abs_diff_eq!(longitude_deg(&v), 201.29825, epsilon = 1e-10);
        assert_abs_diff_eq!(v[2].asin().to_degrees(), -11.16132, epsilon = 1e-10);
        let norm = (v[0] * v[0] + v[1] * v[1] + v[2] * v[2]).sqrt();
        assert_abs_diff_eq!(norm, 1.0, epsilon = 1e-15);
    }
}
