//! The sidereal frame of one chart.
//!
//! A [`SiderealFrame`] fixes, for one instant and one ayanamsha strategy,
//! the rotation applied to ephemeris vectors, the ayanamsha subtracted from
//! the resulting longitudes, and the obliquity used for the ascendant.
//! Building it once per chart keeps every body on the same correction.

use chrono::{DateTime, Utc};
use kundali_core::EphemerisPort;
use kundali_frames::{
    IDENTITY, Mat3, apply, eqj_to_ecliptic_j2000, eqj_to_true_ecliptic_of_date, longitude_deg,
};
use kundali_time::{datetime_to_jd, days_since_j2000, julian_centuries};
use kundali_vedic_base::{
    AyanamshaStrategy, LAHIRI_J2000_DEG, mean_lahiri_deg, normalize_360, star_ayanamsha_deg,
};
use tracing::debug;

use crate::error::ChartError;
use crate::settings::ChartSettings;

/// Rotation and offsets of one chart's sidereal zodiac.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SiderealFrame {
    strategy: AyanamshaStrategy,
    rotation: Mat3,
    ayanamsha_deg: f64,
    date_ayanamsha_deg: f64,
    obliquity_rad: f64,
    days_since_j2000: f64,
}

impl SiderealFrame {
    /// Build the frame for `utc` under the configured strategy.
    ///
    /// The true-star strategy asks the port for the reference star's
    /// direction; the fixed strategy makes no port calls.
    pub fn build<E: EphemerisPort + ?Sized>(
        ephemeris: &E,
        settings: &ChartSettings,
        utc: &DateTime<Utc>,
    ) -> Result<Self, ChartError> {
        let days = days_since_j2000(utc);
        let t = julian_centuries(datetime_to_jd(utc));
        let (of_date, eps_true) = eqj_to_true_ecliptic_of_date(t);

        let frame = match settings.ayanamsa {
            AyanamshaStrategy::FixedJ2000 => Self {
                strategy: AyanamshaStrategy::FixedJ2000,
                rotation: eqj_to_ecliptic_j2000(),
                ayanamsha_deg: LAHIRI_J2000_DEG,
                date_ayanamsha_deg: mean_lahiri_deg(days),
                obliquity_rad: eps_true,
                days_since_j2000: days,
            },
            AyanamshaStrategy::TrueStar => {
                let star = ephemeris.star_vector(&settings.reference_star, utc)?;
                let star_lon = longitude_deg(&apply(&of_date, &star));
                let ayanamsha = star_ayanamsha_deg(star_lon);
                debug!(
                    star = %settings.reference_star.name,
                    star_lon,
                    ayanamsha,
                    "reference star ayanamsha"
                );
                Self {
                    strategy: AyanamshaStrategy::TrueStar,
                    rotation: of_date,
                    ayanamsha_deg: ayanamsha,
                    date_ayanamsha_deg: ayanamsha,
                    obliquity_rad: eps_true,
                    days_since_j2000: days,
                }
            }
        };
        Ok(frame)
    }

    /// A frame with no rotation and a fixed offset, for callers that already
    /// hold ecliptic vectors.
    pub fn fixed(ayanamsha_deg: f64, obliquity_rad: f64, days_since_j2000: f64) -> Self {
        Self {
            strategy: AyanamshaStrategy::FixedJ2000,
            rotation: IDENTITY,
            ayanamsha_deg,
            date_ayanamsha_deg: ayanamsha_deg,
            obliquity_rad,
            days_since_j2000,
        }
    }

    pub fn strategy(&self) -> AyanamshaStrategy {
        self.strategy
    }

    /// Ayanamsha subtracted from body longitudes, degrees.
    pub fn ayanamsha_deg(&self) -> f64 {
        self.ayanamsha_deg
    }

    /// Ayanamsha for quantities measured in the frame of date (ascendant,
    /// lunar nodes), degrees. Equal to [`ayanamsha_deg`](Self::ayanamsha_deg)
    /// under the true-star strategy.
    pub fn date_ayanamsha_deg(&self) -> f64 {
        self.date_ayanamsha_deg
    }

    /// True obliquity of date, radians.
    pub fn obliquity_rad(&self) -> f64 {
        self.obliquity_rad
    }

    pub fn days_since_j2000(&self) -> f64 {
        self.days_since_j2000
    }

    /// Sidereal longitude of an EQJ direction, degrees [0, 360).
    pub fn sidereal_longitude(&self, eqj: &[f64; 3]) -> f64 {
        let ecl = apply(&self.rotation, eqj);
        normalize_360(longitude_deg(&ecl) - self.ayanamsha_deg)
    }

    /// Sidereal longitude of a tropical longitude of date, degrees [0, 360).
    pub fn sidereal_from_date_tropical(&self, tropical_deg: f64) -> f64 {
        normalize_360(tropical_deg - self.date_ayanamsha_deg)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use chrono::TimeZone;
    use kundali_core::{Body, EphemerisError};
    use kundali_frames::{OBLIQUITY_J2000_RAD, radec_to_unit};

    struct NoBodies;

    impl EphemerisPort for NoBodies {
        fn geocentric_vector(
            &self,
            body: Body,
            _utc: &DateTime<Utc>,
        ) -> Result<[f64; 3], EphemerisError> {
            Err(EphemerisError::BodyUnavailable(body))
        }
    }

    fn j2000() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2000, 1, 1, 12, 0, 0).unwrap()
    }

    #[test]
    fn fixed_frame_offsets() {
        let settings = ChartSettings {
            ayanamsa: AyanamshaStrategy::FixedJ2000,
            ..ChartSettings::default()
        };
        let frame = SiderealFrame::build(&NoBodies, &settings, &j2000()).unwrap();
        assert_abs_diff_eq!(frame.ayanamsha_deg(), LAHIRI_J2000_DEG, epsilon = 1e-12);
        assert_abs_diff_eq!(frame.date_ayanamsha_deg(), LAHIRI_J2000_DEG, epsilon = 1e-9);

        // the vernal equinox direction sits at 360 − ayanamsha
        let lon = frame.sidereal_longitude(&[1.0, 0.0, 0.0]);
        assert_abs_diff_eq!(lon, 360.0 - LAHIRI_J2000_DEG, epsilon = 1e-9);
    }

    #[test]
    fn fixed_frame_reads_j2000_ecliptic() {
        let settings = ChartSettings {
            ayanamsa: AyanamshaStrategy::FixedJ2000,
            ..ChartSettings::default()
        };
        let frame = SiderealFrame::build(&NoBodies, &settings, &j2000()).unwrap();
        // ecliptic longitude 100°, latitude 0, expressed in EQJ
        let (s, c) = 100f64.to_radians().sin_cos();
        let (se, ce) = OBLIQUITY_J2000_RAD.sin_cos();
        let lon = frame.sidereal_longitude(&[c, s * ce, s * se]);
        assert_abs_diff_eq!(lon, 100.0 - LAHIRI_J2000_DEG, epsilon = 1e-9);
    }

    #[test]
    fn true_star_puts_spica_at_180() {
        let settings = ChartSettings::default();
        let utc = Utc.with_ymd_and_hms(2024, 3, 20, 0, 0, 0).unwrap();
        let frame = SiderealFrame::build(&NoBodies, &settings, &utc).unwrap();
        let star = &settings.reference_star;
        let lon = frame.sidereal_longitude(&radec_to_unit(star.ra_deg, star.dec_deg));
        assert_abs_diff_eq!(lon, 180.0, epsilon = 1e-9);

        // Spica's tropical longitude in 2024 is about 204.18°
        let aya = frame.ayanamsha_deg();
        assert!((aya - 24.18).abs() < 0.1, "ayanamsha = {aya}");
    }

    #[test]
    fn date_tropical_reduction() {
        let frame = SiderealFrame::fixed(24.0, 0.409, 0.0);
        assert_abs_diff_eq!(frame.sidereal_from_date_tropical(10.0), 346.0, epsilon = 1e-12);
    }
}
