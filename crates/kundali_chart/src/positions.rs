//! Position and ascendant resolution.

use chrono::{DateTime, Utc};
use kundali_core::{ALL_BODIES, EphemerisPort, check_vector};
use kundali_vedic_base::{SiderealPositions, ketu_from_rahu, rahu_deg, sidereal_ascendant_deg};
use tracing::debug;

use crate::error::ChartError;
use crate::frame::SiderealFrame;
use crate::settings::ChartSettings;

/// Sidereal longitudes of Sun through Saturn from the port, in
/// [`ALL_BODIES`] order.
pub fn resolve_bodies<E: EphemerisPort + ?Sized>(
    ephemeris: &E,
    frame: &SiderealFrame,
    utc: &DateTime<Utc>,
) -> Result<[f64; 7], ChartError> {
    let mut out = [0.0; 7];
    for (slot, body) in out.iter_mut().zip(ALL_BODIES) {
        let v = check_vector(body, ephemeris.geocentric_vector(body, utc)?)?;
        *slot = frame.sidereal_longitude(&v);
        debug!(body = body.name(), sidereal_lon = *slot, "resolved body");
    }
    Ok(out)
}

/// Sidereal Rahu and Ketu longitudes.
pub fn resolve_nodes(frame: &SiderealFrame, settings: &ChartSettings) -> (f64, f64) {
    let tropical = rahu_deg(frame.days_since_j2000(), settings.node_mode);
    let rahu = frame.sidereal_from_date_tropical(tropical);
    (rahu, ketu_from_rahu(rahu))
}

/// Sidereal ascendant for an observer.
pub fn resolve_ascendant<E: EphemerisPort + ?Sized>(
    ephemeris: &E,
    frame: &SiderealFrame,
    utc: &DateTime<Utc>,
    latitude_deg: f64,
    longitude_deg: f64,
) -> Result<f64, ChartError> {
    let sidereal_hours = ephemeris.sidereal_time_hours(utc)?;
    let asc = sidereal_ascendant_deg(
        sidereal_hours,
        latitude_deg,
        longitude_deg,
        frame.obliquity_rad(),
        frame.date_ayanamsha_deg(),
    )?;
    debug!(sidereal_hours, ascendant = asc, "resolved ascendant");
    Ok(asc)
}

/// All nine grahas plus the lagna.
pub fn resolve_positions<E: EphemerisPort + ?Sized>(
    ephemeris: &E,
    frame: &SiderealFrame,
    settings: &ChartSettings,
    utc: &DateTime<Utc>,
    latitude_deg: f64,
    longitude_deg: f64,
) -> Result<SiderealPositions, ChartError> {
    let bodies = resolve_bodies(ephemeris, frame, utc)?;
    let (rahu, ketu) = resolve_nodes(frame, settings);
    let lagna = resolve_ascendant(ephemeris, frame, utc, latitude_deg, longitude_deg)?;

    let mut grahas = [0.0; 9];
    grahas[..7].copy_from_slice(&bodies);
    grahas[7] = rahu;
    grahas[8] = ketu;
    Ok(SiderealPositions::new(grahas, lagna)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use chrono::TimeZone;
    use kundali_core::{Body, EphemerisError};
    use kundali_vedic_base::{Graha, NodeMode};

    /// Every body on the ecliptic at 30° per body index; sidereal time 0.
    struct Ring;

    impl EphemerisPort for Ring {
        fn geocentric_vector(
            &self,
            body: Body,
            _utc: &DateTime<Utc>,
        ) -> Result<[f64; 3], EphemerisError> {
            let lon = (body as u8 as f64 * 30.0 + 15.0).to_radians();
            Ok([lon.cos(), lon.sin(), 0.0])
        }

        fn sidereal_time_hours(&self, _utc: &DateTime<Utc>) -> Result<f64, EphemerisError> {
            Ok(0.0)
        }
    }

    struct Broken;

    impl EphemerisPort for Broken {
        fn geocentric_vector(
            &self,
            body: Body,
            _utc: &DateTime<Utc>,
        ) -> Result<[f64; 3], EphemerisError> {
            if body == Body::Saturn {
                Ok([f64::NAN, 0.0, 0.0])
            } else {
                Ok([1.0, 0.0, 0.0])
            }
        }
    }

    fn utc() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2000, 1, 1, 12, 0, 0).unwrap()
    }

    #[test]
    fn bodies_follow_frame() {
        let frame = SiderealFrame::fixed(20.0, 0.409, 0.0);
        let lons = resolve_bodies(&Ring, &frame, &utc()).unwrap();
        for (i, lon) in lons.iter().enumerate() {
            let expected = (i as f64 * 30.0 + 15.0 - 20.0).rem_euclid(360.0);
            assert_abs_diff_eq!(*lon, expected, epsilon = 1e-9);
        }
    }

    #[test]
    fn ketu_opposes_rahu() {
        let frame = SiderealFrame::fixed(23.85, 0.409, 1234.5);
        for node_mode in [NodeMode::Mean, NodeMode::True] {
            let settings = ChartSettings {
                node_mode,
                ..ChartSettings::default()
            };
            let (rahu, ketu) = resolve_nodes(&frame, &settings);
            assert_abs_diff_eq!((ketu - rahu).rem_euclid(360.0), 180.0, epsilon = 1e-9);
        }
    }

    #[test]
    fn equator_ascendant_at_zero_sidereal_time() {
        let frame = SiderealFrame::fixed(0.0, 0.409, 0.0);
        let asc = resolve_ascendant(&Ring, &frame, &utc(), 0.0, 0.0).unwrap();
        assert_abs_diff_eq!(asc, 90.0, epsilon = 1e-9);
    }

    #[test]
    fn assembled_positions() {
        let frame = SiderealFrame::fixed(0.0, 0.409, 0.0);
        let p = resolve_positions(&Ring, &frame, &ChartSettings::default(), &utc(), 0.0, 0.0)
            .unwrap();
        assert_abs_diff_eq!(p.longitude(Graha::Shani), 195.0, epsilon = 1e-9);
        assert_abs_diff_eq!(p.lagna(), 90.0, epsilon = 1e-9);
    }

    #[test]
    fn invalid_vector_aborts() {
        let frame = SiderealFrame::fixed(0.0, 0.409, 0.0);
        let err = resolve_bodies(&Broken, &frame, &utc()).unwrap_err();
        assert!(
            matches!(
                err,
                ChartError::Ephemeris(EphemerisError::InvalidVector(Body::Saturn))
            ),
            "{err}"
        );
    }

    #[test]
    fn polar_observer_rejected() {
        let frame = SiderealFrame::fixed(0.0, 0.409, 0.0);
        let err = resolve_ascendant(&Ring, &frame, &utc(), 89.95, 0.0).unwrap_err();
        assert!(matches!(err, ChartError::Vedic(_)), "{err}");
    }
}
