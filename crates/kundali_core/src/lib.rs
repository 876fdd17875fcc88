//! Ephemeris boundary for chart computation.
//!
//! Chart math never evaluates planetary theories itself. It asks an
//! [`EphemerisPort`] for apparent geocentric directions in the mean
//! equator and equinox of J2000 ("EQJ"), and for sidereal time. This crate
//! defines that seam, the bodies that cross it, and one concrete adapter,
//! [`SnapshotEphemeris`], that serves a tabulated JSON document.

use std::error::Error;
use std::fmt::{Display, Formatter};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use kundali_frames::radec_to_unit;
use kundali_time::gmst_hours;

pub mod snapshot;

pub use snapshot::{EPOCH_TOLERANCE_SECONDS, Snapshot, SnapshotEphemeris};

/// Physical bodies the port must resolve.
///
/// The lunar nodes are computed points, not bodies; they are derived in
/// `kundali_vedic_base::lunar_nodes`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Body {
    Sun,
    Moon,
    Mars,
    Mercury,
    Jupiter,
    Venus,
    Saturn,
}

/// Bodies in chart order.
pub const ALL_BODIES: [Body; 7] = [
    Body::Sun,
    Body::Moon,
    Body::Mars,
    Body::Mercury,
    Body::Jupiter,
    Body::Venus,
    Body::Saturn,
];

impl Body {
    /// English name, as used in snapshot documents.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Sun => "Sun",
            Self::Moon => "Moon",
            Self::Mars => "Mars",
            Self::Mercury => "Mercury",
            Self::Jupiter => "Jupiter",
            Self::Venus => "Venus",
            Self::Saturn => "Saturn",
        }
    }
}

impl Display for Body {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Ephemeris boundary errors.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum EphemerisError {
    /// The provider has no data for this body.
    BodyUnavailable(Body),
    /// The provider cannot serve the requested instant.
    EpochMismatch {
        requested: DateTime<Utc>,
        available: DateTime<Utc>,
    },
    /// A returned vector was zero or non-finite.
    InvalidVector(Body),
    /// Reference star coordinates are unusable.
    InvalidStar(&'static str),
    /// A snapshot document failed to parse or validate.
    Snapshot(String),
    /// Reading a snapshot from disk failed.
    Io(String),
}

impl Display for EphemerisError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::BodyUnavailable(body) => write!(f, "ephemeris has no data for {body}"),
            Self::EpochMismatch {
                requested,
                available,
            } => write!(
                f,
                "ephemeris epoch mismatch: requested {requested}, available {available}"
            ),
            Self::InvalidVector(body) => write!(f, "invalid direction vector for {body}"),
            Self::InvalidStar(msg) => write!(f, "invalid reference star: {msg}"),
            Self::Snapshot(msg) => write!(f, "invalid snapshot: {msg}"),
            Self::Io(msg) => write!(f, "ephemeris I/O error: {msg}"),
        }
    }
}

impl Error for EphemerisError {}

/// Check that a direction vector is finite and non-zero.
pub fn check_vector(body: Body, v: [f64; 3]) -> Result<[f64; 3], EphemerisError> {
    let finite = v.iter().all(|c| c.is_finite());
    let norm2 = v[0] * v[0] + v[1] * v[1] + v[2] * v[2];
    if finite && norm2 > 0.0 {
        Ok(v)
    } else {
        Err(EphemerisError::InvalidVector(body))
    }
}

/// Fixed star anchoring the true-star ayanamsha.
///
/// Coordinates are ICRS/J2000 right ascension and declination in degrees.
/// Proper motion is ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReferenceStar {
    pub name: String,
    pub ra_deg: f64,
    pub dec_deg: f64,
    pub distance_ly: f64,
}

impl ReferenceStar {
    /// Spica (α Virginis, Chitra): RA 13h25m11.579s, Dec −11°09′40.75″.
    pub fn spica() -> Self {
        Self {
            name: "Spica".to_string(),
            ra_deg: (13.0 + 25.0 / 60.0 + 11.579 / 3600.0) * 15.0,
            dec_deg: -(11.0 + 9.0 / 60.0 + 40.75 / 3600.0),
            distance_ly: 250.0,
        }
    }

    pub fn validate(&self) -> Result<(), EphemerisError> {
        if !self.ra_deg.is_finite() || !self.dec_deg.is_finite() {
            return Err(EphemerisError::InvalidStar("coordinates must be finite"));
        }
        if !(-90.0..=90.0).contains(&self.dec_deg) {
            return Err(EphemerisError::InvalidStar(
                "declination must be within [-90, 90]",
            ));
        }
        if !(self.distance_ly.is_finite() && self.distance_ly > 0.0) {
            return Err(EphemerisError::InvalidStar("distance must be positive"));
        }
        Ok(())
    }

    /// Unit vector toward the star in EQJ.
    pub fn unit_vector(&self) -> [f64; 3] {
        radec_to_unit(self.ra_deg, self.dec_deg)
    }
}

impl Default for ReferenceStar {
    fn default() -> Self {
        Self::spica()
    }
}

/// Source of apparent geocentric directions and sidereal time.
///
/// Implementations are passed explicitly into chart computation; there is
/// no global provider. Only [`geocentric_vector`](Self::geocentric_vector)
/// is required.
pub trait EphemerisPort {
    /// Apparent (light-time and aberration corrected) geocentric direction
    /// of `body` at `utc`, in EQJ. Any length; only direction is used.
    fn geocentric_vector(&self, body: Body, utc: &DateTime<Utc>)
    -> Result<[f64; 3], EphemerisError>;

    /// Greenwich sidereal time at `utc`, hours in [0, 24).
    fn sidereal_time_hours(&self, utc: &DateTime<Utc>) -> Result<f64, EphemerisError> {
        Ok(gmst_hours(utc))
    }

    /// EQJ direction of a reference star at `utc`.
    fn star_vector(
        &self,
        star: &ReferenceStar,
        _utc: &DateTime<Utc>,
    ) -> Result<[f64; 3], EphemerisError> {
        star.validate()?;
        Ok(star.unit_vector())
    }
}

impl<T: EphemerisPort + ?Sized> EphemerisPort for &T {
    fn geocentric_vector(
        &self,
        body: Body,
        utc: &DateTime<Utc>,
    ) -> Result<[f64; 3], EphemerisError> {
        (**self).geocentric_vector(body, utc)
    }

    fn sidereal_time_hours(&self, utc: &DateTime<Utc>) -> Result<f64, EphemerisError> {
        (**self).sidereal_time_hours(utc)
    }

    fn star_vector(
        &self,
        star: &ReferenceStar,
        utc: &DateTime<Utc>,
    ) -> Result<[f64; 3], EphemerisError> {
        (**self).star_vector(star, utc)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use chrono::TimeZone;

    struct Fixed;

    impl EphemerisPort for Fixed {
        fn geocentric_vector(
            &self,
            _body: Body,
            _utc: &DateTime<Utc>,
        ) -> Result<[f64; 3], EphemerisError> {
            Ok([1.0, 0.0, 0.0])
        }
    }

    #[test]
    fn spica_coordinates() {
        let star = ReferenceStar::default();
        assert_abs_diff_eq!(star.ra_deg, 201.298246, epsilon = 1e-6);
        assert_abs_diff_eq!(star.dec_deg, -11.161319, epsilon = 1e-6);
        assert!(star.validate().is_ok());
    }

    #[test]
    fn star_validation() {
        let mut star = ReferenceStar::spica();
        star.dec_deg = 91.0;
        assert!(matches!(star.validate(), Err(EphemerisError::InvalidStar(_))));
        star.dec_deg = f64::NAN;
        assert!(matches!(star.validate(), Err(EphemerisError::InvalidStar(_))));
        star.dec_deg = 0.0;
        star.distance_ly = 0.0;
        assert!(matches!(star.validate(), Err(EphemerisError::InvalidStar(_))));
    }

    #[test]
    fn default_methods() {
        let utc = Utc.with_ymd_and_hms(2000, 1, 1, 0, 0, 0).unwrap();
        let port = Fixed;
        let h = port.sidereal_time_hours(&utc).unwrap();
        assert_abs_diff_eq!(h, 6.66452, epsilon = 1e-4);

        let v = port.star_vector(&ReferenceStar::spica(), &utc).unwrap();
        let norm = (v[0] * v[0] + v[1] * v[1] + v[2] * v[2]).sqrt();
        assert_abs_diff_eq!(norm, 1.0, epsilon = 1e-15);
        assert!(v[2] < 0.0, "Spica is south of the equator");
    }

    #[test]
    fn port_through_reference() {
        let utc = Utc.with_ymd_and_hms(2000, 1, 1, 0, 0, 0).unwrap();
        let port = Fixed;
        let by_ref: &dyn EphemerisPort = &port;
        assert_eq!(by_ref.geocentric_vector(Body::Sun, &utc).unwrap(), [1.0, 0.0, 0.0]);
    }

    #[test]
    fn vector_check() {
        assert!(check_vector(Body::Moon, [0.0, 0.0, 0.0]).is_err());
        assert!(check_vector(Body::Moon, [f64::INFINITY, 0.0, 0.0]).is_err());
        assert!(check_vector(Body::Moon, [0.0, 1e-9, 0.0]).is_ok());
    }

    #[test]
    fn error_display() {
        let e = EphemerisError::BodyUnavailable(Body::Saturn);
        assert_eq!(e.to_string(), "ephemeris has no data for Saturn");
    }
}
