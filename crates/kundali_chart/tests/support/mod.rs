//! Fake ephemeris ports shared by the chart tests.

#![allow(dead_code)]

use std::cell::Cell;

use chrono::{DateTime, Utc};
use kundali_chart::ChartRequest;
use kundali_core::{Body, EphemerisError, EphemerisPort};
use kundali_frames::OBLIQUITY_J2000_RAD;

/// Bodies at fixed J2000 ecliptic longitudes (latitude 0), served as EQJ
/// vectors for any instant.
pub struct EclipticPort {
    pub lons: [f64; 7],
    pub sidereal_hours: Option<f64>,
    pub calls: Cell<usize>,
}

impl EclipticPort {
    /// Rough tropical longitudes for 2000-01-01, Sun through Saturn.
    pub fn new_delhi_2000() -> Self {
        Self {
            lons: [280.0, 217.0, 327.0, 271.0, 25.0, 241.0, 40.0],
            sidereal_hours: None,
            calls: Cell::new(0),
        }
    }
}

impl EphemerisPort for EclipticPort {
    fn geocentric_vector(
        &self,
        body: Body,
        _utc: &DateTime<Utc>,
    ) -> Result<[f64; 3], EphemerisError> {
        self.calls.set(self.calls.get() + 1);
        let lon = self.lons[body as usize].to_radians();
        let (s, c) = OBLIQUITY_J2000_RAD.sin_cos();
        Ok([lon.cos(), lon.sin() * c, lon.sin() * s])
    }

    fn sidereal_time_hours(&self, utc: &DateTime<Utc>) -> Result<f64, EphemerisError> {
        match self.sidereal_hours {
            Some(h) => Ok(h),
            None => Ok(kundali_time::gmst_hours(utc)),
        }
    }
}

/// A port that has no Mars.
pub struct NoMars;

impl EphemerisPort for NoMars {
    fn geocentric_vector(
        &self,
        body: Body,
        _utc: &DateTime<Utc>,
    ) -> Result<[f64; 3], EphemerisError> {
        if body == Body::Mars {
            Err(EphemerisError::BodyUnavailable(body))
        } else {
            Ok([1.0, 0.0, 0.0])
        }
    }
}

pub fn new_delhi_request() -> ChartRequest {
    ChartRequest {
        full_name: "Test Native".to_string(),
        gender: "female".to_string(),
        dob: "2000-01-01".to_string(),
        tob: "12:00".to_string(),
        tz: 5.5,
        lat: Some(28.6139),
        lng: Some(77.2090),
    }
}
