//! Chart request and the validated birth context built from it.

use chrono::{DateTime, NaiveDateTime, Utc};
use kundali_time::CivilTime;
use serde::{Deserialize, Serialize};

use crate::error::ChartError;

/// Raw birth details as submitted.
///
/// Field names follow the form the data is usually collected in:
/// `fullName`, `dob` (`YYYY-MM-DD`), `tob` (`HH:MM[:SS]`), `tz` (hours east
/// of UTC), `lat` and `lng` (degrees, north and east positive). Snake-case
/// spellings are accepted as well.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartRequest {
    #[serde(default, alias = "full_name")]
    pub full_name: String,
    #[serde(default)]
    pub gender: String,
    pub dob: String,
    pub tob: String,
    pub tz: f64,
    #[serde(default, alias = "latitude")]
    pub lat: Option<f64>,
    #[serde(default, alias = "longitude")]
    pub lng: Option<f64>,
}

/// Validated birth details with the resolved UTC instant.
#[derive(Debug, Clone, PartialEq)]
pub struct BirthContext {
    full_name: String,
    gender: String,
    civil: CivilTime,
    latitude_deg: f64,
    longitude_deg: f64,
}

fn coordinate(
    value: Option<f64>,
    field: &'static str,
    limit: f64,
) -> Result<f64, ChartError> {
    let v = value.ok_or_else(|| ChartError::malformed(field, "missing"))?;
    if !v.is_finite() {
        return Err(ChartError::malformed(field, "must be finite"));
    }
    if v.abs() > limit {
        return Err(ChartError::malformed(
            field,
            format!("{v} outside [-{limit}, {limit}]"),
        ));
    }
    Ok(v)
}

impl BirthContext {
    /// Validate a request. Fails on the first bad field; nothing is
    /// computed from a partially valid request.
    pub fn from_request(request: &ChartRequest) -> Result<Self, ChartError> {
        let latitude_deg = coordinate(request.lat, "lat", 90.0)?;
        let longitude_deg = coordinate(request.lng, "lng", 180.0)?;
        let civil = CivilTime::parse(&request.dob, &request.tob, request.tz)?;
        Ok(Self {
            full_name: request.full_name.trim().to_string(),
            gender: request.gender.trim().to_string(),
            civil,
            latitude_deg,
            longitude_deg,
        })
    }

    pub fn full_name(&self) -> &str {
        &self.full_name
    }

    pub fn gender(&self) -> &str {
        &self.gender
    }

    /// Local wall-clock birth time.
    pub fn local(&self) -> NaiveDateTime {
        self.civil.local()
    }

    pub fn utc_offset_hours(&self) -> f64 {
        self.civil.utc_offset_hours()
    }

    pub fn latitude_deg(&self) -> f64 {
        self.latitude_deg
    }

    pub fn longitude_deg(&self) -> f64 {
        self.longitude_deg
    }

    /// Birth instant in UTC.
    pub fn utc(&self) -> DateTime<Utc> {
        self.civil.utc()
    }
}
