//! Tabulated single-instant ephemeris.
//!
//! A snapshot is a JSON document holding the apparent geocentric EQJ
//! vectors of the seven bodies at one UTC instant, optionally with the
//! Greenwich sidereal time of that instant:
//!
//! ```json
//! {
//!   "utc": "2000-01-01T06:30:00Z",
//!   "sidereal_time_hours": 13.18232,
//!   "bodies": { "Sun": [0.18, -0.90, -0.39], "Moon": [...] }
//! }
//! ```
//!
//! Requests for any other instant fail with
//! [`EphemerisError::EpochMismatch`] rather than silently reusing the data.

use std::collections::BTreeMap;
use std::path::Path;

use chrono::{DateTime, TimeDelta, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{Body, EphemerisError, EphemerisPort, check_vector};

/// Largest accepted distance between a requested instant and the snapshot.
pub const EPOCH_TOLERANCE_SECONDS: i64 = 1;

/// Serialized snapshot document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub utc: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sidereal_time_hours: Option<f64>,
    pub bodies: BTreeMap<Body, [f64; 3]>,
}

/// [`EphemerisPort`] backed by a [`Snapshot`].
#[derive(Debug, Clone)]
pub struct SnapshotEphemeris {
    snapshot: Snapshot,
}

impl SnapshotEphemeris {
    /// Validate and wrap a snapshot.
    pub fn new(snapshot: Snapshot) -> Result<Self, EphemerisError> {
        for (&body, &v) in &snapshot.bodies {
            check_vector(body, v)?;
        }
        if let Some(hours) = snapshot.sidereal_time_hours {
            if !(hours.is_finite() && (0.0..24.0).contains(&hours)) {
                return Err(EphemerisError::Snapshot(format!(
                    "sidereal_time_hours out of range: {hours}"
                )));
            }
        }
        Ok(Self { snapshot })
    }

    /// Parse a snapshot from JSON text.
    pub fn from_json_str(text: &str) -> Result<Self, EphemerisError> {
        let snapshot: Snapshot =
            serde_json::from_str(text).map_err(|e| EphemerisError::Snapshot(e.to_string()))?;
        Self::new(snapshot)
    }

    /// Load a snapshot from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, EphemerisError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .map_err(|e| EphemerisError::Io(format!("{}: {e}", path.display())))?;
        let eph = Self::from_json_str(&text)?;
        debug!(
            path = %path.display(),
            utc = %eph.snapshot.utc,
            bodies = eph.snapshot.bodies.len(),
            "loaded ephemeris snapshot"
        );
        Ok(eph)
    }

    /// Instant the snapshot describes.
    pub fn utc(&self) -> DateTime<Utc> {
        self.snapshot.utc
    }

    pub fn snapshot(&self) -> &Snapshot {
        &self.snapshot
    }

    fn check_epoch(&self, utc: &DateTime<Utc>) -> Result<(), EphemerisError> {
        let gap = (*utc - self.snapshot.utc).abs();
        if gap > TimeDelta::seconds(EPOCH_TOLERANCE_SECONDS) {
            return Err(EphemerisError::EpochMismatch {
                requested: *utc,
                available: self.snapshot.utc,
            });
        }
        Ok(())
    }
}

impl EphemerisPort for SnapshotEphemeris {
    fn geocentric_vector(
        &self,
        body: Body,
        utc: &DateTime<Utc>,
    ) -> Result<[f64; 3], EphemerisError> {
        self.check_epoch(utc)?;
        self.snapshot
            .bodies
            .get(&body)
            .copied()
            .ok_or(EphemerisError::BodyUnavailable(body))
    }

    fn sidereal_time_hours(&self, utc: &DateTime<Utc>) -> Result<f64, EphemerisError> {
        self.check_epoch(utc)?;
        match self.snapshot.sidereal_time_hours {
            Some(hours) => Ok(hours),
            None => Ok(kundali_time::gmst_hours(utc)),
        }
    }
}
