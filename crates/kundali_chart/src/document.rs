//! The chart document: the serialized output of one computation.
//!
//! Field names are camelCase on the wire. Sign names are the Western
//! names (`"Aries"`), body and dasha-lord names the English ones
//! (`"Jupiter"`, `"Rahu"`), and the rising point is the pseudo-body
//! `"Ascendant"`.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use kundali_vedic_base::Varga;
use serde::{Deserialize, Serialize};

use crate::request::ChartRequest;
use crate::settings::ChartSettings;

/// Name of the rising-point pseudo-body.
pub const ASCENDANT: &str = "Ascendant";

/// Echoed input plus the resolved UTC instant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartMeta {
    #[serde(flatten)]
    pub input: ChartRequest,
    pub utc_date: DateTime<Utc>,
}

/// One body's sidereal placement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanetRecord {
    pub name: String,
    /// Sidereal longitude, degrees [0, 360).
    pub longitude_deg: f64,
    pub sign: String,
    pub sign_index: u8,
    pub degrees_in_sign: f64,
    /// Position within the sign as `D° M' S"`.
    pub dms: String,
    pub nakshatra: String,
    /// 1..=4.
    pub pada: u8,
}

/// One mahadasha.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashaRecord {
    pub lord: String,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    pub duration_years: f64,
}

/// One graha's Bhinna Ashtakavarga row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BinduRow {
    pub body: String,
    pub points: [u8; 12],
    pub total: u8,
}

/// Bhinna rows and the Sarvashtakavarga, indexed by sign from Aries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AshtakavargaRecord {
    pub per_body: Vec<BinduRow>,
    pub aggregate: [u16; 12],
    pub total: u16,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PanchangaRecord {
    /// 1..=30.
    pub tithi: u8,
    /// 1..=27.
    pub yoga: u8,
    /// 1..=60.
    pub karana: u8,
    pub weekday: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct YogaEntry {
    pub name: String,
    pub description: String,
    pub dosha: bool,
}

/// A computed chart. Built once by [`compute_chart`](crate::compute_chart)
/// and never mutated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Chart {
    pub meta: ChartMeta,
    pub settings: ChartSettings,
    /// Ayanamsha subtracted from body longitudes, degrees.
    pub ayanamsa_deg: f64,
    /// Sun through Saturn, Rahu, Ketu, then the Ascendant.
    pub planets: Vec<PlanetRecord>,
    /// Varga → body name → sign name.
    pub vargas: BTreeMap<Varga, BTreeMap<String, String>>,
    pub dashas: Vec<DashaRecord>,
    pub ashtakavarga: AshtakavargaRecord,
    pub panchanga: PanchangaRecord,
    pub yogas: Vec<YogaEntry>,
}

impl Chart {
    /// Placement of a body (or [`ASCENDANT`]) by name.
    pub fn planet(&self, name: &str) -> Option<&PlanetRecord> {
        self.planets.iter().find(|p| p.name == name)
    }

    /// Sign name of a body in a divisional chart.
    pub fn varga_sign(&self, varga: Varga, body: &str) -> Option<&str> {
        self.vargas
            .get(&varga)
            .and_then(|signs| signs.get(body))
            .map(String::as_str)
    }

    /// Compact or pretty JSON.
    pub fn to_json(&self, pretty: bool) -> serde_json::Result<String> {
        if pretty {
            serde_json::to_string_pretty(self)
        } else {
            serde_json::to_string(self)
        }
    }
}
