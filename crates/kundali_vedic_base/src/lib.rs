//! Vedic chart primitives on sidereal longitudes.
//!
//! This crate provides:
//! - Graha, rashi, and nakshatra identification (with DMS display)
//! - Ayanamsha strategies and lunar node longitudes
//! - Lagna from sidereal time, latitude, and obliquity
//! - Divisional charts D1 to D10
//! - Vimshottari mahadashas
//! - Ashtakavarga bindus
//! - Yoga and dosha detection
//! - Panchanga limbs
//!
//! Everything here is a pure function of longitudes and instants; no
//! ephemeris access happens in this crate.

pub mod ashtakavarga;
pub mod ayanamsha;
pub mod dasha;
pub mod error;
pub mod graha;
pub mod lagna;
pub mod lunar_nodes;
pub mod nakshatra;
pub mod panchang;
pub mod positions;
pub mod rashi;
pub mod util;
pub mod varga;
pub mod yoga;

pub use ashtakavarga::{AshtakavargaTable, BAV_TOTALS, SAV_TOTAL, ashtakavarga};
pub use ayanamsha::{
    ALL_STRATEGIES, AyanamshaStrategy, LAHIRI_J2000_DEG, REFERENCE_STAR_SIDEREAL_DEG,
    mean_lahiri_deg, star_ayanamsha_deg,
};
pub use dasha::{
    DAYS_PER_YEAR, DashaPeriod, VIMSHOTTARI_SEQUENCE, VIMSHOTTARI_TOTAL_YEARS, balance_years,
    nakshatra_birth_balance, vimshottari, vimshottari_years, years_to_delta,
};
pub use error::VedicError;
pub use graha::{ALL_GRAHAS, Graha, SAPTA_GRAHAS, TARA_GRAHAS};
pub use lagna::{
    MAX_ABS_LATITUDE_DEG, local_sidereal_deg, sidereal_ascendant_deg, tropical_ascendant_deg,
};
pub use lunar_nodes::{
    ALL_NODE_MODES, NodeMode, ketu_from_rahu, mean_rahu_deg, rahu_deg, true_rahu_deg,
};
pub use nakshatra::{
    ALL_NAKSHATRAS, NAKSHATRA_SPAN, Nakshatra, NakshatraInfo, PADA_SPAN, nakshatra_from_longitude,
};
pub use panchang::{
    Panchanga, Vaar, karana_from_elongation, panchanga, tithi_from_elongation, yoga_from_sum,
};
pub use positions::SiderealPositions;
pub use rashi::{ALL_RASHIS, Dms, Rashi, RashiInfo, deg_to_dms, rashi_from_longitude};
pub use util::{house_from, is_kendra, normalize_360, ordinal, sign_index};
pub use varga::{ALL_VARGAS, Varga, varga_rashi_index, varga_rashi_indices};
pub use yoga::{Yoga, YogaRecord, detect_yogas};
