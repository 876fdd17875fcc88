//! Core types for Vimshottari dasha periods.

use chrono::{DateTime, Utc};

use crate::graha::Graha;

/// Year length for dasha period calculations, days.
pub const DAYS_PER_YEAR: f64 = 365.2425;

/// Length of the full cycle, years.
pub const VIMSHOTTARI_TOTAL_YEARS: f64 = 120.0;

/// Lords and their years, in cycle order starting from Ashwini's lord.
pub const VIMSHOTTARI_SEQUENCE: [(Graha, f64); 9] = [
    (Graha::Ketu, 7.0),
    (Graha::Shukra, 20.0),
    (Graha::Surya, 6.0),
    (Graha::Chandra, 10.0),
    (Graha::Mangal, 7.0),
    (Graha::Rahu, 18.0),
    (Graha::Guru, 16.0),
    (Graha::Shani, 19.0),
    (Graha::Buddh, 17.0),
];

/// Full mahadasha length of a graha, years.
pub fn vimshottari_years(graha: Graha) -> f64 {
    VIMSHOTTARI_SEQUENCE
        .iter()
        .find(|(g, _)| *g == graha)
        .map_or(0.0, |(_, years)| *years)
}

/// A single mahadasha.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DashaPeriod {
    pub lord: Graha,
    /// Inclusive.
    pub start: DateTime<Utc>,
    /// Exclusive; equal to the next period's start.
    pub end: DateTime<Utc>,
    /// Nominal length in years (pro-rated for the birth period).
    pub duration_years: f64,
}

impl DashaPeriod {
    /// Duration of the period in days.
    pub fn duration_days(&self) -> f64 {
        (self.end - self.start).num_milliseconds() as f64 / 86_400_000.0
    }

    /// True if `instant` falls within `[start, end)`.
    pub fn contains(&self, instant: &DateTime<Utc>) -> bool {
        self.start <= *instant && *instant < self.end
    }
}
