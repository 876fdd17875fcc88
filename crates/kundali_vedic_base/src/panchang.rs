//! Panchanga: tithi, yoga, karana, and vaar at an instant.
//!
//! All indices are 1-based and computed from the sidereal Sun and Moon
//! (any common offset cancels in the elongation but not in the sum, so
//! both inputs must be in the same frame).

use chrono::{DateTime, Datelike, Utc, Weekday};
use serde::{Deserialize, Serialize};

use crate::util::normalize_360;

/// Degrees of Moon−Sun elongation per tithi.
pub const TITHI_SPAN_DEG: f64 = 12.0;

/// Degrees of Moon+Sun per yoga.
pub const YOGA_SPAN_DEG: f64 = 360.0 / 27.0;

/// Degrees of elongation per karana (half a tithi).
pub const KARANA_SPAN_DEG: f64 = 6.0;

fn index_in(value_deg: f64, span_deg: f64, count: u8) -> u8 {
    ((value_deg / span_deg).floor() as u8).min(count - 1) + 1
}

/// Tithi 1..=30 from Moon−Sun elongation.
pub fn tithi_from_elongation(elongation_deg: f64) -> u8 {
    index_in(normalize_360(elongation_deg), TITHI_SPAN_DEG, 30)
}

/// Yoga 1..=27 from the Moon+Sun sum.
pub fn yoga_from_sum(sum_deg: f64) -> u8 {
    index_in(normalize_360(sum_deg), YOGA_SPAN_DEG, 27)
}

/// Karana 1..=60 from Moon−Sun elongation.
pub fn karana_from_elongation(elongation_deg: f64) -> u8 {
    index_in(normalize_360(elongation_deg), KARANA_SPAN_DEG, 60)
}

/// Day of the week.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Vaar {
    Sunday,
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
}

impl Vaar {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Sunday => "Sunday",
            Self::Monday => "Monday",
            Self::Tuesday => "Tuesday",
            Self::Wednesday => "Wednesday",
            Self::Thursday => "Thursday",
            Self::Friday => "Friday",
            Self::Saturday => "Saturday",
        }
    }

}

impl From<Weekday> for Vaar {
    fn from(day: Weekday) -> Self {
        match day {
            Weekday::Sun => Self::Sunday,
            Weekday::Mon => Self::Monday,
            Weekday::Tue => Self::Tuesday,
            Weekday::Wed => Self::Wednesday,
            Weekday::Thu => Self::Thursday,
            Weekday::Fri => Self::Friday,
            Weekday::Sat => Self::Saturday,
        }
    }
}

impl std::fmt::Display for Vaar {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// The four limbs computed here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Panchanga {
    pub tithi: u8,
    pub yoga: u8,
    pub karana: u8,
    pub vaar: Vaar,
}

/// Panchanga for sidereal Sun/Moon longitudes at `utc`.
///
/// The day is the UTC weekday of the instant, not the sunrise-based civil
/// day.
pub fn panchanga(sun_lon_deg: f64, moon_lon_deg: f64, utc: &DateTime<Utc>) -> Panchanga {
    let elongation = normalize_360(moon_lon_deg - sun_lon_deg);
    let sum = normalize_360(moon_lon_deg + sun_lon_deg);
    Panchanga {
        tithi: tithi_from_elongation(elongation),
        yoga: yoga_from_sum(sum),
        karana: karana_from_elongation(elongation),
        vaar: utc.weekday().into(),
    }
}
