//! Ayanamsha: the offset between the tropical and sidereal zodiacs.
//!
//! Two strategies are supported:
//!
//! - **Fixed J2000** (Lahiri value at J2000.0): planetary directions are
//!   read on the mean ecliptic of J2000 and reduced by a constant
//!   23.853055°. Because that frame does not precess, no per-date term is
//!   needed for them. Quantities measured in the frame of date (the
//!   ascendant, the lunar nodes) use the mean Lahiri ayanamsha of date,
//!   the same J2000 value advanced at 50.2388475″ per tropical year.
//!   They do not take the flat 23.853055°, so for a 2024 birth they read
//!   about 0.33° lower than a constant offset would give.
//! - **True star**: the sidereal zodiac is anchored so that a reference
//!   star (Spica by default) sits at exactly 180°. The ayanamsha is the
//!   star's true tropical longitude of date minus 180°.

use serde::{Deserialize, Serialize};

use crate::util::normalize_360;

/// Lahiri ayanamsha at J2000.0, degrees.
pub const LAHIRI_J2000_DEG: f64 = 23.853055;

/// Mean Lahiri precession rate, arcseconds per tropical year.
pub const LAHIRI_RATE_ARCSEC_PER_YEAR: f64 = 50.2388475;

/// Tropical year length used with [`LAHIRI_RATE_ARCSEC_PER_YEAR`], days.
pub const DAYS_PER_TROPICAL_YEAR: f64 = 365.2422;

/// Sidereal longitude of the reference star under the true-star strategy.
pub const REFERENCE_STAR_SIDEREAL_DEG: f64 = 180.0;

/// How the sidereal zodiac is anchored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AyanamshaStrategy {
    /// Constant offset from the J2000 ecliptic.
    FixedJ2000,
    /// Reference star pinned at 180° on the true ecliptic of date.
    #[default]
    TrueStar,
}

pub const ALL_STRATEGIES: [AyanamshaStrategy; 2] =
    [AyanamshaStrategy::FixedJ2000, AyanamshaStrategy::TrueStar];

impl AyanamshaStrategy {
    /// Configuration name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::FixedJ2000 => "fixed_j2000",
            Self::TrueStar => "true_star",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        let name = name.trim();
        ALL_STRATEGIES
            .into_iter()
            .find(|s| s.name().eq_ignore_ascii_case(name))
    }
}

/// Mean Lahiri ayanamsha of date, degrees.
///
/// `days_since_j2000` counts UT days from 2000-01-01T12:00Z.
pub fn mean_lahiri_deg(days_since_j2000: f64) -> f64 {
    let years = days_since_j2000 / DAYS_PER_TROPICAL_YEAR;
    normalize_360(LAHIRI_J2000_DEG + LAHIRI_RATE_ARCSEC_PER_YEAR / 3600.0 * years)
}

/// True-star ayanamsha from the star's tropical longitude of date.
pub fn star_ayanamsha_deg(star_tropical_lon_deg: f64) -> f64 {
    normalize_360(star_tropical_lon_deg - REFERENCE_STAR_SIDEREAL_DEG)
}
