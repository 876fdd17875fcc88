//! Birth balance: how much of the first mahadasha remains at birth.

use crate::nakshatra::NAKSHATRA_SPAN;
use crate::util::normalize_360;

/// Remaining arc, degrees, below which the Moon counts as having entered
/// the next nakshatra. Keeps the first period longer than a millisecond.
const BOUNDARY_EPSILON_DEG: f64 = 1e-9;

/// Nakshatra birth balance from the Moon's sidereal longitude.
///
/// Returns `(nakshatra_index, balance_years, elapsed_fraction)`:
/// - `nakshatra_index`: 0-based index (0=Ashwini..26=Revati)
/// - `balance_years`: remaining years of the starting lord's period
/// - `elapsed_fraction`: fraction of the nakshatra already traversed [0, 1)
///
/// A Moon within 1e-9° of the end of a nakshatra is placed at the start of
/// the next one.
pub fn nakshatra_birth_balance(moon_sidereal_lon: f64, entry_period_years: f64) -> (u8, f64, f64) {
    let lon = normalize_360(moon_sidereal_lon);
    let mut nak_idx = ((lon / NAKSHATRA_SPAN).floor() as u8).min(26);
    let mut position_in_nak = lon - f64::from(nak_idx) * NAKSHATRA_SPAN;
    if NAKSHATRA_SPAN - position_in_nak < BOUNDARY_EPSILON_DEG {
        nak_idx = (nak_idx + 1) % 27;
        position_in_nak = 0.0;
    }
    let elapsed_fraction = (position_in_nak / NAKSHATRA_SPAN).clamp(0.0, 1.0);
    let balance_years = entry_period_years * (1.0 - elapsed_fraction);
    (nak_idx, balance_years, elapsed_fraction)
}
