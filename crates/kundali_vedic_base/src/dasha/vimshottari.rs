//! Vimshottari mahadasha sequence from the Moon's longitude.

use chrono::{DateTime, TimeDelta, Utc};

use crate::dasha::balance::nakshatra_birth_balance;
use crate::dasha::types::{DAYS_PER_YEAR, DashaPeriod, VIMSHOTTARI_SEQUENCE};
use crate::error::VedicError;

const MS_PER_DAY: f64 = 86_400_000.0;

/// Convert a (fractional) year count to a millisecond-precision duration.
pub fn years_to_delta(years: f64) -> Result<TimeDelta, VedicError> {
    if !years.is_finite() || years < 0.0 {
        return Err(VedicError::InvalidInput("dasha years must be finite and >= 0"));
    }
    let ms = (years * DAYS_PER_YEAR * MS_PER_DAY).round();
    if ms > i64::MAX as f64 {
        return Err(VedicError::DateOutOfRange);
    }
    TimeDelta::try_milliseconds(ms as i64).ok_or(VedicError::DateOutOfRange)
}

/// The nine mahadashas of one cycle, starting at `birth`.
///
/// The first period is the remaining balance of the Moon's nakshatra lord;
/// the other eight follow in cycle order at full length. Each period's end
/// is the same instant as the next period's start.
pub fn vimshottari(
    moon_sidereal_lon: f64,
    birth: DateTime<Utc>,
) -> Result<[DashaPeriod; 9], VedicError> {
    if !moon_sidereal_lon.is_finite() {
        return Err(VedicError::InvalidInput("moon longitude must be finite"));
    }

    let nak_idx = nakshatra_birth_balance(moon_sidereal_lon, 0.0).0;
    let first = usize::from(nak_idx % 9);
    let (first_lord, first_years) = VIMSHOTTARI_SEQUENCE[first];
    let (_, balance, _) = nakshatra_birth_balance(moon_sidereal_lon, first_years);

    let mut periods = [DashaPeriod {
        lord: first_lord,
        start: birth,
        end: birth,
        duration_years: 0.0,
    }; 9];

    let mut cursor = birth;
    for (k, period) in periods.iter_mut().enumerate() {
        let (lord, full_years) = VIMSHOTTARI_SEQUENCE[(first + k) % 9];
        let years = if k == 0 { balance } else { full_years };
        let end = cursor
            .checked_add_signed(years_to_delta(years)?)
            .ok_or(VedicError::DateOutOfRange)?;
        *period = DashaPeriod {
            lord,
            start: cursor,
            end,
            duration_years: years,
        };
        cursor = end;
    }

    Ok(periods)
}

/// Years of the birth mahadasha remaining at birth.
pub fn balance_years(periods: &[DashaPeriod]) -> f64 {
    periods.first().map_or(0.0, |p| p.duration_years)
}
