//! Civil birth time.
//!
//! A birth is recorded as a wall-clock date and time plus an offset from
//! UTC in (possibly fractional) hours, e.g. `+5.5` for India. The UTC
//! instant is the wall time minus the offset: 12:00 at +5.5 is 06:30 UTC.

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, NaiveTime, TimeDelta, Utc};

use crate::error::TimeError;

/// Largest accepted UTC offset magnitude, in hours.
pub const MAX_UTC_OFFSET_HOURS: f64 = 14.0;

/// Parse a `YYYY-MM-DD` date.
pub fn parse_date(text: &str) -> Result<NaiveDate, TimeError> {
    NaiveDate::parse_from_str(text.trim(), "%Y-%m-%d")
        .map_err(|_| TimeError::InvalidDate(text.to_string()))
}

/// Parse an `HH:MM` or `HH:MM:SS` clock time.
pub fn parse_clock(text: &str) -> Result<NaiveTime, TimeError> {
    let trimmed = text.trim();
    NaiveTime::parse_from_str(trimmed, "%H:%M:%S")
        .or_else(|_| NaiveTime::parse_from_str(trimmed, "%H:%M"))
        .map_err(|_| TimeError::InvalidClock(text.to_string()))
}

/// Build a fixed offset from decimal hours, rounded to the whole second.
pub fn offset_from_hours(hours: f64) -> Result<FixedOffset, TimeError> {
    if !hours.is_finite() || hours.abs() > MAX_UTC_OFFSET_HOURS {
        return Err(TimeError::InvalidOffset(hours));
    }
    let seconds = (hours * 3600.0).round() as i32;
    FixedOffset::east_opt(seconds).ok_or(TimeError::InvalidOffset(hours))
}

/// Wall-clock birth time together with its resolved UTC instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CivilTime {
    local: NaiveDateTime,
    offset: FixedOffset,
    utc: DateTime<Utc>,
}

impl CivilTime {
    /// Combine a local date, clock time, and UTC offset in hours.
    pub fn new(date: NaiveDate, time: NaiveTime, utc_offset_hours: f64) -> Result<Self, TimeError> {
        let offset = offset_from_hours(utc_offset_hours)?;
        let local = date.and_time(time);
        let shift = TimeDelta::seconds(i64::from(offset.local_minus_utc()));
        let utc = local
            .checked_sub_signed(shift)
            .ok_or(TimeError::OutOfRange)?
            .and_utc();
        Ok(Self { local, offset, utc })
    }

    /// Parse `YYYY-MM-DD` and `HH:MM[:SS]` text with an offset in hours.
    pub fn parse(date: &str, time: &str, utc_offset_hours: f64) -> Result<Self, TimeError> {
        Self::new(parse_date(date)?, parse_clock(time)?, utc_offset_hours)
    }

    /// Local wall-clock date and time.
    pub fn local(&self) -> NaiveDateTime {
        self.local
    }

    /// Offset from UTC.
    pub fn offset(&self) -> FixedOffset {
        self.offset
    }

    /// Offset from UTC in decimal hours.
    pub fn utc_offset_hours(&self) -> f64 {
        f64::from(self.offset.local_minus_utc()) / 3600.0
    }

    /// The UTC instant of the birth.
    pub fn utc(&self) -> DateTime<Utc> {
        self.utc
    }
}
