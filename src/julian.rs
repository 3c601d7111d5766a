use chrono::{DateTime, Datelike, Duration, NaiveDateTime, TimeZone, Timelike, Utc};

use crate::error::{ChartError, Result};
use crate::types::Instant;

pub const J2000: f64 = 2451545.0;

/// Julian Day for a proleptic Gregorian calendar date and decimal UTC hour.
///
/// The day of month is not checked against the month length; an out-of-range
/// day simply shifts the result.
pub fn julian_day(year: i32, month: u32, day: u32, hour_utc: f64) -> f64 {
    let (y, m) = if month <= 2 {
        (year - 1, month + 12)
    } else {
        (year, month)
    };
    let y = y as f64;
    let d = day as f64 + hour_utc / 24.0;
    let a = (y / 100.0).floor();
    let b = 2.0 - a + (a / 4.0).floor();
    (365.25 * (y + 4716.0)).floor() + (30.6001 * (m as f64 + 1.0)).floor() + d + b - 1524.5
}

fn decimal_hour<T: Timelike>(t: &T) -> f64 {
    t.hour() as f64
        + t.minute() as f64 / 60.0
        + (t.second() as f64 + t.nanosecond() as f64 / 1e9) / 3600.0
}

impl Instant {
    pub fn new(year: i32, month: u32, day: u32, hour_utc: f64) -> Self {
        Self {
            year,
            month,
            day,
            hour_utc,
        }
    }

    pub fn from_utc(utc: &NaiveDateTime) -> Self {
        Self::new(utc.year(), utc.month(), utc.day(), decimal_hour(utc))
    }

    pub fn from_datetime<Tz: TimeZone>(dt: &DateTime<Tz>) -> Self {
        Self::from_utc(&dt.with_timezone(&Utc).naive_utc())
    }

    /// Local civil time minus a decimal UTC offset, with the date rolled over
    /// when the UTC hour leaves `[0, 24)`.
    pub fn from_local(local: &NaiveDateTime, utc_offset_hours: f64) -> Result<Self> {
        let offset = Duration::try_seconds((utc_offset_hours * 3600.0).round() as i64)
            .ok_or(ChartError::UtcOffsetOutOfRange(utc_offset_hours))?;
        let utc = local
            .checked_sub_signed(offset)
            .ok_or_else(|| ChartError::InvalidDate(local.date().to_string()))?;
        Ok(Self::from_utc(&utc))
    }

    pub fn julian_day(&self) -> f64 {
        julian_day(self.year, self.month, self.day, self.hour_utc)
    }
}
