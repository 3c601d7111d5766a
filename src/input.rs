//! Validation of raw birth-data fields before they reach the numeric core.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

use crate::error::{ChartError, Result};
use crate::types::{GeoLocation, Instant};

pub const MIN_UTC_OFFSET_HOURS: f64 = -12.0;
pub const MAX_UTC_OFFSET_HOURS: f64 = 14.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BirthData {
    pub date: NaiveDate,
    /// Local civil time.
    pub time: NaiveTime,
    /// Local time minus UTC, in decimal hours (Paris winter = 1.0).
    pub utc_offset_hours: f64,
    pub location: GeoLocation,
}

pub fn parse_date(s: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
        .map_err(|_| ChartError::InvalidDate(s.to_string()))
}

/// Accepts `HH:MM`, `HH:MM:SS` or a bare hour. An empty string is midnight.
pub fn parse_time(s: &str) -> Result<NaiveTime> {
    let t = s.trim();
    if t.is_empty() {
        return Ok(NaiveTime::MIN);
    }
    NaiveTime::parse_from_str(t, "%H:%M:%S")
        .or_else(|_| NaiveTime::parse_from_str(t, "%H:%M"))
        .ok()
        .or_else(|| {
            t.parse::<u32>()
                .ok()
                .and_then(|h| NaiveTime::from_hms_opt(h, 0, 0))
        })
        .ok_or_else(|| ChartError::InvalidTime(s.to_string()))
}

fn finite(value: f64, field: &'static str) -> Result<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(ChartError::NonFinite { field })
    }
}

pub fn validate_location(latitude: f64, longitude: f64) -> Result<GeoLocation> {
    let latitude = finite(latitude, "latitude")?;
    let longitude = finite(longitude, "longitude")?;
    if !(-90.0..=90.0).contains(&latitude) {
        return Err(ChartError::LatitudeOutOfRange(latitude));
    }
    if !(-180.0..=180.0).contains(&longitude) {
        return Err(ChartError::LongitudeOutOfRange(longitude));
    }
    Ok(GeoLocation {
        latitude,
        longitude,
    })
}

pub fn validate_utc_offset(hours: f64) -> Result<f64> {
    let hours = finite(hours, "UTC offset")?;
    if !(MIN_UTC_OFFSET_HOURS..=MAX_UTC_OFFSET_HOURS).contains(&hours) {
        return Err(ChartError::UtcOffsetOutOfRange(hours));
    }
    Ok(hours)
}

impl BirthData {
    pub fn new(
        date: NaiveDate,
        time: NaiveTime,
        utc_offset_hours: f64,
        location: GeoLocation,
    ) -> Result<Self> {
        Ok(Self {
            date,
            time,
            utc_offset_hours: validate_utc_offset(utc_offset_hours)?,
            location: validate_location(location.latitude, location.longitude)?,
        })
    }

    pub fn parse(
        date: &str,
        time: &str,
        utc_offset_hours: f64,
        latitude: f64,
        longitude: f64,
    ) -> Result<Self> {
        Self::new(
            parse_date(date)?,
            parse_time(time)?,
            utc_offset_hours,
            GeoLocation {
                latitude,
                longitude,
            },
        )
    }

    pub fn local_datetime(&self) -> NaiveDateTime {
        self.date.and_time(self.time)
    }

    pub fn instant(&self) -> Result<Instant> {
        Instant::from_local(&self.local_datetime(), self.utc_offset_hours)
    }
}
