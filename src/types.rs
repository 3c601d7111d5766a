use serde::{Deserialize, Serialize};

use crate::zodiac::ZodiacSign;

/// A UTC calendar instant. `hour_utc` is a decimal hour, normally in `[0, 24)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Instant {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub hour_utc: f64,
}

/// Observer position in decimal degrees, north and east positive.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeoLocation {
    pub latitude: f64,
    pub longitude: f64,
}

impl Default for GeoLocation {
    fn default() -> Self {
        // Paris
        Self {
            latitude: 48.8566,
            longitude: 2.3522,
        }
    }
}

/// A longitude split into its sign, whole degree and arc-minutes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ZodiacPosition {
    pub sign: ZodiacSign,
    pub degrees: u8,
    pub minutes: u8,
}

pub const HOUSE_COUNT: usize = 12;

/// Computed natal chart. All longitudes are ecliptic degrees in `[0, 360)`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartResult {
    pub jd: f64,
    pub sun_longitude: f64,
    pub ascendant: f64,
    pub midheaven: f64,
    pub houses: [f64; HOUSE_COUNT],
    pub sun_sign: ZodiacSign,
    pub asc_sign: ZodiacSign,
    pub mc_sign: ZodiacSign,
    /// 1-based house holding the Sun.
    pub sun_house: u8,
}
