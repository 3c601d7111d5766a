use chrono::{DateTime, TimeZone};
use log::debug;

use crate::ephemeris::sun_apparent_longitude;
use crate::error::{ChartError, Result};
use crate::geometry::{ascendant_longitude, equal_house_cusps, house_of, midheaven_longitude};
use crate::input::BirthData;
use crate::types::{ChartResult, GeoLocation, Instant};
use crate::zodiac::zodiac_sign;

/// Sun, Ascendant, Midheaven and equal houses for a Julian Day and observer.
pub fn compute_chart(jd: f64, latitude: f64, longitude_east: f64) -> Result<ChartResult> {
    if !jd.is_finite() {
        return Err(ChartError::NonFinite { field: "julian day" });
    }
    if !longitude_east.is_finite() {
        return Err(ChartError::NonFinite { field: "longitude" });
    }
    let sun_longitude = sun_apparent_longitude(jd);
    let ascendant = ascendant_longitude(jd, latitude, longitude_east)?;
    let midheaven = midheaven_longitude(jd, longitude_east);
    let houses = equal_house_cusps(ascendant);

    debug!(
        "chart jd={jd:.5} lat={latitude} lon={longitude_east}: sun={sun_longitude:.4} asc={ascendant:.4} mc={midheaven:.4}"
    );

    Ok(ChartResult {
        jd,
        sun_longitude,
        ascendant,
        midheaven,
        houses,
        sun_sign: zodiac_sign(sun_longitude),
        asc_sign: zodiac_sign(ascendant),
        mc_sign: zodiac_sign(midheaven),
        sun_house: house_of(sun_longitude, &houses),
    })
}

pub fn chart_at<Tz: TimeZone>(dt: &DateTime<Tz>, location: &GeoLocation) -> Result<ChartResult> {
    let jd = Instant::from_datetime(dt).julian_day();
    compute_chart(jd, location.latitude, location.longitude)
}

pub fn compute_natal_chart(birth: &BirthData) -> Result<ChartResult> {
    let jd = birth.instant()?.julian_day();
    compute_chart(jd, birth.location.latitude, birth.location.longitude)
}
