use std::f64::consts::PI;

use log::{trace, warn};

use crate::angles::{deg_to_rad, normalize_angle, rad_to_deg};
use crate::ephemeris::{local_sidereal_time, obliquity_ecliptic};
use crate::error::{ChartError, Result, POLE_TOLERANCE_DEG};
use crate::types::HOUSE_COUNT;
use crate::zodiac::DEGREES_PER_SIGN;

fn check_latitude(latitude: f64) -> Result<()> {
    if !latitude.is_finite() {
        return Err(ChartError::NonFinite { field: "latitude" });
    }
    if latitude.abs() > 90.0 {
        return Err(ChartError::LatitudeOutOfRange(latitude));
    }
    if 90.0 - latitude.abs() < POLE_TOLERANCE_DEG {
        warn!("ascendant requested at pole, latitude={latitude}");
        return Err(ChartError::UndefinedAtPole { latitude });
    }
    Ok(())
}

/// Ascendant for a given local sidereal time, obliquity and latitude, all in
/// degrees. The `+π` picks the eastern intersection of ecliptic and horizon.
pub fn ascendant_from_sidereal(lst: f64, obliquity: f64, latitude: f64) -> Result<f64> {
    check_latitude(latitude)?;
    let theta = deg_to_rad(lst);
    let eps = deg_to_rad(obliquity);
    let phi = deg_to_rad(latitude);
    let numerator = -theta.cos();
    let denominator = theta.sin() * eps.cos() + phi.tan() * eps.sin();
    let lambda = numerator.atan2(denominator) + PI;
    Ok(normalize_angle(rad_to_deg(lambda)))
}

pub fn midheaven_from_sidereal(lst: f64, obliquity: f64) -> f64 {
    let theta = deg_to_rad(lst);
    let eps = deg_to_rad(obliquity);
    let lambda = theta.sin().atan2(theta.cos() * eps.cos());
    normalize_angle(rad_to_deg(lambda))
}

pub fn ascendant_longitude(jd: f64, latitude: f64, longitude_east: f64) -> Result<f64> {
    let eps = obliquity_ecliptic(jd);
    let lst = local_sidereal_time(jd, longitude_east);
    trace!("ascendant: jd={jd} obliquity={eps} lst={lst}");
    ascendant_from_sidereal(lst, eps, latitude)
}

pub fn midheaven_longitude(jd: f64, longitude_east: f64) -> f64 {
    let eps = obliquity_ecliptic(jd);
    let lst = local_sidereal_time(jd, longitude_east);
    midheaven_from_sidereal(lst, eps)
}

/// Equal-house cusps: cusp `i` sits `30·i` degrees past the Ascendant.
pub fn equal_house_cusps(ascendant: f64) -> [f64; HOUSE_COUNT] {
    std::array::from_fn(|i| normalize_angle(ascendant + DEGREES_PER_SIGN * i as f64))
}

/// 1-based house containing `longitude`. A point exactly on a cusp belongs
/// to the house that cusp opens.
pub fn house_of(longitude: f64, cusps: &[f64; HOUSE_COUNT]) -> u8 {
    debug_assert!(longitude.is_finite(), "house_of({longitude})");
    (0..HOUSE_COUNT)
        .find(|&i| {
            let span = normalize_angle(cusps[(i + 1) % HOUSE_COUNT] - cusps[i]);
            let span = if span == 0.0 { 360.0 } else { span };
            normalize_angle(longitude - cusps[i]) < span
        })
        .map_or(1, |i| (i + 1) as u8)
}
