use crate::angles::{deg_to_rad, normalize_angle};
use crate::julian::J2000;

pub const DAYS_PER_CENTURY: f64 = 36525.0;

const OBLIQUITY_BASE_DEG: f64 = 23.0 + 26.0 / 60.0;
/// Mean obliquity polynomial in T, arcseconds: c0 - T(c1 + T(c2 - T c3)).
const OBLIQUITY_ARCSEC: [f64; 4] = [21.448, 46.8150, 0.00059, 0.001813];
const NUTATION_OBLIQUITY_DEG: f64 = 0.00256;

const SUN_MEAN_LONGITUDE: [f64; 3] = [280.46646, 36000.76983, 0.0003032];
const SUN_MEAN_ANOMALY: [f64; 3] = [357.52911, 35999.05029, 0.0001537];
const EARTH_ECCENTRICITY: [f64; 3] = [0.016708634, 0.000042037, 0.0000001267];
const ABERRATION_DEG: f64 = 0.00569;
const NUTATION_LONGITUDE_DEG: f64 = 0.00478;

const GMST_COEFFS: [f64; 4] = [280.46061837, 360.98564736629, 0.000387933, 38710000.0];

pub fn julian_centuries(jd: f64) -> f64 {
    (jd - J2000) / DAYS_PER_CENTURY
}

/// Longitude of the Moon's ascending node, degrees (not normalized).
fn lunar_node_longitude(t: f64) -> f64 {
    125.04 - 1934.136 * t
}

/// True obliquity of the ecliptic: mean value plus the leading nutation term.
pub fn obliquity_ecliptic(jd: f64) -> f64 {
    let t = julian_centuries(jd);
    let [c0, c1, c2, c3] = OBLIQUITY_ARCSEC;
    let seconds = c0 - t * (c1 + t * (c2 - t * c3));
    let eps0 = OBLIQUITY_BASE_DEG + seconds / 3600.0;
    let omega = lunar_node_longitude(t);
    eps0 + NUTATION_OBLIQUITY_DEG * deg_to_rad(omega).cos()
}

pub fn earth_eccentricity(jd: f64) -> f64 {
    let t = julian_centuries(jd);
    let [e0, e1, e2] = EARTH_ECCENTRICITY;
    e0 - t * (e1 + e2 * t)
}

pub fn sun_mean_longitude(t: f64) -> f64 {
    let [l0, l1, l2] = SUN_MEAN_LONGITUDE;
    normalize_angle(l0 + t * (l1 + t * l2))
}

pub fn sun_mean_anomaly(t: f64) -> f64 {
    let [m0, m1, m2] = SUN_MEAN_ANOMALY;
    normalize_angle(m0 + t * (m1 - m2 * t))
}

pub fn sun_equation_of_center(t: f64, mean_anomaly: f64) -> f64 {
    let m = deg_to_rad(mean_anomaly);
    (1.914602 - t * (0.004817 + 0.000014 * t)) * m.sin()
        + (0.019993 - 0.000101 * t) * (2.0 * m).sin()
        + 0.000289 * (3.0 * m).sin()
}

/// Apparent geocentric ecliptic longitude of the Sun, `[0, 360)`.
pub fn sun_apparent_longitude(jd: f64) -> f64 {
    let t = julian_centuries(jd);
    let l0 = sun_mean_longitude(t);
    let m = sun_mean_anomaly(t);
    let true_longitude = l0 + sun_equation_of_center(t, m);
    let omega = lunar_node_longitude(t);
    let lambda =
        true_longitude - ABERRATION_DEG - NUTATION_LONGITUDE_DEG * deg_to_rad(omega).sin();
    normalize_angle(lambda)
}

pub fn greenwich_mean_sidereal_time(jd: f64) -> f64 {
    let t = julian_centuries(jd);
    let [g0, g1, g2, g3] = GMST_COEFFS;
    let theta = g0 + g1 * (jd - J2000) + g2 * t * t - (t * t * t) / g3;
    normalize_angle(theta)
}

pub fn local_sidereal_time(jd: f64, longitude_east: f64) -> f64 {
    normalize_angle(greenwich_mean_sidereal_time(jd) + longitude_east)
}
