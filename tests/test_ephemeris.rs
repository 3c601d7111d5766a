use natal_chart::angles::angular_difference;
use natal_chart::ephemeris::*;
use natal_chart::julian::{julian_day, J2000};

macro_rules! assert_approx {
    ($left:expr, $right:expr, $tol:expr) => {
        let (l, r) = ($left as f64, $right as f64);
        assert!(
            (l - r).abs() <= $tol,
            "assert_approx failed: left={}, right={}, diff={}, tol={}",
            l, r, (l - r).abs(), $tol
        );
    };
}

// ── JulianCenturies ──

#[test]
fn test_julian_centuries() {
    assert_eq!(julian_centuries(J2000), 0.0);
    assert_eq!(julian_centuries(J2000 + DAYS_PER_CENTURY), 1.0);
    assert_eq!(julian_centuries(J2000 - DAYS_PER_CENTURY / 2.0), -0.5);
}

// ── Obliquity ──

#[test]
fn test_obliquity_at_j2000() {
    // 23°26'21.448" mean, plus 0.00256·cos(125.04°) nutation
    let expected = 23.0 + 26.0 / 60.0 + 21.448 / 3600.0 + 0.00256 * 125.04_f64.to_radians().cos();
    assert_approx!(obliquity_ecliptic(J2000), expected, 1e-12);
    assert_approx!(obliquity_ecliptic(J2000), 23.43782, 1e-5);
}

#[test]
fn test_obliquity_bounded_over_two_centuries() {
    for year in (1900..=2100).step_by(5) {
        let eps = obliquity_ecliptic(julian_day(year, 6, 1, 0.0));
        assert!(eps > 23.42 && eps < 23.46, "year {}: {}", year, eps);
    }
}

#[test]
fn test_obliquity_decreasing_trend() {
    assert!(obliquity_ecliptic(julian_day(1900, 1, 1, 0.0)) > obliquity_ecliptic(julian_day(2100, 1, 1, 0.0)));
}

// ── Eccentricity ──

#[test]
fn test_eccentricity() {
    assert_approx!(earth_eccentricity(J2000), 0.016708634, 1e-12);
    assert!(earth_eccentricity(J2000 + DAYS_PER_CENTURY) < earth_eccentricity(J2000));
}

// ── Sun ──

#[test]
fn test_sun_longitude_at_j2000() {
    let lambda = sun_apparent_longitude(J2000);
    assert_approx!(lambda, 280.3726, 0.001);
    assert_approx!(lambda, 280.0, 0.5);
}

#[test]
fn test_sun_at_equinoxes_and_solstices_2000() {
    let cases: &[(u32, u32, f64, f64)] = &[
        (3, 20, 7.0 + 35.0 / 60.0, 0.0),
        (6, 21, 1.0 + 48.0 / 60.0, 90.0),
        (9, 22, 17.0 + 28.0 / 60.0, 180.0),
        (12, 21, 13.0 + 37.0 / 60.0, 270.0),
    ];
    for &(month, day, hour, expected) in cases {
        let lambda = sun_apparent_longitude(julian_day(2000, month, day, hour));
        assert!(
            angular_difference(expected, lambda).abs() < 0.02,
            "{}-{}: {}",
            month, day, lambda
        );
    }
}

#[test]
fn test_sun_advances_about_one_degree_per_day() {
    let start = julian_day(2021, 1, 1, 0.0);
    for i in 0..366 {
        let jd = start + i as f64;
        let step = angular_difference(sun_apparent_longitude(jd), sun_apparent_longitude(jd + 1.0));
        assert!(step > 0.95 && step < 1.03, "day {}: {}", i, step);
    }
}

#[test]
fn test_sun_longitude_normalized() {
    for i in -400..400 {
        let lambda = sun_apparent_longitude(J2000 + i as f64 * 97.3);
        assert!((0.0..360.0).contains(&lambda), "{}", lambda);
    }
}

// ── Sidereal time ──

#[test]
fn test_gmst_at_j2000() {
    assert_eq!(greenwich_mean_sidereal_time(J2000), 280.46061837);
}

#[test]
fn test_gmst_meeus_example() {
    // 1987 April 10, 0h UT: 13h10m46.3668s
    let expected = (13.0 + 10.0 / 60.0 + 46.3668 / 3600.0) * 15.0;
    assert_approx!(greenwich_mean_sidereal_time(julian_day(1987, 4, 10, 0.0)), expected, 1e-4);
}

#[test]
fn test_local_sidereal_time_adds_longitude() {
    let jd = julian_day(2010, 8, 17, 21.25);
    let gmst = greenwich_mean_sidereal_time(jd);
    for &lon in &[-179.5, -73.9857, 0.0, 2.3522, 151.2093] {
        let lst = local_sidereal_time(jd, lon);
        assert!((0.0..360.0).contains(&lst));
        assert_approx!(angular_difference(gmst, lst), lon, 1e-9);
    }
}

#[test]
fn test_local_sidereal_time_cancels_to_zero() {
    assert_eq!(local_sidereal_time(J2000, -280.46061837), 0.0);
}
