use natal_chart::angles::*;

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

// ── NormalizeAngle ──

#[test]
fn test_normalize_angle_basic() {
    let cases: &[(f64, f64)] = &[
        (0.0, 0.0),
        (45.0, 45.0),
        (360.0, 0.0),
        (361.0, 1.0),
        (-1.0, 359.0),
        (-90.0, 270.0),
        (405.0, 45.0),
        (-180.0, 180.0),
    ];
    for &(input, expected) in cases {
        assert_approx!(normalize_angle(input), expected, 1e-9);
    }
}

#[test]
fn test_normalize_angle_large() {
    let cases: &[(f64, f64)] = &[
        (720.0, 0.0),
        (810.0, 90.0),
        (-720.0, 0.0),
        (-450.0, 270.0),
        (360.0 * 1e6 + 12.5, 12.5),
    ];
    for &(input, expected) in cases {
        assert_approx!(normalize_angle(input), expected, 1e-6);
    }
}

#[test]
fn test_normalize_angle_small_near_zero() {
    assert_approx!(normalize_angle(0.001), 0.001, 1e-9);
    assert_approx!(normalize_angle(-0.001), 359.999, 1e-9);
}

#[test]
fn test_normalize_angle_tiny_negative_stays_below_360() {
    let x = normalize_angle(-1e-20);
    assert!(x < 360.0, "x={}", x);
    assert_eq!(x, 0.0);
}

#[test]
fn test_normalize_idempotent_and_bounded() {
    let mut d = -10_000.0;
    while d <= 10_000.0 {
        let n = normalize_angle(d);
        assert!((0.0..360.0).contains(&n), "d={} n={}", d, n);
        assert_eq!(normalize_angle(n), n, "d={}", d);
        d += 7.3;
    }
}

#[test]
fn test_normalize_periodic() {
    for &d in &[0.5, 17.25, 123.456, 359.75, -42.0] {
        let base = normalize_angle(d);
        for k in -5..=5 {
            assert_approx!(normalize_angle(d + 360.0 * k as f64), base, 1e-9);
        }
    }
}

// ── Degree / radian conversion ──

#[test]
fn test_deg_rad_conversion() {
    assert_approx!(deg_to_rad(180.0), std::f64::consts::PI, 1e-15);
    assert_approx!(deg_to_rad(90.0), std::f64::consts::FRAC_PI_2, 1e-15);
    assert_approx!(rad_to_deg(std::f64::consts::PI), 180.0, 1e-12);
    assert_approx!(rad_to_deg(deg_to_rad(123.456)), 123.456, 1e-12);
}

// ── AngularDifference ──

#[test]
fn test_angular_difference() {
    assert_approx!(angular_difference(10.0, 20.0), 10.0, 1e-12);
    assert_approx!(angular_difference(20.0, 10.0), -10.0, 1e-12);
    assert_approx!(angular_difference(350.0, 10.0), 20.0, 1e-12);
    assert_approx!(angular_difference(10.0, 350.0), -20.0, 1e-12);
    assert_approx!(angular_difference(0.0, 180.0), 180.0, 1e-12);
}
