pub const DEGREES_PER_CIRCLE: f64 = 360.0;

pub fn deg_to_rad(deg: f64) -> f64 {
    deg * (std::f64::consts::PI / 180.0)
}

pub fn rad_to_deg(rad: f64) -> f64 {
    rad * (180.0 / std::f64::consts::PI)
}

/// Reduces an angle in degrees to `[0, 360)`.
///
/// `rem_euclid` can return exactly 360.0 for tiny negative inputs, so that
/// case is folded back to zero.
pub fn normalize_angle(angle: f64) -> f64 {
    let x = angle.rem_euclid(DEGREES_PER_CIRCLE);
    if x >= DEGREES_PER_CIRCLE {
        0.0
    } else {
        x
    }
}

/// Shortest signed distance from `from` to `to`, in `(-180, 180]`.
pub fn angular_difference(from: f64, to: f64) -> f64 {
    let diff = normalize_angle(to - from);
    if diff > 180.0 {
        diff - DEGREES_PER_CIRCLE
    } else {
        diff
    }
}
