//! Angle utilities on the horizontal plane, in degrees.
//!
//! Orientation convention: the plane is viewed from above with world +X to the
//! right and world +Z up the page. A positive signed angle turns
//! counter-clockwise, a negative one clockwise.

use super::Vector2;

/// Returns the signed angle from `from` to `to` in degrees, in `(-180, 180]`.
///
/// Computed as `atan2(cross, dot)`, so left and right offsets are
/// distinguished. Neither vector needs to be normalized, but both must be
/// non-degenerate for the result to be meaningful.
#[must_use]
pub fn signed_angle_deg(from: &Vector2, to: &Vector2) -> f64 {
    let angle = from.perp(to).atan2(from.dot(to)).to_degrees();
    // atan2 yields -pi for (-0.0, negative); fold it onto +180.
    if angle <= -180.0 {
        angle + 360.0
    } else {
        angle
    }
}

/// Returns the unsigned angle between `a` and `b` in degrees, in `[0, 180]`.
///
/// Returns `None` if either vector is degenerate.
#[must_use]
pub fn unsigned_angle_deg(a: &Vector2, b: &Vector2) -> Option<f64> {
    if super::is_degenerate(a) || super::is_degenerate(b) {
        return None;
    }
    let cos = a.normalize().dot(&b.normalize()).clamp(-1.0, 1.0);
    Some(cos.acos().to_degrees())
}

/// Wraps an angle in degrees into `[0, 360)`.
#[must_use]
pub fn wrap_degrees_360(degrees: f64) -> f64 {
    let wrapped = degrees.rem_euclid(360.0);
    // rem_euclid rounds tiny negative inputs up to exactly 360.
    if wrapped >= 360.0 {
        0.0
    } else {
        wrapped
    }
}
