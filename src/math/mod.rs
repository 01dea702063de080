pub mod angle_2d;

/// 2D point type on the horizontal plane: `x` is world X, `y` is world Z.
pub type Point2 = nalgebra::Point2<f64>;

/// 3D point type in world space (Y up).
pub type Point3 = nalgebra::Point3<f64>;

/// 2D vector type on the horizontal plane.
pub type Vector2 = nalgebra::Vector2<f64>;

/// 3D vector type in world space (Y up).
pub type Vector3 = nalgebra::Vector3<f64>;

/// Squared magnitude below which a vector is treated as zero-length.
pub const DEGENERATE_EPSILON: f64 = 1e-10;

/// Width in degrees of the buckets angular rank keys are compared in.
pub const ANGLE_EPSILON: f64 = 1e-9;

/// Angular slack in radians added to the half-angle of a field of view, so
/// targets exactly on the edge survive rounding in `cos`.
pub const VISIBILITY_EPSILON: f64 = 1e-12;

/// Returns whether `v` is too short to be normalized safely.
#[must_use]
pub fn is_degenerate(v: &Vector2) -> bool {
    v.norm_squared() < DEGENERATE_EPSILON
}
