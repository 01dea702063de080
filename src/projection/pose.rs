use crate::math::{Point2, Point3, Vector2, Vector3};

use super::{Facing, Locatable};

/// A minimal oriented node: a world position and a world forward direction.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Pose {
    /// World-space position.
    pub position: Point3,
    /// World-space forward direction. Need not be normalized.
    pub forward: Vector3,
}

impl Pose {
    /// Creates a new pose.
    #[must_use]
    pub fn new(position: Point3, forward: Vector3) -> Self {
        Self { position, forward }
    }

    /// Creates a pose from a heading in degrees.
    ///
    /// Heading 0 faces world +Z; positive headings turn clockwise seen from
    /// above, so 90 faces world +X.
    #[must_use]
    pub fn from_yaw(position: Point3, yaw_degrees: f64) -> Self {
        let (sin, cos) = yaw_degrees.to_radians().sin_cos();
        Self {
            position,
            forward: Vector3::new(sin, 0.0, cos),
        }
    }
}

impl Locatable for Pose {
    fn position_2d(&self) -> Point2 {
        self.position.position_2d()
    }
}

impl Facing for Pose {
    fn forward_2d(&self) -> Vector2 {
        self.forward.forward_2d()
    }
}
