//! Reduction of world-space inputs to the horizontal plane.
//!
//! World `(x, y, z)` maps to plane `(x, z)`; the vertical `y` is dropped.
//! Host node types take part by implementing [`Locatable`] and, for
//! observers, [`Facing`].

mod pose;

pub use pose::Pose;

use crate::error::{ArgumentError, Result};
use crate::math::{Point2, Point3, Vector2, Vector3};

/// Anything with a position that can be projected onto the horizontal plane.
pub trait Locatable {
    /// Returns the horizontal-plane position.
    fn position_2d(&self) -> Point2;
}

/// Anything with a facing direction that can be projected onto the horizontal plane.
pub trait Facing {
    /// Returns the horizontal-plane forward direction. Not normalized, and may
    /// be degenerate (e.g. a forward pointing straight up).
    fn forward_2d(&self) -> Vector2;
}

impl Locatable for Point2 {
    fn position_2d(&self) -> Point2 {
        *self
    }
}

impl Locatable for Point3 {
    fn position_2d(&self) -> Point2 {
        Point2::new(self.x, self.z)
    }
}

impl Locatable for [f64; 2] {
    fn position_2d(&self) -> Point2 {
        Point2::new(self[0], self[1])
    }
}

impl Locatable for [f64; 3] {
    fn position_2d(&self) -> Point2 {
        Point2::new(self[0], self[2])
    }
}

impl<T: Locatable + ?Sized> Locatable for &T {
    fn position_2d(&self) -> Point2 {
        (**self).position_2d()
    }
}

impl<T: Locatable + ?Sized> Locatable for Box<T> {
    fn position_2d(&self) -> Point2 {
        (**self).position_2d()
    }
}

impl Facing for Vector2 {
    fn forward_2d(&self) -> Vector2 {
        *self
    }
}

impl Facing for Vector3 {
    fn forward_2d(&self) -> Vector2 {
        Vector2::new(self.x, self.z)
    }
}

impl Facing for [f64; 2] {
    fn forward_2d(&self) -> Vector2 {
        Vector2::new(self[0], self[1])
    }
}

impl Facing for [f64; 3] {
    fn forward_2d(&self) -> Vector2 {
        Vector2::new(self[0], self[2])
    }
}

impl<T: Facing + ?Sized> Facing for &T {
    fn forward_2d(&self) -> Vector2 {
        (**self).forward_2d()
    }
}

impl<T: Facing + ?Sized> Facing for Box<T> {
    fn forward_2d(&self) -> Vector2 {
        (**self).forward_2d()
    }
}

/// Projects any locatable input to a horizontal-plane position.
#[must_use]
pub fn to_position_2d<T: Locatable + ?Sized>(input: &T) -> Point2 {
    input.position_2d()
}

/// Projects any facing input to a horizontal-plane direction.
#[must_use]
pub fn to_direction_2d<T: Facing + ?Sized>(input: &T) -> Vector2 {
    input.forward_2d()
}

/// Projects an optional node reference to a horizontal-plane position.
///
/// # Errors
///
/// Returns [`ArgumentError::MissingReference`] naming `name` if `input` is `None`.
pub fn try_position_2d<T: Locatable + ?Sized>(
    input: Option<&T>,
    name: &'static str,
) -> Result<Point2> {
    input
        .map(Locatable::position_2d)
        .ok_or_else(|| missing(name))
}

/// Projects an optional node reference to a horizontal-plane direction.
///
/// # Errors
///
/// Returns [`ArgumentError::MissingReference`] naming `name` if `input` is `None`.
pub fn try_direction_2d<T: Facing + ?Sized>(
    input: Option<&T>,
    name: &'static str,
) -> Result<Vector2> {
    input.map(Facing::forward_2d).ok_or_else(|| missing(name))
}

fn missing(name: &'static str) -> crate::error::AzimuthError {
    tracing::debug!(name, "required reference is absent");
    ArgumentError::MissingReference(name).into()
}
