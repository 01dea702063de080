//! Azimuthal field-of-view membership tests.
//!
//! The test is unsigned: a target is visible when it lies within half the
//! field of view of forward on either side. Boundary targets are visible.

mod cone;
mod fov;

pub use cone::ViewCone;
pub use fov::FieldOfView;

use crate::math::{is_degenerate, Point2, Vector2};
use crate::projection::{Facing, Locatable};

/// Returns whether `target_pos` lies within `fov` of an observer at
/// `observer_pos` facing `observer_forward`.
///
/// Returns `false` when `observer_forward` is degenerate or the target sits on
/// the observer, so no zero-length vector is ever normalized.
#[must_use]
pub fn is_visible(
    observer_pos: Point2,
    observer_forward: Vector2,
    target_pos: Point2,
    fov: FieldOfView,
) -> bool {
    let to_target = target_pos - observer_pos;
    if is_degenerate(&observer_forward) || is_degenerate(&to_target) {
        tracing::trace!("degenerate visibility input, target not visible");
        return false;
    }
    within(
        &observer_forward.normalize(),
        &to_target.normalize(),
        fov.dot_threshold(),
    )
}

/// Returns whether `target` lies within `fov` of `observer`, projecting both
/// onto the horizontal plane first.
#[must_use]
pub fn in_field_of_view<O, T>(observer: &O, target: &T, fov: FieldOfView) -> bool
where
    O: Locatable + Facing + ?Sized,
    T: Locatable + ?Sized,
{
    is_visible(
        observer.position_2d(),
        observer.forward_2d(),
        target.position_2d(),
        fov,
    )
}

/// Compares unit forward and unit offset against [`FieldOfView::dot_threshold`].
fn within(unit_forward: &Vector2, unit_offset: &Vector2, dot_threshold: f64) -> bool {
    unit_forward.dot(unit_offset) >= dot_threshold
}
