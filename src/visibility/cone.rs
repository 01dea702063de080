use crate::math::{is_degenerate, Point2, Vector2};
use crate::projection::{Facing, Locatable};

use super::{within, FieldOfView};

/// An observer's visibility cone with its threshold precomputed, for testing
/// many targets against the same observer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewCone {
    origin: Point2,
    /// Unit forward, or `None` when the observer's forward is degenerate.
    forward: Option<Vector2>,
    fov: FieldOfView,
    dot_threshold: f64,
}

impl ViewCone {
    /// Creates a new view cone.
    #[must_use]
    pub fn new(origin: Point2, forward: Vector2, fov: FieldOfView) -> Self {
        let forward = if is_degenerate(&forward) {
            tracing::trace!("degenerate view cone forward, cone sees nothing");
            None
        } else {
            Some(forward.normalize())
        };
        Self {
            origin,
            forward,
            fov,
            dot_threshold: fov.dot_threshold(),
        }
    }

    /// Creates a view cone for an observer node.
    #[must_use]
    pub fn from_observer<O: Locatable + Facing + ?Sized>(observer: &O, fov: FieldOfView) -> Self {
        Self::new(observer.position_2d(), observer.forward_2d(), fov)
    }

    /// Returns the cone apex.
    #[must_use]
    pub fn origin(&self) -> &Point2 {
        &self.origin
    }

    /// Returns the unit forward, or `None` if it was degenerate.
    #[must_use]
    pub fn forward(&self) -> Option<&Vector2> {
        self.forward.as_ref()
    }

    /// Returns the field of view.
    #[must_use]
    pub fn fov(&self) -> FieldOfView {
        self.fov
    }

    /// Returns whether `target` is inside the cone.
    ///
    /// Agrees with [`super::is_visible`] for the same inputs.
    #[must_use]
    pub fn contains<T: Locatable + ?Sized>(&self, target: &T) -> bool {
        let Some(forward) = &self.forward else {
            return false;
        };
        let to_target = target.position_2d() - self.origin;
        if is_degenerate(&to_target) {
            return false;
        }
        within(forward, &to_target.normalize(), self.dot_threshold)
    }

    /// Filters `targets` down to those inside the cone, preserving order.
    pub fn visible<'a, I>(&'a self, targets: I) -> impl Iterator<Item = I::Item> + 'a
    where
        I: IntoIterator,
        I::IntoIter: 'a,
        I::Item: Locatable,
    {
        targets.into_iter().filter(move |t| self.contains(t))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::math::Point3;
    use crate::projection::Pose;
    use crate::visibility::is_visible;

    fn cone(width: f64) -> ViewCone {
        ViewCone::new(
            Point2::origin(),
            Vector2::new(0.0, 3.0),
            FieldOfView::new(width).unwrap(),
        )
    }

    #[test]
    fn forward_is_normalized() {
        let c = cone(90.0);
        assert_eq!(c.forward(), Some(&Vector2::new(0.0, 1.0)));
        assert_eq!(c.origin(), &Point2::origin());
        assert_eq!(c.fov(), FieldOfView::new(90.0).unwrap());
    }

    #[test]
    fn agrees_with_free_function() {
        let c = cone(120.0);
        let targets = [
            Point2::new(0.0, 5.0),
            Point2::new(5.0, 0.0),
            Point2::new(3.0, 2.0),
            Point2::new(-3.0, 2.0),
            Point2::new(0.0, -1.0),
            Point2::origin(),
        ];
        for t in targets {
            assert_eq!(
                c.contains(&t),
                is_visible(Point2::origin(), Vector2::new(0.0, 3.0), t, c.fov()),
                "target {t:?}"
            );
        }
    }

    #[test]
    fn narrow_cone_matches_free_function() {
        let narrow = FieldOfView::new(1e-4).unwrap();
        let c = ViewCone::new(Point2::origin(), Vector2::new(0.0, 1.0), narrow);
        for deg in [0.0, 4e-5, 5.1e-5, 9e-5, -9e-5] {
            let r = f64::to_radians(deg);
            let t = Point2::new(r.sin() * 10.0, r.cos() * 10.0);
            assert_eq!(
                c.contains(&t),
                is_visible(Point2::origin(), Vector2::new(0.0, 1.0), t, narrow),
                "deg={deg}"
            );
        }
        let off = 9e-5_f64.to_radians();
        assert!(!c.contains(&Point2::new(off.sin() * 10.0, off.cos() * 10.0)));
    }

    #[test]
    fn degenerate_forward_sees_nothing() {
        let c = ViewCone::new(Point2::origin(), Vector2::zeros(), FieldOfView::FULL);
        assert!(c.forward().is_none());
        assert!(!c.contains(&Point2::new(1.0, 1.0)));
    }

    #[test]
    fn visible_filters_in_order() {
        let c = cone(90.0);
        let targets = vec![
            Point2::new(0.0, 1.0),
            Point2::new(0.0, -1.0),
            Point2::new(0.5, 2.0),
            Point2::new(-5.0, 0.0),
        ];
        let seen: Vec<Point2> = c.visible(targets).collect();
        assert_eq!(seen, vec![Point2::new(0.0, 1.0), Point2::new(0.5, 2.0)]);
    }

    #[test]
    fn from_observer_uses_node_pose() {
        let sentry = Pose::from_yaw(Point3::new(0.0, 2.0, 0.0), 180.0);
        let c = ViewCone::from_observer(&sentry, FieldOfView::new(60.0).unwrap());
        assert!(c.contains(&Point3::new(0.0, 0.0, -4.0)));
        assert!(!c.contains(&Point3::new(0.0, 0.0, 4.0)));
    }
}
