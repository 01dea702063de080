use crate::math::angle_2d::{signed_angle_deg, wrap_degrees_360};
use crate::math::{is_degenerate, Point2, Vector2, ANGLE_EPSILON};

use super::RankMode;

/// Rank key given to targets whose angle cannot be measured (degenerate
/// forward, or target on the observer). Sorts after every measurable key.
pub const DEGENERATE_KEY: f64 = f64::INFINITY;

/// Computes the angular rank key, in degrees, of `target_pos` as seen from an
/// observer at `observer_pos` facing `observer_forward`.
///
/// Smaller keys rank first. Returns [`DEGENERATE_KEY`] for degenerate input.
#[must_use]
pub fn rank_key(
    observer_pos: Point2,
    observer_forward: Vector2,
    target_pos: Point2,
    mode: RankMode,
) -> f64 {
    let to_target = target_pos - observer_pos;
    if is_degenerate(&observer_forward) || is_degenerate(&to_target) {
        tracing::trace!(?mode, "degenerate rank input, key sorts last");
        return DEGENERATE_KEY;
    }

    let signed = signed_angle_deg(&observer_forward, &to_target);
    // Dead ahead must not wrap to just under 360 in the sweep modes.
    let signed = if signed.abs() < ANGLE_EPSILON { 0.0 } else { signed };

    match mode {
        RankMode::Magnitude => signed.abs(),
        // Clockwise offsets are negative.
        RankMode::Clockwise => wrap_degrees_360(-signed),
        RankMode::CounterClockwise => wrap_degrees_360(signed),
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    /// Point at `deg` clockwise from +Z, at distance `dist` from the origin.
    fn at(deg: f64, dist: f64) -> Point2 {
        let r = deg.to_radians();
        Point2::new(r.sin() * dist, r.cos() * dist)
    }

    fn key(deg: f64, mode: RankMode) -> f64 {
        rank_key(Point2::origin(), Vector2::new(0.0, 1.0), at(deg, 4.0), mode)
    }

    #[test]
    fn magnitude_is_side_independent() {
        assert_relative_eq!(key(30.0, RankMode::Magnitude), 30.0, epsilon = 1e-9);
        assert_relative_eq!(key(-30.0, RankMode::Magnitude), 30.0, epsilon = 1e-9);
        assert_relative_eq!(key(180.0, RankMode::Magnitude), 180.0, epsilon = 1e-9);
    }

    #[test]
    fn clockwise_sweeps_right_first() {
        assert_relative_eq!(key(30.0, RankMode::Clockwise), 30.0, epsilon = 1e-9);
        assert_relative_eq!(key(-30.0, RankMode::Clockwise), 330.0, epsilon = 1e-9);
        assert_relative_eq!(key(180.0, RankMode::Clockwise), 180.0, epsilon = 1e-9);
        // A target a quarter turn to the right.
        assert_relative_eq!(key(90.0, RankMode::Clockwise), 90.0, epsilon = 1e-9);
        assert_relative_eq!(key(90.0, RankMode::CounterClockwise), 270.0, epsilon = 1e-9);
    }

    #[test]
    fn counter_clockwise_mirrors_clockwise() {
        for deg in [10.0, -10.0, 95.0, -170.0, 180.0] {
            let cw = key(deg, RankMode::Clockwise);
            let ccw = key(deg, RankMode::CounterClockwise);
            assert_relative_eq!(wrap_degrees_360(360.0 - cw), ccw, epsilon = 1e-9);
        }
        assert_relative_eq!(key(-30.0, RankMode::CounterClockwise), 30.0, epsilon = 1e-9);
    }

    #[test]
    fn dead_ahead_is_zero_in_every_mode() {
        for mode in [RankMode::Magnitude, RankMode::Clockwise, RankMode::CounterClockwise] {
            assert_eq!(key(0.0, mode), 0.0);
            // Tiny float noise off forward must not wrap around.
            let k = rank_key(
                Point2::origin(),
                Vector2::new(0.0, 1.0),
                Point2::new(-1e-13, 5.0),
                mode,
            );
            assert_eq!(k, 0.0, "{mode:?}");
        }
    }

    #[test]
    fn key_ignores_distance_and_forward_length() {
        let mode = RankMode::Clockwise;
        let near = rank_key(Point2::origin(), Vector2::new(0.0, 1.0), at(40.0, 1.0), mode);
        let far = rank_key(Point2::origin(), Vector2::new(0.0, 9.0), at(40.0, 100.0), mode);
        assert_relative_eq!(near, far, epsilon = 1e-9);
    }

    #[test]
    fn degenerate_input_sorts_last() {
        let fwd = Vector2::new(0.0, 1.0);
        assert_eq!(
            rank_key(Point2::origin(), Vector2::zeros(), at(10.0, 1.0), RankMode::Magnitude),
            DEGENERATE_KEY
        );
        assert_eq!(
            rank_key(Point2::new(1.0, 1.0), fwd, Point2::new(1.0, 1.0), RankMode::Clockwise),
            DEGENERATE_KEY
        );
    }
}
