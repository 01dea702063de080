use std::cmp::Ordering;

use ordered_float::OrderedFloat;

use crate::error::Result;
use crate::math::{Point2, Vector2, ANGLE_EPSILON};
use crate::projection::{try_direction_2d, try_position_2d, Facing, Locatable};

use super::{rank_key, RankMode, TieBreak};

/// Observer state and ranking policy consulted by every comparison of one
/// ranking call.
///
/// The context is an immutable `Copy` value: build one per call (or keep one
/// per agent) and pass it by reference.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RankContext {
    observer_pos: Point2,
    observer_forward: Vector2,
    mode: RankMode,
    tie_break: TieBreak,
}

impl RankContext {
    /// Creates a new ranking context.
    #[must_use]
    pub fn new(
        observer_pos: Point2,
        observer_forward: Vector2,
        mode: RankMode,
        tie_break: TieBreak,
    ) -> Self {
        Self {
            observer_pos,
            observer_forward,
            mode,
            tie_break,
        }
    }

    /// Creates a ranking context from an observer node.
    #[must_use]
    pub fn from_observer<O: Locatable + Facing + ?Sized>(
        observer: &O,
        mode: RankMode,
        tie_break: TieBreak,
    ) -> Self {
        Self::new(observer.position_2d(), observer.forward_2d(), mode, tie_break)
    }

    /// Creates a ranking context from an optional observer node.
    ///
    /// # Errors
    ///
    /// Returns [`crate::error::ArgumentError::MissingReference`] if `observer`
    /// is `None`.
    pub fn try_from_observer<O: Locatable + Facing + ?Sized>(
        observer: Option<&O>,
        mode: RankMode,
        tie_break: TieBreak,
    ) -> Result<Self> {
        let observer_pos = try_position_2d(observer, "observer")?;
        let observer_forward = try_direction_2d(observer, "observer")?;
        Ok(Self::new(observer_pos, observer_forward, mode, tie_break))
    }

    /// Returns a copy with a different rank mode.
    #[must_use]
    pub fn with_mode(self, mode: RankMode) -> Self {
        Self { mode, ..self }
    }

    /// Returns a copy with a different tie-break.
    #[must_use]
    pub fn with_tie_break(self, tie_break: TieBreak) -> Self {
        Self { tie_break, ..self }
    }

    /// Returns the observer position.
    #[must_use]
    pub fn observer_pos(&self) -> &Point2 {
        &self.observer_pos
    }

    /// Returns the observer forward direction.
    #[must_use]
    pub fn observer_forward(&self) -> &Vector2 {
        &self.observer_forward
    }

    /// Returns the rank mode.
    #[must_use]
    pub fn mode(&self) -> RankMode {
        self.mode
    }

    /// Returns the tie-break.
    #[must_use]
    pub fn tie_break(&self) -> TieBreak {
        self.tie_break
    }

    /// Returns the angular rank key of `target` under this context.
    #[must_use]
    pub fn key<T: Locatable + ?Sized>(&self, target: &T) -> f64 {
        rank_key(
            self.observer_pos,
            self.observer_forward,
            target.position_2d(),
            self.mode,
        )
    }

    /// Returns the full sort key of `target`: angular key, then tie-break.
    #[must_use]
    pub fn sort_key<T: Locatable + ?Sized>(&self, target: &T) -> SortKey {
        let position = target.position_2d();
        let key = rank_key(self.observer_pos, self.observer_forward, position, self.mode);
        let tie = match self.tie_break {
            TieBreak::None => 0.0,
            TieBreak::Nearest => nalgebra::distance_squared(&self.observer_pos, &position),
            TieBreak::Farthest => -nalgebra::distance_squared(&self.observer_pos, &position),
        };
        SortKey {
            bucket: angle_bucket(key),
            tie: OrderedFloat(tie),
        }
    }

    /// Three-way comparison of two targets. Ascending order ranks first.
    #[must_use]
    pub fn compare<T: Locatable + ?Sized>(&self, a: &T, b: &T) -> Ordering {
        self.sort_key(a).cmp(&self.sort_key(b))
    }

    /// Returns the first-ranked target without sorting. Among equal targets
    /// the earliest one wins.
    pub fn best<I>(&self, targets: I) -> Option<I::Item>
    where
        I: IntoIterator,
        I::Item: Locatable,
    {
        let mut best: Option<(SortKey, I::Item)> = None;
        for target in targets {
            let key = self.sort_key(&target);
            let better = match &best {
                None => true,
                Some((best_key, _)) => key < *best_key,
            };
            if better {
                best = Some((key, target));
            }
        }
        best.map(|(_, target)| target)
    }
}

/// Totally ordered sort key of one target under a [`RankContext`].
///
/// Angular keys are rounded to [`ANGLE_EPSILON`]-wide buckets and compared
/// exactly, so "tied" stays transitive; the tie component only matters inside
/// one bucket. Two keys closer than epsilon but on either side of a bucket
/// edge (a half-multiple of epsilon) are not tied, and their angle decides.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct SortKey {
    bucket: i64,
    tie: OrderedFloat<f64>,
}

/// Maps an angular key in degrees to its comparison bucket. Non-finite keys
/// share the last bucket.
#[allow(clippy::cast_possible_truncation)]
fn angle_bucket(key: f64) -> i64 {
    if key.is_finite() {
        (key / ANGLE_EPSILON).round() as i64
    } else {
        i64::MAX
    }
}
