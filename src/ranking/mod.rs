//! Ordering of targets by angular offset from an observer's forward.
//!
//! Every comparison consults one immutable [`RankContext`]. The primary key is
//! the angular [`rank_key`] under the context's [`RankMode`]; targets whose
//! keys fall in the same [`crate::math::ANGLE_EPSILON`] bucket are ordered by
//! the context's [`TieBreak`].

mod context;
mod key;
mod mode;
mod sort;

pub use context::{RankContext, SortKey};
pub use key::{rank_key, DEGENERATE_KEY};
pub use mode::{RankMode, TieBreak};
pub use sort::{rank_deque, rank_in_place, ranked, try_rank_in_place, Ranked};
