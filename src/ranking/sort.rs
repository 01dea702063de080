use std::collections::VecDeque;
use std::iter::FusedIterator;

use crate::error::{ArgumentError, Result};
use crate::projection::Locatable;

use super::RankContext;

/// Reorders `targets` in place, first-ranked first, and returns them.
///
/// Works for fixed-size arrays, `Vec`s and any other contiguous mutable
/// sequence. Each target's key is computed once. Targets that compare equal
/// currently keep their input order, but callers must not rely on it.
pub fn rank_in_place<'a, T: Locatable>(ctx: &RankContext, targets: &'a mut [T]) -> &'a mut [T] {
    targets.sort_by_cached_key(|target| ctx.sort_key(target));
    tracing::trace!(
        len = targets.len(),
        mode = ?ctx.mode(),
        tie_break = ?ctx.tie_break(),
        "ranked targets"
    );
    targets
}

/// [`rank_in_place`] for host boundaries where either argument may be absent.
///
/// # Errors
///
/// Returns [`ArgumentError::MissingReference`] if `ctx` or `targets` is `None`.
pub fn try_rank_in_place<'a, T: Locatable>(
    ctx: Option<&RankContext>,
    targets: Option<&'a mut [T]>,
) -> Result<&'a mut [T]> {
    let ctx = ctx.ok_or(ArgumentError::MissingReference("context"))?;
    let targets = targets.ok_or(ArgumentError::MissingReference("targets"))?;
    Ok(rank_in_place(ctx, targets))
}

/// Reorders a ring-buffer list in place and returns it.
pub fn rank_deque<'a, T: Locatable>(
    ctx: &RankContext,
    targets: &'a mut VecDeque<T>,
) -> &'a mut VecDeque<T> {
    rank_in_place(ctx, targets.make_contiguous());
    targets
}

/// Produces a new ranked sequence from a read-only iterable, leaving the
/// source untouched.
///
/// Pass an iterator of references (e.g. `slice.iter()`) to rank without
/// cloning; the result then yields the same references in ranked order.
pub fn ranked<I>(ctx: &RankContext, targets: I) -> Ranked<I::Item>
where
    I: IntoIterator,
    I::Item: Locatable,
{
    let mut items: Vec<I::Item> = targets.into_iter().collect();
    rank_in_place(ctx, &mut items);
    Ranked {
        inner: items.into_iter(),
    }
}

/// A finite ranked sequence produced by [`ranked`]. Consumed once.
#[derive(Debug, Clone)]
pub struct Ranked<T> {
    inner: std::vec::IntoIter<T>,
}

impl<T> Iterator for Ranked<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> DoubleEndedIterator for Ranked<T> {
    fn next_back(&mut self) -> Option<T> {
        self.inner.next_back()
    }
}

impl<T> ExactSizeIterator for Ranked<T> {}

impl<T> FusedIterator for Ranked<T> {}
