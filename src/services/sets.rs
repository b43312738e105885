//! Multi-way set algebra
//!
//! `set_union` with no accumulator and `set_intersection` over a single set
//! hand back the caller's own set as `Cow::Borrowed`, not a copy. Every other
//! result is freshly built.

use std::borrow::Cow;
use std::collections::HashSet;
use std::hash::{BuildHasher, Hash};

/// Union of an optional accumulator with `b`.
///
/// With no accumulator the result borrows `b` itself, which keeps folds that
/// start from `None` allocation-free on their first step.
#[must_use]
pub fn set_union<'a, T, S>(
    a: Option<&HashSet<T, S>>,
    b: &'a HashSet<T, S>,
) -> Cow<'a, HashSet<T, S>>
where
    T: Eq + Hash + Clone,
    S: BuildHasher + Clone,
{
    let Some(a) = a else {
        return Cow::Borrowed(b);
    };

    let mut union = a.clone();
    union.extend(b.iter().cloned());
    Cow::Owned(union)
}

/// Intersection of every set in `sets`.
///
/// - no sets: a new empty set
/// - one set: that set, borrowed
/// - otherwise: a new set holding elements present in all of them
///
/// Membership is checked by walking the smallest set only.
#[must_use]
pub fn set_intersection<'a, T, S>(sets: &[&'a HashSet<T, S>]) -> Cow<'a, HashSet<T, S>>
where
    T: Eq + Hash + Clone,
    S: BuildHasher + Clone + Default,
{
    match sets {
        [] => Cow::Owned(HashSet::default()),
        [only] => Cow::Borrowed(*only),
        _ => {
            let (smallest_idx, smallest) = sets
                .iter()
                .enumerate()
                .min_by_key(|(_, set)| set.len())
                .map(|(idx, set)| (idx, *set))
                .unwrap_or((0, sets[0]));

            let intersection = smallest
                .iter()
                .filter(|item| {
                    sets.iter()
                        .enumerate()
                        .all(|(idx, set)| idx == smallest_idx || set.contains(*item))
                })
                .cloned()
                .collect();

            Cow::Owned(intersection)
        }
    }
}

/// Elements of `a` that are not in `b`, always as a new set.
#[must_use]
pub fn set_difference<T, S>(a: &HashSet<T, S>, b: &HashSet<T, S>) -> HashSet<T, S>
where
    T: Eq + Hash + Clone,
    S: BuildHasher + Clone + Default,
{
    a.iter().filter(|item| !b.contains(*item)).cloned().collect()
}
