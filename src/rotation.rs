// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Locators over a rotated sorted sequence.
//!
//! A left-rotation of a sorted array leaves two contiguous sorted
//! segments with one discontinuity (the pivot) between them. Everything
//! in this module exploits the same consequence: at any window
//! `[low, high]`, at least one of the two halves around `mid` is
//! internally sorted, and a constant number of boundary samples reveals
//! which one.
//!
//! The minimum search compares `seq[mid]` against `seq[high]`, never
//! against `seq[low]`. Comparing against `low` reads the same for "left
//! half sorted and pivot elsewhere" and "no rotation at all", so it
//! cannot pick a side; the right boundary always sits on one side of the
//! discontinuity, so the `high` comparison is unambiguous.
//!
//! [`find_minimum`], [`rotation_count`], and [`search_rotated`] require
//! distinct elements and at most one rotation. [`contains_rotated`]
//! tolerates duplicates and pays for it: when the three boundary samples
//! are all equal, neither half can be proven sorted, and the window
//! shrinks by one element from each end instead of halving. Adversarial
//! input (an all-equal array without the target) degrades it to O(n);
//! that is a property of the problem, not of this implementation.

use crate::contracts::check_rotated_distinct;
use crate::driver::{bisect, converge, Step};
use crate::types::{Pivot, QueryError};

/// Index of the minimum element; equals the rotation count.
///
/// Shared by [`find_minimum`] and [`rotation_count`], and reused by the
/// validated wrappers once the shape has been checked.
///
/// Requires a non-empty slice.
pub(crate) fn pivot_index<T: Ord>(seq: &[T]) -> usize {
    converge(0, seq.len() - 1, |mid, high| seq[mid] > seq[high])
}

/// Minimum element of a rotated sorted slice with distinct elements,
/// together with the rotation count that produced it.
///
/// ```
/// use ordex::find_minimum;
///
/// let pivot = find_minimum(&[4, 5, 6, 7, 0, 1, 2]).unwrap();
/// assert_eq!((pivot.value, pivot.rotation), (0, 4));
/// ```
pub fn find_minimum<T: Ord + Clone>(seq: &[T]) -> Result<Pivot<T>, QueryError> {
    if seq.is_empty() {
        return Err(QueryError::EmptySequence {
            operation: "find_minimum",
        });
    }
    check_rotated_distinct(seq);
    let rotation = pivot_index(seq);
    Ok(Pivot {
        value: seq[rotation].clone(),
        rotation,
    })
}

/// Number of left-rotations applied to the canonical sorted array.
/// Zero when the slice was never rotated.
pub fn rotation_count<T: Ord>(seq: &[T]) -> Result<usize, QueryError> {
    if seq.is_empty() {
        return Err(QueryError::EmptySequence {
            operation: "rotation_count",
        });
    }
    check_rotated_distinct(seq);
    Ok(pivot_index(seq))
}

/// Index of `x` in a rotated sorted slice with distinct elements, or
/// `None` when absent.
///
/// At every step exactly one half of the window is sorted; a range test
/// against that half's endpoints decides which half survives.
///
/// ```
/// use ordex::search_rotated;
///
/// assert_eq!(search_rotated(&[4, 5, 6, 7, 0, 1, 2], &0), Some(4));
/// assert_eq!(search_rotated(&[4, 5, 6, 7, 0, 1, 2], &3), None);
/// ```
pub fn search_rotated<T: Ord>(seq: &[T], x: &T) -> Option<usize> {
    if seq.is_empty() {
        return None;
    }
    check_rotated_distinct(seq);
    bisect(0, seq.len() - 1, |low, mid, high| {
        if seq[mid] == *x {
            return Step::Found(mid);
        }
        if seq[low] <= seq[mid] {
            // Left half [low, mid] is sorted.
            if seq[low] <= *x && *x < seq[mid] {
                Step::Left
            } else {
                Step::Right
            }
        } else {
            // Right half [mid, high] is sorted.
            if seq[mid] < *x && *x <= seq[high] {
                Step::Right
            } else {
                Step::Left
            }
        }
    })
}

/// Whether `x` occurs in a rotated sorted slice that may hold duplicates.
///
/// Same halves logic as [`search_rotated`], with one rule checked first:
/// when `seq[low] == seq[mid] == seq[high]`, three samples cannot prove
/// either half sorted, so the window gives up one element from each end
/// and retries rather than guessing. Returns presence only - with
/// duplicates there is no canonical index to report.
///
/// Worst case O(n) (e.g. an all-equal slice without the target),
/// O(log n) otherwise.
///
/// ```
/// use ordex::contains_rotated;
///
/// assert!(contains_rotated(&[2, 5, 6, 0, 0, 1, 2], &0));
/// assert!(!contains_rotated(&[2, 5, 6, 0, 0, 1, 2], &3));
/// ```
pub fn contains_rotated<T: Ord>(seq: &[T], x: &T) -> bool {
    if seq.is_empty() {
        return false;
    }
    bisect(0, seq.len() - 1, |low, mid, high| {
        if seq[mid] == *x {
            return Step::Found(mid);
        }
        if seq[low] == seq[mid] && seq[mid] == seq[high] {
            return Step::Shrink;
        }
        if seq[low] <= seq[mid] {
            if seq[low] <= *x && *x < seq[mid] {
                Step::Left
            } else {
                Step::Right
            }
        } else if seq[mid] < *x && *x <= seq[high] {
            Step::Right
        } else {
            Step::Left
        }
    })
    .is_some()
}
