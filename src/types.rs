// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Result and error types shared by the locators.
//!
//! Absence is always spelled `None` here. None of these types ever smuggle
//! "not found" through an extreme integer value; if a field can be absent,
//! it is an `Option`, and if an operation can be refused outright, it
//! returns [`QueryError`].
//!
//! # Invariants (the stuff that breaks if you ignore it)
//!
//! - **`Occurrences`**: `first <= last`, both valid indices of the queried
//!   slice, and every index in between holds the queried value. A value
//!   that is absent produces no `Occurrences` at all, never a dummy span.
//! - **`Pivot`**: `rotation` is the index of `value` in the queried slice,
//!   and equals the number of left-rotations applied to the canonical
//!   sorted array. `rotation == 0` means the array was never rotated.
//! - **`Bounds`**: `floor <= ceil` whenever both are present; they are
//!   equal exactly when the probe value itself occurs in the slice.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Floor and ceiling of a probe value within a sorted sequence.
///
/// The two sides are independent: a probe below every element has a ceil
/// but no floor, a probe above every element has a floor but no ceil.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bounds<T> {
    /// Largest element `<= x`, if any element is.
    pub floor: Option<T>,
    /// Smallest element `>= x`, if any element is.
    pub ceil: Option<T>,
}

/// The index span a value occupies in a sorted sequence.
///
/// Produced by [`occurrences`](crate::occurrences); both ends exist or
/// neither does, so the operation returns `Option<Occurrences>` rather
/// than a pair of options that could disagree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Occurrences {
    /// Index of the first copy.
    pub first: usize,
    /// Index of the last copy.
    pub last: usize,
}

impl Occurrences {
    /// Number of copies: `last - first + 1`.
    #[inline]
    pub fn count(&self) -> usize {
        self.last - self.first + 1
    }
}

/// Minimum element of a rotated sorted sequence, together with the
/// rotation that put it there.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pivot<T> {
    /// The smallest element.
    pub value: T,
    /// Number of left-rotations applied to the canonical sorted array.
    /// Also the index of `value`.
    pub rotation: usize,
}

/// Detectable precondition violations.
///
/// The locators only refuse what they can check in O(1): an empty
/// sequence where at least one element is required, and an even length
/// where the pairing structure demands an odd one. Shape violations that
/// would cost O(n) to detect (unsorted input, bogus rotation) are
/// documented preconditions instead - the `contracts` module checks them
/// in debug builds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryError {
    /// The operation needs at least one element.
    EmptySequence {
        /// Name of the refusing operation.
        operation: &'static str,
    },
    /// The pairing-anomaly locators need an odd number of elements; a
    /// fully paired sequence has no singleton to find.
    EvenLength {
        /// Length of the offending sequence.
        len: usize,
    },
}

impl fmt::Display for QueryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QueryError::EmptySequence { operation } => {
                write!(f, "{} requires a non-empty sequence", operation)
            }
            QueryError::EvenLength { len } => {
                write!(
                    f,
                    "sequence of length {} is fully paired; singleton search needs odd length",
                    len
                )
            }
        }
    }
}

impl std::error::Error for QueryError {}
