//! Property-based tests using proptest.
//!
//! Each block pins one invariant family from the locators' contracts to
//! randomly generated inputs, with plain linear scans as the oracle.

mod common;

use common::{is_peak, paired_with_singleton, rotate_left, strictly_increasing};
use ordex::{
    contains_rotated, count_occurrences, find_minimum, find_peak, find_single, floor_ceil,
    occurrences, rotation_count, search_rotated, single_by_xor,
};
use proptest::prelude::*;

// ============================================================================
// STRATEGIES
// ============================================================================

/// Sorted, duplicates allowed.
fn sorted_vec() -> impl Strategy<Value = Vec<i64>> {
    prop::collection::vec(-100i64..100, 1..64).prop_map(|mut v| {
        v.sort_unstable();
        v
    })
}

/// Strictly increasing, at least one element.
fn distinct_sorted_vec() -> impl Strategy<Value = Vec<i64>> {
    prop::collection::vec(-1000i64..1000, 1..64)
        .prop_map(strictly_increasing)
        .prop_filter("need at least one element", |v| !v.is_empty())
}

/// A strictly increasing vector rotated by a known count.
fn rotated_distinct() -> impl Strategy<Value = (Vec<i64>, usize)> {
    (distinct_sorted_vec(), any::<usize>()).prop_map(|(sorted, raw)| {
        let r = raw % sorted.len();
        (rotate_left(sorted, r), r)
    })
}

/// A sorted vector with duplicates, rotated arbitrarily.
fn rotated_with_duplicates() -> impl Strategy<Value = Vec<i64>> {
    (sorted_vec(), any::<usize>()).prop_map(|(sorted, raw)| {
        let r = raw % sorted.len();
        rotate_left(sorted, r)
    })
}

/// No equal neighbors, so at least one strict local maximum exists.
fn peaked_vec() -> impl Strategy<Value = Vec<i64>> {
    prop::collection::vec(-1000i64..1000, 1..64).prop_map(|mut v| {
        v.dedup();
        v
    })
}

// ============================================================================
// BOUNDARY LOCATORS
// ============================================================================

proptest! {
    /// floor <= x <= ceil whenever both exist, and existence matches the
    /// slice ends exactly.
    #[test]
    fn prop_floor_ceil_bracket_the_probe(seq in sorted_vec(), x in -150i64..150) {
        let bounds = floor_ceil(&seq, &x);

        if let Some(floor) = bounds.floor {
            prop_assert!(floor <= x);
            prop_assert!(seq.contains(&floor));
        }
        if let Some(ceil) = bounds.ceil {
            prop_assert!(ceil >= x);
            prop_assert!(seq.contains(&ceil));
        }
        prop_assert_eq!(bounds.floor.is_none(), x < seq[0]);
        prop_assert_eq!(bounds.ceil.is_none(), x > seq[seq.len() - 1]);
    }

    /// Floor is the true maximum of the elements <= x (oracle: scan).
    #[test]
    fn prop_floor_ceil_match_linear_scan(seq in sorted_vec(), x in -150i64..150) {
        let bounds = floor_ceil(&seq, &x);
        prop_assert_eq!(bounds.floor, seq.iter().copied().filter(|v| *v <= x).max());
        prop_assert_eq!(bounds.ceil, seq.iter().copied().filter(|v| *v >= x).min());
    }

    /// The occurrence span agrees with the scan, and the count identity
    /// last - first + 1 holds.
    #[test]
    fn prop_occurrence_span_matches_scan(seq in sorted_vec(), x in -150i64..150) {
        let expected_first = seq.iter().position(|v| *v == x);
        let expected_last = seq.iter().rposition(|v| *v == x);

        match occurrences(&seq, &x) {
            Some(span) => {
                prop_assert_eq!(Some(span.first), expected_first);
                prop_assert_eq!(Some(span.last), expected_last);
                prop_assert_eq!(span.count(), seq.iter().filter(|v| **v == x).count());
            }
            None => {
                prop_assert_eq!(expected_first, None);
                prop_assert_eq!(count_occurrences(&seq, &x), 0);
            }
        }
    }

    /// Repeated queries are idempotent.
    #[test]
    fn prop_count_is_idempotent(seq in sorted_vec(), x in -150i64..150) {
        prop_assert_eq!(count_occurrences(&seq, &x), count_occurrences(&seq, &x));
    }
}

// ============================================================================
// ROTATION LOCATORS
// ============================================================================

proptest! {
    /// Round-trip: rotating by r and asking for the rotation count
    /// recovers r exactly, and the element at that index is the minimum.
    #[test]
    fn prop_rotation_round_trip((seq, r) in rotated_distinct()) {
        prop_assert_eq!(rotation_count(&seq).unwrap(), r);

        let pivot = find_minimum(&seq).unwrap();
        prop_assert_eq!(pivot.rotation, r);
        prop_assert_eq!(Some(&pivot.value), seq.iter().min());
        prop_assert_eq!(&seq[pivot.rotation], &pivot.value);
    }

    /// Search over a rotated distinct slice agrees with a linear scan,
    /// both for present and absent targets.
    #[test]
    fn prop_rotated_search_matches_scan((seq, _) in rotated_distinct(), x in -1100i64..1100) {
        prop_assert_eq!(search_rotated(&seq, &x), seq.iter().position(|v| *v == x));
    }

    /// Every element of a rotated slice is found at its own index.
    #[test]
    fn prop_rotated_search_finds_every_member((seq, _) in rotated_distinct()) {
        for (i, v) in seq.iter().enumerate() {
            prop_assert_eq!(search_rotated(&seq, v), Some(i));
        }
    }

    /// The duplicate-tolerant search agrees with a membership scan.
    #[test]
    fn prop_duplicate_search_matches_scan(seq in rotated_with_duplicates(), x in -150i64..150) {
        prop_assert_eq!(contains_rotated(&seq, &x), seq.contains(&x));
    }
}

// ============================================================================
// PAIRING ANOMALY LOCATOR
// ============================================================================

proptest! {
    /// The singleton is recovered wherever it sits, and the XOR fallback
    /// agrees.
    #[test]
    fn prop_singleton_found_at_every_position(
        distinct in distinct_sorted_vec(),
        slot in any::<usize>(),
    ) {
        let slot = slot % distinct.len();
        let seq = paired_with_singleton(&distinct, slot);

        prop_assert_eq!(find_single(&seq), Ok(distinct[slot]));
        prop_assert_eq!(single_by_xor(&seq), Ok(distinct[slot]));
    }
}

// ============================================================================
// PEAK LOCATOR
// ============================================================================

proptest! {
    /// Whatever index comes back satisfies the peak condition.
    #[test]
    fn prop_returned_peak_is_valid(seq in peaked_vec()) {
        let i = find_peak(&seq).unwrap();
        prop_assert!(is_peak(&seq, i), "index {} is not a peak in {:?}", i, seq);
    }

    /// Monotonic slices peak at the greater boundary.
    #[test]
    fn prop_monotonic_slices_peak_at_boundary(sorted in distinct_sorted_vec()) {
        prop_assert_eq!(find_peak(&sorted), Ok(sorted.len() - 1));

        let mut reversed = sorted;
        reversed.reverse();
        prop_assert_eq!(find_peak(&reversed), Ok(0));
    }
}
