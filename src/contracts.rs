//! Runtime contracts for the shapes the locators assume.
//!
//! The locators promise O(log n) and therefore cannot afford to validate
//! their O(n) shape preconditions on every call. These checks square that
//! circle the usual way:
//!
//! 1. They are **zero-cost in release builds** (`debug_assert!`)
//! 2. They catch shape lies **early during development**, at the call
//!    site that told the lie
//!
//! Callers who want the shape validated in release builds should go
//! through the wrappers in [`verified`](crate::verified), which run these
//! checks once at construction and return errors instead of panicking.
//!
//! | Contract                  | Shape guaranteed                          |
//! |---------------------------|-------------------------------------------|
//! | `check_sorted`            | non-decreasing order                      |
//! | `check_rotated_distinct`  | distinct neighbors, at most one descent   |
//! | `check_paired`            | runs of exactly two, one run of one       |

/// Debug-assert that the slice is sorted in non-decreasing order.
#[inline]
pub fn check_sorted<T: Ord>(seq: &[T]) {
    debug_assert!(
        seq.windows(2).all(|pair| pair[0] <= pair[1]),
        "contract violation: sequence is not sorted in non-decreasing order"
    );
}

/// Debug-assert that the slice looks like a single rotation of a sorted
/// slice with distinct elements: no equal neighbors, and at most one
/// position where the order descends.
///
/// Neighbor checks cannot see global duplicates at non-adjacent
/// positions; this is a tripwire, not a proof.
#[inline]
pub fn check_rotated_distinct<T: Ord>(seq: &[T]) {
    debug_assert!(
        seq.windows(2).all(|pair| pair[0] != pair[1]),
        "contract violation: rotated search requires distinct elements"
    );
    debug_assert!(
        seq.windows(2).filter(|pair| pair[0] > pair[1]).count() <= 1,
        "contract violation: more than one descent; not a single rotation of a sorted sequence"
    );
}

/// Debug-assert the pairing shape: sorted, every value in a run of
/// exactly two, except one value in a run of one.
#[inline]
pub fn check_paired<T: Ord>(seq: &[T]) {
    #[cfg(debug_assertions)]
    {
        debug_assert!(seq.len() % 2 == 1, "contract violation: even length");
        check_sorted(seq);

        let mut singletons = 0usize;
        let mut i = 0usize;
        while i < seq.len() {
            let mut run = 1usize;
            while i + run < seq.len() && seq[i + run] == seq[i] {
                run += 1;
            }
            debug_assert!(
                run <= 2,
                "contract violation: a value occurs {} times; pairs allow at most two",
                run
            );
            if run == 1 {
                singletons += 1;
            }
            i += run;
        }
        debug_assert!(
            singletons == 1,
            "contract violation: {} unpaired values; exactly one expected",
            singletons
        );
    }
    #[cfg(not(debug_assertions))]
    {
        let _ = seq;
    }
}
