//! The window-search driver every locator is built on.
//!
//! Each locator in this crate is the same loop wearing a different
//! predicate: keep a window of indices that provably contains the answer,
//! probe the midpoint, and let the predicate say which side of the window
//! survives. The loop, the midpoint arithmetic, and the termination
//! argument live here exactly once; the locators supply only the decision.
//!
//! Two faces of the same discipline:
//!
//! - [`bisect`] drives a closed window `[low, high]` that may empty out.
//!   Used by the value searches (floor/ceil, occurrences, rotated search),
//!   where "no answer" is a real outcome.
//! - [`converge`] drives a `low < high` window that never empties; the
//!   meeting point is the answer. Used by the minimum, peak, and
//!   single-element locators, whose answer is guaranteed to exist and may
//!   sit at `mid` itself (so the window keeps `mid` when stepping left).
//!
//! The midpoint is always `low + (high - low) / 2`: overflow-safe, and
//! floor division biases ties toward `low`. Several predicates (first
//! occurrence, the rotated-half test) rely on that bias, so it is part of
//! the contract, not an implementation detail.

/// Decision returned by a predicate for the window `[low, high]` probed
/// at `mid`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// The answer, if it exists, lies strictly left of `mid`.
    Left,
    /// The answer, if it exists, lies strictly right of `mid`.
    Right,
    /// The samples at `low`, `mid`, and `high` cannot distinguish the
    /// halves; drop one element from each end and probe again. This is
    /// the only step that does not halve the window, and the reason the
    /// duplicate-tolerant rotated search degrades to O(n) on adversarial
    /// input.
    Shrink,
    /// The answer is this index; stop.
    Found(usize),
}

/// Drive a closed window `[low, high]` until the predicate reports
/// [`Step::Found`] or the window empties.
///
/// The predicate receives `(low, mid, high)` for the current window; most
/// predicates only look at `mid`, but the rotated searches also sample
/// the window ends. Returns `None` when the window empties without a
/// `Found`.
///
/// Runs in `O(log(high - low + 1))` predicate evaluations as long as the
/// predicate never returns [`Step::Shrink`]; each `Shrink` costs one
/// extra evaluation instead of halving.
pub fn bisect<F>(mut low: usize, mut high: usize, mut predicate: F) -> Option<usize>
where
    F: FnMut(usize, usize, usize) -> Step,
{
    while low <= high {
        let mid = low + (high - low) / 2;
        match predicate(low, mid, high) {
            Step::Found(index) => return Some(index),
            Step::Right => low = mid + 1,
            Step::Left => {
                if mid == 0 {
                    break;
                }
                high = mid - 1;
            }
            Step::Shrink => {
                low += 1;
                if high == 0 {
                    break;
                }
                high -= 1;
            }
        }
    }
    None
}

/// Drive a `low < high` window down to its meeting point.
///
/// `go_right(mid, high)` answers "is the target strictly right of
/// `mid`?": `true` narrows to `[mid + 1, high]`, `false` to `[low, mid]`
/// (the answer may be `mid` itself, which is why this form exists at
/// all).
/// The predicate must be monotonic over the window: once it flips from
/// `true` to `false` it stays `false`, so the meeting point is the first
/// index where it answers `false`.
///
/// Requires `low <= high`; returns `low` immediately when they are equal,
/// so the window is never empty and the result is always a valid index.
pub fn converge<F>(mut low: usize, mut high: usize, mut go_right: F) -> usize
where
    F: FnMut(usize, usize) -> bool,
{
    while low < high {
        let mid = low + (high - low) / 2;
        if go_right(mid, high) {
            low = mid + 1;
        } else {
            high = mid;
        }
    }
    low
}
