//! Logarithmic queries over sorted, rotated, and unimodal arrays.
//!
//! Every operation in this crate is the same binary-search driver wearing
//! a different predicate: keep an index window that provably contains the
//! answer, probe the midpoint, and let a monotonic decision shrink the
//! window. The driver lives in one place; the locators supply only their
//! decision logic.
//!
//! # Architecture
//!
//! ```text
//!                      ┌──────────────┐
//!                      │  driver.rs   │
//!                      │ (Step, bisect│
//!                      │  converge)   │
//!                      └──────┬───────┘
//!          ┌───────────┬─────┴─────┬───────────┐
//!          ▼           ▼           ▼           ▼
//!    ┌──────────┐┌───────────┐┌──────────┐┌─────────┐
//!    │ bounds.rs││rotation.rs││ single.rs││ peak.rs │
//!    │ floor/   ││ minimum,  ││ pairing  ││ unimodal│
//!    │ ceil,    ││ rotated   ││ anomaly  ││ peak    │
//!    │ spans    ││ search    ││          ││         │
//!    └──────────┘└───────────┘└──────────┘└─────────┘
//!          │           │           │           │
//!          └───────────┴─────┬─────┴───────────┘
//!                            ▼
//!                   ┌─────────────────┐
//!                   │   verified.rs   │
//!                   │ (SortedSlice,   │
//!                   │  RotatedSlice,  │
//!                   │  PairedSlice)   │
//!                   └─────────────────┘
//! ```
//!
//! # Which operation wants which shape
//!
//! | Operation                                              | Required shape                      |
//! |--------------------------------------------------------|-------------------------------------|
//! | [`floor_ceil`], [`occurrences`], [`count_occurrences`] | sorted, non-decreasing              |
//! | [`find_minimum`], [`rotation_count`], [`search_rotated`] | single rotation, distinct elements |
//! | [`contains_rotated`]                                   | single rotation, duplicates allowed |
//! | [`find_single`], [`single_by_xor`]                     | pairs plus one singleton            |
//! | [`find_peak`]                                          | at least one strict local maximum   |
//!
//! Shapes are the caller's responsibility; validating them on every call
//! would cost O(n) and defeat the O(log n) point. Detectable violations
//! (empty input, even length where odd is structural) fail loudly with
//! [`QueryError`]; the rest are checked in debug builds by [`contracts`]
//! and can be discharged once, up front, via the wrappers in
//! [`verified`].
//!
//! # Usage
//!
//! ```
//! use ordex::{find_minimum, floor_ceil, search_rotated};
//!
//! let bounds = floor_ceil(&[2, 4, 7, 10, 15], &9);
//! assert_eq!((bounds.floor, bounds.ceil), (Some(7), Some(10)));
//!
//! let pivot = find_minimum(&[4, 5, 6, 7, 0, 1, 2]).unwrap();
//! assert_eq!((pivot.value, pivot.rotation), (0, 4));
//!
//! assert_eq!(search_rotated(&[4, 5, 6, 7, 0, 1, 2], &0), Some(4));
//! ```

// Module declarations
mod bounds;
pub mod contracts;
mod driver;
mod peak;
mod rotation;
mod single;
mod types;
pub mod verified;

// Re-exports for public API
pub use bounds::{count_occurrences, first_occurrence, floor_ceil, last_occurrence, occurrences};
pub use driver::{bisect, converge, Step};
pub use peak::find_peak;
pub use rotation::{contains_rotated, find_minimum, rotation_count, search_rotated};
pub use single::{find_single, single_by_xor};
pub use types::{Bounds, Occurrences, Pivot, QueryError};
