//! Shared builders for integration and property tests.

// Not every test binary uses every helper.
#![allow(dead_code)]

/// Left-rotate a sorted vector by `r` positions.
pub fn rotate_left(mut values: Vec<i64>, r: usize) -> Vec<i64> {
    if !values.is_empty() {
        let r = r % values.len();
        values.rotate_left(r);
    }
    values
}

/// Build a sorted pairs-plus-one-singleton array: every element of
/// `distinct` appears twice except `distinct[singleton]`, which appears
/// once.
pub fn paired_with_singleton(distinct: &[i64], singleton: usize) -> Vec<i64> {
    let mut out = Vec::with_capacity(distinct.len() * 2 - 1);
    for (i, &value) in distinct.iter().enumerate() {
        out.push(value);
        if i != singleton {
            out.push(value);
        }
    }
    out
}

/// Sort and deduplicate into a strictly increasing vector.
pub fn strictly_increasing(mut values: Vec<i64>) -> Vec<i64> {
    values.sort_unstable();
    values.dedup();
    values
}

/// Does `seq[i]` strictly exceed both neighbors (boundaries count as
/// lower)?
pub fn is_peak(seq: &[i64], i: usize) -> bool {
    (i == 0 || seq[i] > seq[i - 1]) && (i == seq.len() - 1 || seq[i] > seq[i + 1])
}
