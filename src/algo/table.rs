//! Dynamic-programming alignment table.
//!
//! Builds the classic LCS length table over the trimmed middle sections and
//! backtracks one maximum-length identity alignment out of it.
//!
//! # Recurrence
//!
//! `lengths[i+1][j+1] = lengths[i][j] + 1` when `old_mid[i]` and `new_mid[j]`
//! are identity-equal, else `max(lengths[i+1][j], lengths[i][j+1])`.
//! O(rows * cols) time and space, proportional to the *trimmed* sizes.
//!
//! # Tie-break
//!
//! Several alignments can share the maximal length. The backtrack is fixed
//! and deterministic: when the current cell equals the cell one row up, the
//! old element is discarded first; else when it equals the cell one column
//! left, the new element is discarded; else the cell is a match. The choice
//! affects which LCS comes back, never its length.
//!
//! The table lives in a single flat buffer indexed `i * (cols + 1) + j` and
//! the backtrack is an iterative loop, so arbitrarily large inputs cannot
//! grow the stack.

use crate::algo::trim::trim_common;
use crate::equality::Equality;

/// Compute the full identity alignment between `old` and `new`.
///
/// Returns ascending `(old_pos, new_pos)` pairs, monotonic in both
/// sequences: common prefix pairs, then one maximum-length alignment of the
/// middle sections, then common suffix pairs.
///
/// Every pair is identity-matched; content equality is not consulted here.
///
/// # Example
///
/// ```
/// use seqlcs::{algo::aligned_pairs, Equality};
///
/// let old = [1, 2, 3, 4, 5, 6, 7];
/// let new = [8, 9, 2, 10, 4, 11, 6, 12];
/// let pairs = aligned_pairs(&old, &new, &Equality::value());
/// assert_eq!(pairs, vec![(1, 2), (3, 4), (5, 6)]);
/// ```
pub fn aligned_pairs<T>(old: &[T], new: &[T], eq: &Equality<T>) -> Vec<(usize, usize)> {
    let trim = trim_common(old, new, eq);
    let old_mid = &old[trim.middle(old.len())];
    let new_mid = &new[trim.middle(new.len())];

    let mut pairs: Vec<(usize, usize)> = (0..trim.prefix).map(|i| (i, i)).collect();

    for (i, j) in align_middle(old_mid, new_mid, eq) {
        pairs.push((i + trim.prefix, j + trim.prefix));
    }

    for k in 0..trim.suffix {
        pairs.push((old.len() - trim.suffix + k, new.len() - trim.suffix + k));
    }

    pairs
}

/// LCS table build + backtrack over the middle sections.
///
/// A degenerate empty section short-circuits before the table is allocated.
fn align_middle<T>(old_mid: &[T], new_mid: &[T], eq: &Equality<T>) -> Vec<(usize, usize)> {
    let rows = old_mid.len();
    let cols = new_mid.len();
    if rows == 0 || cols == 0 {
        return Vec::new();
    }

    let width = cols + 1;
    let mut lengths = vec![0usize; (rows + 1) * width];
    for i in 0..rows {
        for j in 0..cols {
            lengths[(i + 1) * width + j + 1] = if eq.identity_eq(&old_mid[i], &new_mid[j]) {
                lengths[i * width + j] + 1
            } else {
                lengths[(i + 1) * width + j].max(lengths[i * width + j + 1])
            };
        }
    }

    let mut pairs = Vec::with_capacity(lengths[rows * width + cols]);
    let (mut i, mut j) = (rows, cols);
    while i > 0 && j > 0 {
        let cell = lengths[i * width + j];
        if cell == lengths[(i - 1) * width + j] {
            i -= 1;
        } else if cell == lengths[i * width + j - 1] {
            j -= 1;
        } else {
            // Greater than both neighbors: the cell came from the diagonal,
            // so the elements match.
            i -= 1;
            j -= 1;
            pairs.push((i, j));
        }
    }

    pairs.reverse();
    pairs
}
