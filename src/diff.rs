//! Diff computation between two sequences.
//!
//! [`diff`] aligns an *old* and a *new* sequence by identity and classifies
//! every position of both into exactly one of four lists: common, updated,
//! added, removed. [`longest_common_subsequence`] projects the common
//! positions back into an actual output sequence.
//!
//! # Complexity
//!
//! O(rows * cols) time and space, where rows/cols are the lengths left over
//! after common prefix/suffix trimming. A diff call is one self-contained,
//! synchronous unit of work: no shared state, no input mutation, total over
//! every pair of finite sequences including both empty.

use crate::algo::{aligned_pairs, classify};
use crate::equality::{Diffable, Equality};

// =============================================================================
// Result type
// =============================================================================

/// Classified alignment between an old and a new sequence.
///
/// Each list is strictly ascending. `common`, `updated` and `removed` hold
/// positions in *old*; `added` holds positions in *new*. Every old position
/// lands in exactly one of the first three, every new position is either
/// aligned or in `added`, so:
///
/// ```text
/// common.len() + updated.len() + removed.len() == old.len()
/// common.len() + updated.len() + added.len()   == new.len()
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Diff {
    /// Old positions aligned to a new element with equal content.
    pub common: Vec<usize>,
    /// Old positions aligned by identity to a new element whose content
    /// differs. Empty in single-predicate mode.
    pub updated: Vec<usize>,
    /// New positions with no identity match in old.
    pub added: Vec<usize>,
    /// Old positions with no identity match in new.
    pub removed: Vec<usize>,
}

impl Diff {
    /// Whether the two sequences aligned without any change.
    pub fn is_identical(&self) -> bool {
        self.updated.is_empty() && self.added.is_empty() && self.removed.is_empty()
    }

    /// Number of positions classified as changed in either sequence.
    pub fn change_count(&self) -> usize {
        self.updated.len() + self.added.len() + self.removed.len()
    }
}

// =============================================================================
// Diff entry points
// =============================================================================

/// Diff two sequences using the element type's [`Diffable`] equality.
///
/// # Example
///
/// ```
/// use seqlcs::diff;
///
/// let old = [1, 2, 3, 4, 5, 6, 7];
/// let new = [8, 9, 2, 10, 4, 11, 6, 12];
/// let d = diff(&old, &new);
/// assert_eq!(d.common, vec![1, 3, 5]);
/// assert_eq!(d.removed, vec![0, 2, 4, 6]);
/// assert_eq!(d.added, vec![0, 1, 3, 5, 7]);
/// ```
pub fn diff<T: Diffable>(old: &[T], new: &[T]) -> Diff {
    diff_with(old, new, Equality::diffable())
}

/// Diff two sequences under an explicit [`Equality`] strategy.
pub fn diff_with<T>(old: &[T], new: &[T], eq: Equality<T>) -> Diff {
    let pairs = aligned_pairs(old, new, &eq);
    classify(old, new, &pairs, &eq)
}

/// Diff two forward-only sources.
///
/// The alignment table needs random access, so both inputs are materialized
/// into owned buffers first. That is an explicit O(n) allocation on top of
/// the diff itself; callers holding slices should use [`diff`] directly.
pub fn diff_iter<I>(old: I, new: I) -> Diff
where
    I: IntoIterator,
    I::Item: Diffable,
{
    let old: Vec<I::Item> = old.into_iter().collect();
    let new: Vec<I::Item> = new.into_iter().collect();
    diff(&old, &new)
}

// =============================================================================
// LCS extraction
// =============================================================================

/// Longest common subsequence of two sequences.
///
/// Built on [`diff`]: the common positions of *old*, projected back through
/// *old* in ascending order. In dual-predicate mode, identity matches with
/// differing content count as updated and are not part of the result.
///
/// # Example
///
/// ```
/// use seqlcs::longest_common_subsequence;
///
/// let lcs = longest_common_subsequence(&[1, 2, 3, 4, 5], &[1, 2, 3, 6, 7]);
/// assert_eq!(lcs, vec![1, 2, 3]);
/// ```
pub fn longest_common_subsequence<T: Diffable + Clone>(old: &[T], new: &[T]) -> Vec<T> {
    extract(old, &diff(old, new).common)
}

/// Longest common subsequence under an explicit [`Equality`] strategy.
pub fn longest_common_subsequence_with<T: Clone>(old: &[T], new: &[T], eq: Equality<T>) -> Vec<T> {
    extract(old, &diff_with(old, new, eq).common)
}

/// Project classified positions back through `old`.
///
/// The output length equals `positions.len()` and its order embeds in the
/// order of `old`.
fn extract<T: Clone>(old: &[T], positions: &[usize]) -> Vec<T> {
    positions.iter().map(|&pos| old[pos].clone()).collect()
}

// =============================================================================
// Tests
// =============================================================================
