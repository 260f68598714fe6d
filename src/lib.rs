//! seqlcs - Identity-aware sequence diffing and longest common subsequence
//!
//! Aligns two ordered, finite sequences and classifies every position of
//! both as common, updated, added or removed. The longest common
//! subsequence falls out of the alignment for free.
//!
//! ## Equality model
//!
//! Matching is driven by two predicates: *identity* equality (same logical
//! entity, e.g. case-insensitive or by key) decides what gets aligned, and
//! *content* equality (same exact value) decides whether an aligned pair is
//! `common` or `updated`. Plain value types collapse the two, so `updated`
//! never fires for them. See [`Equality`] and [`Diffable`].
//!
//! ## Modules
//! - `equality`: equality strategies and the `Diffable` trait
//! - `diff`: the `diff`/`longest_common_subsequence` entry points and the
//!   `Diff` result
//! - `algo`: trimming, DP alignment table, classification
//! - `ranges`: adapter coalescing position lists into ranges
//! - `text`: character-level string convenience wrappers
//! - `prelude`: common imports
//!
//! ## Usage
//!
//! ```
//! use seqlcs::{diff, longest_common_subsequence};
//!
//! let old = [1, 2, 3, 4, 5, 6, 7];
//! let new = [8, 9, 2, 10, 4, 11, 6, 12];
//!
//! assert_eq!(longest_common_subsequence(&old, &new), vec![2, 4, 6]);
//!
//! let d = diff(&old, &new);
//! assert_eq!(d.common, vec![1, 3, 5]);
//! assert_eq!(d.added, vec![0, 1, 3, 5, 7]);
//! assert_eq!(d.removed, vec![0, 2, 4, 6]);
//! ```
//!
//! ## Complexity
//!
//! A diff is O(rows * cols) in time and space over the section that remains
//! after common prefix/suffix trimming, so mostly-unchanged inputs stay
//! cheap. The computation is pure, synchronous and total: any pair of finite
//! sequences is valid input, including empty ones.

// =============================================================================
// Core modules
// =============================================================================

/// Alignment engine: trimming, DP table, classification
pub mod algo;

/// Diff entry points and result type
pub mod diff;

/// Equality strategies and the `Diffable` trait
pub mod equality;

/// Prelude for common imports
pub mod prelude;

/// Position-list to range-set adapter
pub mod ranges;

/// Character-level string diffing
pub mod text;

// =============================================================================
// Re-exports
// =============================================================================

pub use diff::{
    Diff, diff, diff_iter, diff_with, longest_common_subsequence,
    longest_common_subsequence_with,
};
pub use equality::{Diffable, Equality};
pub use ranges::{Ranges, to_ranges};
