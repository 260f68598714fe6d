//! Prelude module for common imports.
//!
//! ```
//! use seqlcs::prelude::*;
//!
//! let d = diff(&[1, 2, 3], &[1, 3]);
//! assert_eq!(d.removed, vec![1]);
//! ```

// Diffing
pub use crate::diff::{
    Diff, diff, diff_iter, diff_with, longest_common_subsequence,
    longest_common_subsequence_with,
};

// Equality model
pub use crate::equality::{Diffable, Equality};

// Raw alignment
pub use crate::algo::aligned_pairs;

// Range adapter
pub use crate::ranges::{Ranges, to_ranges};
