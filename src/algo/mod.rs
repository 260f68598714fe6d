//! Alignment engine internals.
//!
//! Data flows strictly `trim` -> `table` -> `classify`:
//!
//! - `trim`: strips the common leading/trailing runs before the quadratic step
//! - `table`: DP length table over the middle sections plus backtrack
//! - `classify`: merges the matched pairs into the four result lists
//!
//! [`aligned_pairs`] is public so adapters can consume the raw alignment
//! without going through [`crate::Diff`].

mod classify;
mod table;
mod trim;

pub(crate) use classify::classify;
pub use table::aligned_pairs;
