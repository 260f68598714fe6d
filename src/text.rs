//! Character-level string diffing.
//!
//! `str` offers forward iteration over chars but no random access by
//! character, and the alignment table needs random access. Both inputs are
//! therefore materialized into char buffers before diffing — an explicit
//! O(n) allocation on top of the alignment itself.
//!
//! Characters compare with case-insensitive identity and exact content (the
//! [`crate::Diffable`] impl for `char`), so a recased character counts as
//! updated rather than as a remove/add pair.

use crate::diff::Diff;

/// Diff two strings character by character.
///
/// Positions in the result are char offsets, not byte offsets.
///
/// # Example
///
/// ```
/// use seqlcs::text;
///
/// let d = text::diff("abc", "aBc");
/// assert_eq!(d.common, vec![0, 2]);
/// assert_eq!(d.updated, vec![1]);
/// ```
pub fn diff(old: &str, new: &str) -> Diff {
    let old: Vec<char> = old.chars().collect();
    let new: Vec<char> = new.chars().collect();
    crate::diff(&old, &new)
}

/// Longest common subsequence of two strings, character by character.
///
/// # Example
///
/// ```
/// use seqlcs::text;
///
/// assert_eq!(text::longest_common_subsequence("abcdefg", "hibdflm"), "bdf");
/// ```
pub fn longest_common_subsequence(old: &str, new: &str) -> String {
    let old: Vec<char> = old.chars().collect();
    let new: Vec<char> = new.chars().collect();
    let d = crate::diff(&old, &new);
    d.common.iter().map(|&pos| old[pos]).collect()
}
