//! Range-set adapter over ascending position lists.
//!
//! The core exposes positions as plain ascending `Vec<usize>`. Callers that
//! want a set representation (batch table updates, highlight spans) usually
//! want contiguous runs, so this adapter coalesces neighbors into half-open
//! ranges. It sits outside the engine: nothing in `algo` knows about it.

use std::ops::Range;

use smallvec::SmallVec;

use crate::diff::Diff;

/// Coalesced position runs. Most diffs produce a handful of runs, so the
/// first few live inline.
pub type Ranges = SmallVec<[Range<usize>; 4]>;

/// Coalesce an ascending position list into half-open ranges.
///
/// # Example
///
/// ```
/// use seqlcs::to_ranges;
///
/// assert_eq!(to_ranges(&[0, 1, 2, 5, 7, 8]).as_slice(), &[0..3, 5..6, 7..9]);
/// ```
pub fn to_ranges(positions: &[usize]) -> Ranges {
    let mut ranges = Ranges::new();
    for &pos in positions {
        match ranges.last_mut() {
            Some(last) if last.end == pos => last.end = pos + 1,
            _ => ranges.push(pos..pos + 1),
        }
    }
    ranges
}

impl Diff {
    /// Common positions as coalesced ranges.
    pub fn common_ranges(&self) -> Ranges {
        to_ranges(&self.common)
    }

    /// Updated positions as coalesced ranges.
    pub fn updated_ranges(&self) -> Ranges {
        to_ranges(&self.updated)
    }

    /// Added positions as coalesced ranges.
    pub fn added_ranges(&self) -> Ranges {
        to_ranges(&self.added)
    }

    /// Removed positions as coalesced ranges.
    pub fn removed_ranges(&self) -> Ranges {
        to_ranges(&self.removed)
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;
    use crate::diff::diff;

    #[test]
    fn test_empty_input() {
        assert!(to_ranges(&[]).is_empty());
    }

    #[test]
    fn test_singleton() {
        assert_eq!(to_ranges(&[3]).as_slice(), &[3..4]);
    }

    #[test]
    fn test_no_adjacent_positions() {
        assert_eq!(to_ranges(&[1, 3, 5]).as_slice(), &[1..2, 3..4, 5..6]);
    }

    #[test]
    fn test_single_run() {
        assert_eq!(to_ranges(&[0, 1, 2, 3]).as_slice(), &[0..4]);
    }

    #[test]
    fn test_diff_range_views() {
        let old = ["b", "c", "d", "e", "f", "g", "h"];
        let new = ["i", "j", "c", "k", "E", "l", "g", "m"];
        let d = diff(&old, &new);
        assert_eq!(d.common_ranges().as_slice(), &[1..2, 5..6]);
        assert_eq!(d.updated_ranges().as_slice(), &[3..4]);
        assert_eq!(d.added_ranges().as_slice(), &[0..2, 3..4, 5..6, 7..8]);
        assert_eq!(d.removed_ranges().as_slice(), &[0..1, 2..3, 4..5, 6..7]);
    }

    proptest! {
        #[test]
        fn prop_ranges_roundtrip(positions in prop::collection::btree_set(0usize..64, 0..32)) {
            let positions: Vec<usize> = positions.into_iter().collect();
            let flattened: Vec<usize> = to_ranges(&positions).iter().cloned().flatten().collect();
            prop_assert_eq!(flattened, positions);
        }
    }
}
