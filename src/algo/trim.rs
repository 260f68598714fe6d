//! Common prefix/suffix trimming.
//!
//! Real edits usually share large unchanged leading and trailing runs.
//! Stripping them up front shrinks the quadratic table to the middle
//! section, which is the primary mitigation against O(n*m) blowup on
//! large, mostly-unchanged inputs.

use crate::equality::Equality;

/// Lengths of the common leading and trailing runs, by identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Trim {
    pub prefix: usize,
    pub suffix: usize,
}

impl Trim {
    /// The middle section of a sequence of `len` elements after trimming.
    pub fn middle(&self, len: usize) -> std::ops::Range<usize> {
        self.prefix..len - self.suffix
    }
}

/// Find the maximal common prefix run, then the maximal common suffix run
/// over whatever the prefix left unclaimed. The suffix scan is bounded so
/// the two runs never overlap.
pub(crate) fn trim_common<T>(old: &[T], new: &[T], eq: &Equality<T>) -> Trim {
    let max_run = old.len().min(new.len());

    let mut prefix = 0;
    while prefix < max_run && eq.identity_eq(&old[prefix], &new[prefix]) {
        prefix += 1;
    }

    let mut suffix = 0;
    let max_suffix = max_run - prefix;
    while suffix < max_suffix
        && eq.identity_eq(&old[old.len() - 1 - suffix], &new[new.len() - 1 - suffix])
    {
        suffix += 1;
    }

    Trim { prefix, suffix }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn trim(old: &[i32], new: &[i32]) -> Trim {
        trim_common(old, new, &Equality::value())
    }

    #[test]
    fn test_prefix_run() {
        let t = trim(&[1, 2, 3, 4, 5], &[1, 2, 3, 6, 7]);
        assert_eq!(t, Trim { prefix: 3, suffix: 0 });
    }

    #[test]
    fn test_suffix_run() {
        let t = trim(&[1, 2, 3, 4, 5], &[6, 7, 3, 4, 5]);
        assert_eq!(t, Trim { prefix: 0, suffix: 3 });
    }

    #[test]
    fn test_prefix_and_suffix() {
        let t = trim(&[1, 2, 9, 4, 5], &[1, 2, 8, 4, 5]);
        assert_eq!(t, Trim { prefix: 2, suffix: 2 });
    }

    #[test]
    fn test_identical_sequences_claimed_by_prefix() {
        let t = trim(&[1, 2, 3], &[1, 2, 3]);
        assert_eq!(t, Trim { prefix: 3, suffix: 0 });
    }

    #[test]
    fn test_suffix_never_reconsumes_prefix_positions() {
        // Prefix claims both shared elements; suffix must not claim them again.
        let t = trim(&[1, 1, 1], &[1, 1]);
        assert_eq!(t, Trim { prefix: 2, suffix: 0 });
    }

    #[test]
    fn test_empty_inputs() {
        let t = trim(&[], &[]);
        assert_eq!(t, Trim { prefix: 0, suffix: 0 });

        let t = trim(&[1, 2], &[]);
        assert_eq!(t, Trim { prefix: 0, suffix: 0 });
    }

    #[test]
    fn test_middle_range() {
        let t = Trim { prefix: 2, suffix: 1 };
        assert_eq!(t.middle(7), 2..6);
    }

    #[test]
    fn test_identity_predicate_drives_trimming() {
        let eq = Equality::<&str>::diffable();
        let t = trim_common(&["a", "b", "c"], &["A", "b", "X"], &eq);
        assert_eq!(t, Trim { prefix: 2, suffix: 0 });
    }
}
