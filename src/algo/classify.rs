//! Four-way position classification.
//!
//! Consumes the merged identity alignment and splits every position of both
//! sequences into exactly one of the four result lists. Content equality is
//! consulted here and only here, and only on identity-matched pairs.

use rustc_hash::{FxHashMap, FxHashSet};

use crate::diff::Diff;
use crate::equality::Equality;

/// Classify every position of `old` and `new` against the alignment.
///
/// - paired and content-equal -> `common`
/// - paired and content-different -> `updated`
/// - old position without a pair -> `removed`
/// - new position without a pair -> `added`
///
/// All four lists come out strictly ascending because both walks are in
/// position order.
pub(crate) fn classify<T>(
    old: &[T],
    new: &[T],
    pairs: &[(usize, usize)],
    eq: &Equality<T>,
) -> Diff {
    let matched_old: FxHashMap<usize, usize> = pairs.iter().copied().collect();
    let matched_new: FxHashSet<usize> = pairs.iter().map(|&(_, n)| n).collect();

    let mut common = Vec::new();
    let mut updated = Vec::new();
    let mut removed = Vec::new();
    for old_pos in 0..old.len() {
        match matched_old.get(&old_pos) {
            Some(&new_pos) if !eq.content_eq(&old[old_pos], &new[new_pos]) => {
                updated.push(old_pos);
            }
            Some(_) => common.push(old_pos),
            None => removed.push(old_pos),
        }
    }

    let added = (0..new.len()).filter(|n| !matched_new.contains(n)).collect();

    Diff { common, updated, added, removed }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unpaired_positions_split_into_removed_and_added() {
        let old = [1, 2, 3];
        let new = [2, 4];
        let d = classify(&old, &new, &[(1, 0)], &Equality::value());
        assert_eq!(d.common, vec![1]);
        assert_eq!(d.updated, vec![]);
        assert_eq!(d.removed, vec![0, 2]);
        assert_eq!(d.added, vec![1]);
    }

    #[test]
    fn test_content_mismatch_reclassifies_as_updated() {
        let old = ["b", "c"];
        let new = ["b", "C"];
        let eq = Equality::<&str>::diffable();
        let d = classify(&old, &new, &[(0, 0), (1, 1)], &eq);
        assert_eq!(d.common, vec![0]);
        assert_eq!(d.updated, vec![1]);
        assert!(d.added.is_empty());
        assert!(d.removed.is_empty());
    }

    #[test]
    fn test_value_mode_never_yields_updated() {
        let old = [5, 6];
        let new = [5, 6];
        let d = classify(&old, &new, &[(0, 0), (1, 1)], &Equality::value());
        assert_eq!(d.common, vec![0, 1]);
        assert!(d.updated.is_empty());
    }

    #[test]
    fn test_empty_inputs_yield_empty_lists() {
        let d = classify::<i32>(&[], &[], &[], &Equality::value());
        assert!(d.common.is_empty());
        assert!(d.updated.is_empty());
        assert!(d.added.is_empty());
        assert!(d.removed.is_empty());
    }

    #[test]
    fn test_one_sided_inputs() {
        let d = classify(&[1, 2], &[], &[], &Equality::value());
        assert_eq!(d.removed, vec![0, 1]);
        assert!(d.added.is_empty());

        let d = classify(&[], &[1, 2], &[], &Equality::value());
        assert_eq!(d.added, vec![0, 1]);
        assert!(d.removed.is_empty());
    }
}
