use classdef_core::class::SortedSet;

#[test]
fn from_iter_sorts_and_dedups() {
    let set: SortedSet<u32> = vec![5, 1, 3, 1, 5].into_iter().collect();
    assert_eq!(set.as_slice(), &[1, 3, 5]);
    assert!(set.contains(&3));
    assert!(!set.contains(&4));
    assert_eq!(set.position(&5), Some(2));
    assert_eq!(set.position(&4), None);
}

#[test]
fn merged_interleaves_and_collapses_shared_items() {
    let a: SortedSet<u32> = vec![1, 4, 9].into_iter().collect();
    let b: SortedSet<u32> = vec![2, 4, 10].into_iter().collect();
    let merged = a.merged(&b);
    assert_eq!(merged.as_slice(), &[1, 2, 4, 9, 10]);
    assert_eq!(merged.position(&9), Some(3));
    assert_eq!(a.merged(&SortedSet::empty()).as_slice(), a.as_slice());
}
