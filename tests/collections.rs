//! Validates the balanced ordered set: ordering, balance, rank, and value
//! semantics

use braidmaze::collections::BalancedOrderedSet;

#[test]
fn test_insert_scenario_yields_sorted_traversal() {
    let set: BalancedOrderedSet = [5, 7, 9, 3, 4, 6, 2, 8].into_iter().collect();

    let keys: Vec<i64> = set.iter().collect();
    assert_eq!(keys, vec![2, 3, 4, 5, 6, 7, 8, 9]);
    assert_eq!(set.len(), 8);
    assert!(set.is_balanced());

    // AVL height bound: ceil(1.44 * log2(9)) = 5
    assert!(set.height() <= 5, "height {} exceeds AVL bound", set.height());
}

#[test]
fn test_insert_duplicate_is_idempotent() {
    let mut set: BalancedOrderedSet = [5, 7, 9, 3].into_iter().collect();
    let snapshot = set.clone();

    assert!(!set.insert(7));
    assert_eq!(set.len(), 4);
    assert_eq!(set, snapshot);

    assert!(set.insert(6));
    assert_eq!(set.len(), 5);
    assert_ne!(set, snapshot);
}

#[test]
fn test_remove_covers_leaf_single_child_and_two_child_cases() {
    let mut set: BalancedOrderedSet = (1..=15).collect();

    assert!(!set.remove(99));
    assert_eq!(set.len(), 15);

    // Leaf
    assert!(set.remove(1));
    // Node with a single child after previous removal
    assert!(set.remove(2));
    // Interior node with two children: key swaps with in-order successor
    assert!(set.remove(8));

    assert_eq!(set.len(), 12);
    assert!(set.is_balanced());

    let keys: Vec<i64> = set.iter().collect();
    assert_eq!(keys, vec![3, 4, 5, 6, 7, 9, 10, 11, 12, 13, 14, 15]);
    assert_eq!(set.iter().count(), set.len());
}

#[test]
fn test_balance_holds_under_interleaved_operations() {
    let mut set = BalancedOrderedSet::new();

    // Sequential inserts force rotations on nearly every step
    for key in 0..100 {
        assert!(set.insert(key));
        assert!(set.is_balanced());
    }
    for key in 0..100 {
        if key % 3 == 0 {
            assert!(set.remove(key));
            assert!(set.is_balanced());
        }
    }

    assert_eq!(set.len(), 66);
    assert_eq!(set.iter().count(), set.len());
    assert!(set.height() <= 9, "height {} exceeds AVL bound", set.height());

    let keys: Vec<i64> = set.iter().collect();
    let mut sorted = keys.clone();
    sorted.sort_unstable();
    sorted.dedup();
    assert_eq!(keys, sorted, "in-order traversal must be strictly increasing");
}

#[test]
fn test_rank_matches_smaller_key_count() {
    let set: BalancedOrderedSet = [40, 10, 30, 50, 20, 60].into_iter().collect();

    for key in set.iter() {
        let smaller = set.iter().filter(|&other| other < key).count();
        assert_eq!(set.rank(key), Some(smaller));
    }

    assert_eq!(set.rank(10), Some(0));
    assert_eq!(set.rank(60), Some(5));
    assert_eq!(set.rank(35), None);
    assert_eq!(BalancedOrderedSet::new().rank(0), None);
}

#[test]
fn test_deep_copy_is_independent() {
    let original: BalancedOrderedSet = [1, 2, 3, 4, 5].into_iter().collect();
    let mut copy = original.clone();
    assert_eq!(copy, original);

    copy.remove(3);
    copy.insert(42);
    assert!(original.contains(3));
    assert!(!original.contains(42));

    let mut original = original;
    original.clear();
    assert_eq!(copy.len(), 5);
    assert!(copy.contains(42));
}

#[test]
fn test_equality_is_structural_not_just_same_keys() {
    let ascending: BalancedOrderedSet = [1, 2, 3, 4].into_iter().collect();
    let descending: BalancedOrderedSet = [4, 3, 2, 1].into_iter().collect();

    let keys_a: Vec<i64> = ascending.iter().collect();
    let keys_d: Vec<i64> = descending.iter().collect();
    assert_eq!(keys_a, keys_d, "both hold the same key set");

    // Same keys, different insertion order, different rotation history
    assert_ne!(ascending, descending);

    let replay: BalancedOrderedSet = [1, 2, 3, 4].into_iter().collect();
    assert_eq!(ascending, replay);
}

#[test]
fn test_sets_of_different_size_are_never_equal() {
    let small: BalancedOrderedSet = [1, 2].into_iter().collect();
    let large: BalancedOrderedSet = [1, 2, 3].into_iter().collect();
    assert_ne!(small, large);
}

#[test]
fn test_clear_resets_to_empty() {
    let mut set: BalancedOrderedSet = (0..32).collect();
    set.clear();

    assert!(set.is_empty());
    assert_eq!(set.len(), 0);
    assert_eq!(set.height(), 0);
    assert_eq!(set.iter().next(), None);

    assert!(set.insert(7));
    assert!(set.contains(7));
}

#[test]
fn test_move_leaves_source_empty() {
    let mut source: BalancedOrderedSet = [1, 2, 3].into_iter().collect();
    let taken = std::mem::take(&mut source);

    assert!(source.is_empty());
    assert_eq!(taken.len(), 3);
    assert!(taken.contains(2));
}

#[test]
fn test_contains_after_mixed_churn() {
    let mut set = BalancedOrderedSet::new();
    set.extend([-5, 0, 5, 10]);

    assert!(set.contains(-5));
    assert!(set.contains(10));
    assert!(!set.contains(7));

    set.remove(0);
    assert!(!set.contains(0));
    assert!(set.contains(5));
}
