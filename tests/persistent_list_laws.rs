//! Property-based tests for List.
//!
//! These tests verify the structural invariants of the persistent list
//! (cached size, order preservation, sharing) and the algebraic laws of the
//! operations built on top of it.

#![cfg(feature = "persistent")]

use monadic::control::Maybe;
use monadic::persistent::{List, NonEmptyList};
use monadic::typeclass::{Foldable, Setoid};
use proptest::prelude::*;

// =============================================================================
// Strategy for generating List
// =============================================================================

/// Generates a `List<i32>` with up to `max_size` elements.
fn list_strategy(max_size: usize) -> impl Strategy<Value = List<i32>> {
    prop::collection::vec(any::<i32>(), 0..max_size).prop_map(List::from_vec)
}

/// Generates a small `List<i32>` for faster tests.
fn small_list() -> impl Strategy<Value = List<i32>> {
    list_strategy(20)
}

fn non_empty_list() -> impl Strategy<Value = List<i32>> {
    list_strategy(20).prop_filter("non-empty", |list| !list.is_nil())
}

proptest! {
    // =========================================================================
    // Size Invariant
    // =========================================================================

    #[test]
    fn prop_size_matches_iter_count(list in small_list()) {
        prop_assert_eq!(list.size(), list.iter().count());
    }

    #[test]
    fn prop_is_nil_matches_size_zero(list in small_list()) {
        prop_assert_eq!(list.is_nil(), list.size() == 0);
    }

    #[test]
    fn prop_cons_increases_size_by_one(list in small_list(), element: i32) {
        let new_list = list.cons(element);
        prop_assert_eq!(new_list.size(), list.size() + 1);
        prop_assert_eq!(new_list.head(), Some(&element));
        prop_assert_eq!(new_list.tail(), list);
    }

    #[test]
    fn prop_tail_decreases_size_by_one(list in non_empty_list()) {
        prop_assert_eq!(list.tail().size(), list.size() - 1);
    }

    // =========================================================================
    // Order Preservation
    // =========================================================================

    #[test]
    fn prop_from_vec_preserves_order(elements in prop::collection::vec(any::<i32>(), 0..20)) {
        let list = List::from_vec(elements.clone());
        prop_assert_eq!(list.to_vec(), elements.clone());
        prop_assert_eq!(List::from_slice(&elements), list);
    }

    #[test]
    fn prop_into_iter_yields_same_as_iter(list in small_list()) {
        let borrowed: Vec<i32> = list.iter().copied().collect();
        let owned: Vec<i32> = list.into_iter().collect();
        prop_assert_eq!(borrowed, owned);
    }

    // =========================================================================
    // Reverse
    // =========================================================================

    #[test]
    fn prop_reverse_reverse_is_identity(list in small_list()) {
        prop_assert_eq!(list.reverse().reverse(), list);
    }

    #[test]
    fn prop_reverse_matches_vec(list in small_list()) {
        let mut expected = list.to_vec();
        expected.reverse();
        prop_assert_eq!(list.reverse().to_vec(), expected);
    }

    // =========================================================================
    // Append
    // =========================================================================

    #[test]
    fn prop_append_associativity(
        first in small_list(),
        second in small_list(),
        third in small_list()
    ) {
        let left = first.append(&second).append(&third);
        let right = first.append(&second.append(&third));
        prop_assert_eq!(left, right);
    }

    #[test]
    fn prop_append_size(first in small_list(), second in small_list()) {
        prop_assert_eq!(first.append(&second).size(), first.size() + second.size());
    }

    #[test]
    fn prop_append_nil_identities(list in small_list()) {
        prop_assert_eq!(List::nil().append(&list), list.clone());
        prop_assert_eq!(list.append(&List::nil()), list);
    }

    // =========================================================================
    // Filter and Find
    // =========================================================================

    #[test]
    fn prop_filter_keeps_exactly_matching(list in small_list()) {
        let filtered = list.filter(|n| n % 3 == 0);
        prop_assert!(filtered.iter().all(|n| n % 3 == 0));
        prop_assert_eq!(filtered.size(), list.iter().filter(|n| *n % 3 == 0).count());
    }

    #[test]
    fn prop_find_agrees_with_iter(list in small_list()) {
        let found = list.find(|n| *n > 0);
        let expected: Maybe<i32> = list.iter().copied().find(|n| *n > 0).into();
        prop_assert_eq!(found, expected);
    }

    #[test]
    fn prop_contains_every_element(list in non_empty_list()) {
        let head = *list.head().unwrap();
        prop_assert!(list.contains(&head));
    }

    // =========================================================================
    // Folding
    // =========================================================================

    #[test]
    fn prop_fold_left_sum_matches_iter_sum(list in small_list()) {
        let expected: i64 = list.iter().map(|n| i64::from(*n)).sum();
        let folded = list.fold_left(0i64, |accumulator, n| accumulator + i64::from(n));
        prop_assert_eq!(folded, expected);
    }

    #[test]
    fn prop_fold_right_rebuilds_list(list in small_list()) {
        let rebuilt = list.clone().fold_right(List::nil(), |n, accumulator: List<i32>| accumulator.cons(n));
        prop_assert_eq!(rebuilt, list);
    }

    // =========================================================================
    // Equality
    // =========================================================================

    #[test]
    fn prop_equals_matches_eq(first in small_list(), second in small_list()) {
        prop_assert_eq!(first.equals(&second), first == second);
        prop_assert!(first.equals(&first.clone()));
    }

    #[test]
    fn prop_equals_detects_size_difference(list in non_empty_list()) {
        prop_assert!(!list.equals(&list.tail()));
    }

    // =========================================================================
    // Flatten and NonEmptyList
    // =========================================================================

    #[test]
    fn prop_flatten_maybe_matches_filter_map(values in prop::collection::vec(prop::option::of(any::<i32>()), 0..20)) {
        let expected: Vec<i32> = values.iter().flatten().copied().collect();
        let list = List::from_vec(values.into_iter().map(Maybe::from).collect());
        prop_assert_eq!(list.flatten_maybe().to_vec(), expected);
    }

    #[test]
    fn prop_non_empty_guard(list in small_list()) {
        let checked = NonEmptyList::from_list(list.clone());
        prop_assert_eq!(checked.is_some(), list.size() > 0);
    }
}
