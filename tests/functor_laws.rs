//! Property-based tests for Functor laws.
//!
//! This module verifies that every container satisfies the functor laws:
//!
//! - **Identity Law**: `fa.map(|x| x) == fa`
//! - **Composition Law**: `fa.map(f).map(g) == fa.map(|x| g(f(x)))`
//!
//! Both the inherent `map` and the `Functor`/`FunctorMut` trait methods are
//! checked.

#![cfg(feature = "persistent")]

use monadic::control::{Either, Maybe};
use monadic::persistent::List;
use monadic::typeclass::{Functor, FunctorMut};
use proptest::prelude::*;

fn maybe_strategy() -> impl Strategy<Value = Maybe<i32>> {
    prop::option::of(any::<i32>()).prop_map(Maybe::from)
}

fn either_strategy() -> impl Strategy<Value = Either<String, i32>> {
    prop::result::maybe_ok(any::<i32>(), any::<String>()).prop_map(Either::from)
}

fn list_strategy() -> impl Strategy<Value = List<i32>> {
    prop::collection::vec(any::<i32>(), 0..40).prop_map(List::from_vec)
}

// =============================================================================
// Maybe<A> Property Tests
// =============================================================================

proptest! {
    /// Identity Law for Maybe<i32>
    #[test]
    fn prop_maybe_identity_law(value in maybe_strategy()) {
        prop_assert_eq!(value.map(|x| x), value);
        prop_assert_eq!(value.fmap(|x| x), value);
    }

    /// Composition Law for Maybe<i32>
    #[test]
    fn prop_maybe_composition_law(value in maybe_strategy()) {
        let function1 = |n: i32| n.wrapping_add(1);
        let function2 = |n: i32| n.wrapping_mul(2);

        let left = value.map(function1).map(function2);
        let right = value.map(|x| function2(function1(x)));

        prop_assert_eq!(left, right);
    }

    /// Mapping preserves presence
    #[test]
    fn prop_maybe_map_preserves_presence(value in maybe_strategy()) {
        prop_assert_eq!(value.map(|n| n.to_string()).is_some(), value.is_some());
    }
}

// =============================================================================
// Either<L, R> Property Tests
// =============================================================================

proptest! {
    /// Identity Law for Either<String, i32>
    #[test]
    fn prop_either_identity_law(value in either_strategy()) {
        prop_assert_eq!(value.clone().map(|x| x), value.clone());
        prop_assert_eq!(value.clone().fmap(|x| x), value);
    }

    /// Composition Law for Either<String, i32>
    #[test]
    fn prop_either_composition_law(value in either_strategy()) {
        let function1 = |n: i32| n.wrapping_sub(7);
        let function2 = |n: i32| i64::from(n) * 3;

        let left = value.clone().map(function1).map(function2);
        let right = value.map(|x| function2(function1(x)));

        prop_assert_eq!(left, right);
    }

    /// `left_map` is the functor over the left channel
    #[test]
    fn prop_either_left_map_identity(value in either_strategy()) {
        prop_assert_eq!(value.clone().left_map(|x| x), value);
    }
}

// =============================================================================
// List<A> Property Tests
// =============================================================================

proptest! {
    /// Identity Law for List<i32>
    #[test]
    fn prop_list_identity_law(list in list_strategy()) {
        prop_assert_eq!(list.map(|x| *x), list.clone());
        prop_assert_eq!(list.clone().fmap_mut(|x| x), list);
    }

    /// Composition Law for List<i32>
    #[test]
    fn prop_list_composition_law(list in list_strategy()) {
        let function1 = |n: i32| n.wrapping_add(3);
        let function2 = |n: i32| n.wrapping_mul(5);

        let left = list.map(|x| function1(*x)).map(|x| function2(*x));
        let right = list.map(|x| function2(function1(*x)));

        prop_assert_eq!(left, right);
    }

    /// Mapping preserves size and order
    #[test]
    fn prop_list_map_preserves_order(elements in prop::collection::vec(any::<i16>(), 0..40)) {
        let list = List::from_vec(elements.clone());
        let expected: Vec<i32> = elements.iter().map(|n| i32::from(*n) * 2).collect();
        let mapped = list.map(|n| i32::from(*n) * 2);
        prop_assert_eq!(mapped.size(), list.size());
        prop_assert_eq!(mapped.to_vec(), expected);
    }
}
