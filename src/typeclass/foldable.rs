//! Foldable type class - folding over data structures.
//!
//! A `Foldable` can reduce its elements into a single summary value, either
//! combining the leftmost element first (`fold_left`) or the rightmost element
//! first (`fold_right`).
//!
//! # Laws
//!
//! For an associative `f`, `fold_left` and `fold_right` agree:
//!
//! ```text
//! fa.fold_left(init, f) == fa.fold_right(init, flip(f))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use monadic::persistent::List;
//! use monadic::typeclass::Foldable;
//!
//! let list = List::from_vec(vec![1, 2, 3]);
//! let digits = list.fold_right(String::new(), |element, accumulator| {
//!     format!("{element}{accumulator}")
//! });
//! assert_eq!(digits, "123");
//! ```

use super::higher::TypeConstructor;

/// A type class for structures whose elements can be folded into a value.
pub trait Foldable: TypeConstructor {
    /// Folds from the left: the leftmost element is combined first.
    fn fold_left<B, F>(self, init: B, function: F) -> B
    where
        F: FnMut(B, Self::Inner) -> B;

    /// Folds from the right: the rightmost element is combined first.
    fn fold_right<B, F>(self, init: B, function: F) -> B
    where
        F: FnMut(Self::Inner, B) -> B;

    /// Returns whether the structure contains no elements.
    fn is_empty(&self) -> bool
    where
        Self: Clone,
    {
        self.clone().fold_left(true, |_, _| false)
    }

    /// Returns the number of elements in the structure.
    fn length(&self) -> usize
    where
        Self: Clone,
    {
        self.clone().fold_left(0, |count, _| count + 1)
    }

    /// Returns `true` if any element satisfies the predicate.
    fn exists<P>(self, mut predicate: P) -> bool
    where
        Self: Sized,
        P: FnMut(&Self::Inner) -> bool,
    {
        self.fold_left(false, |found, element| found || predicate(&element))
    }
}
