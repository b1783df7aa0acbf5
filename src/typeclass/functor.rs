//! Functor type class - mapping over container values.
//!
//! A `Functor` transforms the contents of a container without changing its
//! shape or tag.
//!
//! # Laws
//!
//! ## Identity Law
//!
//! ```text
//! fa.fmap(|x| x) == fa
//! ```
//!
//! ## Composition Law
//!
//! ```text
//! fa.fmap(f).fmap(g) == fa.fmap(|x| g(f(x)))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use monadic::control::Maybe;
//! use monadic::typeclass::Functor;
//!
//! let transformed = Maybe::Some(5).fmap(|n| n.to_string());
//! assert_eq!(transformed, Maybe::Some("5".to_string()));
//!
//! let absent: Maybe<i32> = Maybe::None;
//! assert_eq!(absent.fmap(|n| n.to_string()), Maybe::None);
//! ```

use super::higher::TypeConstructor;

/// A type class for single-slot containers that can have a function mapped
/// over their contents.
///
/// The function is a `FnOnce` because there is at most one value to
/// transform. Multi-element containers implement [`FunctorMut`] instead.
pub trait Functor: TypeConstructor {
    /// Applies a function to the value inside the functor.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadic::control::Either;
    /// use monadic::typeclass::Functor;
    ///
    /// let right: Either<String, i32> = Either::Right(20);
    /// assert_eq!(right.fmap(|n| n + 1), Either::Right(21));
    /// ```
    fn fmap<B, F>(self, function: F) -> Self::WithType<B>
    where
        F: FnOnce(Self::Inner) -> B;

    /// Applies a function to a reference of the value inside the functor.
    fn fmap_ref<B, F>(&self, function: F) -> Self::WithType<B>
    where
        F: FnOnce(&Self::Inner) -> B;
}

/// The functor of containers holding any number of elements.
///
/// The mapping function may be called once per element, so it is a `FnMut`.
///
/// # Examples
///
/// ```rust
/// use monadic::persistent::List;
/// use monadic::typeclass::FunctorMut;
///
/// let doubled = List::from_vec(vec![1, 2, 3]).fmap_mut(|n| n * 2);
/// assert_eq!(doubled.to_vec(), vec![2, 4, 6]);
/// ```
pub trait FunctorMut: TypeConstructor {
    /// Applies a function to each element, preserving order.
    fn fmap_mut<B, F>(self, function: F) -> Self::WithType<B>
    where
        F: FnMut(Self::Inner) -> B;

    /// Applies a function to a reference of each element, preserving order.
    fn fmap_ref_mut<B, F>(&self, function: F) -> Self::WithType<B>
    where
        F: FnMut(&Self::Inner) -> B;
}
