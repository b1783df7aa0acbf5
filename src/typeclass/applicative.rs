//! Applicative type class - applying functions within contexts.
//!
//! `Applicative` extends [`Functor`] with
//!
//! - lifting a pure value into the context (`pure`)
//! - combining two independent computations (`map2`)
//! - applying a wrapped function to a wrapped value (`apply`)
//!
//! # Laws
//!
//! ## Identity Law
//!
//! ```text
//! pure(|x| x).apply(v) == v
//! ```
//!
//! ## Homomorphism Law
//!
//! ```text
//! pure(f).apply(pure(x)) == pure(f(x))
//! ```
//!
//! ## Interchange Law
//!
//! ```text
//! u.apply(pure(y)) == pure(|f| f(y)).apply(u)
//! ```
//!
//! # Examples
//!
//! ```rust
//! use monadic::control::Maybe;
//! use monadic::typeclass::Applicative;
//!
//! let lifted: Maybe<i32> = <Maybe<()>>::pure(42);
//! assert_eq!(lifted, Maybe::Some(42));
//!
//! let sum = Maybe::Some(1).map2(Maybe::Some(2), |x, y| x + y);
//! assert_eq!(sum, Maybe::Some(3));
//! ```

use super::functor::Functor;

/// A type class for functors that can combine independent computations.
pub trait Applicative: Functor {
    /// Lifts a value into the applicative context.
    fn pure<B>(value: B) -> Self::WithType<B>;

    /// Combines two applicative values with a binary function.
    ///
    /// If either side is in its failure shape the result is too. When both
    /// are, the receiver's failure is kept.
    fn map2<B, C, F>(self, other: Self::WithType<B>, function: F) -> Self::WithType<C>
    where
        F: FnOnce(Self::Inner, B) -> C;

    /// Applies the wrapped function in `self` to the wrapped value in `other`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadic::control::Maybe;
    /// use monadic::typeclass::Applicative;
    ///
    /// let function = Maybe::Some(|n: i32| n * 3);
    /// assert_eq!(function.apply(Maybe::Some(4)), Maybe::Some(12));
    /// ```
    fn apply<B, Output>(self, other: Self::WithType<B>) -> Self::WithType<Output>
    where
        Self: Sized,
        Self::Inner: FnOnce(B) -> Output;
}
