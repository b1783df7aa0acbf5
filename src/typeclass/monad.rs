//! Monad type class - sequencing dependent computations.
//!
//! # Laws
//!
//! ## Left Identity
//!
//! ```text
//! pure(a).flat_map(f) == f(a)
//! ```
//!
//! ## Right Identity
//!
//! ```text
//! m.flat_map(pure) == m
//! ```
//!
//! ## Associativity
//!
//! ```text
//! m.flat_map(f).flat_map(g) == m.flat_map(|x| f(x).flat_map(g))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use monadic::control::Maybe;
//! use monadic::typeclass::Monad;
//!
//! let halved = Maybe::Some(10).flat_map(|n| {
//!     if n % 2 == 0 { Maybe::Some(n / 2) } else { Maybe::None }
//! });
//! assert_eq!(halved, Maybe::Some(5));
//! ```

use super::applicative::Applicative;
use super::functor::FunctorMut;

/// A type class for applicatives supporting dependent chaining with
/// built-in short-circuit.
pub trait Monad: Applicative {
    /// Applies a function returning a new monad and flattens the result.
    fn flat_map<B, F>(self, function: F) -> Self::WithType<B>
    where
        F: FnOnce(Self::Inner) -> Self::WithType<B>;
}

/// The monad of multi-element containers.
///
/// `flat_map_mut` applies the function to every element and concatenates the
/// results in order.
///
/// # Examples
///
/// ```rust
/// use monadic::persistent::List;
/// use monadic::typeclass::MonadMut;
///
/// let list = List::from_vec(vec![1, 2]);
/// let expanded = list.flat_map_mut(|n| List::from_vec(vec![n, n * 10]));
/// assert_eq!(expanded.to_vec(), vec![1, 10, 2, 20]);
/// ```
pub trait MonadMut: FunctorMut {
    /// Applies a function to each element and concatenates the results.
    ///
    /// The produced containers may share structure with other values, so
    /// their elements are cloned into the result.
    fn flat_map_mut<B, F>(self, function: F) -> Self::WithType<B>
    where
        B: Clone,
        F: FnMut(Self::Inner) -> Self::WithType<B>;
}
