//! Either type - a value that can be one of two types.
//!
//! This module provides the `Either<L, R>` type, which represents a value
//! that is either a `Left(L)` or a `Right(R)`. It is right-biased: `map`,
//! `bind`, `ap` and `join` operate on the `Right` (success) channel, while a
//! `Left` (error) short-circuits through them unchanged.
//!
//! # Examples
//!
//! ```rust
//! use monadic::control::Either;
//!
//! fn parse(text: &str) -> Either<String, i32> {
//!     text.parse::<i32>()
//!         .map_err(|error| error.to_string())
//!         .into()
//! }
//!
//! let doubled = parse("21").map(|n| n * 2);
//! assert_eq!(doubled, Either::Right(42));
//!
//! let failed = parse("x").map(|n| n * 2);
//! assert!(failed.is_left());
//!
//! // Using fold to handle both cases
//! let message = failed.fold(|error| format!("error: {error}"), |n| n.to_string());
//! assert!(message.starts_with("error"));
//! ```

use std::fmt;

use super::ContainerError;
use super::Maybe;
use crate::typeclass::{Applicative, Foldable, Functor, Monad, Setoid, TypeConstructor};

/// A value that can be one of two types.
///
/// By convention:
/// - `Left` represents failure or the error value
/// - `Right` represents success
///
/// # Type Parameters
///
/// * `L` - The type of the left value
/// * `R` - The type of the right value
///
/// # Examples
///
/// ```rust
/// use monadic::control::Either;
///
/// let success: Either<String, i32> = Either::Right(42);
/// let failure: Either<String, i32> = Either::Left("error".to_string());
///
/// assert_eq!(success.map(|x| x * 2), Either::Right(84));
/// assert_eq!(failure.map(|x| x * 2), Either::Left("error".to_string()));
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Either<L, R> {
    /// The left variant, conventionally representing failure.
    Left(L),
    /// The right variant, conventionally representing success.
    Right(R),
}

impl<A> Either<A, A> {
    /// Builds an either from a value and its tag.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadic::control::Either;
    ///
    /// assert_eq!(Either::new("ijkl", true), Either::Right("ijkl"));
    /// assert_eq!(Either::new("ijkl", false), Either::Left("ijkl"));
    /// ```
    #[inline]
    pub fn new(value: A, is_right: bool) -> Self {
        if is_right {
            Self::Right(value)
        } else {
            Self::Left(value)
        }
    }

    /// Applies `function` to the stored value whichever side holds it,
    /// keeping the tag.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadic::control::Either;
    ///
    /// let left: Either<&str, &str> = Either::Left("abcd");
    /// assert_eq!(left.map_tagged(str::len), Either::Left(4));
    /// ```
    #[inline]
    pub fn map_tagged<B, F>(self, function: F) -> Either<B, B>
    where
        F: FnOnce(A) -> B,
    {
        match self {
            Self::Left(value) => Either::Left(function(value)),
            Self::Right(value) => Either::Right(function(value)),
        }
    }
}

impl<L, R> Either<L, R> {
    // =========================================================================
    // Type Checking
    // =========================================================================

    /// Returns `true` if this is a `Left` value.
    #[inline]
    pub const fn is_left(&self) -> bool {
        matches!(self, Self::Left(_))
    }

    /// Returns `true` if this is a `Right` value.
    #[inline]
    pub const fn is_right(&self) -> bool {
        matches!(self, Self::Right(_))
    }

    // =========================================================================
    // Value Extraction (Consuming)
    // =========================================================================

    /// Returns the left value, consuming the either.
    ///
    /// # Panics
    ///
    /// Panics with `"Cannot call left() on a Right."` if this is a `Right`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadic::control::Either;
    ///
    /// let left: Either<&str, i32> = Either::Left("abcd");
    /// assert_eq!(left.left(), "abcd");
    /// ```
    #[inline]
    pub fn left(self) -> L {
        self.try_left().unwrap_or_else(|error| panic!("{error}"))
    }

    /// Returns the right value, consuming the either.
    ///
    /// # Panics
    ///
    /// Panics with `"Cannot call right() on a Left."` if this is a `Left`.
    #[inline]
    pub fn right(self) -> R {
        self.try_right().unwrap_or_else(|error| panic!("{error}"))
    }

    /// Returns the left value, or [`ContainerError::LeftOfRight`].
    ///
    /// # Errors
    ///
    /// Fails when this is a `Right`.
    #[inline]
    pub fn try_left(self) -> Result<L, ContainerError> {
        match self {
            Self::Left(value) => Ok(value),
            Self::Right(_) => Err(ContainerError::LeftOfRight),
        }
    }

    /// Returns the right value, or [`ContainerError::RightOfLeft`].
    ///
    /// # Errors
    ///
    /// Fails when this is a `Left`.
    #[inline]
    pub fn try_right(self) -> Result<R, ContainerError> {
        match self {
            Self::Left(_) => Err(ContainerError::RightOfLeft),
            Self::Right(value) => Ok(value),
        }
    }

    // =========================================================================
    // Reference Extraction (Non-consuming)
    // =========================================================================

    /// Returns a reference to the left value if present.
    #[inline]
    pub const fn left_ref(&self) -> Option<&L> {
        match self {
            Self::Left(value) => Some(value),
            Self::Right(_) => None,
        }
    }

    /// Returns a reference to the right value if present.
    #[inline]
    pub const fn right_ref(&self) -> Option<&R> {
        match self {
            Self::Left(_) => None,
            Self::Right(value) => Some(value),
        }
    }

    // =========================================================================
    // Mapping Operations
    // =========================================================================

    /// Applies a function to the right value if present.
    ///
    /// If this is `Left(l)`, returns `Left(l)` unchanged.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadic::control::Either;
    ///
    /// let right: Either<i32, String> = Either::Right("hello".to_string());
    /// assert_eq!(right.map(|s| s.len()), Either::Right(5));
    /// ```
    #[inline]
    pub fn map<T, F>(self, function: F) -> Either<L, T>
    where
        F: FnOnce(R) -> T,
    {
        match self {
            Self::Left(value) => Either::Left(value),
            Self::Right(value) => Either::Right(function(value)),
        }
    }

    /// Applies a function to the left value if present.
    ///
    /// A `Right` is returned unchanged.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadic::control::Either;
    ///
    /// let left: Either<&str, i32> = Either::Left("abcd");
    /// assert_eq!(left.left_map(|s| format!("left: {s}")), Either::Left("left: abcd".to_string()));
    ///
    /// let right: Either<&str, i32> = Either::Right(1);
    /// assert_eq!(right.left_map(str::len), Either::Right(1));
    /// ```
    #[inline]
    pub fn left_map<T, F>(self, function: F) -> Either<T, R>
    where
        F: FnOnce(L) -> T,
    {
        match self {
            Self::Left(value) => Either::Left(function(value)),
            Self::Right(value) => Either::Right(value),
        }
    }

    /// Applies one of two functions depending on whether this is Left or Right.
    #[inline]
    pub fn bimap<T, U, F, G>(self, left_function: F, right_function: G) -> Either<T, U>
    where
        F: FnOnce(L) -> T,
        G: FnOnce(R) -> U,
    {
        match self {
            Self::Left(value) => Either::Left(left_function(value)),
            Self::Right(value) => Either::Right(right_function(value)),
        }
    }

    /// Applies a function returning an `Either` to the right value.
    ///
    /// A `Left` propagates unchanged.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadic::control::Either;
    ///
    /// let positive = |n: i32| if n > 0 { Either::Right(n) } else { Either::Left("not positive") };
    /// assert_eq!(Either::Right(3).bind(positive), Either::Right(3));
    /// assert_eq!(Either::Right(-3).bind(positive), Either::Left("not positive"));
    /// ```
    #[inline]
    pub fn bind<T, F>(self, function: F) -> Either<L, T>
    where
        F: FnOnce(R) -> Either<L, T>,
    {
        match self {
            Self::Left(value) => Either::Left(value),
            Self::Right(value) => function(value),
        }
    }

    /// Alias for [`Either::bind`].
    #[inline]
    pub fn flat_map<T, F>(self, function: F) -> Either<L, T>
    where
        F: FnOnce(R) -> Either<L, T>,
    {
        self.bind(function)
    }

    /// Alias for [`Either::bind`].
    #[inline]
    pub fn chain<T, F>(self, function: F) -> Either<L, T>
    where
        F: FnOnce(R) -> Either<L, T>,
    {
        self.bind(function)
    }

    /// Applies the function held by `either_function` to the right value.
    ///
    /// A `Left` receiver passes its value through untouched; a `Left`
    /// function is returned when the receiver is a `Right`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadic::control::Either;
    ///
    /// let function: Either<&str, fn(i32) -> i32> = Either::Right(|n: i32| n + 1);
    /// assert_eq!(Either::Right(1).ap(function), Either::Right(2));
    /// assert_eq!(Either::<&str, i32>::Left("e").ap(function), Either::Left("e"));
    /// ```
    #[inline]
    pub fn ap<T, F>(self, either_function: Either<L, F>) -> Either<L, T>
    where
        F: FnOnce(R) -> T,
    {
        match self {
            Self::Left(value) => Either::Left(value),
            Self::Right(value) => either_function.map(move |function| function(value)),
        }
    }

    /// Combines two eithers, keeping the right value of `self`.
    ///
    /// Both sides must be `Right` to succeed. Otherwise the `Left` of `other`
    /// is returned if it has one, then the `Left` of `self`.
    pub fn take_left<U>(self, other: Either<L, U>) -> Self {
        other.ap(self.map(|kept| move |_: U| kept))
    }

    /// Combines two eithers, keeping the right value of `other`.
    ///
    /// Both sides must be `Right` to succeed. Otherwise the `Left` of `other`
    /// is returned if it has one, then the `Left` of `self`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadic::control::Either;
    ///
    /// let first: Either<&str, &str> = Either::Right("efgh");
    /// let second: Either<&str, &str> = Either::Right("ijkl");
    /// assert_eq!(first.take_right(second), Either::Right("ijkl"));
    /// ```
    pub fn take_right<U>(self, other: Either<L, U>) -> Either<L, U> {
        other.ap(self.map(|_| |kept: U| kept))
    }

    // =========================================================================
    // Fold Operation
    // =========================================================================

    /// Eliminates the Either by applying one of two functions.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadic::control::Either;
    ///
    /// let left: Either<i32, String> = Either::Left(42);
    /// assert_eq!(left.fold(|x| x.to_string(), |s| s), "42");
    /// ```
    #[inline]
    pub fn fold<T, F, G>(self, left_function: F, right_function: G) -> T
    where
        F: FnOnce(L) -> T,
        G: FnOnce(R) -> T,
    {
        match self {
            Self::Left(value) => left_function(value),
            Self::Right(value) => right_function(value),
        }
    }

    /// Alias for [`Either::fold`].
    #[inline]
    pub fn cata<T, F, G>(self, left_function: F, right_function: G) -> T
    where
        F: FnOnce(L) -> T,
        G: FnOnce(R) -> T,
    {
        self.fold(left_function, right_function)
    }

    /// Runs `effect` on the right value if present.
    #[inline]
    pub fn for_each<F>(&self, effect: F)
    where
        F: FnOnce(&R),
    {
        if let Self::Right(value) = self {
            effect(value);
        }
    }

    /// Runs `effect` on the left value if present.
    #[inline]
    pub fn for_each_left<F>(&self, effect: F)
    where
        F: FnOnce(&L),
    {
        if let Self::Left(value) = self {
            effect(value);
        }
    }

    // =========================================================================
    // Swap Operation
    // =========================================================================

    /// Swaps the Left and Right variants.
    ///
    /// `Left(l)` becomes `Right(l)`, and `Right(r)` becomes `Left(r)`.
    #[inline]
    pub fn swap(self) -> Either<R, L> {
        match self {
            Self::Left(value) => Either::Right(value),
            Self::Right(value) => Either::Left(value),
        }
    }

    // =========================================================================
    // Conversion Operations
    // =========================================================================

    /// Converts into a `Maybe`: `Some(r)` for a `Right`, `None` for a `Left`.
    #[inline]
    pub fn to_maybe(self) -> Maybe<R> {
        match self {
            Self::Left(_) => Maybe::None,
            Self::Right(value) => Maybe::Some(value),
        }
    }

    /// Converts into an already-settled future.
    ///
    /// A `Right` resolves to `Ok`, a `Left` rejects with `Err`. Nothing is
    /// suspended inside the container, the returned future is ready on its
    /// first poll.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadic::control::Either;
    ///
    /// let settled = Either::<String, i32>::Right(7).to_future();
    /// assert_eq!(futures::executor::block_on(settled), Ok(7));
    /// ```
    #[cfg(feature = "async")]
    pub fn to_future(self) -> futures::future::Ready<Result<R, L>> {
        tracing::trace!(resolved = self.is_right(), "settling either as a future");
        futures::future::ready(self.into())
    }
}

impl<L, R> Either<L, Either<L, R>> {
    /// Flattens one level of nesting on the right.
    #[inline]
    pub fn join(self) -> Either<L, R> {
        self.bind(|inner| inner)
    }
}

// =============================================================================
// Debug Implementation
// =============================================================================

impl<L: fmt::Debug, R: fmt::Debug> fmt::Debug for Either<L, R> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Left(value) => formatter.debug_tuple("Left").field(value).finish(),
            Self::Right(value) => formatter.debug_tuple("Right").field(value).finish(),
        }
    }
}

// =============================================================================
// From Implementations
// =============================================================================

impl<L, R> From<Result<R, L>> for Either<L, R> {
    /// `Ok(r)` becomes `Right(r)`, and `Err(e)` becomes `Left(e)`.
    #[inline]
    fn from(result: Result<R, L>) -> Self {
        match result {
            Ok(value) => Self::Right(value),
            Err(error) => Self::Left(error),
        }
    }
}

impl<L, R> From<Either<L, R>> for Result<R, L> {
    /// `Right(r)` becomes `Ok(r)`, and `Left(l)` becomes `Err(l)`.
    #[inline]
    fn from(either: Either<L, R>) -> Self {
        match either {
            Either::Left(value) => Err(value),
            Either::Right(value) => Ok(value),
        }
    }
}

/// Both sides are `Left` with equal left values, or both are `Right` with
/// equal right values.
///
/// # Examples
///
/// ```rust
/// use monadic::control::Either;
/// use monadic::typeclass::Setoid;
///
/// let right: Either<String, f64> = Either::Right(f64::NAN);
/// assert!(right.equals(&Either::Right(f64::NAN)));
/// assert!(!right.equals(&Either::Left("NaN".to_string())));
/// ```
impl<L: Setoid, R: Setoid> Setoid for Either<L, R> {
    fn equals(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Left(left), Self::Left(other_left)) => left.equals(other_left),
            (Self::Right(right), Self::Right(other_right)) => right.equals(other_right),
            _ => false,
        }
    }
}

// =============================================================================
// Type Class Implementations
// =============================================================================

impl<L, R> TypeConstructor for Either<L, R> {
    type Inner = R;
    type WithType<B> = Either<L, B>;
}

impl<L: Clone, R> Functor for Either<L, R> {
    #[inline]
    fn fmap<B, F>(self, function: F) -> Either<L, B>
    where
        F: FnOnce(R) -> B,
    {
        self.map(function)
    }

    #[inline]
    fn fmap_ref<B, F>(&self, function: F) -> Either<L, B>
    where
        F: FnOnce(&R) -> B,
    {
        match self {
            Self::Left(value) => Either::Left(value.clone()),
            Self::Right(value) => Either::Right(function(value)),
        }
    }
}

impl<L: Clone, R> Applicative for Either<L, R> {
    #[inline]
    fn pure<B>(value: B) -> Either<L, B> {
        Either::Right(value)
    }

    #[inline]
    fn map2<B, C, F>(self, other: Either<L, B>, function: F) -> Either<L, C>
    where
        F: FnOnce(R, B) -> C,
    {
        match (self, other) {
            (Self::Right(a), Either::Right(b)) => Either::Right(function(a, b)),
            (Self::Left(error), _) | (_, Either::Left(error)) => Either::Left(error),
        }
    }

    #[inline]
    fn apply<B, Output>(self, other: Either<L, B>) -> Either<L, Output>
    where
        R: FnOnce(B) -> Output,
    {
        match self {
            Self::Left(error) => Either::Left(error),
            Self::Right(function) => other.map(function),
        }
    }
}

impl<L: Clone, R> Monad for Either<L, R> {
    #[inline]
    fn flat_map<B, F>(self, function: F) -> Either<L, B>
    where
        F: FnOnce(R) -> Either<L, B>,
    {
        self.bind(function)
    }
}

impl<L, R> Foldable for Either<L, R> {
    #[inline]
    fn fold_left<B, F>(self, init: B, mut function: F) -> B
    where
        F: FnMut(B, R) -> B,
    {
        match self {
            Self::Left(_) => init,
            Self::Right(value) => function(init, value),
        }
    }

    #[inline]
    fn fold_right<B, F>(self, init: B, mut function: F) -> B
    where
        F: FnMut(R, B) -> B,
    {
        match self {
            Self::Left(_) => init,
            Self::Right(value) => function(value, init),
        }
    }
}
