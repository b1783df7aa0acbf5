//! Maybe type - an optional value with a safe functor.
//!
//! This module provides [`Maybe<T>`], a value that is either `Some(T)` or
//! `None`. It differs from `Option` in one deliberate way: [`Maybe::map`] is a
//! *safe map*. A callback that panics does not unwind through the caller, the
//! result degrades to `None` instead.
//!
//! # Examples
//!
//! ```rust
//! use monadic::control::Maybe;
//!
//! let name = Maybe::Some("ada");
//! assert_eq!(name.map(str::len), Maybe::Some(3));
//!
//! // A failing callback degrades to None.
//! let parsed = Maybe::Some("not a number").map(|text| text.parse::<i32>().unwrap());
//! assert!(parsed.is_none());
//!
//! // Conversions
//! assert_eq!(Maybe::Some(1).to_vec(), vec![1]);
//! assert!(Maybe::<i32>::None.to_either("missing").is_left());
//! ```

use std::any::Any;
use std::fmt;
use std::panic::{self, AssertUnwindSafe};

use super::ContainerError;
use super::Either;
#[cfg(feature = "persistent")]
use crate::persistent::List;
use crate::typeclass::{Applicative, Foldable, Functor, Monad, Setoid, TypeConstructor};

/// An optional value: either `Some(T)` or `None`.
///
/// `Some` always wraps a genuine value. Code holding an `Option<T>` that must
/// not be absent goes through [`Maybe::try_some`], which fails fast instead of
/// coercing absence to `None`.
///
/// # Examples
///
/// ```rust
/// use monadic::control::Maybe;
///
/// let present = Maybe::Some(21);
/// let doubled = present.bind(|n| Maybe::Some(n * 2));
/// assert_eq!(doubled.get_or_else(0), 42);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Maybe<T> {
    /// A present value.
    Some(T),
    /// No value.
    None,
}

impl<T> Maybe<T> {
    // =========================================================================
    // Construction
    // =========================================================================

    /// Builds a `Some` from a value that must be present.
    ///
    /// # Errors
    ///
    /// Returns [`ContainerError::IllegalSome`] when `candidate` is `None`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadic::control::{ContainerError, Maybe};
    ///
    /// assert_eq!(Maybe::try_some(Some(1)), Ok(Maybe::Some(1)));
    /// assert_eq!(Maybe::<i32>::try_some(None), Err(ContainerError::IllegalSome));
    /// ```
    pub fn try_some(candidate: Option<T>) -> Result<Self, ContainerError> {
        candidate.map(Self::Some).ok_or(ContainerError::IllegalSome)
    }

    /// Builds a `Maybe` from a possibly absent value, mapping absence to `None`.
    #[inline]
    pub fn from_option(candidate: Option<T>) -> Self {
        candidate.map_or(Self::None, Self::Some)
    }

    // =========================================================================
    // Type Checking
    // =========================================================================

    /// Returns `true` if a value is present.
    #[inline]
    pub const fn is_some(&self) -> bool {
        matches!(self, Self::Some(_))
    }

    /// Returns `true` if no value is present.
    #[inline]
    pub const fn is_none(&self) -> bool {
        !self.is_some()
    }

    // =========================================================================
    // Value Extraction
    // =========================================================================

    /// Returns the contained value.
    ///
    /// # Panics
    ///
    /// Panics with `"Cannot call .some() on a None."` if no value is present.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadic::control::Maybe;
    ///
    /// assert_eq!(Maybe::Some("test").some(), "test");
    /// ```
    #[inline]
    pub fn some(self) -> T {
        self.try_some_value().unwrap_or_else(|error| panic!("{error}"))
    }

    /// Returns the contained value, or [`ContainerError::EmptyAccess`].
    ///
    /// # Errors
    ///
    /// Fails when no value is present.
    #[inline]
    pub fn try_some_value(self) -> Result<T, ContainerError> {
        match self {
            Self::Some(value) => Ok(value),
            Self::None => Err(ContainerError::EmptyAccess),
        }
    }

    /// Returns the contained value or `default`.
    #[inline]
    pub fn get_or_else(self, default: T) -> T {
        match self {
            Self::Some(value) => value,
            Self::None => default,
        }
    }

    /// Returns the contained value or `default`.
    ///
    /// Same as [`Maybe::get_or_else`].
    #[inline]
    pub fn or_some(self, default: T) -> T {
        self.get_or_else(default)
    }

    /// Returns `self` if a value is present, otherwise `other`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadic::control::Maybe;
    ///
    /// assert_eq!(Maybe::None.or_else(Maybe::Some(2)), Maybe::Some(2));
    /// assert_eq!(Maybe::Some(1).or_else(Maybe::Some(2)), Maybe::Some(1));
    /// ```
    #[inline]
    pub fn or_else(self, other: Self) -> Self {
        match self {
            Self::Some(_) => self,
            Self::None => other,
        }
    }

    /// Converts into an `Option`, the nullable shape of the value.
    #[inline]
    pub fn or_null(self) -> Option<T> {
        match self {
            Self::Some(value) => Some(value),
            Self::None => None,
        }
    }

    /// Converts into an `Option`.
    ///
    /// Rust has a single notion of absence, so this is [`Maybe::or_null`].
    #[inline]
    pub fn or_undefined(self) -> Option<T> {
        self.or_null()
    }

    /// Borrows the contained value.
    #[inline]
    pub const fn as_ref(&self) -> Maybe<&T> {
        match self {
            Self::Some(value) => Maybe::Some(value),
            Self::None => Maybe::None,
        }
    }

    // =========================================================================
    // Mapping Operations
    // =========================================================================

    /// Applies `function` to the value if present.
    ///
    /// This is a safe map: if `function` panics, the panic is caught and the
    /// result is `None`. Catching requires the default unwinding panic
    /// strategy; under `panic = "abort"` the process aborts as usual.
    ///
    /// The panic hook is left installed, so the default hook still prints
    /// the panic message to stderr before the result degrades. Use
    /// [`Maybe::try_map`] or [`Maybe::filter_map`] to fail quietly.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadic::control::Maybe;
    ///
    /// assert_eq!(Maybe::Some(2).map(|n| n + 1), Maybe::Some(3));
    ///
    /// let failed: Maybe<i32> = Maybe::Some(0).map(|n: i32| {
    ///     if n == 0 {
    ///         panic!("division by zero");
    ///     }
    ///     10 / n
    /// });
    /// assert_eq!(failed, Maybe::None);
    /// ```
    pub fn map<V, F>(self, function: F) -> Maybe<V>
    where
        F: FnOnce(T) -> V,
    {
        match self {
            Self::Some(value) => {
                match panic::catch_unwind(AssertUnwindSafe(move || function(value))) {
                    Ok(mapped) => Maybe::Some(mapped),
                    Err(payload) => {
                        tracing::debug!(
                            panic = panic_message(payload.as_ref()),
                            "map callback panicked, degrading to None"
                        );
                        Maybe::None
                    }
                }
            }
            Self::None => Maybe::None,
        }
    }

    /// Applies a fallible `function`; an `Err` degrades to `None`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadic::control::Maybe;
    ///
    /// assert_eq!(Maybe::Some("7").try_map(str::parse::<i32>), Maybe::Some(7));
    /// assert_eq!(Maybe::Some("x").try_map(str::parse::<i32>), Maybe::None);
    /// ```
    pub fn try_map<V, E, F>(self, function: F) -> Maybe<V>
    where
        F: FnOnce(T) -> Result<V, E>,
    {
        self.bind(|value| function(value).map_or(Maybe::None, Maybe::Some))
    }

    /// Applies a `function` that may produce no value; absence degrades to
    /// `None`.
    pub fn filter_map<V, F>(self, function: F) -> Maybe<V>
    where
        F: FnOnce(T) -> Option<V>,
    {
        self.bind(|value| Maybe::from_option(function(value)))
    }

    /// Applies a `function` returning a `Maybe` if a value is present.
    #[inline]
    pub fn bind<V, F>(self, function: F) -> Maybe<V>
    where
        F: FnOnce(T) -> Maybe<V>,
    {
        match self {
            Self::Some(value) => function(value),
            Self::None => Maybe::None,
        }
    }

    /// Alias for [`Maybe::bind`].
    #[inline]
    pub fn flat_map<V, F>(self, function: F) -> Maybe<V>
    where
        F: FnOnce(T) -> Maybe<V>,
    {
        self.bind(function)
    }

    /// Alias for [`Maybe::bind`].
    #[inline]
    pub fn chain<V, F>(self, function: F) -> Maybe<V>
    where
        F: FnOnce(T) -> Maybe<V>,
    {
        self.bind(function)
    }

    /// Applies the function held by `maybe_function` to the value in `self`.
    ///
    /// `None` on either side yields `None`. The application goes through the
    /// safe [`Maybe::map`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadic::control::Maybe;
    ///
    /// let add_one = Maybe::Some(|n: i32| n + 1);
    /// assert_eq!(Maybe::Some(1).ap(add_one), Maybe::Some(2));
    ///
    /// let missing: Maybe<fn(i32) -> i32> = Maybe::None;
    /// assert_eq!(Maybe::Some(1).ap(missing), Maybe::None);
    /// ```
    pub fn ap<V, F>(self, maybe_function: Maybe<F>) -> Maybe<V>
    where
        F: FnOnce(T) -> V,
    {
        match self {
            Self::Some(value) => maybe_function.map(move |function| function(value)),
            Self::None => Maybe::None,
        }
    }

    /// Combines two maybes, keeping the value of `self`.
    ///
    /// Both sides must be present for the result to be `Some`.
    pub fn take_left<U>(self, other: Maybe<U>) -> Self {
        other.ap(self.map(|kept| move |_: U| kept))
    }

    /// Combines two maybes, keeping the value of `other`.
    ///
    /// Both sides must be present for the result to be `Some`.
    pub fn take_right<U>(self, other: Maybe<U>) -> Maybe<U> {
        other.ap(self.map(|_| |kept: U| kept))
    }

    /// Keeps the value only if it satisfies `predicate`.
    #[inline]
    pub fn filter<P>(self, predicate: P) -> Self
    where
        P: FnOnce(&T) -> bool,
    {
        match self {
            Self::Some(value) => {
                if predicate(&value) {
                    Self::Some(value)
                } else {
                    Self::None
                }
            }
            Self::None => Self::None,
        }
    }

    // =========================================================================
    // Eliminators
    // =========================================================================

    /// Returns `function(value)` if present, otherwise `default`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadic::control::Maybe;
    ///
    /// assert_eq!(Maybe::Some(4).fold(0, |n| n * 10), 40);
    /// assert_eq!(Maybe::<i32>::None.fold(0, |n| n * 10), 0);
    /// ```
    #[inline]
    pub fn fold<V, F>(self, default: V, function: F) -> V
    where
        F: FnOnce(T) -> V,
    {
        match self {
            Self::Some(value) => function(value),
            Self::None => default,
        }
    }

    /// Eliminates the `Maybe` with one handler per variant.
    #[inline]
    pub fn cata<Z, N, S>(self, none_function: N, some_function: S) -> Z
    where
        N: FnOnce() -> Z,
        S: FnOnce(T) -> Z,
    {
        match self {
            Self::Some(value) => some_function(value),
            Self::None => none_function(),
        }
    }

    /// Runs `effect` on the value if present.
    #[inline]
    pub fn for_each<F>(&self, effect: F)
    where
        F: FnOnce(&T),
    {
        if let Self::Some(value) = self {
            effect(value);
        }
    }

    // =========================================================================
    // Conversion Operations
    // =========================================================================

    /// Returns `vec![value]` if present, otherwise an empty `Vec`.
    #[inline]
    pub fn to_vec(self) -> Vec<T> {
        self.fold(Vec::new(), |value| vec![value])
    }

    /// Converts into an `Either`: `Right(value)` if present, otherwise
    /// `Left(left_default)`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadic::control::{Either, Maybe};
    ///
    /// assert_eq!(Maybe::Some(1).to_either("absent"), Either::Right(1));
    /// assert_eq!(Maybe::<i32>::None.to_either("absent"), Either::Left("absent"));
    /// ```
    #[inline]
    pub fn to_either<E>(self, left_default: E) -> Either<E, T> {
        match self {
            Self::Some(value) => Either::Right(value),
            Self::None => Either::Left(left_default),
        }
    }

    /// Like [`Maybe::to_either`], computing the left value only when needed.
    #[inline]
    pub fn to_either_else<E, F>(self, left_function: F) -> Either<E, T>
    where
        F: FnOnce() -> E,
    {
        match self {
            Self::Some(value) => Either::Right(value),
            Self::None => Either::Left(left_function()),
        }
    }

    /// Converts into a one-element `List` if present, otherwise `Nil`.
    #[cfg(feature = "persistent")]
    #[inline]
    pub fn to_list(self) -> List<T> {
        self.fold(List::nil(), List::of)
    }
}

impl<T> Maybe<Maybe<T>> {
    /// Flattens one level of nesting.
    #[inline]
    pub fn join(self) -> Maybe<T> {
        self.bind(|inner| inner)
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> &str {
    payload
        .downcast_ref::<&str>()
        .copied()
        .or_else(|| payload.downcast_ref::<String>().map(String::as_str))
        .unwrap_or("<non-string panic payload>")
}

// =============================================================================
// Standard Trait Implementations
// =============================================================================

impl<T> Default for Maybe<T> {
    #[inline]
    fn default() -> Self {
        Self::None
    }
}

impl<T: fmt::Display> fmt::Display for Maybe<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Some(value) => write!(formatter, "Some({value})"),
            Self::None => write!(formatter, "None"),
        }
    }
}

impl<T> From<Option<T>> for Maybe<T> {
    #[inline]
    fn from(candidate: Option<T>) -> Self {
        Self::from_option(candidate)
    }
}

impl<T> From<Maybe<T>> for Option<T> {
    #[inline]
    fn from(maybe: Maybe<T>) -> Self {
        maybe.or_null()
    }
}

impl<T: Setoid> Setoid for Maybe<T> {
    fn equals(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Some(left), Self::Some(right)) => left.equals(right),
            (Self::None, Self::None) => true,
            _ => false,
        }
    }
}

// =============================================================================
// Type Class Implementations
// =============================================================================

impl<T> TypeConstructor for Maybe<T> {
    type Inner = T;
    type WithType<B> = Maybe<B>;
}

impl<T> Functor for Maybe<T> {
    #[inline]
    fn fmap<B, F>(self, function: F) -> Maybe<B>
    where
        F: FnOnce(T) -> B,
    {
        self.map(function)
    }

    #[inline]
    fn fmap_ref<B, F>(&self, function: F) -> Maybe<B>
    where
        F: FnOnce(&T) -> B,
    {
        self.as_ref().map(function)
    }
}

impl<T> Applicative for Maybe<T> {
    #[inline]
    fn pure<B>(value: B) -> Maybe<B> {
        Maybe::Some(value)
    }

    #[inline]
    fn map2<B, C, F>(self, other: Maybe<B>, function: F) -> Maybe<C>
    where
        F: FnOnce(T, B) -> C,
    {
        match (self, other) {
            (Self::Some(a), Maybe::Some(b)) => Maybe::Some(function(a, b)),
            _ => Maybe::None,
        }
    }

    #[inline]
    fn apply<B, Output>(self, other: Maybe<B>) -> Maybe<Output>
    where
        T: FnOnce(B) -> Output,
    {
        other.ap(self)
    }
}

impl<T> Monad for Maybe<T> {
    #[inline]
    fn flat_map<B, F>(self, function: F) -> Maybe<B>
    where
        F: FnOnce(T) -> Maybe<B>,
    {
        self.bind(function)
    }
}

impl<T> Foldable for Maybe<T> {
    #[inline]
    fn fold_left<B, F>(self, init: B, mut function: F) -> B
    where
        F: FnMut(B, T) -> B,
    {
        match self {
            Self::Some(value) => function(init, value),
            Self::None => init,
        }
    }

    #[inline]
    fn fold_right<B, F>(self, init: B, mut function: F) -> B
    where
        F: FnMut(T, B) -> B,
    {
        match self {
            Self::Some(value) => function(value, init),
            Self::None => init,
        }
    }
}
