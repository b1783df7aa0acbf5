//! Error types for the container subsystem.
//!
//! Every failure a container can raise is a programmer error detected at the
//! call site: building `Some` from an absent value or reading the wrong
//! variant. Each condition has a fixed message.

use thiserror::Error;

/// Represents the ways a container operation can fail.
///
/// The panicking accessors ([`Maybe::some`](crate::control::Maybe::some),
/// [`Either::left`](crate::control::Either::left),
/// [`Either::right`](crate::control::Either::right)) panic with the
/// `Display` text of these variants; their `try_*` counterparts return them.
///
/// # Examples
///
/// ```rust
/// use monadic::control::{ContainerError, Maybe};
///
/// let absent: Maybe<i32> = Maybe::None;
/// assert_eq!(absent.try_some_value(), Err(ContainerError::EmptyAccess));
/// assert_eq!(
///     ContainerError::EmptyAccess.to_string(),
///     "Cannot call .some() on a None."
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum ContainerError {
    /// `Some` was requested for an absent value.
    #[error("Can not create Some with illegal value: None.")]
    IllegalSome,
    /// The value of a `None` was requested.
    #[error("Cannot call .some() on a None.")]
    EmptyAccess,
    /// The left value of a `Right` was requested.
    #[error("Cannot call left() on a Right.")]
    LeftOfRight,
    /// The right value of a `Left` was requested.
    #[error("Cannot call right() on a Left.")]
    RightOfLeft,
}
