//! Higher-Kinded Type emulation through Generic Associated Types.
//!
//! Rust cannot abstract over a type constructor such as `Maybe<_>` directly.
//! [`TypeConstructor`] works around this with a generic associated type so
//! that the type class traits can talk about "the same container holding a
//! different element type".
//!
//! # Example
//!
//! ```rust
//! use monadic::control::Maybe;
//! use monadic::typeclass::TypeConstructor;
//!
//! fn empty_like<T: TypeConstructor>(_value: &T) -> T::WithType<String>
//! where
//!     T::WithType<String>: Default,
//! {
//!     Default::default()
//! }
//!
//! let present = Maybe::Some(42);
//! let absent: Maybe<String> = empty_like(&present);
//! assert!(absent.is_none());
//! ```

/// A trait representing a type constructor.
///
/// # Associated Types
///
/// - `Inner`: The type parameter that this type constructor is currently applied to.
/// - `WithType<B>`: The same type constructor applied to a different type `B`.
///
/// # Laws
///
/// `<F as TypeConstructor>::WithType<F::Inner>` should be the same type as `F`.
pub trait TypeConstructor {
    /// The inner type that this type constructor is applied to.
    ///
    /// For example, for `Maybe<i32>`, this would be `i32`.
    type Inner;

    /// The same type constructor applied to a different type `B`.
    ///
    /// For example, for `Either<String, i32>`, `WithType<bool>` would be
    /// `Either<String, bool>`.
    type WithType<B>: TypeConstructor<Inner = B>;
}
