//! # monadic
//!
//! Immutable functional containers for Rust.
//!
//! ## Overview
//!
//! The crate provides a small set of value types meant for expressive control
//! flow rather than bulk data processing:
//!
//! - **Type Classes**: `Functor`, `Applicative`, `Monad`, `Foldable` and the
//!   `Setoid` structural-equality capability
//! - **Control Structures**: [`Maybe`](control::Maybe) for optional values and
//!   [`Either`](control::Either) for right-biased success/failure
//! - **Persistent Data Structures**: the immutable singly-linked
//!   [`List`](persistent::List) and its refinement
//!   [`NonEmptyList`](persistent::NonEmptyList)
//!
//! All containers are immutable: every transformation produces a new value.
//!
//! ## Feature Flags
//!
//! - `typeclass`: Type class traits (Functor, Monad, etc.)
//! - `control`: `Maybe` and `Either`
//! - `persistent`: `List` and `NonEmptyList`
//! - `async`: `Either::to_future`
//! - `serde`: `Serialize`/`Deserialize` for every container
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use monadic::prelude::*;
//!
//! let list = List::from_vec(vec![Maybe::Some(1), Maybe::None, Maybe::Some(3)]);
//! assert_eq!(list.flatten_maybe().to_vec(), vec![1, 3]);
//!
//! let total = Maybe::Some(20)
//!     .bind(|n| if n > 10 { Maybe::Some(n * 2) } else { Maybe::None })
//!     .to_either("too small")
//!     .fold(|_| 0, |n| n + 2);
//! assert_eq!(total, 42);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types and traits.
///
/// # Usage
///
/// ```rust
/// use monadic::prelude::*;
/// ```
pub mod prelude {

    #[cfg(feature = "typeclass")]
    pub use crate::typeclass::*;

    #[cfg(feature = "control")]
    pub use crate::control::*;

    #[cfg(feature = "persistent")]
    pub use crate::persistent::*;
}

#[cfg(feature = "typeclass")]
pub mod typeclass;

#[cfg(feature = "control")]
pub mod control;

#[cfg(feature = "persistent")]
pub mod persistent;
