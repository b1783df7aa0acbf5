//! Value containers for functional programming.
//!
//! This module provides the two sum types of the crate:
//!
//! - [`Maybe`]: A value that may be absent
//! - [`Either`]: A value that is one of two types, right-biased
//! - [`ContainerError`]: The failures raised by their strict accessors
//!
//! # Examples
//!
//! ## Optional Values
//!
//! ```rust
//! use monadic::control::Maybe;
//!
//! let name = Maybe::Some("Ada");
//! let greeting = name.map(|name| format!("Hello, {name}"));
//! assert_eq!(greeting.get_or_else("Hello, stranger".to_string()), "Hello, Ada");
//! ```
//!
//! ## Success or Failure
//!
//! ```rust
//! use monadic::control::Either;
//!
//! fn divide(dividend: i32, divisor: i32) -> Either<String, i32> {
//!     if divisor == 0 {
//!         Either::Left("division by zero".to_string())
//!     } else {
//!         Either::Right(dividend / divisor)
//!     }
//! }
//!
//! let result = divide(10, 2).bind(|half| divide(half, 0));
//! assert_eq!(result, Either::Left("division by zero".to_string()));
//! ```

mod either;
mod error;
mod maybe;

pub use either::Either;
pub use error::ContainerError;
pub use maybe::Maybe;
