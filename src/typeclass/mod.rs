//! Type class traits for functional programming.
//!
//! - [`TypeConstructor`]: Higher-kinded type emulation through GATs
//! - [`Functor`] / [`FunctorMut`]: Mapping over container values
//! - [`Applicative`]: Applying wrapped functions, combining computations
//! - [`Monad`] / [`MonadMut`]: Sequencing dependent computations
//! - [`Foldable`]: Reducing structures to a summary value
//! - [`Setoid`]: Structural equality as a capability
//!
//! The containers in [`control`](crate::control) and
//! [`persistent`](crate::persistent) implement these traits.

mod applicative;
mod foldable;
mod functor;
mod higher;
mod monad;
mod setoid;

pub use applicative::Applicative;
pub use foldable::Foldable;
pub use functor::{Functor, FunctorMut};
pub use higher::TypeConstructor;
pub use monad::{Monad, MonadMut};
pub use setoid::Setoid;
