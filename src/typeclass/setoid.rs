//! Setoid type class - structural equality as a capability.
//!
//! The containers of this crate compare their elements through [`Setoid`]
//! rather than through `PartialEq` directly. Element types that carry their
//! own notion of equality implement the trait by hand; plain data falls back
//! to primitive equality through the implementations provided here or the
//! [`setoid_via_partial_eq!`](crate::setoid_via_partial_eq) macro.
//!
//! Floating point values are reflexive under `Setoid`: `NaN` equals `NaN`.
//!
//! # Laws
//!
//! ```text
//! a.equals(&a)                                   // reflexivity
//! a.equals(&b) == b.equals(&a)                   // symmetry
//! a.equals(&b) && b.equals(&c) => a.equals(&c)   // transitivity
//! ```
//!
//! # Examples
//!
//! ```rust
//! use monadic::persistent::List;
//! use monadic::typeclass::Setoid;
//!
//! struct CaseInsensitive(String);
//!
//! impl Setoid for CaseInsensitive {
//!     fn equals(&self, other: &Self) -> bool {
//!         self.0.eq_ignore_ascii_case(&other.0)
//!     }
//! }
//!
//! let names = List::from_vec(vec![CaseInsensitive("Ada".into())]);
//! assert!(names.contains(&CaseInsensitive("ADA".into())));
//! ```

/// A type with a structural equality relation.
pub trait Setoid {
    /// Returns `true` if `self` and `other` are structurally equal.
    fn equals(&self, other: &Self) -> bool;
}

/// Implements [`Setoid`] for types whose `PartialEq` already is their
/// structural equality.
///
/// # Examples
///
/// ```rust
/// use monadic::setoid_via_partial_eq;
/// use monadic::typeclass::Setoid;
///
/// #[derive(PartialEq)]
/// struct Point {
///     x: i32,
///     y: i32,
/// }
///
/// setoid_via_partial_eq!(Point);
///
/// assert!(Point { x: 1, y: 2 }.equals(&Point { x: 1, y: 2 }));
/// ```
#[macro_export]
macro_rules! setoid_via_partial_eq {
    ($($target:ty),+ $(,)?) => {
        $(
            impl $crate::typeclass::Setoid for $target {
                #[inline]
                fn equals(&self, other: &Self) -> bool {
                    self == other
                }
            }
        )+
    };
}

setoid_via_partial_eq!(
    (),
    bool,
    char,
    i8,
    i16,
    i32,
    i64,
    i128,
    isize,
    u8,
    u16,
    u32,
    u64,
    u128,
    usize,
    str,
    String,
);

macro_rules! float_setoid {
    ($($float:ty),+) => {
        $(
            impl Setoid for $float {
                #[inline]
                #[allow(clippy::float_cmp)]
                fn equals(&self, other: &Self) -> bool {
                    self == other || (self.is_nan() && other.is_nan())
                }
            }
        )+
    };
}

float_setoid!(f32, f64);

impl<T: Setoid + ?Sized> Setoid for &T {
    #[inline]
    fn equals(&self, other: &Self) -> bool {
        (**self).equals(*other)
    }
}

impl<T: Setoid + ?Sized> Setoid for Box<T> {
    #[inline]
    fn equals(&self, other: &Self) -> bool {
        (**self).equals(&**other)
    }
}

impl<T: Setoid> Setoid for [T] {
    fn equals(&self, other: &Self) -> bool {
        self.len() == other.len()
            && self
                .iter()
                .zip(other.iter())
                .all(|(left, right)| left.equals(right))
    }
}

impl<T: Setoid> Setoid for Vec<T> {
    #[inline]
    fn equals(&self, other: &Self) -> bool {
        self.as_slice().equals(other.as_slice())
    }
}

impl<T: Setoid> Setoid for Option<T> {
    fn equals(&self, other: &Self) -> bool {
        match (self, other) {
            (Some(left), Some(right)) => left.equals(right),
            (None, None) => true,
            _ => false,
        }
    }
}

impl<A: Setoid, B: Setoid> Setoid for (A, B) {
    #[inline]
    fn equals(&self, other: &Self) -> bool {
        self.0.equals(&other.0) && self.1.equals(&other.1)
    }
}

impl<A: Setoid, B: Setoid, C: Setoid> Setoid for (A, B, C) {
    #[inline]
    fn equals(&self, other: &Self) -> bool {
        self.0.equals(&other.0) && self.1.equals(&other.1) && self.2.equals(&other.2)
    }
}
