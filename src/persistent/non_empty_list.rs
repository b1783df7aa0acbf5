//! A list guaranteed to hold at least one element.

use std::fmt;
use std::ops::Deref;

use super::List;
use crate::control::Maybe;

/// A [`List`] that is known to be non-empty.
///
/// The only ways to obtain one are the validated constructors, which return
/// `Maybe::None` for empty input. Every read-only list operation is reachable
/// through `Deref`.
///
/// # Examples
///
/// ```rust
/// use monadic::control::Maybe;
/// use monadic::persistent::{List, NonEmptyList};
///
/// let names = NonEmptyList::from_vec(vec!["Ada", "Grace"]).some();
/// assert_eq!(*names.head(), "Ada");
/// assert_eq!(names.size(), 2);
///
/// assert_eq!(NonEmptyList::from_list(List::<i32>::nil()), Maybe::None);
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct NonEmptyList<T> {
    list: List<T>,
}

impl<T> NonEmptyList<T> {
    /// Wraps `list` if it has at least one element.
    pub fn from_list(list: List<T>) -> Maybe<Self> {
        if list.is_nil() {
            tracing::trace!("rejected empty list for NonEmptyList");
            Maybe::None
        } else {
            Maybe::Some(Self { list })
        }
    }

    /// Builds from a vector, keeping its order.
    pub fn from_vec(elements: Vec<T>) -> Maybe<Self> {
        Self::from_list(List::from_vec(elements))
    }

    /// Returns the first element. Always present.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadic::persistent::NonEmptyList;
    ///
    /// let list = NonEmptyList::from_slice(&[3, 4]).some();
    /// assert_eq!(*list.head(), 3);
    /// ```
    pub fn head(&self) -> &T {
        match self.list.head() {
            Some(head) => head,
            None => unreachable!("NonEmptyList is never empty"),
        }
    }

    /// Unwraps the underlying list.
    pub fn into_list(self) -> List<T> {
        self.list
    }
}

impl<T: Clone> NonEmptyList<T> {
    /// Builds from a slice, keeping its order.
    pub fn from_slice(elements: &[T]) -> Maybe<Self> {
        Self::from_list(List::from_slice(elements))
    }
}

impl<T> Deref for NonEmptyList<T> {
    type Target = List<T>;

    fn deref(&self) -> &List<T> {
        &self.list
    }
}

impl<T> From<NonEmptyList<T>> for List<T> {
    fn from(non_empty: NonEmptyList<T>) -> Self {
        non_empty.into_list()
    }
}

impl<T: fmt::Debug> fmt::Debug for NonEmptyList<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_tuple("NonEmptyList")
            .field(&self.list)
            .finish()
    }
}

impl<T: fmt::Display> fmt::Display for NonEmptyList<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.list, formatter)
    }
}

#[cfg(feature = "serde")]
impl<T: serde::Serialize> serde::Serialize for NonEmptyList<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serde::Serialize::serialize(&self.list, serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de, T> serde::Deserialize<'de> for NonEmptyList<T>
where
    T: serde::Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let list = <List<T> as serde::Deserialize>::deserialize(deserializer)?;
        Self::from_list(list)
            .try_some_value()
            .map_err(|_| serde::de::Error::invalid_length(0, &"at least one element"))
    }
}
