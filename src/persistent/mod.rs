//! Persistent (immutable) data structures.
//!
//! - [`List`]: Persistent singly-linked list with structural sharing
//! - [`NonEmptyList`]: A `List` validated to hold at least one element
//!
//! # Examples
//!
//! ```rust
//! use monadic::control::Maybe;
//! use monadic::persistent::{List, NonEmptyList};
//!
//! let list = List::nil().cons(3).cons(2).cons(1);
//! assert_eq!(list.head(), Some(&1));
//!
//! // Structural sharing: the original list is preserved
//! let extended = list.cons(0);
//! assert_eq!(list.size(), 3);
//! assert_eq!(extended.size(), 4);
//!
//! let checked = NonEmptyList::from_list(extended);
//! assert!(checked.is_some());
//! assert_eq!(NonEmptyList::from_list(List::<i32>::nil()), Maybe::None);
//! ```

mod list;
mod non_empty_list;

pub use list::{List, ListIntoIterator, ListIterator};
pub use non_empty_list::NonEmptyList;
