//! Persistent (immutable) singly-linked list.
//!
//! This module provides [`List`], an immutable cons-list that uses
//! structural sharing for efficient operations.
//!
//! # Overview
//!
//! `List` is either empty (`Nil`) or a node holding a head element and a
//! tail list. It provides:
//!
//! - O(1) prepend (`cons`)
//! - O(1) head and tail access
//! - O(1) size (cached in every list value)
//! - O(n) append, map, filter and reverse
//!
//! All operations return new lists without modifying the original. Every
//! traversal is iterative, including dropping a long list, so list length is
//! not bounded by the call stack.
//!
//! # Examples
//!
//! ```rust
//! use monadic::persistent::List;
//!
//! let list = List::nil().cons(3).cons(2).cons(1);
//! assert_eq!(list.head(), Some(&1));
//! assert_eq!(list.size(), 3);
//!
//! // Structural sharing: the original list is preserved
//! let extended = list.cons(0);
//! assert_eq!(list.size(), 3);
//! assert_eq!(extended.size(), 4);
//!
//! let doubled = list.map(|n| n * 2);
//! assert_eq!(doubled.to_vec(), vec![2, 4, 6]);
//! ```
//!
//! # Structural Sharing
//!
//! ```text
//! list1: 1 -> 2 -> 3 -> nil
//! list2 = list1.cons(0): 0 -> [1 -> 2 -> 3 -> nil]  // shares [1, 2, 3] with list1
//! ```

use std::fmt;
use std::hash::{Hash, Hasher};
use std::iter::FromIterator;
use std::rc::Rc;

use crate::control::Maybe;
use crate::typeclass::{Foldable, FunctorMut, MonadMut, Setoid, TypeConstructor};

/// A single cons cell. `Rc` lets lists share their tails.
struct Node<T> {
    element: T,
    next: Option<Rc<Self>>,
}

/// Releases a chain of nodes one cell at a time.
///
/// Stops at the first node that is still shared with another list.
fn release<T>(mut current: Option<Rc<Node<T>>>) {
    while let Some(node) = current {
        current = match Rc::try_unwrap(node) {
            Ok(mut node) => node.next.take(),
            Err(_) => None,
        };
    }
}

/// A persistent (immutable) singly-linked list.
///
/// # Time Complexity
///
/// | Operation  | Complexity |
/// |------------|------------|
/// | `nil`      | O(1)       |
/// | `cons`     | O(1)       |
/// | `head`     | O(1)       |
/// | `tail`     | O(1)       |
/// | `size`     | O(1)       |
/// | `append`   | O(n)       |
/// | `map`      | O(n)       |
/// | `reverse`  | O(n)       |
///
/// `List` shares nodes through `Rc`, so it is neither `Send` nor `Sync`.
///
/// # Examples
///
/// ```rust
/// use monadic::persistent::List;
///
/// let list = List::of(42);
/// assert_eq!(list.head(), Some(&42));
/// ```
#[derive(Clone)]
pub struct List<T> {
    head: Option<Rc<Node<T>>>,
    /// Cached length: a node list has `1 + tail.length`, `Nil` has 0.
    length: usize,
}

static_assertions::assert_not_impl_any!(List<i32>: Send, Sync);

impl<T> List<T> {
    /// Creates the empty list.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadic::persistent::List;
    ///
    /// let list: List<i32> = List::nil();
    /// assert!(list.is_nil());
    /// assert_eq!(list.size(), 0);
    /// ```
    #[inline]
    #[must_use]
    pub const fn nil() -> Self {
        Self {
            head: None,
            length: 0,
        }
    }

    /// Creates a list containing a single element.
    #[inline]
    #[must_use]
    pub fn of(element: T) -> Self {
        Self::nil().cons(element)
    }

    /// Builds a list holding the elements of `elements` in the same order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadic::persistent::List;
    ///
    /// let list = List::from_vec(vec![1, 2, 3]);
    /// assert_eq!(list.head(), Some(&1));
    /// assert_eq!(list.size(), 3);
    /// ```
    #[must_use]
    pub fn from_vec(elements: Vec<T>) -> Self {
        Self::prepend_vec(elements, Self::nil())
    }

    /// Prepends `elements` in order in front of `tail`.
    ///
    /// Uses `Vec::pop()` to consume elements from the end, so the first
    /// element of the vector ends up at the head.
    fn prepend_vec(mut elements: Vec<T>, mut tail: Self) -> Self {
        let mut head = tail.head.take();
        let mut length = tail.length;
        while let Some(element) = elements.pop() {
            head = Some(Rc::new(Node {
                element,
                next: head,
            }));
            length += 1;
        }
        Self { head, length }
    }

    /// Prepends an element to the front of the list.
    ///
    /// The new list shares all of its tail with `self`.
    ///
    /// # Complexity
    ///
    /// O(1) time and space
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadic::persistent::List;
    ///
    /// let list = List::nil().cons(3).cons(2).cons(1);
    /// assert_eq!(list.to_vec(), vec![1, 2, 3]);
    /// ```
    #[inline]
    #[must_use]
    pub fn cons(&self, element: T) -> Self {
        Self {
            head: Some(Rc::new(Node {
                element,
                next: self.head.clone(),
            })),
            length: self.length + 1,
        }
    }

    /// Returns a reference to the first element, or `None` on the empty list.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadic::persistent::List;
    ///
    /// let list = List::nil().cons(2).cons(1);
    /// assert_eq!(list.head(), Some(&1));
    ///
    /// let empty: List<i32> = List::nil();
    /// assert_eq!(empty.head(), None);
    /// ```
    #[inline]
    #[must_use]
    pub fn head(&self) -> Option<&T> {
        self.head.as_ref().map(|node| &node.element)
    }

    /// Returns the list without its first element.
    ///
    /// The tail of the empty list is the empty list.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadic::persistent::List;
    ///
    /// let list = List::from_vec(vec![1, 2, 3]);
    /// assert_eq!(list.tail().to_vec(), vec![2, 3]);
    /// assert!(List::<i32>::nil().tail().is_nil());
    /// ```
    #[inline]
    #[must_use]
    pub fn tail(&self) -> Self {
        self.head.as_ref().map_or_else(Self::nil, |node| Self {
            head: node.next.clone(),
            length: self.length - 1,
        })
    }

    /// Returns the number of elements in the list.
    ///
    /// # Complexity
    ///
    /// O(1) - the length is cached
    #[inline]
    #[must_use]
    pub const fn size(&self) -> usize {
        self.length
    }

    /// Returns `true` if this is the empty list.
    #[inline]
    #[must_use]
    pub const fn is_nil(&self) -> bool {
        self.head.is_none()
    }

    /// Returns an iterator over references to the elements, front to back.
    #[inline]
    #[must_use]
    pub fn iter(&self) -> ListIterator<'_, T> {
        ListIterator {
            current: self.head.as_deref(),
            remaining: self.length,
        }
    }

    /// Applies `function` to every element, preserving order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadic::persistent::List;
    ///
    /// let words = List::from_vec(vec!["a", "bcd", "ef"]);
    /// assert_eq!(words.map(|word| word.len()).to_vec(), vec![1, 3, 2]);
    /// ```
    #[must_use]
    pub fn map<V, F>(&self, function: F) -> List<V>
    where
        F: FnMut(&T) -> V,
    {
        List::from_vec(self.iter().map(function).collect())
    }

    /// Maps every element to a list and concatenates the results in order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadic::persistent::List;
    ///
    /// let list = List::from_vec(vec![1, 2, 3]);
    /// let repeated = list.bind(|n| List::from_vec(vec![*n; *n]));
    /// assert_eq!(repeated.to_vec(), vec![1, 2, 2, 3, 3, 3]);
    /// ```
    #[must_use]
    pub fn bind<V, F>(&self, function: F) -> List<V>
    where
        V: Clone,
        F: FnMut(&T) -> List<V>,
    {
        let segments: Vec<List<V>> = self.iter().map(function).collect();
        segments
            .into_iter()
            .rev()
            .fold(List::nil(), |accumulator, segment| {
                segment.append(&accumulator)
            })
    }

    /// Alias for [`List::bind`].
    #[inline]
    #[must_use]
    pub fn flat_map<V, F>(&self, function: F) -> List<V>
    where
        V: Clone,
        F: FnMut(&T) -> List<V>,
    {
        self.bind(function)
    }

    /// Alias for [`List::bind`].
    #[inline]
    #[must_use]
    pub fn chain<V, F>(&self, function: F) -> List<V>
    where
        V: Clone,
        F: FnMut(&T) -> List<V>,
    {
        self.bind(function)
    }

    /// Runs `effect` on every element from left to right.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadic::persistent::List;
    ///
    /// let mut seen = Vec::new();
    /// List::from_vec(vec![1, 2, 3]).for_each(|n| seen.push(*n));
    /// assert_eq!(seen, vec![1, 2, 3]);
    /// ```
    pub fn for_each<F>(&self, effect: F)
    where
        F: FnMut(&T),
    {
        self.iter().for_each(effect);
    }
}

impl<T: Clone> List<T> {
    /// Creates a list from a slice, keeping its order.
    ///
    /// # Complexity
    ///
    /// O(n) where n = `slice.len()`
    #[must_use]
    pub fn from_slice(slice: &[T]) -> Self {
        let mut head: Option<Rc<Node<T>>> = None;
        for element in slice.iter().rev() {
            head = Some(Rc::new(Node {
                element: element.clone(),
                next: head,
            }));
        }
        Self {
            head,
            length: slice.len(),
        }
    }

    /// Returns a list with the elements of `self` followed by those of `other`.
    ///
    /// The result shares `other` as its tail; only the receiver is copied.
    ///
    /// # Complexity
    ///
    /// O(n) where n = `self.size()`
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadic::persistent::List;
    ///
    /// let first = List::from_vec(vec![1, 2]);
    /// let second = List::from_vec(vec![3, 4]);
    /// assert_eq!(first.append(&second).to_vec(), vec![1, 2, 3, 4]);
    /// ```
    #[must_use]
    pub fn append(&self, other: &Self) -> Self {
        if self.is_nil() {
            return other.clone();
        }
        if other.is_nil() {
            return self.clone();
        }
        Self::prepend_vec(self.to_vec(), other.clone())
    }

    /// Keeps the elements for which `predicate` holds, preserving order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadic::persistent::List;
    ///
    /// let list = List::from_vec(vec![1, 2, 3, 4, 5, 6]);
    /// assert_eq!(list.filter(|n| n % 2 == 0).to_vec(), vec![2, 4, 6]);
    /// ```
    #[must_use]
    pub fn filter<P>(&self, mut predicate: P) -> Self
    where
        P: FnMut(&T) -> bool,
    {
        Self::from_vec(
            self.iter()
                .filter(|element| predicate(element))
                .cloned()
                .collect(),
        )
    }

    /// Returns the first element satisfying `predicate`.
    ///
    /// The traversal stops at the first match.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadic::control::Maybe;
    /// use monadic::persistent::List;
    ///
    /// let list = List::from_vec(vec![1, 2, 3, 4]);
    /// assert_eq!(list.find(|n| *n > 2), Maybe::Some(3));
    /// assert_eq!(list.find(|n| *n > 9), Maybe::None);
    /// ```
    #[must_use]
    pub fn find<P>(&self, mut predicate: P) -> Maybe<T>
    where
        P: FnMut(&T) -> bool,
    {
        self.iter()
            .find(|element| predicate(element))
            .cloned()
            .into()
    }

    /// Returns a new list with the elements in reverse order.
    ///
    /// # Complexity
    ///
    /// O(n) time and space
    #[must_use]
    pub fn reverse(&self) -> Self {
        let mut result = Self::nil();
        for element in self {
            result = result.cons(element.clone());
        }
        result
    }

    /// Copies the elements into a `Vec`, front to back.
    #[must_use]
    pub fn to_vec(&self) -> Vec<T> {
        self.iter().cloned().collect()
    }
}

impl<T: Setoid> List<T> {
    /// Returns `true` if some element is structurally equal to `value`.
    ///
    /// The traversal stops at the first match.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadic::persistent::List;
    ///
    /// let list = List::from_vec(vec![1.0, f64::NAN]);
    /// assert!(list.contains(&f64::NAN));
    /// assert!(!list.contains(&2.0));
    /// ```
    #[must_use]
    pub fn contains(&self, value: &T) -> bool {
        self.iter().any(|element| element.equals(value))
    }
}

impl<V: Clone> List<List<V>> {
    /// Concatenates the inner lists in order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadic::persistent::List;
    ///
    /// let nested = List::from_vec(vec![
    ///     List::from_vec(vec![1, 2]),
    ///     List::nil(),
    ///     List::from_vec(vec![3]),
    /// ]);
    /// assert_eq!(nested.flatten().to_vec(), vec![1, 2, 3]);
    /// ```
    #[must_use]
    pub fn flatten(&self) -> List<V> {
        self.bind(|inner| inner.clone())
    }

    /// Alias for [`List::flatten`].
    #[inline]
    #[must_use]
    pub fn join(&self) -> List<V> {
        self.flatten()
    }
}

impl<V: Clone> List<Maybe<V>> {
    /// Keeps the present values, dropping every `None`, in order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadic::control::Maybe;
    /// use monadic::persistent::List;
    ///
    /// let list = List::from_vec(vec![Maybe::Some(1), Maybe::None, Maybe::Some(3)]);
    /// assert_eq!(list.flatten_maybe().to_vec(), vec![1, 3]);
    /// ```
    #[must_use]
    pub fn flatten_maybe(&self) -> List<V> {
        List::from_vec(
            self.iter()
                .filter_map(|maybe| maybe.as_ref().or_null())
                .cloned()
                .collect(),
        )
    }
}

impl<T> Drop for List<T> {
    fn drop(&mut self) {
        release(self.head.take());
    }
}

// =============================================================================
// Iterator Implementation
// =============================================================================

/// An iterator over references to elements of a [`List`].
pub struct ListIterator<'a, T> {
    current: Option<&'a Node<T>>,
    remaining: usize,
}

impl<'a, T> Iterator for ListIterator<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.current.map(|node| {
            self.current = node.next.as_deref();
            self.remaining -= 1;
            &node.element
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for ListIterator<'_, T> {}

/// An owning iterator over elements of a [`List`].
///
/// Nodes owned by no other list are taken apart without cloning; shared
/// nodes have their element cloned.
pub struct ListIntoIterator<T> {
    next: Option<Rc<Node<T>>>,
    remaining: usize,
}

impl<T: Clone> Iterator for ListIntoIterator<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.next.take()?;
        self.remaining -= 1;
        match Rc::try_unwrap(node) {
            Ok(Node { element, next }) => {
                self.next = next;
                Some(element)
            }
            Err(shared) => {
                self.next = shared.next.clone();
                Some(shared.element.clone())
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T: Clone> ExactSizeIterator for ListIntoIterator<T> {}

impl<T> Drop for ListIntoIterator<T> {
    fn drop(&mut self) {
        release(self.next.take());
    }
}

// =============================================================================
// Standard Trait Implementations
// =============================================================================

impl<T> Default for List<T> {
    #[inline]
    fn default() -> Self {
        Self::nil()
    }
}

impl<T> FromIterator<T> for List<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_vec(iter.into_iter().collect())
    }
}

impl<T: Clone> IntoIterator for List<T> {
    type Item = T;
    type IntoIter = ListIntoIterator<T>;

    #[inline]
    fn into_iter(mut self) -> Self::IntoIter {
        ListIntoIterator {
            next: self.head.take(),
            remaining: self.length,
        }
    }
}

impl<'a, T> IntoIterator for &'a List<T> {
    type Item = &'a T;
    type IntoIter = ListIterator<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: PartialEq> PartialEq for List<T> {
    fn eq(&self, other: &Self) -> bool {
        self.length == other.length && self.iter().zip(other.iter()).all(|(a, b)| a == b)
    }
}

impl<T: Eq> Eq for List<T> {}

/// Hashes the length first, then each element in order, so equal lists hash
/// equally.
impl<T: Hash> Hash for List<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.length.hash(state);
        for element in self {
            element.hash(state);
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for List<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_list().entries(self.iter()).finish()
    }
}

impl<T: fmt::Display> fmt::Display for List<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "[")?;
        for (index, element) in self.iter().enumerate() {
            if index > 0 {
                write!(formatter, ", ")?;
            }
            write!(formatter, "{element}")?;
        }
        write!(formatter, "]")
    }
}

/// Lists of different sizes are unequal without visiting any element;
/// otherwise elements are compared pairwise through [`Setoid`].
impl<T: Setoid> Setoid for List<T> {
    fn equals(&self, other: &Self) -> bool {
        self.length == other.length
            && self
                .iter()
                .zip(other.iter())
                .all(|(left, right)| left.equals(right))
    }
}

// =============================================================================
// Type Class Implementations
// =============================================================================

impl<T> TypeConstructor for List<T> {
    type Inner = T;
    type WithType<B> = List<B>;
}

impl<T: Clone> FunctorMut for List<T> {
    fn fmap_mut<B, F>(self, function: F) -> List<B>
    where
        F: FnMut(T) -> B,
    {
        List::from_vec(self.into_iter().map(function).collect())
    }

    fn fmap_ref_mut<B, F>(&self, function: F) -> List<B>
    where
        F: FnMut(&T) -> B,
    {
        self.map(function)
    }
}

impl<T: Clone> MonadMut for List<T> {
    fn flat_map_mut<B, F>(self, mut function: F) -> List<B>
    where
        B: Clone,
        F: FnMut(T) -> List<B>,
    {
        let segments: Vec<List<B>> = self.into_iter().map(&mut function).collect();
        segments
            .into_iter()
            .rev()
            .fold(List::nil(), |accumulator, segment| {
                segment.append(&accumulator)
            })
    }
}

impl<T: Clone> Foldable for List<T> {
    fn fold_left<B, F>(self, init: B, function: F) -> B
    where
        F: FnMut(B, T) -> B,
    {
        self.into_iter().fold(init, function)
    }

    fn fold_right<B, F>(self, init: B, mut function: F) -> B
    where
        F: FnMut(T, B) -> B,
    {
        let elements: Vec<T> = self.into_iter().collect();
        elements
            .into_iter()
            .rev()
            .fold(init, |accumulator, element| function(element, accumulator))
    }

    #[inline]
    fn is_empty(&self) -> bool
    where
        Self: Clone,
    {
        self.is_nil()
    }

    #[inline]
    fn length(&self) -> usize
    where
        Self: Clone,
    {
        self.length
    }
}

// =============================================================================
// Serde Implementations
// =============================================================================

#[cfg(feature = "serde")]
impl<T: serde::Serialize> serde::Serialize for List<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeSeq;
        let mut seq = serializer.serialize_seq(Some(self.size()))?;
        for element in self {
            seq.serialize_element(element)?;
        }
        seq.end()
    }
}

#[cfg(feature = "serde")]
struct ListVisitor<T> {
    marker: std::marker::PhantomData<T>,
}

#[cfg(feature = "serde")]
impl<T> ListVisitor<T> {
    const fn new() -> Self {
        Self {
            marker: std::marker::PhantomData,
        }
    }
}

#[cfg(feature = "serde")]
impl<'de, T> serde::de::Visitor<'de> for ListVisitor<T>
where
    T: serde::Deserialize<'de>,
{
    type Value = List<T>;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a sequence")
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
    where
        A: serde::de::SeqAccess<'de>,
    {
        let mut elements = Vec::with_capacity(seq.size_hint().unwrap_or(0));
        while let Some(element) = seq.next_element()? {
            elements.push(element);
        }
        Ok(List::from_vec(elements))
    }
}

#[cfg(feature = "serde")]
impl<'de, T> serde::Deserialize<'de> for List<T>
where
    T: serde::Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_seq(ListVisitor::new())
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    // =========================================================================
    // Display Tests
    // =========================================================================

    #[rstest]
    fn test_display_empty_list() {
        let list: List<i32> = List::nil();
        assert_eq!(format!("{list}"), "[]");
    }

    #[rstest]
    fn test_display_single_element_list() {
        let list = List::of(42);
        assert_eq!(format!("{list}"), "[42]");
    }

    #[rstest]
    fn test_display_multiple_elements_list() {
        let list: List<i32> = (1..=3).collect();
        assert_eq!(format!("{list}"), "[1, 2, 3]");
    }

    // =========================================================================
    // Construction and Access
    // =========================================================================

    #[rstest]
    fn test_nil_is_empty() {
        let list: List<i32> = List::nil();
        assert!(list.is_nil());
        assert_eq!(list.size(), 0);
        assert_eq!(list.head(), None);
    }

    #[rstest]
    fn test_cons_prepends() {
        let list = List::nil().cons(1).cons(2).cons(3);
        assert_eq!(list.head(), Some(&3));
        assert_eq!(list.size(), 3);
    }

    #[rstest]
    fn test_cons_shares_tail() {
        let list = List::from_vec(vec![1, 2, 3]);
        let extended = list.cons(0);
        assert_eq!(list.to_vec(), vec![1, 2, 3]);
        assert_eq!(extended.to_vec(), vec![0, 1, 2, 3]);
        assert!(std::ptr::eq(
            extended.tail().head().unwrap(),
            list.head().unwrap()
        ));
    }

    #[rstest]
    #[case(vec![], 0)]
    #[case(vec![7], 1)]
    #[case(vec![1, 2, 3, 4], 4)]
    fn test_size_matches_input(#[case] elements: Vec<i32>, #[case] expected: usize) {
        let list = List::from_vec(elements);
        assert_eq!(list.size(), expected);
        assert_eq!(list.iter().count(), expected);
        assert_eq!(list.tail().size(), expected.saturating_sub(1));
    }

    #[rstest]
    fn test_tail_of_nil_is_nil() {
        let list: List<i32> = List::nil();
        assert!(list.tail().is_nil());
    }

    #[rstest]
    fn test_from_slice_keeps_order() {
        let list = List::from_slice(&["a", "b", "c"]);
        assert_eq!(list.to_vec(), vec!["a", "b", "c"]);
    }

    // =========================================================================
    // Transformations
    // =========================================================================

    #[rstest]
    fn test_map_preserves_order() {
        let list = List::from_vec(vec![1, 2, 3]);
        assert_eq!(list.map(|n| n * 10).to_vec(), vec![10, 20, 30]);
    }

    #[rstest]
    fn test_append_shares_argument() {
        let first = List::from_vec(vec![1, 2]);
        let second = List::from_vec(vec![3, 4]);
        let combined = first.append(&second);
        assert_eq!(combined.to_vec(), vec![1, 2, 3, 4]);
        assert_eq!(combined.size(), 4);
        assert!(std::ptr::eq(
            combined.tail().tail().head().unwrap(),
            second.head().unwrap()
        ));
    }

    #[rstest]
    fn test_append_with_nil() {
        let list = List::from_vec(vec![1, 2]);
        assert_eq!(list.append(&List::nil()), list);
        assert_eq!(List::nil().append(&list), list);
    }

    #[rstest]
    fn test_bind_concatenates() {
        let list = List::from_vec(vec![1, 2, 3]);
        let result = list.bind(|n| List::from_vec(vec![*n, n * 10]));
        assert_eq!(result.to_vec(), vec![1, 10, 2, 20, 3, 30]);
        assert_eq!(result.size(), 6);
    }

    #[rstest]
    fn test_bind_to_nil_empties() {
        let list = List::from_vec(vec![1, 2, 3]);
        assert!(list.bind(|_| List::<i32>::nil()).is_nil());
    }

    #[rstest]
    fn test_filter_keeps_matching() {
        let list = List::from_vec(vec![1, 2, 3, 4, 5]);
        let odd = list.filter(|n| n % 2 == 1);
        assert_eq!(odd.to_vec(), vec![1, 3, 5]);
        assert_eq!(odd.size(), 3);
    }

    #[rstest]
    fn test_find_short_circuits() {
        let list = List::from_vec(vec![1, 2, 3, 4]);
        let mut visited = 0;
        let found = list.find(|n| {
            visited += 1;
            *n == 2
        });
        assert_eq!(found, Maybe::Some(2));
        assert_eq!(visited, 2);
    }

    #[rstest]
    fn test_reverse() {
        let list = List::from_vec(vec![1, 2, 3]);
        assert_eq!(list.reverse().to_vec(), vec![3, 2, 1]);
        assert_eq!(list.to_vec(), vec![1, 2, 3]);
    }

    #[rstest]
    fn test_flatten_maybe_drops_none() {
        let list = List::from_vec(vec![Maybe::None, Maybe::Some("a"), Maybe::None]);
        assert_eq!(list.flatten_maybe().to_vec(), vec!["a"]);
    }

    #[rstest]
    fn test_join_nested_lists() {
        let nested = List::from_vec(vec![List::from_vec(vec![1]), List::from_vec(vec![2, 3])]);
        assert_eq!(nested.join().to_vec(), vec![1, 2, 3]);
    }

    // =========================================================================
    // Equality
    // =========================================================================

    #[rstest]
    fn test_equals_uses_setoid() {
        let left = List::from_vec(vec![f64::NAN, 1.0]);
        let right = List::from_vec(vec![f64::NAN, 1.0]);
        assert!(left.equals(&right));
        assert!(!left.equals(&left.tail()));
    }

    #[rstest]
    fn test_contains_uses_setoid() {
        let list = List::from_vec(vec!["a".to_string(), "b".to_string()]);
        assert!(list.contains(&"b".to_string()));
        assert!(!list.contains(&"c".to_string()));
    }

    #[rstest]
    fn test_eq_and_hash_agree() {
        use std::collections::HashSet;
        let mut set = HashSet::new();
        set.insert(List::from_vec(vec![1, 2]));
        assert!(set.contains(&List::nil().cons(2).cons(1)));
    }

    #[rstest]
    fn test_debug() {
        let list = List::from_vec(vec![1, 2]);
        assert_eq!(format!("{list:?}"), "[1, 2]");
    }

    // =========================================================================
    // Iteration and Folding
    // =========================================================================

    #[rstest]
    fn test_into_iter_reports_exact_size() {
        let list = List::from_vec(vec![1, 2, 3]);
        let mut iterator = list.clone().into_iter();
        assert_eq!(iterator.len(), 3);
        assert_eq!(iterator.next(), Some(1));
        assert_eq!(iterator.len(), 2);
        assert_eq!(iterator.collect::<Vec<_>>(), vec![2, 3]);
        assert_eq!(list.size(), 3);
    }

    #[rstest]
    fn test_fold_left_and_right_order() {
        let list = List::from_vec(vec!["a", "b", "c"]);
        let left = list.clone().fold_left(String::new(), |acc, s| acc + s);
        let right = list.fold_right(String::new(), |s, acc| acc + s);
        assert_eq!(left, "abc");
        assert_eq!(right, "cba");
    }

    #[rstest]
    fn test_fmap_mut() {
        let list = List::from_vec(vec![1, 2, 3]);
        assert_eq!(list.fmap_mut(|n| n + 1).to_vec(), vec![2, 3, 4]);
    }

    #[rstest]
    fn test_long_list_drops_without_overflow() {
        let list: List<u32> = (0..200_000).collect();
        assert_eq!(list.size(), 200_000);
        drop(list);
    }
}
