use std::cmp::Ordering;
use std::fmt::{self, Debug, Display, Formatter};
use std::hash::{Hash, Hasher};
use std::mem;

use super::{Iter, IterMut, Link, Node};
use crate::collections::linked::cursor::{Cursor, CursorMut};
#[doc(inline)]
pub use crate::util::error::{CapacityOverflow, ListError};
use crate::util::result::ResultExtension;

/// A list with links in a single direction, mutated relative to a position through the
/// insert-after / erase-after protocol. See also: [`Cursor`] and [`CursorMut`] for traversal and
/// positional mutation.
///
/// The list keeps a "before-head" link (the sentinel) by value. Every node is exclusively owned by
/// the link before it, so a cursor obtained from [`before_begin_mut`](LinkedList::before_begin_mut)
/// can insert or erase at the front of the list exactly as it would anywhere else.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of items in the LinkedList.
///
/// | Method | Complexity |
/// |-|-|
/// | `len` | `O(1)` |
/// | `is_empty` | `O(1)` |
/// | `front` | `O(1)` |
/// | `push_front` | `O(1)` |
/// | `pop_front` | `O(1)` |
/// | `CursorMut::insert_after` | `O(1)` |
/// | `CursorMut::erase_after` | `O(1)` |
/// | `swap` | `O(1)` |
/// | `clear` | `O(n)` |
/// | `clone` | `O(n)` |
/// | `contains` | `O(n)` |
pub struct LinkedList<T> {
    pub(crate) head: Link<T>,
    pub(crate) len: usize,
}

impl<T> LinkedList<T> {
    /// Creates a new LinkedList with no elements.
    pub const fn new() -> LinkedList<T> {
        LinkedList {
            head: None,
            len: 0,
        }
    }

    /// Returns the number of elements in the LinkedList.
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the LinkedList contains no elements.
    pub const fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Returns a reference to the first element in the list, if it exists.
    pub fn front(&self) -> Option<&T> {
        self.head.as_deref().map(|node| &node.value)
    }

    /// Returns a mutable reference to the first element in the list, if it exists.
    pub fn front_mut(&mut self) -> Option<&mut T> {
        self.head.as_deref_mut().map(|node| &mut node.value)
    }

    /// Add the provided element to the front of the LinkedList.
    ///
    /// # Panics
    /// Panics if the length of the list would overflow a `usize`.
    pub fn push_front(&mut self, value: T) {
        self.len = self.len.checked_add(1).ok_or(CapacityOverflow).throw();

        let next = self.head.take();
        self.head = Some(Node::boxed(value, next));
    }

    /// Removes the first element from the list and returns it.
    ///
    /// # Panics
    /// Panics if the list is empty.
    pub fn pop_front(&mut self) -> T {
        self.try_pop_front().throw()
    }

    /// Removes the first element from the list and returns it, returning an [`Err`] rather than
    /// panicking if the list is empty.
    pub fn try_pop_front(&mut self) -> Result<T, ListError> {
        let node = self.head.take().ok_or(ListError::EmptyList)?;
        let Node { value, next } = *node;

        self.head = next;
        self.len -= 1;

        Ok(value)
    }

    /// Removes every element from the list, front to back.
    pub fn clear(&mut self) {
        while self.try_pop_front().is_ok() {}
    }

    /// Exchanges the contents of two lists without moving any of their nodes.
    pub fn swap(&mut self, other: &mut LinkedList<T>) {
        mem::swap(&mut self.head, &mut other.head);
        mem::swap(&mut self.len, &mut other.len);
    }

    /// Returns a cursor positioned before the first element, the anchor for inserting or erasing
    /// at the front of the list.
    pub const fn before_begin(&self) -> Cursor<'_, T> {
        Cursor::head(self)
    }

    /// Returns a cursor positioned on the first element, or past the end if the list is empty.
    pub fn begin(&self) -> Cursor<'_, T> {
        Cursor::front(self)
    }

    /// Returns a cursor positioned past the end of the list.
    pub const fn end(&self) -> Cursor<'_, T> {
        Cursor::tail()
    }

    /// Returns a mutable cursor positioned before the first element.
    pub const fn before_begin_mut(&mut self) -> CursorMut<'_, T> {
        CursorMut::head(self)
    }

    /// Returns a mutable cursor positioned on the first element, or past the end if the list is
    /// empty.
    pub fn begin_mut(&mut self) -> CursorMut<'_, T> {
        CursorMut::front(self)
    }

    /// Returns a mutable cursor positioned past the end of the list.
    pub const fn end_mut(&mut self) -> CursorMut<'_, T> {
        CursorMut::tail(self)
    }

    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        self.into_iter()
    }

    pub fn iter(&self) -> Iter<'_, T> {
        self.into_iter()
    }
}

impl<T: PartialEq> LinkedList<T> {
    /// Returns true if any element of the list is equal to `item`.
    pub fn contains(&self, item: &T) -> bool {
        self.iter().any(|i| i == item)
    }
}

/// Swaps the contents of two lists. Equivalent to [`LinkedList::swap`].
pub fn swap<T>(lhs: &mut LinkedList<T>, rhs: &mut LinkedList<T>) {
    lhs.swap(rhs);
}

impl<T> FromIterator<T> for LinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = LinkedList::new();
        list.extend(iter);
        list
    }
}

impl<T> Extend<T> for LinkedList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let mut cursor = self.before_begin_mut();
        while cursor.peek_next().is_some() {
            cursor.move_next();
        }

        for item in iter {
            cursor = cursor.insert_after(item);
        }
    }
}

impl<T, const N: usize> From<[T; N]> for LinkedList<T> {
    fn from(values: [T; N]) -> Self {
        values.into_iter().collect()
    }
}

impl<T: Clone> From<&[T]> for LinkedList<T> {
    fn from(values: &[T]) -> Self {
        values.iter().cloned().collect()
    }
}

impl<T> Default for LinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for LinkedList<T> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<T: Clone> Clone for LinkedList<T> {
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }

    fn clone_from(&mut self, source: &Self) {
        // Build the whole copy first so that self is untouched if cloning an element panics.
        let mut copy = source.clone();
        self.swap(&mut copy);
    }
}

impl<T: PartialEq> PartialEq for LinkedList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other)
    }
}

impl<T: Eq> Eq for LinkedList<T> {}

/// Lists are ordered lexicographically, by `<` alone. A pair of elements that is unordered in both
/// directions (such as two `NaN`s) is skipped over as though it were equal. `<=`, `>` and `>=` are
/// defined from `<` as `!(b < a)`, `b < a` and `!(a < b)`, so they hold even where
/// [`partial_cmp`](PartialOrd::partial_cmp) returns [`None`].
impl<T: PartialOrd> PartialOrd for LinkedList<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        if self < other {
            Some(Ordering::Less)
        } else if other < self {
            Some(Ordering::Greater)
        } else if self == other {
            Some(Ordering::Equal)
        } else {
            None
        }
    }

    fn lt(&self, other: &Self) -> bool {
        let mut rhs = other.iter();
        for l in self.iter() {
            match rhs.next() {
                None => return false,
                Some(r) if l < r => return true,
                Some(r) if r < l => return false,
                Some(_) => {},
            }
        }
        rhs.next().is_some()
    }

    fn le(&self, other: &Self) -> bool {
        !(other < self)
    }

    fn gt(&self, other: &Self) -> bool {
        other < self
    }

    fn ge(&self, other: &Self) -> bool {
        !(self < other)
    }
}

impl<T: Ord> Ord for LinkedList<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.iter().cmp(other)
    }
}

impl<T: Hash> Hash for LinkedList<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.len.hash(state);
        for value in self.iter() {
            value.hash(state);
        }

        // Terminate variable length hashing sequence.
        0xFF_u8.hash(state);
    }
}

impl<T: Debug> Debug for LinkedList<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("LinkedList")
            .field("contents", &self.iter())
            .field("len", &self.len())
            .finish()
    }
}

impl<T: Debug> Display for LinkedList<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({})",
            self.iter()
                .map(|i| format!("{i:?}"))
                .collect::<Vec<String>>()
                .join(") -> (")
        )
    }
}
