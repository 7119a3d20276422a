use std::fmt::{self, Debug, Formatter};
use std::ptr;

use derive_more::IsVariant;

use crate::collections::linked::list::{LinkedList, Link, Node};
use crate::util::error::ListError;
use crate::util::result::ResultExtension;

/// A read-only position within a [`LinkedList`]. See [`LinkedList::before_begin`],
/// [`LinkedList::begin`] and [`LinkedList::end`] to create one.
///
/// A cursor is one of three things: before the first element (the list's sentinel), on an
/// element, or past the end. It only ever moves forward.
///
/// Two cursors are equal if they refer to the same position in the same list. Two elements that
/// hold equal values are still different positions. All past-the-end cursors are equal to each
/// other.
///
/// A cursor borrows its list, so the list can't be mutated (and no node can be freed) while the
/// cursor is alive.
pub struct Cursor<'a, T> {
    pub(crate) pos: CursorPosition<'a, T>,
}

#[derive(IsVariant)]
pub(crate) enum CursorPosition<'a, T> {
    Head(&'a Link<T>),
    Ptr(&'a Node<T>),
    Tail,
}

use CursorPosition::*;

impl<'a, T> CursorPosition<'a, T> {
    pub fn from_link(link: &'a Link<T>) -> CursorPosition<'a, T> {
        match link.as_deref() {
            Some(node) => Ptr(node),
            None => Tail,
        }
    }

    pub fn addr(&self) -> *const () {
        match self {
            Head(link) => ptr::from_ref(*link).cast(),
            Ptr(node) => ptr::from_ref(*node).cast(),
            Tail => ptr::null(),
        }
    }
}

impl<T> Clone for CursorPosition<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for CursorPosition<'_, T> {}

impl<'a, T> Cursor<'a, T> {
    pub(crate) const fn head(list: &'a LinkedList<T>) -> Cursor<'a, T> {
        Cursor {
            pos: Head(&list.head),
        }
    }

    pub(crate) fn front(list: &'a LinkedList<T>) -> Cursor<'a, T> {
        Cursor {
            pos: CursorPosition::from_link(&list.head),
        }
    }

    pub(crate) const fn tail() -> Cursor<'a, T> {
        Cursor {
            pos: Tail,
        }
    }

    /// Returns the element under the cursor, or [`None`] if the cursor is before the first
    /// element or past the end.
    pub const fn read(&self) -> Option<&'a T> {
        match self.pos {
            Ptr(node) => Some(&node.value),
            _ => None,
        }
    }

    /// Returns the element after the cursor, if there is one.
    pub fn peek_next(&self) -> Option<&'a T> {
        self.next_link()?.as_deref().map(|node| &node.value)
    }

    /// Advances the cursor to the next position.
    ///
    /// # Panics
    /// Panics if the cursor is already past the end.
    pub fn move_next(&mut self) {
        self.try_move_next().throw()
    }

    /// Advances the cursor to the next position, returning an [`Err`] rather than panicking if the
    /// cursor is already past the end.
    pub fn try_move_next(&mut self) -> Result<(), ListError> {
        let link = self.next_link().ok_or(ListError::PastTheEnd)?;
        self.pos = CursorPosition::from_link(link);
        Ok(())
    }

    pub fn is_before_begin(&self) -> bool {
        self.pos.is_head()
    }

    pub fn is_end(&self) -> bool {
        self.pos.is_tail()
    }

    const fn next_link(&self) -> Option<&'a Link<T>> {
        match self.pos {
            Head(link) => Some(link),
            Ptr(node) => Some(&node.next),
            Tail => None,
        }
    }
}

impl<T> Clone for Cursor<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Cursor<'_, T> {}

impl<T> PartialEq for Cursor<'_, T> {
    fn eq(&self, other: &Self) -> bool {
        self.pos.addr() == other.pos.addr()
    }
}

impl<T> Eq for Cursor<'_, T> {}

impl<T: Debug> Debug for Cursor<'_, T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self.pos {
            Head(_) => f.write_str("Cursor(Head)"),
            Ptr(node) => f.debug_tuple("Cursor").field(&node.value).finish(),
            Tail => f.write_str("Cursor(Tail)"),
        }
    }
}
