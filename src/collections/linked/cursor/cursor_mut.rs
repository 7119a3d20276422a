use std::fmt::{self, Debug, Formatter};
use std::ptr::{self, NonNull};

use derive_more::IsVariant;

use super::{Cursor, CursorPosition};
use crate::collections::linked::list::{LinkedList, Link, Node};
use crate::util::error::{CapacityOverflow, ListError};
use crate::util::result::ResultExtension;

/// A position within a [`LinkedList`] that can insert and erase the element after itself. See
/// [`LinkedList::before_begin_mut`] and [`LinkedList::begin_mut`] to create one.
///
/// The cursor holds the list's only borrow for as long as it lives. This means that no other
/// cursor can be left dangling by [`erase_after`](CursorMut::erase_after), and the cursor's own
/// node is never the one removed.
///
/// `insert_after` and `erase_after` consume the cursor and return the position the operation
/// results in. To construct a list in order, a cursor can be threaded through repeated inserts:
///
/// ```
/// use forward_list::collections::linked::LinkedList;
///
/// let mut list = LinkedList::new();
/// let mut cursor = list.before_begin_mut();
/// for i in 1..=3 {
///     cursor = cursor.insert_after(i);
/// }
/// assert_eq!(list, LinkedList::from([1, 2, 3]));
/// ```
pub struct CursorMut<'a, T> {
    pub(crate) list: &'a mut LinkedList<T>,
    pub(crate) pos: CursorMutPosition<T>,
}

// NOTE: The Ptr variant is only ever created from a node reached through `list`, and is only
// dereferenced while `list` is still exclusively borrowed by the same cursor. The cursor only
// removes nodes after its own position, so the pointer stays valid for the cursor's lifetime.
#[derive(IsVariant)]
pub(crate) enum CursorMutPosition<T> {
    Head,
    Ptr(NonNull<Node<T>>),
    Tail,
}

impl<T> CursorMutPosition<T> {
    pub fn from_link(link: &mut Link<T>) -> CursorMutPosition<T> {
        match link.as_deref_mut() {
            Some(node) => CursorMutPosition::Ptr(NonNull::from(node)),
            None => CursorMutPosition::Tail,
        }
    }
}

impl<T> Clone for CursorMutPosition<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for CursorMutPosition<T> {}

impl<'a, T> CursorMut<'a, T> {
    pub(crate) const fn head(list: &'a mut LinkedList<T>) -> CursorMut<'a, T> {
        CursorMut {
            list,
            pos: CursorMutPosition::Head,
        }
    }

    pub(crate) const fn tail(list: &'a mut LinkedList<T>) -> CursorMut<'a, T> {
        CursorMut {
            list,
            pos: CursorMutPosition::Tail,
        }
    }

    pub(crate) fn front(list: &'a mut LinkedList<T>) -> CursorMut<'a, T> {
        let pos = CursorMutPosition::from_link(&mut list.head);
        CursorMut {
            list,
            pos,
        }
    }

    /// Returns a reference to the element under the cursor, or [`None`] if the cursor is before
    /// the first element or past the end.
    pub fn read(&self) -> Option<&T> {
        match self.pos {
            // SAFETY: See CursorMutPosition.
            CursorMutPosition::Ptr(ptr) => Some(unsafe { &ptr.as_ref().value }),
            _ => None,
        }
    }

    /// Returns a mutable reference to the element under the cursor, or [`None`] if the cursor is
    /// before the first element or past the end.
    pub fn read_mut(&mut self) -> Option<&mut T> {
        match self.pos {
            // SAFETY: See CursorMutPosition. The returned reference borrows the cursor mutably.
            CursorMutPosition::Ptr(mut ptr) => Some(unsafe { &mut ptr.as_mut().value }),
            _ => None,
        }
    }

    /// Returns a reference to the element after the cursor, if there is one.
    pub fn peek_next(&self) -> Option<&T> {
        self.next_link()?.as_deref().map(|node| &node.value)
    }

    /// Returns a mutable reference to the element after the cursor, if there is one.
    pub fn peek_next_mut(&mut self) -> Option<&mut T> {
        self.next_link_mut()?.as_deref_mut().map(|node| &mut node.value)
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
        let link = self.next_link_mut().ok_or(ListError::PastTheEnd)?;
        let pos = CursorMutPosition::from_link(link);
        self.pos = pos;
        Ok(())
    }

    /// Inserts `value` directly after the cursor and returns a cursor on the new element.
    ///
    /// Inserting after [`before_begin_mut`](LinkedList::before_begin_mut) is the same as
    /// [`push_front`](LinkedList::push_front).
    ///
    /// # Panics
    /// Panics if the cursor is past the end, or if the length of the list would overflow a
    /// `usize`.
    pub fn insert_after(self, value: T) -> CursorMut<'a, T> {
        self.try_insert_after(value).throw()
    }

    /// Inserts `value` directly after the cursor and returns a cursor on the new element,
    /// returning an [`Err`] rather than panicking if the cursor is past the end.
    ///
    /// # Panics
    /// Panics if the length of the list would overflow a `usize`.
    pub fn try_insert_after(mut self, value: T) -> Result<CursorMut<'a, T>, ListError> {
        let len = self.list.len.checked_add(1).ok_or(CapacityOverflow).throw();

        let link = self.next_link_mut().ok_or(ListError::PastTheEnd)?;
        let next = link.take();
        let node = link.insert(Node::boxed(value, next));
        let pos = CursorMutPosition::Ptr(NonNull::from(&mut **node));

        self.pos = pos;
        self.list.len = len;

        Ok(self)
    }

    /// Removes the element directly after the cursor and returns a cursor on the element that
    /// followed it, or past the end if there was none.
    ///
    /// # Panics
    /// Panics if the cursor is past the end, if the list is empty, or if the cursor is on the last
    /// element.
    pub fn erase_after(self) -> CursorMut<'a, T> {
        self.try_erase_after().throw()
    }

    /// Removes the element directly after the cursor and returns a cursor on the element that
    /// followed it, returning an [`Err`] rather than panicking if there is nothing to erase.
    pub fn try_erase_after(mut self) -> Result<CursorMut<'a, T>, ListError> {
        self.try_remove_after()?;
        // The cursor wasn't past the end, or removal would have failed.
        self.try_move_next()?;
        Ok(self)
    }

    /// Removes the element directly after the cursor and returns it, leaving the cursor in place.
    ///
    /// # Panics
    /// Panics if the cursor is past the end, if the list is empty, or if the cursor is on the last
    /// element.
    pub fn remove_after(&mut self) -> T {
        self.try_remove_after().throw()
    }

    /// Removes the element directly after the cursor and returns it, returning an [`Err`] rather
    /// than panicking if there is nothing to remove.
    pub fn try_remove_after(&mut self) -> Result<T, ListError> {
        if self.pos.is_tail() {
            return Err(ListError::PastTheEnd);
        }
        if self.list.is_empty() {
            return Err(ListError::EmptyList);
        }

        let link = self.next_link_mut().ok_or(ListError::PastTheEnd)?;
        let node = link.take().ok_or(ListError::NoSuccessor)?;
        let Node { value, next } = *node;
        *link = next;

        self.list.len -= 1;

        Ok(value)
    }

    /// Returns a read-only view of the cursor's current position.
    pub fn as_cursor(&self) -> Cursor<'_, T> {
        Cursor {
            pos: match self.pos {
                CursorMutPosition::Head => CursorPosition::Head(&self.list.head),
                // SAFETY: See CursorMutPosition. The returned cursor borrows this one.
                CursorMutPosition::Ptr(ptr) => CursorPosition::Ptr(unsafe { ptr.as_ref() }),
                CursorMutPosition::Tail => CursorPosition::Tail,
            },
        }
    }

    pub fn is_before_begin(&self) -> bool {
        self.pos.is_head()
    }

    pub fn is_end(&self) -> bool {
        self.pos.is_tail()
    }

    pub(crate) fn addr(&self) -> *const () {
        match self.pos {
            CursorMutPosition::Head => ptr::from_ref(&self.list.head).cast(),
            CursorMutPosition::Ptr(ptr) => ptr.as_ptr().cast_const().cast(),
            CursorMutPosition::Tail => ptr::null(),
        }
    }

    fn next_link(&self) -> Option<&Link<T>> {
        match self.pos {
            CursorMutPosition::Head => Some(&self.list.head),
            // SAFETY: See CursorMutPosition.
            CursorMutPosition::Ptr(ptr) => Some(unsafe { &ptr.as_ref().next }),
            CursorMutPosition::Tail => None,
        }
    }

    fn next_link_mut(&mut self) -> Option<&mut Link<T>> {
        match self.pos {
            CursorMutPosition::Head => Some(&mut self.list.head),
            // SAFETY: See CursorMutPosition.
            CursorMutPosition::Ptr(mut ptr) => Some(unsafe { &mut ptr.as_mut().next }),
            CursorMutPosition::Tail => None,
        }
    }
}

impl<'a, T> From<CursorMut<'a, T>> for Cursor<'a, T> {
    fn from(cursor: CursorMut<'a, T>) -> Self {
        let CursorMut { list, pos } = cursor;
        let list: &'a LinkedList<T> = list;

        Cursor {
            pos: match pos {
                CursorMutPosition::Head => CursorPosition::Head(&list.head),
                // SAFETY: See CursorMutPosition. The exclusive borrow of the list is downgraded to
                // a shared one for the same lifetime, so the node can't be freed while the cursor
                // is alive.
                CursorMutPosition::Ptr(ptr) => CursorPosition::Ptr(unsafe { ptr.as_ref() }),
                CursorMutPosition::Tail => CursorPosition::Tail,
            },
        }
    }
}

impl<T> PartialEq for CursorMut<'_, T> {
    fn eq(&self, other: &Self) -> bool {
        self.addr() == other.addr()
    }
}

impl<T> Eq for CursorMut<'_, T> {}

impl<T> PartialEq<Cursor<'_, T>> for CursorMut<'_, T> {
    fn eq(&self, other: &Cursor<'_, T>) -> bool {
        self.addr() == other.pos.addr()
    }
}

impl<T> PartialEq<CursorMut<'_, T>> for Cursor<'_, T> {
    fn eq(&self, other: &CursorMut<'_, T>) -> bool {
        self.pos.addr() == other.addr()
    }
}

impl<T: Debug> Debug for CursorMut<'_, T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        Debug::fmt(&self.as_cursor(), f)
    }
}
