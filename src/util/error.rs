use derive_more::{Display, Error, IsVariant};

/// A violated precondition of a [`LinkedList`](crate::collections::linked::LinkedList) or cursor
/// operation. Every fallible operation has a `try_*` form returning this error, while the plain
/// form panics with its message.
#[derive(Debug, Display, Error, IsVariant, Clone, Copy, PartialEq, Eq)]
pub enum ListError {
    #[display("Operation requires a non-empty list!")]
    EmptyList,
    #[display("Cursor is positioned past the end of the list!")]
    PastTheEnd,
    #[display("Cursor has no element after it to erase!")]
    NoSuccessor,
}

#[derive(Debug, Display, Error)]
#[display("Capacity overflow!")]
pub struct CapacityOverflow;
