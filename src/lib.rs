//! A singly-linked list, written as part of a small collections library.
//!
//! # Purpose
//! [`LinkedList`](collections::linked::LinkedList) is a forward-only list that stores a "before
//! head" link by value, so that every insertion and removal happens *after* some position and the
//! front of the list needs no special casing. Positions are represented by
//! [`Cursor`](collections::linked::Cursor) and [`CursorMut`](collections::linked::CursorMut).
//!
//! # Ownership
//! Every node is owned by the link before it, with the list itself owning the first link. Nodes
//! are never shared between two lists: cloning a list copies every element into a new chain, and
//! swapping two lists only exchanges their first links and lengths.
//!
//! Cursors borrow the list they point into. Where a C++-style forward list leaves an iterator
//! dangling after erasing its node, here the borrow checker rejects the program instead.
//!
//! # Error Handling
//! Operations with a precondition (popping from an empty list, inserting after the end, and so on)
//! come in two forms. The `try_*` form returns a
//! [`ListError`](collections::linked::list::ListError) and the plain form panics with the same
//! message. This is the case regardless of whether debug assertions are enabled, because skipping
//! the check would mean touching memory that isn't there. Reading through a cursor that isn't on an
//! element just returns [`None`].
//!
//! # Dependencies
//! This crate depends on `derive_more` for its error types, because it removes the need for some
//! very repetitive programming.

#![warn(clippy::missing_safety_doc)]
#![warn(clippy::undocumented_unsafe_blocks)]
#![warn(clippy::missing_panics_doc)]
#![warn(clippy::unwrap_used)]
#![allow(clippy::module_inception)]

#[cfg(feature = "collections")]
pub mod collections;

pub(crate) mod util;
