//! General-purpose collection types.
//!
//! # Purpose
//! These types exist to explore the data structures themselves, along with ownership, borrowing
//! and iterators as they apply to node-based storage.

#[cfg(feature = "linked")]
pub mod linked;
