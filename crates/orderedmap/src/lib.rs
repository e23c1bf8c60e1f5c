//! # orderedmap
//!
//! Hash map whose entries are also threaded onto a doubly linked chain.
//!
//! ## Architecture
//! - **HashMap**: AHash table from key to arena slot (O(1))
//! - **Chain**: Doubly-linked list of slots, eldest at the head (O(1))
//! - **Arena**: Slot vector with a free list, so links are plain indices
//!
//! ## Ordering modes
//! - Insertion order: the chain follows insertion; re-assigning a key moves it
//!   to the tail.
//! - Access order: successful reads also move the entry to the tail, which
//!   makes [`OrderedMap::eldest`] the least-recently-used entry.

#![warn(missing_docs)]

mod error;
mod iter;
mod map;
mod null_key;

pub use error::{Error, Result};
pub use iter::{IntoIter, Iter, Keys, Values};
pub use map::OrderedMap;
pub use null_key::NullKey;
