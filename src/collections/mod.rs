//! Generic collection types: an ordered tree engine with the set and map built on it, and a hash
//! table.
//!
//! # Purpose
//! The ordered collections share one [`Tree`](tree::Tree) implementation, which only knows how to
//! link and unlink nodes. Ordering is decided by a [`Comparer`](tree::Comparer) owned by each
//! [`TreeSet`] or [`TreeMap`], so the tree never looks at the elements itself.
//!
//! The [`HashTable`] is unrelated to the others and stores nothing but values and their hashes.

#[cfg(feature = "hash")]
pub mod hash;
#[cfg(feature = "map")]
pub mod map;
#[cfg(feature = "set")]
pub mod set;
#[cfg(feature = "tree")]
pub mod tree;

#[cfg(feature = "hash")]
#[doc(inline)]
pub use hash::HashTable;
#[cfg(feature = "map")]
#[doc(inline)]
pub use map::TreeMap;
#[cfg(feature = "set")]
#[doc(inline)]
pub use set::TreeSet;
