//! This crate is a small collection engine: an unbalanced binary search tree with an ordered set
//! and map built on top of it, plus a hash table with an unusual collision policy.
//!
//! # Purpose
//! Each structure is kept deliberately simple. The tree is never rebalanced, so its depth depends
//! entirely on insertion order, and the hash table never probes or chains, growing instead until
//! every stored hash has a bucket of its own. These behaviours are part of the contract rather
//! than shortcuts, and the tests check them directly.
//!
//! # Method
//! Nodes live in a [`slab`] arena and are addressed by [`NodeId`](collections::tree::NodeId)
//! handles, which keep working until the node they point to is removed. Handles are tied to the
//! tree that created them, so using one with another tree is an error rather than undefined
//! behaviour. None of this crate needs `unsafe`.
//!
//! # Error Handling
//! Errors are strongly typed: structs (often ZSTs) implementing [`Error`](std::error::Error),
//! gathered into enums for static dispatch. A missing key or an out of range index isn't an error
//! and is reported through [`Option`] or a `bool` instead. The few operations that panic, such as
//! indexing a tree with a foreign handle, say so in their docs.
//!
//! # Dependencies
//! This crate uses `std` along with `slab` for node storage and some derive macros, because they
//! remove the need for some very repetitive programming.
//!
//! # Features
//! Each collection sits behind a feature of the same name (`tree`, `set`, `map` and `hash`), all of
//! which are enabled by default through `collections-all`.

// #![warn(missing_docs)]
#![warn(clippy::missing_safety_doc)]
#![warn(clippy::undocumented_unsafe_blocks)]
#![warn(clippy::missing_const_for_fn)]
#![warn(clippy::missing_panics_doc)]
#![warn(clippy::unwrap_used)]
#![allow(clippy::module_inception)]

#[cfg(feature = "collections")]
pub mod collections;

pub(crate) mod util;
