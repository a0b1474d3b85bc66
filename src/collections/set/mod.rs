//! A module containing [`TreeSet`], an ordered set built on the [`Tree`](super::tree::Tree)
//! engine.
//!
//! Borrowed and owned iteration reuse the iterators of the tree module, re-exported here.
//!
//! [`TreeSet`] is also re-exported under the parent module.

mod iter;
mod tree_set;

pub use tree_set::*;

#[doc(inline)]
pub use super::tree::{IntoIter, Iter, NodeId};
