//! A module containing [`TreeMap`], an ordered map built on the [`Tree`](super::tree::Tree)
//! engine, and the [`Pair`] type stored in each of its nodes.
//!
//! [`TreeMap`] is also re-exported under the parent module.

mod iter;
mod pair;
mod tree_map;

pub use iter::*;
pub use pair::*;
pub use tree_map::*;

#[doc(inline)]
pub use super::tree::NodeId;
