//! The binary search tree engine shared by the ordered collections, along with the comparison
//! types they're configured with.
//!
//! [`Tree`] deals only with structure: attaching leaves, splicing nodes out and walking the nodes
//! in order. Deciding where a value belongs is left to the caller, through [`Tree::search`] and a
//! [`Comparer`].
//!
//! [`Tree`] is also re-exported under the parent module.

mod comparison;
mod error;
mod iter;
mod node;
mod tree;

pub use comparison::*;
pub use error::*;
pub use iter::{IntoIter, Iter, IterMut, Nodes};
pub(crate) use iter::Walk;
pub use node::{NodeId, Side};
pub(crate) use node::{Link, TreeId, TreeNode};
pub use tree::*;
