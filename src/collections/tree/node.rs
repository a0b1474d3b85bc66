use std::sync::atomic::{AtomicU64, Ordering};

use derive_more::IsVariant;

/// An identity shared by a tree and every handle to its nodes. It is only ever compared, never
/// used to reach the tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) struct TreeId(u64);

impl TreeId {
    pub fn unique() -> TreeId {
        static NEXT: AtomicU64 = AtomicU64::new(0);

        TreeId(NEXT.fetch_add(1, Ordering::Relaxed))
    }
}

/// A handle to a single node within a [`Tree`](super::Tree).
///
/// Handles remain valid until the node they refer to is removed, even while other nodes are
/// inserted and removed around it. A handle is only accepted by the tree that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId {
    pub(crate) owner: TreeId,
    pub(crate) index: usize,
    pub(crate) stamp: u64,
}

/// Which child of a parent node a leaf should be attached as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, IsVariant)]
pub enum Side {
    Left,
    Right,
}

pub(crate) type Link = Option<usize>;

#[derive(Clone)]
pub(crate) struct TreeNode<T> {
    pub stamp: u64,
    pub parent: Link,
    pub left: Link,
    pub right: Link,
    pub data: T,
}

impl<T> TreeNode<T> {
    pub const fn leaf(stamp: u64, parent: Link, data: T) -> TreeNode<T> {
        TreeNode {
            stamp,
            parent,
            left: None,
            right: None,
            data,
        }
    }

    pub const fn child(&self, side: Side) -> Link {
        match side {
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }

    pub fn child_mut(&mut self, side: Side) -> &mut Link {
        match side {
            Side::Left => &mut self.left,
            Side::Right => &mut self.right,
        }
    }
}
