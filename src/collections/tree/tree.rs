use std::fmt::{self, Debug, Formatter};
use std::ops::{Index, IndexMut};

use derive_more::IsVariant;
use slab::Slab;

use super::{
    Comparison, ForeignNode, InsertLeafError, Iter, IterMut, Link, NodeId, Nodes, Side,
    SlotOccupied, TreeId, TreeNode, Walk,
};
use crate::util::result::ResultExtension;

/// An unbalanced binary search tree with parent links, acting as the shared engine behind
/// [`TreeSet`](crate::collections::set::TreeSet) and
/// [`TreeMap`](crate::collections::map::TreeMap).
///
/// The tree has no opinion on ordering. Callers walk it with [`Tree::search`] using their own
/// comparison, then attach a leaf at the reported position with [`Tree::insert_leaf`]. There are
/// no rotations, so the shape of the tree is entirely determined by the order of insertions; a
/// sorted sequence of insertions produces a tree as deep as it is long.
///
/// Nodes live in a slab and refer to each other by index. Removed slots are recycled by later
/// insertions, but every node also carries a stamp so that a stale [`NodeId`] is rejected instead
/// of silently referring to the replacement.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of nodes in the Tree.
/// - `h`: The depth of the Tree, between `log2 n` and `n`.
///
/// | Method | Complexity |
/// |-|-|
/// | `len` | `O(1)` |
/// | `get` | `O(1)` |
/// | `search` | `O(h)` |
/// | `insert_leaf` | `O(1)`* |
/// | `remove_node` | `O(h)` |
/// | `nth` | `O(n)` |
/// | `depth` | `O(n)` |
///
/// \* Amortized, the slab may need to grow.
pub struct Tree<T> {
    pub(crate) id: TreeId,
    pub(crate) nodes: Slab<TreeNode<T>>,
    pub(crate) root: Link,
    pub(crate) stamp: u64,
}

/// The outcome of [`Tree::search`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, IsVariant)]
pub enum Search {
    /// A node compared [`EqualTo`](Comparison::EqualTo) the probe.
    Found(NodeId),
    /// No node matched. A leaf inserted at `side` of `parent` (or as the root, if `parent` is
    /// None) keeps the tree ordered.
    Vacant { parent: Option<NodeId>, side: Side },
}

impl<T> Tree<T> {
    /// Creates a new, empty Tree with its own identity.
    pub fn new() -> Tree<T> {
        Tree {
            id: TreeId::unique(),
            nodes: Slab::new(),
            root: None,
            stamp: 0,
        }
    }

    /// Returns the number of nodes in the Tree.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns true if the Tree has no nodes.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn root(&self) -> Option<NodeId> {
        self.root.map(|index| self.handle(index))
    }

    /// Returns true if `node` refers to a node that is currently part of this Tree.
    pub fn contains_node(&self, node: NodeId) -> bool {
        self.index_of(node).is_ok()
    }

    /// Returns a reference to the data stored in `node`, or None if the node isn't part of this
    /// Tree.
    pub fn get(&self, node: NodeId) -> Option<&T> {
        let index = self.index_of(node).ok()?;
        Some(&self.nodes[index].data)
    }

    /// Returns a mutable reference to the data stored in `node`, or None if the node isn't part of
    /// this Tree.
    ///
    /// Changing the data in a way that changes its position relative to other nodes is a logic
    /// error.
    pub fn get_mut(&mut self, node: NodeId) -> Option<&mut T> {
        let index = self.index_of(node).ok()?;
        Some(&mut self.nodes[index].data)
    }

    pub fn parent(&self, node: NodeId) -> Option<NodeId> {
        self.link(node, |n| n.parent)
    }

    pub fn left(&self, node: NodeId) -> Option<NodeId> {
        self.link(node, |n| n.left)
    }

    pub fn right(&self, node: NodeId) -> Option<NodeId> {
        self.link(node, |n| n.right)
    }

    /// Attaches a new leaf holding `data` as the `side` child of `parent`, or as the root if
    /// `parent` is None (in which case `side` is ignored).
    ///
    /// The Tree is left untouched if the requested slot already holds a node, or if `parent`
    /// doesn't belong to this Tree. Placing the leaf so that the tree stays ordered is the
    /// responsibility of the caller, see [`Tree::search`].
    pub fn insert_leaf(
        &mut self,
        parent: Option<NodeId>,
        side: Side,
        data: T,
    ) -> Result<NodeId, InsertLeafError> {
        let parent = parent.map(|p| self.index_of(p)).transpose()?;

        let occupied = match parent {
            Some(p) => self.nodes[p].child(side).is_some(),
            None => self.root.is_some(),
        };
        if occupied {
            return Err(SlotOccupied.into());
        }

        self.stamp += 1;
        let index = self.nodes.insert(TreeNode::leaf(self.stamp, parent, data));

        match parent {
            Some(p) => *self.nodes[p].child_mut(side) = Some(index),
            None => self.root = Some(index),
        }

        Ok(self.handle(index))
    }

    /// Removes `node` from the Tree, keeping the remaining nodes ordered, and returns its data.
    ///
    /// A node with two children is replaced by its in-order predecessor (the right-most node of
    /// its left subtree), which inherits both of the removed node's subtrees. The handle for the
    /// predecessor remains valid.
    pub fn remove_node(&mut self, node: NodeId) -> Result<T, ForeignNode> {
        let index = self.index_of(node)?;
        let (parent, left, right) = {
            let removed = &self.nodes[index];
            (removed.parent, removed.left, removed.right)
        };

        match (left, right) {
            (None, None) => self.replace_child(parent, index, None),
            (Some(child), None) | (None, Some(child)) => {
                self.nodes[child].parent = parent;
                self.replace_child(parent, index, Some(child));
            },
            (Some(left), Some(right)) => {
                let predecessor = self.rightmost(left);

                // A direct left child keeps its own left subtree. Otherwise, the predecessor's
                // left subtree fills the gap it leaves behind and it adopts the removed node's.
                if predecessor != left {
                    let (pred_parent, pred_left) = {
                        let pred = &self.nodes[predecessor];
                        (pred.parent, pred.left)
                    };

                    self.replace_child(pred_parent, predecessor, pred_left);
                    if let Some(pred_left) = pred_left {
                        self.nodes[pred_left].parent = pred_parent;
                    }

                    self.nodes[predecessor].left = Some(left);
                    self.nodes[left].parent = Some(predecessor);
                }

                self.nodes[predecessor].right = Some(right);
                self.nodes[right].parent = Some(predecessor);

                self.nodes[predecessor].parent = parent;
                self.replace_child(parent, index, Some(predecessor));
            },
        }

        Ok(self.nodes.remove(index).data)
    }

    /// Descends from the root, using `compare` to determine the direction at each node. `compare`
    /// receives the data of the current node and returns how the sought value compares to it.
    pub fn search<F>(&self, mut compare: F) -> Search
    where
        F: FnMut(&T) -> Comparison,
    {
        let mut parent = None;
        let mut side = Side::Left;
        let mut current = self.root;

        while let Some(index) = current {
            let node = &self.nodes[index];
            side = match compare(&node.data) {
                Comparison::LessThan => Side::Left,
                Comparison::GreaterThan => Side::Right,
                Comparison::EqualTo => return Search::Found(self.handle(index)),
            };
            parent = Some(index);
            current = node.child(side);
        }

        Search::Vacant {
            parent: parent.map(|p| self.handle(p)),
            side,
        }
    }

    /// Returns the node at the provided in-order `index`, counting down from the smallest node.
    pub fn nth(&self, index: usize) -> Option<NodeId> {
        self.nodes().nth(index)
    }

    pub fn first(&self) -> Option<NodeId> {
        self.root.map(|root| self.handle(self.leftmost(root)))
    }

    pub fn last(&self) -> Option<NodeId> {
        self.root.map(|root| self.handle(self.rightmost(root)))
    }

    /// Returns the number of nodes on the longest path from the root to a leaf.
    pub fn depth(&self) -> usize {
        let mut deepest = 0;
        let mut stack: Vec<(usize, usize)> = self.root.map(|root| (root, 1)).into_iter().collect();

        while let Some((index, depth)) = stack.pop() {
            deepest = deepest.max(depth);

            let node = &self.nodes[index];
            stack.extend(
                [node.left, node.right]
                    .into_iter()
                    .flatten()
                    .map(|child| (child, depth + 1)),
            );
        }

        deepest
    }

    /// Removes every node. Data is dropped in order: each left subtree, then its parent, then the
    /// right subtree.
    pub fn clear(&mut self) {
        let mut stack = Vec::new();
        let mut current = self.root.take();

        loop {
            while let Some(index) = current {
                stack.push(index);
                current = self.nodes[index].left;
            }

            let Some(index) = stack.pop() else { break };

            // The right link has to be read before the node (and its data) is dropped.
            let node = self.nodes.remove(index);
            current = node.right;
        }

        self.nodes.clear();
    }

    /// Returns an iterator over the data of every node, in order.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter(self.walk())
    }

    /// Returns an iterator over the data of every node, in order, as mutable references.
    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        IterMut::new(self)
    }

    /// Returns an iterator over the handles of every node, in order.
    pub fn nodes(&self) -> Nodes<'_, T> {
        Nodes(self.walk())
    }

    /// Removes and returns the data of the smallest node.
    pub fn take_first(&mut self) -> Option<T> {
        let first = self.first()?;
        self.remove_node(first).ok()
    }

    /// Removes and returns the data of the largest node.
    pub fn take_last(&mut self) -> Option<T> {
        let last = self.last()?;
        self.remove_node(last).ok()
    }
}

impl<T> Tree<T> {
    pub(crate) fn handle(&self, index: usize) -> NodeId {
        NodeId {
            owner: self.id,
            index,
            stamp: self.nodes[index].stamp,
        }
    }

    /// Checks that `node` was produced by this Tree and that its slot hasn't been recycled.
    pub(crate) fn index_of(&self, node: NodeId) -> Result<usize, ForeignNode> {
        if node.owner != self.id {
            return Err(ForeignNode);
        }

        match self.nodes.get(node.index) {
            Some(found) if found.stamp == node.stamp => Ok(node.index),
            _ => Err(ForeignNode),
        }
    }

    pub(crate) fn walk(&self) -> Walk<'_, T> {
        Walk {
            tree: self,
            front: self.root.map(|root| self.leftmost(root)),
            back: self.root.map(|root| self.rightmost(root)),
            len: self.len(),
        }
    }

    pub(crate) fn leftmost(&self, mut index: usize) -> usize {
        while let Some(left) = self.nodes[index].left {
            index = left;
        }
        index
    }

    pub(crate) fn rightmost(&self, mut index: usize) -> usize {
        while let Some(right) = self.nodes[index].right {
            index = right;
        }
        index
    }

    /// Finds the next node in order by descending into the right subtree, or climbing until the
    /// path turns right.
    pub(crate) fn successor(&self, index: usize) -> Link {
        if let Some(right) = self.nodes[index].right {
            return Some(self.leftmost(right));
        }

        let mut child = index;
        let mut parent = self.nodes[index].parent;
        while let Some(p) = parent {
            if self.nodes[p].left == Some(child) {
                return Some(p);
            }
            child = p;
            parent = self.nodes[p].parent;
        }

        None
    }

    pub(crate) fn predecessor(&self, index: usize) -> Link {
        if let Some(left) = self.nodes[index].left {
            return Some(self.rightmost(left));
        }

        let mut child = index;
        let mut parent = self.nodes[index].parent;
        while let Some(p) = parent {
            if self.nodes[p].right == Some(child) {
                return Some(p);
            }
            child = p;
            parent = self.nodes[p].parent;
        }

        None
    }

    fn link(&self, node: NodeId, select: impl FnOnce(&TreeNode<T>) -> Link) -> Option<NodeId> {
        let index = self.index_of(node).ok()?;
        select(&self.nodes[index]).map(|linked| self.handle(linked))
    }

    /// Points whichever link of `parent` referred to `old` (or the root) at `new`.
    fn replace_child(&mut self, parent: Link, old: usize, new: Link) {
        match parent {
            Some(p) => {
                let node = &mut self.nodes[p];
                if node.left == Some(old) {
                    node.left = new;
                } else {
                    node.right = new;
                }
            },
            None => self.root = new,
        }
    }
}

impl<T> Default for Tree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for Tree<T> {
    /// Copies every node along with the shape of the tree. The copy has its own identity, so
    /// handles into `self` aren't accepted by it.
    fn clone(&self) -> Self {
        Tree {
            id: TreeId::unique(),
            nodes: self.nodes.clone(),
            root: self.root,
            stamp: self.stamp,
        }
    }
}

impl<T> Drop for Tree<T> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<T> Index<NodeId> for Tree<T> {
    type Output = T;

    /// # Panics
    /// Panics if `node` isn't part of this Tree.
    fn index(&self, node: NodeId) -> &Self::Output {
        let index = self.index_of(node).throw();
        &self.nodes[index].data
    }
}

impl<T> IndexMut<NodeId> for Tree<T> {
    /// # Panics
    /// Panics if `node` isn't part of this Tree.
    fn index_mut(&mut self, node: NodeId) -> &mut Self::Output {
        let index = self.index_of(node).throw();
        &mut self.nodes[index].data
    }
}

impl<T: Debug> Debug for Tree<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Tree")
            .field("nodes", &Shape(self))
            .field("len", &self.len())
            .finish()
    }
}

/// Draws a tree one node per line, in order. Each line shows which side of its parent the node
/// hangs from (`┌` left, `└` right, `─` for the root) followed by its depth.
struct Shape<'a, T>(&'a Tree<T>);

impl<T: Debug> Debug for Shape<'_, T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let nodes = &self.0.nodes;
        if self.0.root.is_none() {
            return write!(f, "-");
        }

        let mut stack = Vec::new();
        let mut current = self.0.root.map(|root| (root, 0));

        loop {
            while let Some((index, depth)) = current {
                stack.push((index, depth));
                current = nodes[index].left.map(|left| (left, depth + 1));
            }

            let Some((index, depth)) = stack.pop() else { break };
            let node = &nodes[index];
            let side = match node.parent {
                None => '─',
                Some(parent) if nodes[parent].left == Some(index) => '┌',
                Some(_) => '└',
            };

            write!(f, "\n{side}{depth}: ({:?})", node.data)?;
            current = node.right.map(|right| (right, depth + 1));
        }

        writeln!(f)
    }
}
