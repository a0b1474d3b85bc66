use std::fmt::{self, Debug, Display, Formatter};

use crate::collections::tree::{
    default_compare, ord_compare, Comparer, Iter, NodeId, Search, Tree,
};
use crate::util::result::ResultExtension;

/// An ordered collection of unique elements, stored in an unbalanced binary search [`Tree`].
///
/// Elements are ordered by a [`Comparer`] chosen on construction. [`TreeSet::new`] uses
/// [`default_compare`], which compares addresses rather than values, so most sets want
/// [`TreeSet::ordered`] or [`TreeSet::with_comparer`] instead.
///
/// Inserting an element that compares equal to an existing one replaces the stored element in
/// place.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of elements in the TreeSet.
/// - `h`: The depth of the underlying tree, up to `n` when elements are inserted in order.
///
/// | Method | Complexity |
/// |-|-|
/// | `len` | `O(1)` |
/// | `insert` | `O(h)` |
/// | `erase` | `O(h)` |
/// | `find` | `O(h)` |
/// | `at` | `O(n)` |
/// | `values` | `O(n)` |
#[derive(Clone)]
pub struct TreeSet<T> {
    pub(crate) tree: Tree<T>,
    pub(crate) comparer: Comparer<T>,
}

impl<T> TreeSet<T> {
    /// Creates a new, empty TreeSet using [`default_compare`].
    pub fn new() -> TreeSet<T> {
        TreeSet::with_comparer(default_compare)
    }

    /// Creates a new, empty TreeSet ordered by `comparer`.
    pub fn with_comparer(comparer: Comparer<T>) -> TreeSet<T> {
        TreeSet {
            tree: Tree::new(),
            comparer,
        }
    }

    /// Returns the number of elements in the TreeSet.
    pub fn len(&self) -> usize {
        self.tree.len()
    }

    /// Returns true if the TreeSet contains no elements.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn comparer(&self) -> Comparer<T> {
        self.comparer
    }

    /// Returns the depth of the underlying tree.
    pub fn depth(&self) -> usize {
        self.tree.depth()
    }

    /// Inserts `value` into the TreeSet and returns the node holding it.
    ///
    /// If an element comparing equal to `value` is already present, it is overwritten with `value`
    /// (and dropped) and the existing node is returned. The length only grows when a new node is
    /// created.
    pub fn insert(&mut self, value: T) -> NodeId {
        let comparer = self.comparer;

        match self.tree.search(|existing| comparer(&value, existing)) {
            Search::Found(node) => {
                self.tree[node] = value;
                node
            },
            Search::Vacant { parent, side } => self.tree.insert_leaf(parent, side, value).throw(),
        }
    }

    /// Removes the element comparing equal to `value`, returning true if one was present.
    pub fn erase(&mut self, value: &T) -> bool {
        self.take(value).is_some()
    }

    /// Removes and returns the element comparing equal to `value`, if present.
    pub fn take(&mut self, value: &T) -> Option<T> {
        let node = self.find(value)?;
        self.tree.remove_node(node).ok()
    }

    /// Removes the element held by `node` and returns it, or None if the node isn't part of this
    /// TreeSet.
    ///
    /// This is the only way to remove an element under [`default_compare`], where a value only
    /// matches itself and [`TreeSet::erase`] can't be handed a reference into the set.
    pub fn remove_node(&mut self, node: NodeId) -> Option<T> {
        self.tree.remove_node(node).ok()
    }

    /// Returns the node holding the element comparing equal to `value`, if present.
    pub fn find(&self, value: &T) -> Option<NodeId> {
        let comparer = self.comparer;

        match self.tree.search(|existing| comparer(value, existing)) {
            Search::Found(node) => Some(node),
            Search::Vacant { .. } => None,
        }
    }

    /// Returns true if an element comparing equal to `value` is present.
    pub fn contains(&self, value: &T) -> bool {
        self.find(value).is_some()
    }

    /// Returns the element held by `node`, or None if the node isn't part of this TreeSet.
    pub fn get(&self, node: NodeId) -> Option<&T> {
        self.tree.get(node)
    }

    /// Returns the element at the provided in-order `index`, or None if `index` is out of bounds.
    /// This walks the tree from the smallest element, so it takes `O(n)`.
    pub fn at(&self, index: usize) -> Option<&T> {
        if index >= self.len() {
            return None;
        }

        self.tree.nth(index).and_then(|node| self.tree.get(node))
    }

    pub fn first(&self) -> Option<&T> {
        self.tree.first().and_then(|node| self.tree.get(node))
    }

    pub fn last(&self) -> Option<&T> {
        self.tree.last().and_then(|node| self.tree.get(node))
    }

    /// Removes every element from the TreeSet.
    pub fn clear(&mut self) {
        self.tree.clear();
    }

    /// Returns an iterator over all elements in ascending order, as references.
    pub fn iter(&self) -> Iter<'_, T> {
        self.tree.iter()
    }
}

impl<T: Clone> TreeSet<T> {
    /// Copies every element, in ascending order, into a new [`Vec`] owned by the caller.
    pub fn values(&self) -> Vec<T> {
        self.iter().cloned().collect()
    }
}

impl<T: Ord> TreeSet<T> {
    /// Creates a new, empty TreeSet ordered by the elements' [`Ord`] implementation.
    pub fn ordered() -> TreeSet<T> {
        TreeSet::with_comparer(ord_compare)
    }
}

impl<T> Default for TreeSet<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Debug> Debug for TreeSet<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("TreeSet")
            .field("tree", &self.tree)
            .field("len", &self.len())
            .finish()
    }
}

impl<T: Debug> Display for TreeSet<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}
