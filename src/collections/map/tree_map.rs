use std::fmt::{self, Debug, Display, Formatter};

use super::{Iter, IterMut, Pair};
use crate::collections::tree::{default_compare, ord_compare, Comparer, NodeId, Search, Tree};
use crate::util::result::ResultExtension;

/// An ordered map of keys to values, stored as [`Pair`]s in an unbalanced binary search [`Tree`].
///
/// Keys are ordered by a [`Comparer`] chosen on construction, which never sees the values.
/// [`TreeMap::new`] uses [`default_compare`], which compares key addresses rather than the keys
/// themselves, so most maps want [`TreeMap::ordered`] or [`TreeMap::with_comparer`] instead.
///
/// Unlike [`TreeSet`](crate::collections::set::TreeSet), inserting an existing key never
/// overwrites anything: the value already associated with the key is returned untouched.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of entries in the TreeMap.
/// - `h`: The depth of the underlying tree, up to `n` when keys are inserted in order.
///
/// | Method | Complexity |
/// |-|-|
/// | `len` | `O(1)` |
/// | `insert` | `O(h)` |
/// | `erase` | `O(h)` |
/// | `find` | `O(h)` |
/// | `keys` | `O(n)` |
/// | `values` | `O(n)` |
#[derive(Clone)]
pub struct TreeMap<K, V> {
    pub(crate) tree: Tree<Pair<K, V>>,
    pub(crate) comparer: Comparer<K>,
}

impl<K, V> TreeMap<K, V> {
    /// Creates a new, empty TreeMap using [`default_compare`] for its keys.
    pub fn new() -> TreeMap<K, V> {
        TreeMap::with_comparer(default_compare)
    }

    /// Creates a new, empty TreeMap with keys ordered by `comparer`.
    pub fn with_comparer(comparer: Comparer<K>) -> TreeMap<K, V> {
        TreeMap {
            tree: Tree::new(),
            comparer,
        }
    }

    /// Returns the number of entries in the TreeMap.
    pub fn len(&self) -> usize {
        self.tree.len()
    }

    /// Returns true if the TreeMap contains no entries.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn comparer(&self) -> Comparer<K> {
        self.comparer
    }

    /// Returns the depth of the underlying tree.
    pub fn depth(&self) -> usize {
        self.tree.depth()
    }

    /// Associates `value` with `key` if the key isn't present yet, returning a mutable reference
    /// to the value now associated with `key`.
    ///
    /// If the key is already present, both the stored key and value are left as they are, the
    /// provided `value` is dropped and the existing value is returned.
    pub fn insert(&mut self, key: K, value: V) -> &mut V {
        let comparer = self.comparer;

        let node = match self.tree.search(|pair| comparer(&key, &pair.key)) {
            Search::Found(node) => node,
            Search::Vacant { parent, side } => self
                .tree
                .insert_leaf(parent, side, Pair { key, value })
                .throw(),
        };

        &mut self.tree[node].value
    }

    /// Inserts `key` with a default value if it isn't present yet, returning a mutable reference
    /// to the value associated with `key` so that it can be filled in.
    pub fn insert_default(&mut self, key: K) -> &mut V
    where
        V: Default,
    {
        let comparer = self.comparer;

        let node = match self.tree.search(|pair| comparer(&key, &pair.key)) {
            Search::Found(node) => node,
            Search::Vacant { parent, side } => self
                .tree
                .insert_leaf(parent, side, Pair { key, value: V::default() })
                .throw(),
        };

        &mut self.tree[node].value
    }

    /// Removes the entry for `key`, returning true if one was present.
    pub fn erase(&mut self, key: &K) -> bool {
        self.remove_entry(key).is_some()
    }

    /// Removes the entry for `key`, returning its value if it was present.
    pub fn remove(&mut self, key: &K) -> Option<V> {
        self.remove_entry(key).map(|pair| pair.value)
    }

    /// Removes the entry for `key`, returning the stored key and value if it was present.
    pub fn remove_entry(&mut self, key: &K) -> Option<Pair<K, V>> {
        let comparer = self.comparer;

        match self.tree.search(|pair| comparer(key, &pair.key)) {
            Search::Found(node) => self.tree.remove_node(node).ok(),
            Search::Vacant { .. } => None,
        }
    }

    /// Returns the node holding the entry for `key`, if present.
    pub fn find_node(&self, key: &K) -> Option<NodeId> {
        let comparer = self.comparer;

        match self.tree.search(|pair| comparer(key, &pair.key)) {
            Search::Found(node) => Some(node),
            Search::Vacant { .. } => None,
        }
    }

    /// Returns the entry held by `node`, or None if the node isn't part of this TreeMap.
    pub fn get_node(&self, node: NodeId) -> Option<(&K, &V)> {
        self.tree.get(node).map(Pair::as_tuple)
    }

    /// Removes the entry held by `node` and returns it, or None if the node isn't part of this
    /// TreeMap.
    ///
    /// Under [`default_compare`] a key only matches itself, so entries are removed through the
    /// node found with a reference to the stored key.
    pub fn remove_node(&mut self, node: NodeId) -> Option<Pair<K, V>> {
        self.tree.remove_node(node).ok()
    }

    /// Returns a reference to the value associated with `key`, if present.
    pub fn find(&self, key: &K) -> Option<&V> {
        self.find_entry(key).map(|(_, v)| v)
    }

    /// Returns a mutable reference to the value associated with `key`, if present.
    pub fn find_mut(&mut self, key: &K) -> Option<&mut V> {
        let comparer = self.comparer;

        match self.tree.search(|pair| comparer(key, &pair.key)) {
            Search::Found(node) => Some(&mut self.tree[node].value),
            Search::Vacant { .. } => None,
        }
    }

    /// Returns the stored key and value for `key`, if present.
    pub fn find_entry(&self, key: &K) -> Option<(&K, &V)> {
        let comparer = self.comparer;

        match self.tree.search(|pair| comparer(key, &pair.key)) {
            Search::Found(node) => self.tree.get(node).map(Pair::as_tuple),
            Search::Vacant { .. } => None,
        }
    }

    /// Returns true if `key` has an associated value.
    pub fn contains_key(&self, key: &K) -> bool {
        self.find_entry(key).is_some()
    }

    /// Returns the entry with the smallest key.
    pub fn first(&self) -> Option<(&K, &V)> {
        self.iter().next()
    }

    /// Returns the entry with the largest key.
    pub fn last(&self) -> Option<(&K, &V)> {
        self.iter().next_back()
    }

    /// Removes every entry from the TreeMap.
    pub fn clear(&mut self) {
        self.tree.clear();
    }

    /// Returns an iterator over all entries in ascending key order, as references.
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter(self.tree.iter())
    }

    /// Returns an iterator over all entries in ascending key order, with mutable references to
    /// the values.
    pub fn iter_mut(&mut self) -> IterMut<'_, K, V> {
        IterMut(self.tree.iter_mut())
    }
}

impl<K: Clone, V> TreeMap<K, V> {
    /// Copies every key, in ascending order, into a new [`Vec`] owned by the caller.
    pub fn keys(&self) -> Vec<K> {
        self.iter().map(|(k, _)| k.clone()).collect()
    }
}

impl<K, V: Clone> TreeMap<K, V> {
    /// Copies every value, in ascending key order, into a new [`Vec`] owned by the caller.
    pub fn values(&self) -> Vec<V> {
        self.iter().map(|(_, v)| v.clone()).collect()
    }
}

impl<K: Ord, V> TreeMap<K, V> {
    /// Creates a new, empty TreeMap with keys ordered by their [`Ord`] implementation.
    pub fn ordered() -> TreeMap<K, V> {
        TreeMap::with_comparer(ord_compare)
    }
}

impl<K, V> Default for TreeMap<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Debug, V: Debug> Debug for TreeMap<K, V> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("TreeMap")
            .field("tree", &self.tree)
            .field("len", &self.len())
            .finish()
    }
}

impl<K: Debug, V: Debug> Display for TreeMap<K, V> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}
