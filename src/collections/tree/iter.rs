use std::iter::FusedIterator;

use super::{Link, NodeId, Tree};

/// An in-order walk over the slab indices of a tree, following parent links rather than keeping a
/// stack. Both ends advance towards each other and stop once `len` nodes have been produced.
pub(crate) struct Walk<'a, T> {
    pub tree: &'a Tree<T>,
    pub front: Link,
    pub back: Link,
    pub len: usize,
}

impl<T> Iterator for Walk<'_, T> {
    type Item = usize;

    fn next(&mut self) -> Option<Self::Item> {
        if self.len == 0 {
            return None;
        }

        let index = self.front?;
        self.front = self.tree.successor(index);
        self.len -= 1;
        Some(index)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len, Some(self.len))
    }
}

impl<T> DoubleEndedIterator for Walk<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.len == 0 {
            return None;
        }

        let index = self.back?;
        self.back = self.tree.predecessor(index);
        self.len -= 1;
        Some(index)
    }
}

impl<T> Clone for Walk<'_, T> {
    fn clone(&self) -> Self {
        Walk {
            tree: self.tree,
            front: self.front,
            back: self.back,
            len: self.len,
        }
    }
}

/// A borrowed, in-order iterator over the data in a [`Tree`].
pub struct Iter<'a, T>(pub(crate) Walk<'a, T>);

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let tree = self.0.tree;
        self.0.next().map(|index| &tree.nodes[index].data)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }
}

impl<T> DoubleEndedIterator for Iter<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        let tree = self.0.tree;
        self.0.next_back().map(|index| &tree.nodes[index].data)
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Iter(self.0.clone())
    }
}

/// A borrowed, in-order iterator over the handles of every node in a [`Tree`].
pub struct Nodes<'a, T>(pub(crate) Walk<'a, T>);

impl<T> Iterator for Nodes<'_, T> {
    type Item = NodeId;

    fn next(&mut self) -> Option<Self::Item> {
        let tree = self.0.tree;
        self.0.next().map(|index| tree.handle(index))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }
}

impl<T> DoubleEndedIterator for Nodes<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        let tree = self.0.tree;
        self.0.next_back().map(|index| tree.handle(index))
    }
}

impl<T> ExactSizeIterator for Nodes<'_, T> {}

impl<T> FusedIterator for Nodes<'_, T> {}

/// A mutable, in-order iterator over the data in a [`Tree`].
///
/// The order is resolved up front, because walking the links while handing out mutable
/// references to the nodes they live in isn't possible without aliasing.
pub struct IterMut<'a, T>(std::vec::IntoIter<&'a mut T>);

impl<'a, T> IterMut<'a, T> {
    pub(crate) fn new(tree: &'a mut Tree<T>) -> IterMut<'a, T> {
        let order: Vec<usize> = tree.walk().collect();

        let mut slots: Vec<Option<&'a mut T>> = Vec::new();
        for (index, node) in tree.nodes.iter_mut() {
            if slots.len() <= index {
                slots.resize_with(index + 1, || None);
            }
            slots[index] = Some(&mut node.data);
        }

        IterMut(
            order
                .into_iter()
                .filter_map(|index| slots[index].take())
                .collect::<Vec<_>>()
                .into_iter(),
        )
    }
}

impl<'a, T> Iterator for IterMut<'a, T> {
    type Item = &'a mut T;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }
}

impl<T> DoubleEndedIterator for IterMut<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.0.next_back()
    }
}

impl<T> ExactSizeIterator for IterMut<'_, T> {}

impl<T> FusedIterator for IterMut<'_, T> {}

/// An owned, in-order iterator over the data in a [`Tree`].
pub struct IntoIter<T>(pub(crate) Tree<T>);

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        // The smallest node has no left child, so removing it never needs a splice.
        self.0.take_first()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.0.len(), Some(self.0.len()))
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.0.take_last()
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for IntoIter<T> {}

impl<T> IntoIterator for Tree<T> {
    type Item = T;

    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter(self)
    }
}

impl<'a, T> IntoIterator for &'a Tree<T> {
    type Item = &'a T;

    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
