use std::iter::FusedIterator;
use std::slice::Iter as SliceIter;
use std::vec::IntoIter as VecIntoIter;

use super::hash_table::{Bucket, HashTable};

impl<'a, K: ?Sized, V> IntoIterator for &'a HashTable<K, V> {
    type Item = &'a V;

    type IntoIter = Iter<'a, V>;

    fn into_iter(self) -> Self::IntoIter {
        Iter {
            len: self.len(),
            inner: self.buckets.iter(),
        }
    }
}

/// An iterator over the values of a [`HashTable`] in bucket order, as references.
pub struct Iter<'a, V> {
    pub(crate) inner: SliceIter<'a, Bucket<V>>,
    pub(crate) len: usize,
}

impl<'a, V> Iterator for Iter<'a, V> {
    type Item = &'a V;

    fn next(&mut self) -> Option<Self::Item> {
        let (_, value) = self.inner.find_map(Option::as_ref)?;
        self.len -= 1;
        Some(value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len, Some(self.len))
    }
}

impl<V> ExactSizeIterator for Iter<'_, V> {}

impl<V> FusedIterator for Iter<'_, V> {}

impl<V> Clone for Iter<'_, V> {
    fn clone(&self) -> Self {
        Iter {
            inner: self.inner.clone(),
            len: self.len,
        }
    }
}

/// An owning iterator over the values of a [`HashTable`] in bucket order.
pub struct IntoIter<V> {
    pub(crate) inner: VecIntoIter<Bucket<V>>,
    pub(crate) len: usize,
}

impl<V> Iterator for IntoIter<V> {
    type Item = V;

    fn next(&mut self) -> Option<Self::Item> {
        let (_, value) = self.inner.find_map(|bucket| bucket)?;
        self.len -= 1;
        Some(value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len, Some(self.len))
    }
}

impl<V> ExactSizeIterator for IntoIter<V> {}

impl<V> FusedIterator for IntoIter<V> {}
