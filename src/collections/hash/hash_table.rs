use std::collections::TryReserveError;
use std::fmt::{self, Debug, Formatter};
use std::hash::{DefaultHasher, Hash, Hasher};
use std::mem;

use super::error::{BucketCollision, CapacityOverflow, NotLarger, RehashError};
use super::iter::{IntoIter, Iter};
use crate::util::fmt::DebugRaw;

pub type HashCode = usize;

/// A function producing the [`HashCode`] of a key.
pub type HashFunc<K> = fn(&K) -> HashCode;

pub(crate) type Bucket<V> = Option<(HashCode, V)>;

/// A table of values addressed by the hash of a key, with exactly one bucket per hash.
///
/// Keys themselves are never stored, only the [`HashCode`] produced for them, so two keys with the
/// same hash are the same key as far as the table is concerned. A key's bucket is always
/// `hash % bucket_count` and there is no probing or chaining: when an insertion lands on a bucket
/// holding a different hash, the table doubles its bucket count and rehashes every value, repeating
/// until the new key's bucket is free. Each lookup therefore checks a single bucket, at the cost of
/// potentially large growth when hashes agree on their low bits.
///
/// Values move whenever the table is rehashed.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of values in the HashTable.
/// - `b`: The number of buckets in the HashTable.
///
/// | Method | Complexity |
/// |-|-|
/// | `len` | `O(1)` |
/// | `insert` | `O(1)`, `O(b)`* |
/// | `find` | `O(1)` |
/// | `erase` | `O(1)` |
/// | `rehash` | `O(b)` |
/// | `values` | `O(b)` |
///
/// \* Every rehash caused by a collision takes `O(b)`, and an insertion may need several.
pub struct HashTable<K: ?Sized, V> {
    pub(crate) len: usize,
    pub(crate) buckets: Box<[Bucket<V>]>,
    pub(crate) hash_func: HashFunc<K>,
}

impl<K: AsRef<[u8]> + ?Sized, V> HashTable<K, V> {
    /// Creates a new HashTable with `bucket_count` empty buckets, hashing keys with
    /// [`default_hash`].
    ///
    /// If the buckets can't be allocated, the table starts with no buckets instead and allocates
    /// on the first insertion.
    pub fn new(bucket_count: usize) -> HashTable<K, V> {
        HashTable::with_hasher(bucket_count, default_hash)
    }
}

impl<K: ?Sized, V> HashTable<K, V> {
    /// Creates a new HashTable with `bucket_count` empty buckets, hashing keys with `hash_func`.
    pub fn with_hasher(bucket_count: usize, hash_func: HashFunc<K>) -> HashTable<K, V> {
        HashTable {
            len: 0,
            buckets: empty_buckets(bucket_count).unwrap_or_default(),
            hash_func,
        }
    }

    /// Returns the number of values in the HashTable.
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the HashTable contains no values.
    pub const fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the number of buckets, occupied or not.
    pub fn bucket_count(&self) -> usize {
        self.buckets.len()
    }

    pub fn hash_func(&self) -> HashFunc<K> {
        self.hash_func
    }

    /// Moves every value into a new set of `bucket_count` buckets, at the index given by its
    /// stored hash.
    ///
    /// The bucket count can only grow. If two values would end up in the same bucket, the table is
    /// left as it was and [`BucketCollision`] is returned. Doubling the bucket count never causes
    /// a collision.
    pub fn rehash(&mut self, bucket_count: usize) -> Result<(), RehashError> {
        let current = self.bucket_count();
        if bucket_count <= current {
            return Err(NotLarger {
                current,
                requested: bucket_count,
            }
            .into());
        }

        let mut old = mem::replace(&mut self.buckets, empty_buckets(bucket_count)?);

        for slot in 0..old.len() {
            let Some((hash, value)) = old[slot].take() else {
                continue;
            };
            let index = hash % bucket_count;

            if self.buckets[index].is_some() {
                // Put everything back where it was. Every value came from hash % current.
                old[slot] = Some((hash, value));
                for (hash, value) in mem::take(&mut self.buckets).into_vec().into_iter().flatten() {
                    old[hash % current] = Some((hash, value));
                }
                self.buckets = old;

                return Err(BucketCollision {
                    bucket: index,
                    bucket_count,
                }
                .into());
            }

            self.buckets[index] = Some((hash, value));
        }

        Ok(())
    }

    /// Removes every value from the HashTable, keeping its buckets.
    pub fn clear(&mut self) {
        for bucket in self.buckets.iter_mut() {
            *bucket = None;
        }
        self.len = 0;
    }

    /// Inserts `value` for `key`, returning a mutable reference to the value now stored for it.
    ///
    /// If a value with the same hash is already stored, it is returned untouched and `value` is
    /// dropped. If the key's bucket holds a different hash, the bucket count is doubled (starting
    /// from 1) until the bucket is free.
    ///
    /// References into the table can't be held across an insertion, because it may move every
    /// value.
    pub fn insert(&mut self, key: &K, value: V) -> Result<&mut V, RehashError> {
        let hash = (self.hash_func)(key);

        if self.bucket_count() == 0 {
            self.rehash(1)?;
        }

        let mut index = hash % self.bucket_count();
        while let Some((stored, _)) = &self.buckets[index]
            && *stored != hash
        {
            let grown = self
                .bucket_count()
                .checked_mul(2)
                .ok_or(CapacityOverflow)?;
            self.rehash(grown)?;
            index = hash % self.bucket_count();
        }

        let bucket = &mut self.buckets[index];
        if bucket.is_none() {
            self.len += 1;
        }

        let (_, stored) = bucket.get_or_insert((hash, value));
        Ok(stored)
    }

    /// Returns a reference to the value stored for `key`, if present.
    pub fn find(&self, key: &K) -> Option<&V> {
        let (index, hash) = self.locate(key)?;

        match &self.buckets[index] {
            Some((stored, value)) if *stored == hash => Some(value),
            _ => None,
        }
    }

    /// Returns a mutable reference to the value stored for `key`, if present.
    pub fn find_mut(&mut self, key: &K) -> Option<&mut V> {
        let (index, hash) = self.locate(key)?;

        match &mut self.buckets[index] {
            Some((stored, value)) if *stored == hash => Some(value),
            _ => None,
        }
    }

    /// Returns true if a value is stored for `key`.
    pub fn contains(&self, key: &K) -> bool {
        self.find(key).is_some()
    }

    /// Removes the value stored for `key`, returning true if one was present.
    ///
    /// Only a value whose stored hash equals the hash of `key` is removed. A value with another
    /// hash that happens to occupy the same bucket is left in place, rather than clearing whatever
    /// the bucket holds.
    pub fn erase(&mut self, key: &K) -> bool {
        self.remove(key).is_some()
    }

    /// Removes and returns the value stored for `key`, if present. As with [`HashTable::erase`],
    /// the stored hash has to match.
    pub fn remove(&mut self, key: &K) -> Option<V> {
        let (index, hash) = self.locate(key)?;

        if !matches!(self.buckets[index], Some((stored, _)) if stored == hash) {
            return None;
        }

        self.len -= 1;
        self.buckets[index].take().map(|(_, value)| value)
    }

    /// Returns an iterator over all values in bucket order, as references.
    pub fn iter(&self) -> Iter<'_, V> {
        self.into_iter()
    }

    /// Hashes `key` and finds its bucket, or None if there are no buckets.
    pub(crate) fn locate(&self, key: &K) -> Option<(usize, HashCode)> {
        let hash = (self.hash_func)(key);
        hash.checked_rem(self.bucket_count()).map(|index| (index, hash))
    }
}

impl<K: ?Sized, V: Clone> HashTable<K, V> {
    /// Copies every value, in bucket order, into a new [`Vec`] owned by the caller.
    pub fn values(&self) -> Vec<V> {
        self.iter().cloned().collect()
    }
}

impl<K: ?Sized, V: Clone> Clone for HashTable<K, V> {
    fn clone(&self) -> Self {
        HashTable {
            len: self.len,
            buckets: self.buckets.clone(),
            hash_func: self.hash_func,
        }
    }
}

impl<K: ?Sized, V> IntoIterator for HashTable<K, V> {
    type Item = V;

    type IntoIter = IntoIter<V>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter {
            len: self.len,
            inner: self.buckets.into_vec().into_iter(),
        }
    }
}

impl<K: ?Sized, V: Debug> Debug for HashTable<K, V> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let buckets: Vec<DebugRaw> = self
            .buckets
            .iter()
            .map(|bucket| {
                DebugRaw(match bucket {
                    Some((hash, value)) => format!("({hash}: {value:?})"),
                    None => "-".into(),
                })
            })
            .collect();

        f.debug_struct("HashTable")
            .field("buckets", &buckets)
            .field("len", &self.len)
            .finish()
    }
}

/// Hashes a key by reading its first byte as a signed char, or 0 for an empty key.
///
/// This only distinguishes keys by their first byte, so keys sharing one are treated as the same
/// key. Tables that need a real distribution should provide their own hash function, such as
/// [`std_hash`].
pub fn default_hash<K: AsRef<[u8]> + ?Sized>(key: &K) -> HashCode {
    key.as_ref()
        .first()
        .map_or(0, |byte| *byte as i8 as HashCode)
}

/// Hashes a key with the standard library's [`DefaultHasher`], which gives the same hash for the
/// same key every time.
pub fn std_hash<K: Hash + ?Sized>(key: &K) -> HashCode {
    let mut hasher = DefaultHasher::new();
    key.hash(&mut hasher);
    hasher.finish() as HashCode
}

fn empty_buckets<V>(bucket_count: usize) -> Result<Box<[Bucket<V>]>, TryReserveError> {
    let mut buckets = Vec::new();
    buckets.try_reserve_exact(bucket_count)?;
    buckets.resize_with(bucket_count, || None);
    Ok(buckets.into_boxed_slice())
}
