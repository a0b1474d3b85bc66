#![cfg(test)]

use std::collections::HashMap;

use proptest::prelude::*;

use super::*;
use crate::util::alloc::CountedDrop;

fn identity(key: &usize) -> HashCode {
    *key
}

fn check<K: ?Sized, V>(table: &HashTable<K, V>) {
    for (index, bucket) in table.buckets.iter().enumerate() {
        if let Some((hash, _)) = bucket {
            assert_eq!(
                hash % table.bucket_count(),
                index,
                "Every value should be in the bucket given by its stored hash."
            );
        }
    }
    assert_eq!(table.buckets.iter().flatten().count(), table.len());
}

#[test]
fn test_colliding_hashes_force_rehash() {
    let mut table: HashTable<usize, &str> = HashTable::with_hasher(4, identity);
    table.insert(&0, "zero").unwrap();
    table.insert(&1, "one").unwrap();
    assert_eq!(table.bucket_count(), 4);

    table.insert(&4, "four").unwrap();
    assert_eq!(
        table.bucket_count(),
        8,
        "A collision with a different hash should double the bucket count."
    );

    table.insert(&16, "sixteen").unwrap();
    assert_eq!(
        table.bucket_count(),
        32,
        "The table should keep growing until the new bucket is free."
    );

    assert_eq!(table.len(), 4);
    for (key, value) in [(0, "zero"), (1, "one"), (4, "four"), (16, "sixteen")] {
        assert_eq!(
            table.find(&key),
            Some(&value),
            "Values should stay findable with the same content after a rehash."
        );
    }
    check(&table);
}

#[test]
fn test_equal_hash_returns_existing() {
    let mut table: HashTable<str, i32> = HashTable::new(8);
    table.insert("apple", 1).unwrap();

    let existing = table.insert("avocado", 2).unwrap();
    assert_eq!(*existing, 1, "A key with an equal hash should return the stored value.");
    *existing += 10;

    assert_eq!(table.len(), 1);
    assert_eq!(table.bucket_count(), 8, "An equal hash shouldn't cause a rehash.");
    assert_eq!(
        table.find("almond"),
        Some(&11),
        "The default hash only considers the first byte."
    );

    table.insert("banana", 3).unwrap();
    assert_eq!(table.len(), 2);
    assert_eq!(table.find("blueberry"), Some(&3));
    assert_eq!(table.find("cherry"), None);
}

#[test]
fn test_default_hash() {
    assert_eq!(default_hash(""), 0, "An empty key should hash to 0.");
    assert_eq!(default_hash("A"), 65);
    assert_eq!(default_hash("Apple"), default_hash("A"));
    assert_eq!(default_hash(&[7_u8, 1, 2][..]), 7);
    assert_eq!(default_hash(&vec![7_u8]), 7);
    assert_eq!(
        default_hash(&[0xff_u8][..]),
        usize::MAX,
        "The first byte should be read as a signed char."
    );

    assert_eq!(std_hash(&12_u64), std_hash(&12_u64));
    assert_ne!(std_hash("a"), std_hash("b"));
}

#[test]
fn test_rehash() {
    let mut table: HashTable<usize, char> = HashTable::with_hasher(4, identity);
    table.insert(&1, 'a').unwrap();
    table.insert(&6, 'b').unwrap();

    assert_eq!(
        table.rehash(4),
        Err(RehashError::NotLarger(NotLarger { current: 4, requested: 4 }))
    );
    assert!(table.rehash(2).is_err_and(|e| e.is_not_larger()));

    let before = format!("{table:?}");
    assert_eq!(before, "HashTable { buckets: [-, (1: 'a'), (6: 'b'), -], len: 2 }");
    assert_eq!(
        table.rehash(5),
        Err(RehashError::BucketCollision(BucketCollision { bucket: 1, bucket_count: 5 })),
        "Hashes 1 and 6 share a bucket out of 5."
    );
    assert_eq!(
        format!("{table:?}"),
        before,
        "A failed rehash should put every value back in its bucket."
    );
    assert_eq!(table.bucket_count(), 4);
    assert_eq!(table.len(), 2);

    table.rehash(6).unwrap();
    assert_eq!(table.bucket_count(), 6);
    assert_eq!(table.find(&1), Some(&'a'));
    assert_eq!(table.find(&6), Some(&'b'));
    check(&table);
}

#[test]
fn test_rehash_collision_keeps_values() {
    let counter = CountedDrop::new(0);
    let mut table: HashTable<usize, CountedDrop> = HashTable::with_hasher(4, identity);
    table.insert(&1, counter.sibling(1)).unwrap();
    table.insert(&6, counter.sibling(6)).unwrap();

    assert!(
        table
            .rehash(5)
            .is_err_and(|e| e == BucketCollision { bucket: 1, bucket_count: 5 }.into())
    );
    assert_eq!(counter.count(), 0, "A failed rehash shouldn't drop anything.");
    assert_eq!(table.bucket_count(), 4);
    assert_eq!(table.buckets[1].as_ref().map(|(hash, v)| (*hash, v.key)), Some((1, 1)));
    assert_eq!(table.buckets[2].as_ref().map(|(hash, v)| (*hash, v.key)), Some((6, 6)));
    check(&table);

    table.insert(&1, counter.sibling(5)).unwrap();
    assert_eq!(counter.count(), 1, "An insert for an existing hash should drop its argument.");
    assert_eq!(table.find(&1).map(|v| v.key), Some(1));

    table.clear();
    assert_eq!(counter.count(), 3, "Clearing should drop every value.");
    assert!(table.is_empty());
    assert_eq!(table.bucket_count(), 4, "Clearing should keep the buckets.");
}

#[test]
fn test_erase_checks_hash() {
    let mut table: HashTable<usize, &str> = HashTable::with_hasher(4, identity);
    table.insert(&1, "one").unwrap();

    assert_eq!(table.find(&5), None, "A different hash in the same bucket shouldn't match.");
    assert!(!table.erase(&5), "Erasing shouldn't remove a value with a different hash.");
    assert_eq!(table.len(), 1);

    assert!(table.erase(&1));
    assert!(!table.erase(&1));
    assert_eq!(table.len(), 0);

    table.insert(&2, "two").unwrap();
    if let Some(value) = table.find_mut(&2) {
        *value = "deux";
    }
    assert_eq!(table.remove(&2), Some("deux"));
    assert!(!table.contains(&2));
}

#[test]
fn test_empty_table_grows() {
    let mut table: HashTable<str, u8> = HashTable::new(0);
    assert_eq!(table.bucket_count(), 0);
    assert_eq!(table.find("a"), None, "Looking up in an empty table shouldn't fail.");
    assert!(!table.erase("a"));

    table.insert("a", 1).unwrap();
    assert_eq!(table.bucket_count(), 1, "An empty table should grow to a single bucket.");

    table.insert("b", 2).unwrap();
    assert_eq!(table.bucket_count(), 2);
    assert_eq!(table.values(), [2, 1], "Values should be listed in bucket order.");
}

#[test]
fn test_iterators() {
    let mut table: HashTable<usize, u32> = HashTable::with_hasher(8, identity);
    for key in [5, 2, 7] {
        table.insert(&key, key as u32 * 10).unwrap();
    }

    let iter = table.iter();
    assert_eq!(iter.len(), 3);
    assert_eq!(iter.copied().collect::<Vec<_>>(), [20, 50, 70]);
    assert_eq!(table.values(), [20, 50, 70]);

    let copy = table.clone();
    assert_eq!(copy.values(), table.values());
    assert_eq!(table.into_iter().collect::<Vec<_>>(), [20, 50, 70]);
}

#[test]
fn test_std_hash() {
    let mut table: HashTable<u64, u64> = HashTable::with_hasher(16, std_hash);
    for key in 0..20 {
        table.insert(&key, key * key).unwrap();
    }

    assert_eq!(table.len(), 20);
    for key in 0..20 {
        assert_eq!(table.find(&key), Some(&(key * key)));
    }
    check(&table);
}

#[test]
fn test_debug() {
    let mut table: HashTable<usize, &str> = HashTable::with_hasher(4, identity);
    table.insert(&1, "a").unwrap();

    assert_eq!(
        format!("{table:?}"),
        r#"HashTable { buckets: [-, (1: "a"), -, -], len: 1 }"#
    );
}

#[derive(Clone, Debug)]
enum Op {
    Insert(u8, u16),
    Erase(u8),
    Find(u8),
}

fn ops_strategy() -> impl Strategy<Value = Vec<Op>> {
    let op = prop_oneof![
        5 => (any::<u8>(), any::<u16>()).prop_map(|(k, v)| Op::Insert(k, v)),
        3 => any::<u8>().prop_map(Op::Erase),
        2 => any::<u8>().prop_map(Op::Find),
    ];
    prop::collection::vec(op, 0..200)
}

proptest! {
    #[test]
    fn prop_matches_hash_map(ops in ops_strategy()) {
        let mut table: HashTable<usize, u16> = HashTable::with_hasher(1, identity);
        let mut model = HashMap::new();

        for op in ops {
            match op {
                Op::Insert(key, value) => {
                    let stored = *table.insert(&usize::from(key), value).unwrap();
                    prop_assert_eq!(stored, *model.entry(key).or_insert(value));
                },
                Op::Erase(key) => {
                    prop_assert_eq!(table.erase(&usize::from(key)), model.remove(&key).is_some());
                },
                Op::Find(key) => {
                    prop_assert_eq!(table.find(&usize::from(key)), model.get(&key));
                },
            }

            prop_assert_eq!(table.len(), model.len());
        }

        check(&table);
        prop_assert!(table.bucket_count() <= 512, "Hashes below 256 separate within 256 buckets.");
    }
}
