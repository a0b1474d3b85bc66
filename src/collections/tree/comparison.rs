use std::cmp::Ordering;
use std::ptr;

use derive_more::IsVariant;

/// The result of a three-way comparison between a probe and an element already stored in a
/// collection. The probe is always the left-hand side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, IsVariant)]
pub enum Comparison {
    LessThan,
    GreaterThan,
    EqualTo,
}

/// A function ordering two elements of a tree-based collection.
pub type Comparer<T> = fn(&T, &T) -> Comparison;

impl From<Ordering> for Comparison {
    fn from(value: Ordering) -> Self {
        match value {
            Ordering::Less => Comparison::LessThan,
            Ordering::Greater => Comparison::GreaterThan,
            Ordering::Equal => Comparison::EqualTo,
        }
    }
}

impl From<Comparison> for Ordering {
    fn from(value: Comparison) -> Self {
        match value {
            Comparison::LessThan => Ordering::Less,
            Comparison::GreaterThan => Ordering::Greater,
            Comparison::EqualTo => Ordering::Equal,
        }
    }
}

/// The fallback comparer, which knows nothing about the elements themselves. Two references are
/// equal only if they point to the same place in memory, otherwise they are ordered by address.
///
/// A collection using this comparer has reference-identity semantics: inserting a freshly
/// constructed value never matches an existing element, while a reference obtained from the
/// collection itself does.
pub fn default_compare<T: ?Sized>(a: &T, b: &T) -> Comparison {
    let a = ptr::from_ref(a).cast::<()>().addr();
    let b = ptr::from_ref(b).cast::<()>().addr();

    a.cmp(&b).into()
}

/// A comparer delegating to [`Ord`], for elements that have a natural order.
pub fn ord_compare<T: Ord + ?Sized>(a: &T, b: &T) -> Comparison {
    a.cmp(b).into()
}
