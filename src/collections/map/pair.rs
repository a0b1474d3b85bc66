use std::fmt::{self, Debug, Formatter};

/// A key and its associated value, as stored in each node of a
/// [`TreeMap`](super::TreeMap).
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Pair<K, V> {
    pub key: K,
    pub value: V,
}

impl<K, V> Pair<K, V> {
    pub fn into_tuple(self) -> (K, V) {
        (self.key, self.value)
    }

    pub const fn as_tuple(&self) -> (&K, &V) {
        (&self.key, &self.value)
    }
}

impl<K, V> From<(K, V)> for Pair<K, V> {
    fn from((key, value): (K, V)) -> Self {
        Pair { key, value }
    }
}

impl<K: Debug, V: Debug> Debug for Pair<K, V> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}: {:?}", self.key, self.value)
    }
}
