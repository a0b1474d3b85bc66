use std::cell::Cell;
use std::cmp::Ordering;
use std::rc::Rc;

/// A keyed value that counts how many times it (or any of its clones) has been dropped. Ordering
/// and equality only consider the key, so it can stand in as a set element or map key.
#[derive(Debug, Clone)]
pub struct CountedDrop {
    /// The key used for ordering.
    pub key: i32,
    /// The number of drops recorded so far, shared between clones.
    pub drops: Rc<Cell<usize>>,
}

impl CountedDrop {
    /// Creates a new CountedDrop with its own counter.
    pub fn new(key: i32) -> CountedDrop {
        CountedDrop {
            key,
            drops: Rc::new(Cell::new(0)),
        }
    }

    /// Creates another value sharing this counter, with a different key.
    pub fn sibling(&self, key: i32) -> CountedDrop {
        CountedDrop {
            key,
            drops: self.drops.clone(),
        }
    }

    /// Returns the number of drops recorded on the shared counter.
    pub fn count(&self) -> usize {
        self.drops.get()
    }
}

impl Drop for CountedDrop {
    fn drop(&mut self) {
        self.drops.set(self.drops.get() + 1);
    }
}

impl PartialEq for CountedDrop {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl Eq for CountedDrop {}

impl PartialOrd for CountedDrop {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for CountedDrop {
    fn cmp(&self, other: &Self) -> Ordering {
        self.key.cmp(&other.key)
    }
}
