//! A hash table with one bucket per hash and no probing, growing until colliding hashes separate.
//!
//! See [`HashTable`] for the collision policy.

mod error;
mod hash_table;
mod iter;
mod tests;

pub use error::*;
pub use hash_table::*;
pub use iter::*;
