use std::collections::TryReserveError;
use std::error::Error;
use std::fmt::{self, Display, Formatter};

use derive_more::{Display, Error, From, IsVariant};

#[doc(inline)]
pub use crate::util::error::CapacityOverflow;

/// A rehash was requested with a bucket count that doesn't exceed the current one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NotLarger {
    pub current: usize,
    pub requested: usize,
}

impl Display for NotLarger {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Unable to rehash HashTable with {} buckets into {} buckets!",
            self.current, self.requested
        )
    }
}

impl Error for NotLarger {}

/// Two values would have shared the same bucket after a rehash.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BucketCollision {
    pub bucket: usize,
    pub bucket_count: usize,
}

impl Display for BucketCollision {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Rehashing into {} buckets would place two values in bucket {}!",
            self.bucket_count, self.bucket
        )
    }
}

impl Error for BucketCollision {}

#[derive(Debug, Clone, PartialEq, Eq, Display, Error, From, IsVariant)]
pub enum RehashError {
    NotLarger(NotLarger),
    BucketCollision(BucketCollision),
    CapacityOverflow(CapacityOverflow),
    AllocFailed(TryReserveError),
}
