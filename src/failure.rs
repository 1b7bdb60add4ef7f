//! The Failure and Result types of this library.
//!
//! Few operations of the `HashTable` may fail. A missing key is an expected
//! outcome rather than a failure, and is represented by `None`. The remaining
//! causes of error are represented as a `Failure`:
//!
//! -   Constructing a table with no bucket at all.
//! -   Requesting the next entry of an exhausted iterator through `try_next`.

use super::root::{error, fmt, result};

/// Universal Failure type of this library.
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq, Ord, PartialOrd)]
pub enum Failure {
    /// The requested number of buckets is zero.
    InvalidCapacity,
    /// No further entry can be produced by the iterator.
    IteratorExhausted,
}

impl error::Error for Failure {}

impl fmt::Display for Failure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// Universal Result type of this library.
pub type Result<T> = result::Result<T, Failure>;
