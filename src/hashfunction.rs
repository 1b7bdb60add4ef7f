//! The hash functions of the HashTable.
//!
//! A `HashTable` selects one `HashFunction` at a time to map a key to its
//! bucket. The selection can be swapped at any point, in which case the
//! entries already stored are left where they are.
//!
//! Both functions operate on the UTF-16 code units of the key, so that a key
//! lands in the same bucket as it would in a table keyed by UTF-16 strings.

use super::capacity::{BucketIndex, Capacity};

/// The strategy used to compute the bucket of a key.
#[derive(Clone, Copy, Debug, Default, Hash, Eq, PartialEq, Ord, PartialOrd)]
pub enum HashFunction {
    /// Hashes a key by its length.
    ///
    /// Degenerate: all keys of equal length collide into the same bucket.
    Naive,
    /// Hashes a key by accumulating two polynomial hashes, with multipliers
    /// 31 and 37, over its code units.
    #[default]
    Sophisticated,
}

impl HashFunction {
    /// Returns the raw hash of `key`, prior to its reduction to a bucket.
    ///
    /// The sophisticated hash is computed with 32-bits wrapping arithmetic,
    /// and may therefore be negative.
    ///
    /// #   Example
    ///
    /// ```
    /// #   use tally::hashfunction::HashFunction;
    /// assert_eq!(3, HashFunction::Naive.hash("cat"));
    /// assert_eq!(194, HashFunction::Sophisticated.hash("a"));
    /// assert_eq!(-600_025_654, HashFunction::Sophisticated.hash("supercalifragilistic"));
    /// ```
    pub fn hash(self, key: &str) -> i64 {
        match self {
            Self::Naive => naive(key),
            Self::Sophisticated => i64::from(sophisticated(key)),
        }
    }

    /// Returns the index of the bucket of `key`, within `[0, capacity)`.
    ///
    /// #   Example
    ///
    /// ```
    /// #   use tally::capacity::{BucketIndex, Capacity};
    /// #   use tally::hashfunction::HashFunction;
    /// let capacity = Capacity::new(5).unwrap();
    ///
    /// assert_eq!(BucketIndex(3), HashFunction::Naive.bucket_of("dog", capacity));
    /// assert_eq!(BucketIndex(4), HashFunction::Sophisticated.bucket_of("dog", capacity));
    /// ```
    pub fn bucket_of(self, key: &str, capacity: Capacity) -> BucketIndex {
        capacity.reduce(self.hash(key))
    }
}

//
//  Implementation Details
//

//  Returns the number of UTF-16 code units of `key`.
fn naive(key: &str) -> i64 {
    key.encode_utf16().count() as i64
}

//  Returns the sum of the two running hashes of `key`.
//
//  Both hashes start at 0, and overflow silently.
fn sophisticated(key: &str) -> i32 {
    let (h1, h2) = key.encode_utf16().fold((0i32, 0i32), |(h1, h2), unit| {
        let unit = i32::from(unit);
        (
            h1.wrapping_mul(31).wrapping_add(unit),
            h2.wrapping_mul(37).wrapping_add(unit),
        )
    });

    h1.wrapping_add(h2)
}
