//! Capacity of the HashTable.
//!
//! Apart from holding the number of buckets itself, assembles the primitives
//! used to address a bucket.

use super::root::fmt;

use super::failure::{Failure, Result};

/// The number of buckets of a `HashTable`.
///
/// A `Capacity` is never zero, and once handed to a `HashTable` it is set in
/// stone: there is no resizing.
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq, Ord, PartialOrd)]
pub struct Capacity(usize);

impl Capacity {
    /// Creates an instance.
    ///
    /// #   Errors
    ///
    /// Returns `Failure::InvalidCapacity` if `buckets` is 0.
    ///
    /// #   Example
    ///
    /// ```
    /// #   use tally::capacity::Capacity;
    /// #   use tally::failure::Failure;
    /// assert_eq!(5, Capacity::new(5).unwrap().get());
    /// assert_eq!(Err(Failure::InvalidCapacity), Capacity::new(0));
    /// ```
    pub fn new(buckets: usize) -> Result<Self> {
        if buckets == 0 {
            Err(Failure::InvalidCapacity)
        } else {
            Ok(Self(buckets))
        }
    }

    /// Returns the number of buckets.
    pub fn get(self) -> usize { self.0 }

    /// Returns the index of the bucket in which `hash` lands.
    ///
    /// The hash is reduced modulo the capacity; negative hashes are brought
    /// back into range by adding the capacity, as done by the sophisticated
    /// hash function.
    pub fn reduce(self, hash: i64) -> BucketIndex {
        //  usize::MAX buckets cannot be allocated, so a capacity beyond
        //  i64::MAX is never observed in practice.
        let capacity = i64::try_from(self.0).unwrap_or(i64::MAX);

        let mut index = hash % capacity;
        if index < 0 {
            index += capacity;
        }

        BucketIndex(index as usize)
    }
}

impl fmt::Display for Capacity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The index of a Bucket.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct BucketIndex(pub usize);

#[cfg(test)]
mod tests {

use super::*;

#[test]
fn capacity_new_zero() {
    assert_eq!(Err(Failure::InvalidCapacity), Capacity::new(0));
}

#[test]
fn capacity_new_one() {
    assert_eq!(1, Capacity::new(1).map(Capacity::get).unwrap());
}

#[test]
fn capacity_reduce_positive() {
    fn reduce(capacity: usize, hash: i64) -> usize {
        Capacity::new(capacity).unwrap().reduce(hash).0
    }

    assert_eq!(0, reduce(1, 42));
    assert_eq!(0, reduce(5, 0));
    assert_eq!(3, reduce(5, 3));
    assert_eq!(0, reduce(5, 5));
    assert_eq!(2, reduce(5, 12));
    assert_eq!(1, reduce(7, i64::from(i32::MAX)));
}

#[test]
fn capacity_reduce_negative() {
    fn reduce(capacity: usize, hash: i64) -> usize {
        Capacity::new(capacity).unwrap().reduce(hash).0
    }

    assert_eq!(4, reduce(5, -1));
    assert_eq!(0, reduce(5, -5));
    assert_eq!(3, reduce(5, -7));
    assert_eq!(5, reduce(7, i64::from(i32::MIN)));
}

#[test]
fn capacity_display() {
    assert_eq!("12", format!("{}", Capacity::new(12).unwrap()));
}

}
