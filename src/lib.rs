#![cfg_attr(not(feature = "with-std"), no_std)]
//  Lints
#![allow(clippy::module_inception)]

//! #   The Tally Library
//!
//! A fixed-capacity hash table counting occurrences of text keys.
//!
//! -   The `HashTable`: a chained hash table from `String` to `u32` counts.
//! -   The `HashFunction`: the strategy mapping a key to its bucket.
//!
//! The number of buckets is chosen at construction and never changes; there
//! is no resizing, and collisions are resolved by chaining.

#[cfg(not(feature = "with-std"))]
extern crate alloc;

pub mod capacity;
pub mod failure;
pub mod hashfunction;
pub mod hashtable;

mod utils;

use self::utils::root;
