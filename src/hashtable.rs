//! #   The HashTable.
//!
//! The `HashTable` counts occurrences of text keys: putting a key which is
//! already present increments its count, rather than replacing it.
//!
//! ##  Under the covers.
//!
//! Under the covers the `HashTable` is a fixed-size array of buckets, each
//! the head of a singly linked chain of the entries whose keys map to it.
//!
//! The main consequences are:
//!
//! -   Once constructed, the number of buckets is fixed and cannot be
//!     increased. The chains simply grow longer.
//! -   The bucket of a key depends on the `HashFunction` active at the time
//!     it is put. Switching functions does not move existing entries.
//!
//! When constructing a new `HashTable`, pay attention to the capacity!
//!
//! #   Example: basic
//!
//! ```
//! use tally::hashfunction::HashFunction;
//! use tally::hashtable::HashTable;
//!
//! let mut table = HashTable::new(5, HashFunction::Naive).unwrap();
//! table.put("cat", 1);
//! table.put("dog", 1);
//! table.put("ox", 1);
//!
//! assert_eq!(3, table.size());
//!
//! //  "cat" and "dog" share bucket 3.
//! assert_eq!(vec![("cat", 1), ("dog", 1)], table.buckets()[3]);
//!
//! //  Putting an existing key increments its count.
//! table.put("dog", 1);
//! assert_eq!(Some(2), table.get("dog"));
//! assert_eq!(3, table.size());
//! ```
//!
//! #   Example: counting words
//!
//! `HashTable` implements `Extend`, counting each word in turn, and can then
//! report the words by descending count.
//!
//! ```
//! use tally::hashtable::HashTable;
//!
//! let mut table = HashTable::with_capacity(16).unwrap();
//! table.extend("the cat saw the dog and the ox".split_whitespace());
//!
//! assert_eq!(Some(("the", 3)), table.descending().next());
//! ```
//!
//! #   Example: switching hash functions
//!
//! ```
//! use tally::hashfunction::HashFunction;
//! use tally::hashtable::HashTable;
//!
//! let mut table = HashTable::new(5, HashFunction::Naive).unwrap();
//! table.put("dog", 1);
//!
//! table.set_hash_function(HashFunction::Sophisticated);
//!
//! //  "dog" is still stored in bucket 3, but is now looked up in bucket 4.
//! assert_eq!(None, table.get("dog"));
//! assert_eq!(1, table.size());
//!
//! table.set_hash_function(HashFunction::Naive);
//! assert_eq!(Some(1), table.get("dog"));
//! ```

pub mod iterator;

mod hashtable;
mod node;

pub use self::hashtable::HashTable;
pub use self::iterator::{DescendingReport, Entries};

use super::capacity;
use super::failure;
use super::hashfunction;
use super::root;
