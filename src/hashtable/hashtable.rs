//! The HashTable

use log::{debug, info, warn};

use super::root::{boxed::Box, fmt, iter, vec::Vec};

use super::capacity::{BucketIndex, Capacity};
use super::failure::Result;
use super::hashfunction::HashFunction;
use super::iterator::{DescendingReport, Entries};
use super::node::{self, Link, Node};

//
//  Public Interface
//

/// `HashTable`
///
/// A fixed-capacity hash table from text keys to counts, resolving
/// collisions by chaining.
pub struct HashTable {
    //  Number of buckets, set in stone at construction.
    capacity: Capacity,
    //  Number of distinct keys stored.
    size: usize,
    //  Function used to locate the bucket of a key, for upcoming operations.
    hash_function: HashFunction,
    buckets: Box<[Link]>,
}

impl HashTable {
    /// Creates a new instance of the `HashTable` with `capacity` buckets,
    /// using `hash_function` to locate the bucket of a key.
    ///
    /// #   Errors
    ///
    /// Returns `Failure::InvalidCapacity` if `capacity` is 0.
    ///
    /// #   Example
    ///
    /// ```
    /// #   use tally::failure::Failure;
    /// #   use tally::hashfunction::HashFunction;
    /// #   use tally::hashtable::HashTable;
    /// let table = HashTable::new(5, HashFunction::Naive).unwrap();
    ///
    /// assert_eq!(0, table.size());
    /// assert_eq!(5, table.capacity());
    ///
    /// assert_eq!(Some(Failure::InvalidCapacity), HashTable::new(0, HashFunction::Naive).err());
    /// ```
    pub fn new(capacity: usize, hash_function: HashFunction) -> Result<Self> {
        let capacity = Capacity::new(capacity).map_err(|failure| {
            warn!("Cannot create a HashTable with {} buckets: {}", capacity, failure);
            failure
        })?;

        let buckets = iter::repeat_with(|| None).take(capacity.get()).collect();

        Ok(Self { capacity, size: 0, hash_function, buckets })
    }

    /// Creates a new instance of the `HashTable` with `capacity` buckets,
    /// using the default, sophisticated, hash function.
    ///
    /// #   Errors
    ///
    /// Returns `Failure::InvalidCapacity` if `capacity` is 0.
    pub fn with_capacity(capacity: usize) -> Result<Self> {
        Self::new(capacity, HashFunction::default())
    }

    /// Returns the number of buckets.
    pub fn capacity(&self) -> usize { self.capacity.get() }

    /// Returns the number of distinct keys contained in the instance.
    ///
    /// #   Example
    ///
    /// ```
    /// #   use tally::hashtable::HashTable;
    /// let mut table = HashTable::with_capacity(4).unwrap();
    /// assert_eq!(0, table.size());
    ///
    /// table.put("a", 1);
    /// table.put("a", 1);
    /// assert_eq!(1, table.size());
    /// ```
    pub fn size(&self) -> usize { self.size }

    /// Returns whether the instance contains any key, or not.
    pub fn is_empty(&self) -> bool { self.size == 0 }

    /// Returns whether the instance contains as many keys as it has buckets.
    ///
    /// This is a nominal signal: chains grow without bound, and a full table
    /// accepts further keys.
    ///
    /// #   Example
    ///
    /// ```
    /// #   use tally::hashtable::HashTable;
    /// let mut table = HashTable::with_capacity(2).unwrap();
    /// table.put("a", 1);
    /// table.put("b", 1);
    /// assert!(table.is_full());
    ///
    /// table.put("c", 1);
    /// assert!(!table.is_full());
    /// assert_eq!(3, table.size());
    /// ```
    pub fn is_full(&self) -> bool { self.size == self.capacity.get() }

    /// Returns the hash function used by upcoming operations.
    pub fn hash_function(&self) -> HashFunction { self.hash_function }

    /// Switches the hash function used by upcoming operations.
    ///
    /// Existing entries are not moved: a key put under the former function
    /// may no longer be found if the new function maps it elsewhere.
    pub fn set_hash_function(&mut self, hash_function: HashFunction) {
        if hash_function != self.hash_function {
            info!("Switching hash function from {:?} to {:?}, {} entries left in place",
                self.hash_function, hash_function, self.size);
        }

        self.hash_function = hash_function;
    }

    /// Returns the index of the bucket of `key`, as per the active hash
    /// function.
    ///
    /// #   Example
    ///
    /// ```
    /// #   use tally::capacity::BucketIndex;
    /// #   use tally::hashfunction::HashFunction;
    /// #   use tally::hashtable::HashTable;
    /// let table = HashTable::new(5, HashFunction::Naive).unwrap();
    ///
    /// assert_eq!(BucketIndex(3), table.bucket_of("cat"));
    /// assert_eq!(BucketIndex(2), table.bucket_of("ox"));
    /// ```
    pub fn bucket_of(&self, key: &str) -> BucketIndex {
        self.hash_function.bucket_of(key, self.capacity)
    }

    /// Returns `true` if the table contains the specified key.
    ///
    /// #   Example
    ///
    /// ```
    /// #   use tally::hashtable::HashTable;
    /// let mut table = HashTable::with_capacity(4).unwrap();
    /// table.put("a", 1);
    ///
    /// assert!(table.contains("a"));
    /// assert!(!table.contains("b"));
    /// ```
    pub fn contains(&self, key: &str) -> bool { self.find(key).is_some() }

    /// Returns the count of the key, if any.
    ///
    /// #   Example
    ///
    /// ```
    /// #   use tally::hashtable::HashTable;
    /// let mut table = HashTable::with_capacity(4).unwrap();
    /// table.put("a", 7);
    ///
    /// assert_eq!(Some(7), table.get("a"));
    /// assert_eq!(None, table.get("b"));
    /// ```
    pub fn get(&self, key: &str) -> Option<u32> { self.find(key).map(|n| n.value) }

    /// Puts a key into the table.
    ///
    /// If the key is absent, it is stored with a count of `value`. If it is
    /// present, its count is incremented by 1 and `value` is ignored; the
    /// count saturates at `u32::MAX`.
    ///
    /// Returns `value`, regardless.
    ///
    /// #   Example
    ///
    /// ```
    /// #   use tally::hashtable::HashTable;
    /// let mut table = HashTable::with_capacity(4).unwrap();
    ///
    /// assert_eq!(5, table.put("a", 5));
    /// assert_eq!(Some(5), table.get("a"));
    ///
    /// assert_eq!(42, table.put("a", 42));
    /// assert_eq!(Some(6), table.get("a"));
    /// ```
    pub fn put(&mut self, key: &str, value: u32) -> u32 {
        let index = self.bucket_of(key);
        let mut link = &mut self.buckets[index.0];

        while let Some(node) = link {
            if node.key == key {
                node.value = node.value.saturating_add(1);
                return value;
            }

            link = &mut node.next;
        }

        *link = Some(Node::new(key, value));
        self.size += 1;

        debug!("Inserted key: {}, value: {} at index: {}", key, value, index.0);

        value
    }

    /// Removes a key from the table.
    ///
    /// Returns the count of the key, if it was present.
    ///
    /// #   Example
    ///
    /// ```
    /// #   use tally::hashtable::HashTable;
    /// let mut table = HashTable::with_capacity(4).unwrap();
    /// table.put("a", 3);
    ///
    /// assert_eq!(Some(3), table.remove("a"));
    /// assert_eq!(None, table.remove("a"));
    /// assert!(table.is_empty());
    /// ```
    pub fn remove(&mut self, key: &str) -> Option<u32> {
        let index = self.bucket_of(key);
        let mut link = &mut self.buckets[index.0];

        while link.as_ref().is_some_and(|node| node.key != key) {
            link = &mut link.as_mut()?.next;
        }

        let removed = *link.take()?;
        *link = removed.next;
        self.size -= 1;

        debug!("Removing key: {} at index: {}", key, index.0);

        Some(removed.value)
    }

    /// Clears the instance.
    ///
    /// The instance is then empty, although it retains its buckets.
    ///
    /// #   Example
    ///
    /// ```
    /// #   use tally::hashtable::HashTable;
    /// let mut table = HashTable::with_capacity(4).unwrap();
    /// table.extend(["a", "b", "c"]);
    ///
    /// table.clear();
    /// assert!(table.is_empty());
    /// assert_eq!(4, table.capacity());
    /// ```
    pub fn clear(&mut self) {
        self.buckets.iter_mut().for_each(node::unlink);
        self.size = 0;
    }

    /// Returns an iterator over the entries, in bucket order, then chain
    /// order.
    pub fn iter(&self) -> Entries<'_> { Entries::create(&self.buckets) }

    /// Returns an iterator over the entries, by descending count.
    ///
    /// Entries with equal counts are produced in the order of `iter`.
    pub fn descending(&self) -> DescendingReport<'_> {
        DescendingReport::create(self.iter())
    }

    /// Returns the entries of each bucket, in chain order.
    ///
    /// #   Example
    ///
    /// ```
    /// #   use tally::hashfunction::HashFunction;
    /// #   use tally::hashtable::HashTable;
    /// let mut table = HashTable::new(3, HashFunction::Naive).unwrap();
    /// table.extend(["a", "b", "ab"]);
    ///
    /// let buckets = table.buckets();
    ///
    /// assert_eq!(3, buckets.len());
    /// assert!(buckets[0].is_empty());
    /// assert_eq!(vec![("a", 1), ("b", 1)], buckets[1]);
    /// assert_eq!(vec![("ab", 1)], buckets[2]);
    /// ```
    pub fn buckets(&self) -> Vec<Vec<(&str, u32)>> {
        self.buckets.iter()
            .map(|head| node::chain(head).map(|n| (n.key.as_str(), n.value)).collect())
            .collect()
    }

    //  Returns the first node matching `key` in its bucket, if any.
    fn find(&self, key: &str) -> Option<&Node> {
        let index = self.bucket_of(key);

        node::chain(&self.buckets[index.0]).find(|n| n.key == key)
    }
}

impl Drop for HashTable {
    fn drop(&mut self) { self.clear(); }
}

impl fmt::Debug for HashTable {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let buckets: Vec<Vec<&Node>> = self.buckets.iter()
            .map(|head| node::chain(head).collect())
            .collect();

        f.debug_struct("HashTable")
            .field("capacity", &self.capacity.get())
            .field("size", &self.size)
            .field("hash_function", &self.hash_function)
            .field("buckets", &buckets)
            .finish()
    }
}

/// Displays the counts held in each bucket, one bucket per line.
///
/// #   Example
///
/// ```
/// #   use tally::hashfunction::HashFunction;
/// #   use tally::hashtable::HashTable;
/// let mut table = HashTable::new(3, HashFunction::Naive).unwrap();
/// table.put("a", 4);
/// table.put("b", 2);
///
/// assert_eq!("Bucket 1 :\nBucket 2 : 4 2\nBucket 3 :\n", table.to_string());
/// ```
impl fmt::Display for HashTable {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for (index, head) in self.buckets.iter().enumerate() {
            write!(f, "Bucket {} :", index + 1)?;

            for node in node::chain(head) {
                write!(f, " {}", node.value)?;
            }

            writeln!(f)?;
        }

        Ok(())
    }
}

impl<'a> iter::IntoIterator for &'a HashTable {
    type Item = (&'a str, u32);
    type IntoIter = Entries<'a>;

    fn into_iter(self) -> Entries<'a> { self.iter() }
}

impl<S: AsRef<str>> iter::Extend<S> for HashTable {
    fn extend<C>(&mut self, collection: C)
    where
        C: IntoIterator<Item = S>
    {
        for key in collection {
            self.put(key.as_ref(), 1);
        }
    }
}

//  mod tests
