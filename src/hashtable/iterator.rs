//! Various iterators over the HashTable.

use super::root::{cmp, collections::BinaryHeap, iter};

use super::failure::{Failure, Result};
use super::node::{Link, Node};

/// An iterator over the key-value pairs of a `HashTable`.
///
/// Entries are produced in ascending bucket order, and within a bucket from
/// the head to the tail of its chain. Every entry is produced exactly once,
/// whatever the length of the chains.
///
/// #   Example
///
/// ```
/// #   use tally::hashfunction::HashFunction;
/// #   use tally::hashtable::HashTable;
/// let mut table = HashTable::new(4, HashFunction::Naive).unwrap();
/// table.put("ab", 1);
/// table.put("a", 1);
/// table.put("ba", 1);
///
/// let mut entries = table.iter();
///
/// assert!(entries.has_next());
/// assert_eq!(Ok(("a", 1)), entries.try_next());
/// assert_eq!(Ok(("ab", 1)), entries.try_next());
/// assert_eq!(Ok(("ba", 1)), entries.try_next());
///
/// assert!(!entries.has_next());
/// assert!(entries.try_next().is_err());
/// ```
#[derive(Clone)]
pub struct Entries<'a> {
    buckets: &'a [Link],
    //  The index of the next bucket to visit.
    index: usize,
    //  The next node to produce, if any.
    current: Option<&'a Node>,
}

impl<'a> Entries<'a> {
    pub(crate) fn create(buckets: &'a [Link]) -> Self {
        Self { buckets, index: 0, current: None }
    }

    /// Returns whether any entry remains.
    ///
    /// Skips past empty buckets, so that the next entry is ready.
    pub fn has_next(&mut self) -> bool {
        while self.current.is_none() && self.index < self.buckets.len() {
            self.current = self.buckets[self.index].as_deref();
            self.index += 1;
        }

        self.current.is_some()
    }

    /// Returns the next entry.
    ///
    /// #   Errors
    ///
    /// Returns `Failure::IteratorExhausted` if all entries were produced.
    pub fn try_next(&mut self) -> Result<(&'a str, u32)> {
        if !self.has_next() {
            return Err(Failure::IteratorExhausted);
        }

        let node = self.current.ok_or(Failure::IteratorExhausted)?;
        self.current = node.next.as_deref();

        Ok((node.key.as_str(), node.value))
    }
}

impl<'a> iter::Iterator for Entries<'a> {
    type Item = (&'a str, u32);

    fn next(&mut self) -> Option<Self::Item> { self.try_next().ok() }
}

impl<'a> iter::FusedIterator for Entries<'a> {}

/// An iterator over the key-value pairs of a `HashTable`, by descending count.
///
/// All entries are ranked upon creation; the table is left untouched. Entries
/// with equal counts are produced in the order `Entries` would produce them.
///
/// #   Example
///
/// ```
/// #   use tally::hashtable::HashTable;
/// let mut table = HashTable::with_capacity(7).unwrap();
/// table.put("x", 5);
/// table.put("y", 9);
/// table.put("z", 2);
///
/// let report: Vec<_> = table.descending().collect();
///
/// assert_eq!(vec![("y", 9), ("x", 5), ("z", 2)], report);
/// ```
pub struct DescendingReport<'a>(BinaryHeap<Ranked<'a>>);

impl<'a> DescendingReport<'a> {
    pub(crate) fn create(entries: Entries<'a>) -> Self {
        let ranked = entries.enumerate()
            .map(|(position, (key, value))| Ranked { value, position, key });

        Self(ranked.collect())
    }
}

impl<'a> iter::Iterator for DescendingReport<'a> {
    type Item = (&'a str, u32);

    fn next(&mut self) -> Option<Self::Item> {
        self.0.pop().map(|r| (r.key, r.value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.0.len(), Some(self.0.len()))
    }
}

impl<'a> iter::ExactSizeIterator for DescendingReport<'a> {}

impl<'a> iter::FusedIterator for DescendingReport<'a> {}

//
//  Implementation Details
//

//  An entry, ranked by count, then by position in table order.
//
//  The greatest count comes first; amongst equal counts, the lowest position.
struct Ranked<'a> {
    value: u32,
    position: usize,
    key: &'a str,
}

impl<'a> cmp::PartialEq for Ranked<'a> {
    fn eq(&self, other: &Self) -> bool { self.cmp(other) == cmp::Ordering::Equal }
}

impl<'a> cmp::Eq for Ranked<'a> {}

impl<'a> cmp::PartialOrd for Ranked<'a> {
    fn partial_cmp(&self, other: &Self) -> Option<cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl<'a> cmp::Ord for Ranked<'a> {
    fn cmp(&self, other: &Self) -> cmp::Ordering {
        self.value.cmp(&other.value)
            .then_with(|| other.position.cmp(&self.position))
    }
}

#[cfg(test)]
mod tests {

use super::*;

use crate::utils::tester::*;

#[test]
fn entries_empty() {
    let table = naive_table(4, &[]);
    let mut entries = table.iter();

    assert!(!entries.has_next());
    assert_eq!(Err(Failure::IteratorExhausted), entries.try_next());
    assert_eq!(None, entries.next());
}

#[test]
fn entries_single_node_buckets() {
    //  "a" in bucket 1, "ab" in bucket 2, "abc" in bucket 3.
    let table = naive_table(4, &["abc", "a", "ab"]);

    let entries: Vec<_> = table.iter().collect();

    assert_eq!(vec![("a", 1), ("ab", 1), ("abc", 1)], entries);
}

#[test]
fn entries_chained() {
    //  "a" and "b" in bucket 1, "ab" and "ba" in bucket 2.
    let table = naive_table(4, &["a", "b", "ab", "ba"]);

    let entries: Vec<_> = table.iter().collect();

    assert_eq!(vec![("a", 1), ("b", 1), ("ab", 1), ("ba", 1)], entries);
}

#[test]
fn entries_single_node_after_chain() {
    //  Bucket 0: "abcd", bucket 1: "a" -> "b" -> "c", bucket 2: "xy".
    let table = naive_table(4, &["a", "b", "c", "xy", "abcd"]);

    let entries: Vec<_> = table.iter().map(|(k, _)| k).collect();

    assert_eq!(vec!["abcd", "a", "b", "c", "xy"], entries);
}

#[test]
fn entries_has_next_idempotent() {
    let table = naive_table(8, &["a"]);
    let mut entries = table.iter();

    assert!(entries.has_next());
    assert!(entries.has_next());
    assert_eq!(Ok(("a", 1)), entries.try_next());
    assert!(!entries.has_next());
    assert!(!entries.has_next());
}

#[test]
fn entries_fused() {
    let table = naive_table(2, &["a", "bb"]);
    let mut entries = table.iter();

    assert_eq!(2, entries.by_ref().count());
    assert_eq!(None, entries.next());
    assert_eq!(Err(Failure::IteratorExhausted), entries.try_next());
}

#[test]
fn entries_clone_independent() {
    let table = naive_table(4, &["a", "b", "ab"]);
    let mut entries = table.iter();
    entries.next();

    let clone = entries.clone();

    assert_eq!(2, entries.count());
    assert_eq!(2, clone.count());
}

#[test]
fn entries_visits_all() {
    let keys: Vec<String> = (0..200).map(|i| format!("key-{}", i)).collect();
    let keys: Vec<&str> = keys.iter().map(|k| k.as_str()).collect();

    for &capacity in &[1, 2, 3, 7, 64, 500] {
        let entries: Vec<_> = keys.iter().map(|&k| (k, 1)).collect();
        let table = sophisticated_table(capacity, &entries);

        let visited = sorted(table.iter());

        assert_eq!(sorted(entries.iter().copied()), visited);
    }
}

#[test]
fn descending_ties_in_table_order() {
    let table = sophisticated_table(7, &[("x", 5), ("y", 9), ("z", 9)]);

    let tied: Vec<_> = table.iter().filter(|&(_, v)| v == 9).collect();
    let report: Vec<_> = table.descending().collect();

    assert_eq!(3, report.len());
    assert_eq!(&tied[..], &report[..2]);
    assert_eq!(("x", 5), report[2]);
}

#[test]
fn descending_exact_size() {
    let table = naive_table(3, &["a", "b", "cc", "ddd"]);
    let mut report = table.descending();

    assert_eq!(4, report.len());
    report.next();
    assert_eq!(3, report.len());
}

#[test]
fn descending_leaves_table_untouched() {
    let table = sophisticated_table(5, &[("x", 5), ("y", 9)]);

    let _ = table.descending().count();

    assert_eq!(2, table.size());
    assert_eq!(Some(5), table.get("x"));
    assert_eq!(Some(9), table.get("y"));
}

#[test]
fn descending_empty() {
    let table = naive_table(5, &[]);

    assert_eq!(None, table.descending().next());
}

}   //  mod tests
