//! Internal chain Node for HashTable

use super::root::{boxed::Box, fmt, iter, string::String};

//  A link to the next node of a chain, or the head of a bucket.
pub type Link = Option<Box<Node>>;

//  The actual element stored in HashTable.
pub struct Node {
    //  The key.
    pub key: String,
    //  The count.
    pub value: u32,
    //  The next node in the same bucket, exclusively owned.
    pub next: Link,
}

impl Node {
    //  Creates a new instance, at the tail of its chain.
    pub fn new(key: &str, value: u32) -> Box<Self> {
        Box::new(Node { key: key.into(), value, next: None })
    }
}

impl fmt::Debug for Node {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:?} => {:?}", self.key, self.value)
    }
}

//  Returns an iterator over the nodes of the chain starting at `head`.
pub fn chain(head: &Link) -> Chain<'_> {
    Chain(head.as_deref())
}

//  Drops the chain starting at `head`, one node at a time.
//
//  The default recursive drop of `Box` could exhaust the stack on long chains.
pub fn unlink(head: &mut Link) {
    let mut link = head.take();

    while let Some(mut node) = link {
        link = node.next.take();
    }
}

//  An iterator over the nodes of a chain, from head to tail.
#[derive(Clone)]
pub struct Chain<'a>(Option<&'a Node>);

impl<'a> iter::Iterator for Chain<'a> {
    type Item = &'a Node;

    fn next(&mut self) -> Option<&'a Node> {
        let node = self.0?;
        self.0 = node.next.as_deref();
        Some(node)
    }
}

impl<'a> iter::FusedIterator for Chain<'a> {}

#[cfg(test)]
mod tests {

use super::*;

fn link(entries: &[(&str, u32)]) -> Link {
    let mut head = None;
    for &(key, value) in entries.iter().rev() {
        let mut node = Node::new(key, value);
        node.next = head;
        head = Some(node);
    }
    head
}

#[test]
fn chain_empty() {
    assert_eq!(0, chain(&None).count());
}

#[test]
fn chain_order() {
    let head = link(&[("a", 1), ("b", 2), ("c", 3)]);

    let keys: Vec<_> = chain(&head).map(|n| n.key.as_str()).collect();

    assert_eq!(vec!["a", "b", "c"], keys);
}

#[test]
fn node_debug() {
    let node = Node::new("cat", 3);

    assert_eq!("\"cat\" => 3", format!("{:?}", node));
}

#[test]
fn unlink_long_chain() {
    let mut head = None;
    for i in 0..100_000 {
        let mut node = Node::new("k", i);
        node.next = head;
        head = Some(node);
    }

    unlink(&mut head);

    assert!(head.is_none());
}

}
