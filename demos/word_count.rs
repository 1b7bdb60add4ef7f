//! A simple word count example.
//!
//! Words are read from the standard input, or from a built-in excerpt when
//! the standard input is a terminal or empty, and counted in a `HashTable`.
//!
//! The same text is counted with both hash functions, to contrast how the
//! entries spread across buckets, then the words are listed by descending
//! count.
//!
//! Run with `RUST_LOG=debug` to see each insertion.

extern crate env_logger;
extern crate tally;

use std::io::{self, IsTerminal, Read};

use tally::hashfunction::HashFunction;
use tally::hashtable::HashTable;

const NUMBER_BUCKETS: usize = 16;

const EXCERPT: &str = "
    It was the best of times, it was the worst of times, it was the age of
    wisdom, it was the age of foolishness, it was the epoch of belief, it was
    the epoch of incredulity, it was the season of Light, it was the season of
    Darkness, it was the spring of hope, it was the winter of despair.
";

fn read_text() -> io::Result<String> {
    let stdin = io::stdin();

    if stdin.is_terminal() {
        return Ok(EXCERPT.to_string());
    }

    let mut text = String::new();
    stdin.lock().read_to_string(&mut text)?;

    if text.trim().is_empty() {
        text = EXCERPT.to_string();
    }

    Ok(text)
}

fn words(text: &str) -> impl Iterator<Item = String> + '_ {
    text.split(|c: char| !c.is_alphanumeric() && c != '\'')
        .filter(|w| !w.is_empty())
        .map(|w| w.to_lowercase())
}

fn count(text: &str, hash_function: HashFunction) -> HashTable {
    let mut table = HashTable::new(NUMBER_BUCKETS, hash_function)
        .expect("NUMBER_BUCKETS is not 0");

    table.extend(words(text));
    table
}

fn main() -> io::Result<()> {
    env_logger::init();

    let text = read_text()?;

    for hash_function in [HashFunction::Naive, HashFunction::Sophisticated] {
        let table = count(&text, hash_function);

        println!("{:?} - {} distinct words in {} buckets:", hash_function, table.size(), table.capacity());
        println!("{}", table);
    }

    let table = count(&text, HashFunction::default());

    println!("Words by descending count:");
    for (word, count) in table.descending() {
        println!("{}: {}", word, count);
    }

    Ok(())
}
