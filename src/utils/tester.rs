//! Internal testing utilities

use std::sync::Once;

use env_logger::Builder;
use log::LevelFilter;

use crate::hashfunction::HashFunction;
use crate::hashtable::HashTable;

static INIT: Once = Once::new();

//  Installs a logger capturing the library's diagnostics, once per process.
//
//  The level defaults to `debug` for this crate, and may be overridden through
//  `RUST_LOG`.
pub fn init_logger() {
    INIT.call_once(|| {
        let mut builder = Builder::new();

        builder
            .filter_level(LevelFilter::Warn)
            .filter_module("tally", LevelFilter::Debug)
            .is_test(true)
            .parse_default_env();

        //  Another test harness may have installed a logger already.
        let _ = builder.try_init();
    });
}

//  Creates a table with the naive hash function, then puts each key with a
//  count of 1.
pub fn naive_table(capacity: usize, keys: &[&str]) -> HashTable {
    init_logger();

    let mut table = HashTable::new(capacity, HashFunction::Naive).unwrap();
    for key in keys {
        table.put(key, 1);
    }
    table
}

//  Creates a table with the sophisticated hash function, then puts each
//  key-value pair.
pub fn sophisticated_table(capacity: usize, entries: &[(&str, u32)]) -> HashTable {
    init_logger();

    let mut table = HashTable::new(capacity, HashFunction::Sophisticated).unwrap();
    for &(key, value) in entries {
        table.put(key, value);
    }
    table
}

//  Collects the entries yielded by an iterator into owned pairs, sorted by
//  key, to compare independently of the layout of the table.
pub fn sorted<'a, I>(entries: I) -> Vec<(String, u32)>
where
    I: IntoIterator<Item = (&'a str, u32)>,
{
    let mut result: Vec<_> = entries.into_iter()
        .map(|(key, value)| (key.to_string(), value))
        .collect();
    result.sort();
    result
}
