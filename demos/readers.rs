//! A simple shared readers example.
//!
//! In this example, there are two phases, repeated a few times:
//! -   The Producer thread counts a new batch of words into the HashTable.
//! -   Several Consumer threads then look up words concurrently.
//!
//! The HashTable has no internal synchronization: the Consumers only ever see
//! a shared reference, and the Producer may only resume counting once all of
//! them are done with it.

extern crate crossbeam_utils;
extern crate tally;

use tally::hashtable::HashTable;

const NUMBER_BATCHES: usize = 4;
const NUMBER_CONSUMERS: usize = 3;
const NUMBER_WORDS_PER_BATCH: usize = 20;

fn batch(index: usize) -> Vec<String> {
    //  Words of earlier batches reappear, so counts grow over time.
    (0..NUMBER_WORDS_PER_BATCH)
        .map(|i| format!("word-{}", (index * NUMBER_WORDS_PER_BATCH / 2) + i))
        .collect()
}

fn main() {
    let mut table = HashTable::with_capacity(32).expect("32 is not 0");

    for index in 0..NUMBER_BATCHES {
        //
        //  Producer
        //
        table.extend(batch(index));

        println!("Producer - batch {} counted, {} distinct words", index, table.size());

        //
        //  Consumers
        //
        let shared = &table;

        crossbeam_utils::thread::scope(|scope| {
            for consumer in 0..NUMBER_CONSUMERS {
                scope.spawn(move |_| {
                    let key = format!("word-{}", consumer * NUMBER_WORDS_PER_BATCH / 2);

                    match shared.get(&key) {
                        Some(count) => println!("Consumer {} - {} seen {} times", consumer, key, count),
                        None => println!("Consumer {} - {} not seen yet", consumer, key),
                    }

                    assert_eq!(shared.size(), shared.iter().count());
                });
            }
        })
        .unwrap();
    }

    let (word, count) = table.descending().next().expect("Should have counted words");
    println!("Most frequent: {} ({} times)", word, count);
}
