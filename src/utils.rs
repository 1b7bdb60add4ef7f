//! Internal utilities.

pub mod root;

#[cfg(test)]
pub mod tester;
