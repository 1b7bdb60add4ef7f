//! Re-export core/alloc/std facilities under a unified name.

#[cfg(not(feature = "with-std"))]
pub use core::{cmp, fmt, iter, result};

#[cfg(not(feature = "with-std"))]
pub use alloc::{boxed, collections, string, vec};

#[cfg(feature = "with-std")]
pub use std::{boxed, cmp, collections, fmt, iter, result, string, vec};

#[cfg(feature = "with-std")]
pub use std::error;

#[cfg(not(feature = "with-std"))]
pub mod error {

pub trait Error : super::fmt::Debug + super::fmt::Display {}

}
