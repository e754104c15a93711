//! # reim-array
//! Owned rank-2 arrays stored column by column.
//!
//! The first dimension varies the fastest, so a column is a contiguous slice.
//! This is the storage the `reim` kernel interleaves complex values into.

#![warn(missing_docs)]

pub mod array;
mod error;

pub use array::*;
pub use error::ShapeError;
