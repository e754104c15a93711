//! Rank-2 array and its memory layout vocabulary.

mod arr2;
mod mem;
pub mod shape;

pub use arr2::*;
pub use mem::MemLayout;
