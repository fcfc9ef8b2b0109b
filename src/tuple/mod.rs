//! Ordering helpers for homogeneous pairs.

mod pair;

pub use pair::*;
