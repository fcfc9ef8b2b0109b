//! String helpers measured in `char`s rather than bytes, so they never split a code point.

mod string;
mod tests;

pub use string::*;
