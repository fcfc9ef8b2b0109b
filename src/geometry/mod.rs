//! Minimal 2D [`Point`] and [`Size`] value types, and conversions between them.
//!
//! These aren't meant for real geometry work: there is no vector maths beyond what it takes to
//! offset a point by a size.

mod point;
mod size;
mod tests;

pub use point::*;
pub use size::*;
