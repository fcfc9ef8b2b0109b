//! Descriptions attached to enum variants.
//!
//! Enums declared through [`described!`](crate::described) carry an optional human readable
//! description per variant, along with their variant names and a list of every variant. The
//! [`DescribedExt`] trait builds lookups on top of that.

mod described;
mod error;

pub use described::*;
pub use error::*;
