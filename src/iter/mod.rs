//! Reductions over sequences of `bool`.
//!
//! The strict reductions always walk the whole sequence, which matters when producing each item
//! has side effects. The lazy reductions stop as soon as the result is decided. For any finite
//! sequence both agree.

mod boolean;

pub use boolean::*;
