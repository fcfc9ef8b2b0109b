//! Compact human readable rendering of [`Duration`](std::time::Duration)s.

mod duration;

pub use duration::*;
