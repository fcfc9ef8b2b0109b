//! Progress reporting callbacks, and wrappers that decimate them.
//!
//! Reporting every step of a long loop to a UI or a log is wasteful. [`EveryNth`] forwards only one
//! report in `n`, [`Throttled`] forwards at most one report per time interval. Both take `&self`,
//! keep their bookkeeping in atomics or behind a lock, and so can be shared between threads when
//! the wrapped reporter can.

mod clock;
mod every_nth;
mod progress;
mod tests;
mod throttled;

pub use clock::*;
pub use every_nth::*;
pub use progress::*;
pub use throttled::*;
