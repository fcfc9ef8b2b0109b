use std::time::Duration;

use super::{Clock, EveryNth, SystemClock, Throttled};

/// Something that accepts progress updates.
///
/// Every `Fn(T)` closure is a reporter.
pub trait Progress<T> {
    fn report(&self, value: T);
}

impl<T, F: Fn(T)> Progress<T> for F {
    fn report(&self, value: T) {
        self(value)
    }
}

/// Decimating wrappers for any [`Progress`] reporter.
///
/// # Examples
/// ```
/// # use std::cell::RefCell;
/// # use standard_ext::progress::{Progress, ProgressExt};
/// let seen = RefCell::new(Vec::new());
/// let progress = (|step: u32| seen.borrow_mut().push(step)).every_nth(4);
///
/// for step in 0..10 {
///     progress.report(step);
/// }
/// assert_eq!(*seen.borrow(), [0, 4, 8]);
/// ```
pub trait ProgressExt<T>: Progress<T> + Sized {
    /// Forwards the first report and every `n`th one after it.
    ///
    /// # Panics
    /// Panics if `n` is 0.
    fn every_nth(self, n: usize) -> EveryNth<Self> {
        EveryNth::new(self, n)
    }

    /// Forwards a report only if at least `interval` has passed since the last forwarded one,
    /// measured with the system's monotonic clock.
    fn throttled(self, interval: Duration) -> Throttled<Self, SystemClock> {
        Throttled::new(self, interval, SystemClock)
    }

    /// Like [`throttled`](ProgressExt::throttled) but measures time with `clock`.
    fn throttled_with_clock<C: Clock>(self, interval: Duration, clock: C) -> Throttled<Self, C> {
        Throttled::new(self, interval, clock)
    }
}

impl<T, P: Progress<T>> ProgressExt<T> for P {}
