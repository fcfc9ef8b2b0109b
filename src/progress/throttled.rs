use std::time::{Duration, Instant};

use log::trace;
use parking_lot::Mutex;

use super::{Clock, Progress};

/// Forwards a report only if at least `interval` has passed since the previous forwarded report.
/// The first report is always forwarded.
///
/// Created by [`ProgressExt::throttled`](super::ProgressExt::throttled) and
/// [`ProgressExt::throttled_with_clock`](super::ProgressExt::throttled_with_clock).
#[derive(Debug)]
pub struct Throttled<P, C> {
    inner: P,
    interval: Duration,
    clock: C,
    last: Mutex<Option<Instant>>,
}

impl<P, C: Clock> Throttled<P, C> {
    pub fn new(inner: P, interval: Duration, clock: C) -> Throttled<P, C> {
        Throttled {
            inner,
            interval,
            clock,
            last: Mutex::new(None),
        }
    }

    pub const fn interval(&self) -> Duration {
        self.interval
    }

    pub fn into_inner(self) -> P {
        self.inner
    }

    /// Claims the right to forward a report at `now`. The timestamp is updated under the lock so
    /// that concurrent callers can't both claim the same window.
    fn claim(&self, now: Instant) -> bool {
        let mut last = self.last.lock();
        match *last {
            Some(prev) if now.saturating_duration_since(prev) < self.interval => false,
            _ => {
                *last = Some(now);
                true
            }
        }
    }
}

impl<T, P: Progress<T>, C: Clock> Progress<T> for Throttled<P, C> {
    fn report(&self, value: T) {
        let now = self.clock.now();
        if self.claim(now) {
            trace!("forwarding throttled progress report");
            self.inner.report(value);
        } else {
            trace!("dropping progress report inside {:?} interval", self.interval);
        }
    }
}
