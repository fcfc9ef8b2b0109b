use std::sync::atomic::{AtomicUsize, Ordering};

use log::trace;

use super::Progress;

/// Forwards the 1st, `(n+1)`th, `(2n+1)`th... report to the wrapped reporter and drops the rest.
///
/// Created by [`ProgressExt::every_nth`](super::ProgressExt::every_nth).
#[derive(Debug)]
pub struct EveryNth<P> {
    inner: P,
    step: usize,
    calls: AtomicUsize,
}

impl<P> EveryNth<P> {
    /// # Panics
    /// Panics if `step` is 0.
    pub fn new(inner: P, step: usize) -> EveryNth<P> {
        assert!(step != 0, "progress step must be non-zero");
        EveryNth {
            inner,
            step,
            calls: AtomicUsize::new(0),
        }
    }

    /// Returns the number of reports received so far, forwarded or not.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::Relaxed)
    }

    pub fn into_inner(self) -> P {
        self.inner
    }
}

impl<T, P: Progress<T>> Progress<T> for EveryNth<P> {
    fn report(&self, value: T) {
        let call = self.calls.fetch_add(1, Ordering::Relaxed);
        if call % self.step == 0 {
            trace!("forwarding progress report {call}");
            self.inner.report(value);
        } else {
            trace!("dropping progress report {call}, step is {}", self.step);
        }
    }
}
