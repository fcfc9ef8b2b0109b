#![cfg(test)]

use std::cell::RefCell;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::thread;
use std::time::{Duration, Instant};

use parking_lot::Mutex;

use super::*;
use crate::util::panic::assert_panics;

/// A clock that only moves when told to.
struct ManualClock(Mutex<Instant>);

impl ManualClock {
    fn new() -> ManualClock {
        ManualClock(Mutex::new(Instant::now()))
    }

    fn advance(&self, by: Duration) {
        *self.0.lock() += by;
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Instant {
        *self.0.lock()
    }
}

#[test]
fn test_closure_is_progress() {
    let seen = RefCell::new(Vec::new());
    let progress = |value: &str| seen.borrow_mut().push(value.to_owned());
    progress.report("a");
    Progress::report(&progress, "b");
    assert_eq!(*seen.borrow(), ["a", "b"]);
}

#[test]
fn test_every_nth() {
    let seen = RefCell::new(Vec::new());
    let progress = (|value: usize| seen.borrow_mut().push(value)).every_nth(3);

    for value in 0..10 {
        progress.report(value);
    }
    assert_eq!(*seen.borrow(), [0, 3, 6, 9], "Only every third report should be forwarded.");
    assert_eq!(progress.calls(), 10, "Dropped reports should still be counted.");
}

#[test]
fn test_every_nth_one_forwards_all() {
    let count = AtomicUsize::new(0);
    let progress = (|_: ()| {
        count.fetch_add(1, Ordering::Relaxed);
    })
    .every_nth(1);

    for _ in 0..5 {
        progress.report(());
    }
    assert_eq!(count.load(Ordering::Relaxed), 5);
}

#[test]
fn test_every_nth_zero_panics() {
    assert_panics!({ (|_: u8| {}).every_nth(0) }, "A step of 0 should be rejected.");
}

#[test]
fn test_every_nth_threads() {
    let forwarded = AtomicUsize::new(0);
    let progress = (|_: usize| {
        forwarded.fetch_add(1, Ordering::Relaxed);
    })
    .every_nth(10);

    thread::scope(|scope| {
        for _ in 0..8 {
            scope.spawn(|| {
                for i in 0..100 {
                    progress.report(i);
                }
            });
        }
    });

    assert_eq!(progress.calls(), 800);
    assert_eq!(
        forwarded.load(Ordering::Relaxed),
        80,
        "Concurrent callers should not forward more than one report in ten."
    );
}

#[test]
fn test_throttled() {
    let clock = ManualClock::new();
    let seen = RefCell::new(Vec::new());
    let progress = (|value: u32| seen.borrow_mut().push(value))
        .throttled_with_clock(Duration::from_millis(100), &clock);

    progress.report(0);
    progress.report(1);
    clock.advance(Duration::from_millis(99));
    progress.report(2);
    clock.advance(Duration::from_millis(1));
    progress.report(3);
    clock.advance(Duration::from_millis(50));
    progress.report(4);
    clock.advance(Duration::from_secs(5));
    progress.report(5);

    assert_eq!(
        *seen.borrow(),
        [0, 3, 5],
        "Reports should only be forwarded once the interval has fully elapsed."
    );
}

#[test]
fn test_throttled_threads() {
    let clock = ManualClock::new();
    let forwarded = AtomicUsize::new(0);
    let progress = (|_: usize| {
        forwarded.fetch_add(1, Ordering::Relaxed);
    })
    .throttled_with_clock(Duration::from_secs(1), &clock);

    thread::scope(|scope| {
        for _ in 0..8 {
            scope.spawn(|| {
                for i in 0..1000 {
                    progress.report(i);
                }
            });
        }
    });
    assert_eq!(
        forwarded.load(Ordering::Relaxed),
        1,
        "Concurrent callers inside one interval should forward a single report."
    );

    clock.advance(Duration::from_secs(1));
    thread::scope(|scope| {
        for _ in 0..8 {
            scope.spawn(|| progress.report(0));
        }
    });
    assert_eq!(
        forwarded.load(Ordering::Relaxed),
        2,
        "The next interval should admit exactly one more report."
    );
}

#[test]
fn test_throttled_zero_interval() {
    let clock = ManualClock::new();
    let count = AtomicUsize::new(0);
    let progress = (|_: u8| {
        count.fetch_add(1, Ordering::Relaxed);
    })
    .throttled_with_clock(Duration::ZERO, &clock);

    for _ in 0..4 {
        progress.report(0);
    }
    assert_eq!(count.load(Ordering::Relaxed), 4, "A zero interval should forward everything.");
    assert_eq!(progress.interval(), Duration::ZERO);
}

#[test]
fn test_throttled_system_clock() {
    let count = AtomicUsize::new(0);
    let progress = (|_: u8| {
        count.fetch_add(1, Ordering::Relaxed);
    })
    .throttled(Duration::from_secs(3600));

    for _ in 0..100 {
        progress.report(0);
    }
    assert_eq!(count.load(Ordering::Relaxed), 1, "Only the first report fits in an hour.");
}

#[test]
fn test_wrappers_compose() {
    let clock = ManualClock::new();
    let seen = RefCell::new(Vec::new());
    let progress = (|value: u32| seen.borrow_mut().push(value))
        .throttled_with_clock(Duration::from_millis(1500), &clock)
        .every_nth(2);

    for value in 0..6 {
        progress.report(value);
        clock.advance(Duration::from_millis(600));
    }

    // every_nth passes 0, 2 and 4 on, at 0ms, 1200ms and 2400ms.
    assert_eq!(*seen.borrow(), [0, 4]);
    let throttled = progress.into_inner();
    assert_eq!(throttled.interval(), Duration::from_millis(1500));
}
