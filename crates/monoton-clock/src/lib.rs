//! Time sources for sequencers.
//!
//! All clocks report nanoseconds. The default [`MonotonicClock`] anchors a
//! wall-clock reading once and then only adds the elapsed time measured by
//! [`Instant`], so adjustments of the system time-of-day clock can't move it
//! backward.
//!
//! NOTE: on some systems the monotonic clock stops while the machine sleeps.
//! Readings taken after a resume are then behind the wall clock.

pub mod manual;

pub use manual::ManualClock;

use std::sync::Arc;
use std::time::{Instant, SystemTime, UNIX_EPOCH};

/// A source of non-decreasing nanosecond readings.
pub trait Clock: Send + Sync {
    /// Returns the current time in nanoseconds.
    fn now(&self) -> u64;
}

impl<C: Clock + ?Sized> Clock for Arc<C> {
    fn now(&self) -> u64 {
        self.as_ref().now()
    }
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now(&self) -> u64 {
        (**self).now()
    }
}

/// A wrapper to use any function as a clock.
pub struct FnClock<F>(pub F);

impl<F> Clock for FnClock<F>
where
    F: Fn() -> u64,
    F: Send + Sync,
{
    fn now(&self) -> u64 {
        (self.0)()
    }
}

/// A wall-clock reference advanced by a monotonic timer.
#[derive(Debug, Clone, Copy)]
pub struct MonotonicClock {
    reference: u64,
    started_at: Instant,
}

impl Default for MonotonicClock {
    fn default() -> Self {
        Self::new()
    }
}

impl MonotonicClock {
    /// Anchors the clock to nanoseconds since the UNIX epoch.
    pub fn new() -> Self {
        let reference = match SystemTime::now().duration_since(UNIX_EPOCH) {
            Ok(elapsed) => saturating_nanos(elapsed.as_nanos()),
            Err(err) => {
                log::warn!("System time is set before the UNIX epoch: {err}");
                0
            }
        };
        Self::with_reference(reference)
    }

    /// Anchors the clock to an explicit value in nanoseconds.
    pub fn with_reference(reference: u64) -> Self {
        Self {
            reference,
            started_at: Instant::now(),
        }
    }

    /// The value the clock started from.
    pub fn reference(&self) -> u64 {
        self.reference
    }
}

impl Clock for MonotonicClock {
    fn now(&self) -> u64 {
        let elapsed = saturating_nanos(self.started_at.elapsed().as_nanos());
        self.reference.saturating_add(elapsed)
    }
}

fn saturating_nanos(nanos: u128) -> u64 {
    u64::try_from(nanos).unwrap_or(u64::MAX)
}
