//! The mutex-guarded sequence state machine.

use crate::granularity::Granularity;
use crate::sync::{self, Mutex};
use crate::{Sequencer, Stamp};
use monoton_clock::{Clock, MonotonicClock};
use std::fmt;

struct State {
    time_unit: u64,
    counter: u64,
    /// Nothing was issued within `time_unit` yet.
    fresh: bool,
}

/// A sequencer driven by a [`Clock`].
///
/// The read of the clock, the comparison with the stored time unit and the
/// update of the counter form one critical section, so concurrent callers
/// never observe the same stamp.
///
/// When the counter of a time unit is exhausted, `next` releases the lock
/// and yields until the clock reaches the next time unit. Stamps never wrap.
///
/// If the clock reports a time unit behind the stored one, the stored time
/// unit is kept and the counter moves on.
pub struct Sequence<C = MonotonicClock> {
    state: Mutex<State>,
    clock: C,
    nanos_per_unit: u64,
    max_time_unit: u64,
    max_counter: u64,
}

impl Sequence<MonotonicClock> {
    pub fn second() -> Self {
        Self::new(MonotonicClock::new(), Granularity::Second)
    }

    pub fn millisecond() -> Self {
        Self::new(MonotonicClock::new(), Granularity::Millisecond)
    }

    pub fn nanosecond() -> Self {
        Self::new(MonotonicClock::new(), Granularity::Nanosecond)
    }
}

impl<C: Clock> Sequence<C> {
    pub fn new(clock: C, granularity: Granularity) -> Self {
        Self::with_limits(
            clock,
            granularity.nanos_per_unit(),
            granularity.max_time_unit(),
            granularity.max_counter(),
        )
    }

    /// Creates a sequence with a custom layout.
    ///
    /// `nanos_per_unit` of zero is treated as one.
    pub fn with_limits(
        clock: C,
        nanos_per_unit: u64,
        max_time_unit: u64,
        max_counter: u64,
    ) -> Self {
        let nanos_per_unit = nanos_per_unit.max(1);
        let time_unit = clock.now() / nanos_per_unit;
        let state = State {
            time_unit,
            counter: 0,
            fresh: true,
        };
        Self {
            state: Mutex::new(state),
            clock,
            nanos_per_unit,
            max_time_unit,
            max_counter,
        }
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    pub fn nanos_per_unit(&self) -> u64 {
        self.nanos_per_unit
    }

    fn observe(&self) -> u64 {
        self.clock.now() / self.nanos_per_unit
    }
}

impl<C: Clock> Sequencer for Sequence<C> {
    fn next(&self) -> Stamp {
        let mut waiting = false;
        let mut regressed = false;
        loop {
            let mut state = self.state.lock();
            let now = self.clock.now();
            let observed = now / self.nanos_per_unit;
            if observed > state.time_unit {
                state.time_unit = observed;
                state.counter = 0;
                state.fresh = false;
                return Stamp::new(observed, 0);
            }
            let stamp = if state.fresh {
                state.fresh = false;
                Some(Stamp::new(state.time_unit, state.counter))
            } else if state.counter < self.max_counter {
                state.counter += 1;
                Some(Stamp::new(state.time_unit, state.counter))
            } else {
                None
            };
            let current = state.time_unit;
            drop(state);

            if observed < current && !regressed {
                regressed = true;
                log::warn!("Clock went backward: time unit {observed} is behind {current}");
            }
            match stamp {
                Some(stamp) => return stamp,
                None => {
                    if !waiting {
                        waiting = true;
                        log::trace!(
                            "Counter of time unit {current} is exhausted, waiting for the next one"
                        );
                    }
                    sync::pause(nanos_until_next_unit(now, current, self.nanos_per_unit));
                }
            }
        }
    }

    fn max_time_unit(&self) -> u64 {
        self.max_time_unit
    }

    fn max_counter(&self) -> u64 {
        self.max_counter
    }

    fn time_unit(&self) -> u64 {
        self.observe()
    }
}

/// How long to wait until the clock reaches the time unit after `current`.
///
/// Never longer than one time unit, so a clock that jumped backward far
/// is still polled regularly.
fn nanos_until_next_unit(now: u64, current: u64, nanos_per_unit: u64) -> u64 {
    current
        .saturating_add(1)
        .saturating_mul(nanos_per_unit)
        .saturating_sub(now)
        .clamp(1, nanos_per_unit)
}

impl<C> fmt::Debug for Sequence<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Sequence")
            .field("nanos_per_unit", &self.nanos_per_unit)
            .field("max_time_unit", &self.max_time_unit)
            .field("max_counter", &self.max_counter)
            .finish_non_exhaustive()
    }
}
