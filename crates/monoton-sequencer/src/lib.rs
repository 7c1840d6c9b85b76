//! Sequencers produce strictly increasing `(time unit, counter)` pairs.
//!
//! The time unit follows a monotonic clock projected to some granularity.
//! The counter orders the pairs issued within a single time unit and starts
//! over from zero whenever the time unit advances.
//!
//! The crate comes with three preconfigured granularities, each sized so
//! that an identifier of 16 symbols keeps room for a node:
//!
//! ```text
//! Second:      16 =>  6 (seconds)      + 6 (counter) + 4 (node)
//! Millisecond: 16 =>  8 (milliseconds) + 4 (counter) + 4 (node)
//! Nanosecond:  16 => 11 (nanoseconds)  + 2 (counter) + 3 (node)
//! ```
//!
//! Other layouts are possible by implementing [`Sequencer`] or by building
//! a [`Sequence`] with custom limits.

pub mod granularity;
pub mod sequence;
mod sync;

pub use granularity::{Granularity, ParseGranularityError};
pub use sequence::Sequence;

use derive_more::{Display, From, Into};
use std::sync::Arc;

/// A position in a sequence.
///
/// Stamps are ordered by the time unit first and the counter next.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, From, Into)]
#[display("{time_unit}:{counter}")]
pub struct Stamp {
    pub time_unit: u64,
    pub counter: u64,
}

impl Stamp {
    pub fn new(time_unit: u64, counter: u64) -> Self {
        Self { time_unit, counter }
    }
}

/// A generic behavior of sequence generators.
pub trait Sequencer: Send + Sync {
    /// Issues the next stamp.
    ///
    /// Every call returns a stamp greater than any stamp returned
    /// before by the same sequencer.
    fn next(&self) -> Stamp;

    /// The maximum time unit the sequencer is designed for.
    fn max_time_unit(&self) -> u64;

    /// The maximum counter value within a single time unit.
    fn max_counter(&self) -> u64;

    /// The current clock reading projected to the time unit.
    fn time_unit(&self) -> u64;
}

impl<S: Sequencer + ?Sized> Sequencer for Arc<S> {
    fn next(&self) -> Stamp {
        self.as_ref().next()
    }

    fn max_time_unit(&self) -> u64 {
        self.as_ref().max_time_unit()
    }

    fn max_counter(&self) -> u64 {
        self.as_ref().max_counter()
    }

    fn time_unit(&self) -> u64 {
        self.as_ref().time_unit()
    }
}

impl<S: Sequencer + ?Sized> Sequencer for Box<S> {
    fn next(&self) -> Stamp {
        self.as_ref().next()
    }

    fn max_time_unit(&self) -> u64 {
        self.as_ref().max_time_unit()
    }

    fn max_counter(&self) -> u64 {
        self.as_ref().max_counter()
    }

    fn time_unit(&self) -> u64 {
        self.as_ref().time_unit()
    }
}
