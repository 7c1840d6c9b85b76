//! Preconfigured time granularities.

use derive_more::Display;
use std::str::FromStr;
use thiserror::Error;

const SECOND_MAX_TIME_UNIT: u64 = 62u64.pow(6) - 1;
const SECOND_MAX_COUNTER: u64 = 62u64.pow(6) - 1;

const MILLISECOND_MAX_TIME_UNIT: u64 = 62u64.pow(8) - 1;
const MILLISECOND_MAX_COUNTER: u64 = 62u64.pow(4) - 1;

const NANOSECOND_MAX_TIME_UNIT: u64 = u64::MAX;
const NANOSECOND_MAX_COUNTER: u64 = 62u64.pow(2) - 1;

/// The resolution of the time unit of a sequence.
#[derive(Debug, Display, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Granularity {
    /// Seconds since the UNIX epoch, 6 symbols, up to 62^6 ids per second.
    #[display("second")]
    Second,
    /// Milliseconds since the UNIX epoch, 8 symbols, up to 62^4 ids per millisecond.
    #[default]
    #[display("millisecond")]
    Millisecond,
    /// Nanoseconds since the UNIX epoch, 11 symbols, up to 62^2 ids per nanosecond.
    #[display("nanosecond")]
    Nanosecond,
}

impl Granularity {
    pub const fn nanos_per_unit(self) -> u64 {
        match self {
            Self::Second => 1_000_000_000,
            Self::Millisecond => 1_000_000,
            Self::Nanosecond => 1,
        }
    }

    pub const fn max_time_unit(self) -> u64 {
        match self {
            Self::Second => SECOND_MAX_TIME_UNIT,
            Self::Millisecond => MILLISECOND_MAX_TIME_UNIT,
            Self::Nanosecond => NANOSECOND_MAX_TIME_UNIT,
        }
    }

    pub const fn max_counter(self) -> u64 {
        match self {
            Self::Second => SECOND_MAX_COUNTER,
            Self::Millisecond => MILLISECOND_MAX_COUNTER,
            Self::Nanosecond => NANOSECOND_MAX_COUNTER,
        }
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown granularity: {0:?} (expected second, millisecond or nanosecond)")]
pub struct ParseGranularityError(String);

impl FromStr for Granularity {
    type Err = ParseGranularityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "s" | "second" | "seconds" => Ok(Self::Second),
            "ms" | "millisecond" | "milliseconds" => Ok(Self::Millisecond),
            "ns" | "nanosecond" | "nanoseconds" => Ok(Self::Nanosecond),
            _ => Err(ParseGranularityError(s.to_string())),
        }
    }
}
