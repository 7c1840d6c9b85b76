//! Configuration of a generator.

use crate::error::{ConfigError, Error};
use crate::generator::Monoton;
use monoton_clock::{Clock, MonotonicClock};
use monoton_sequencer::{Granularity, ParseGranularityError, Sequence};
use std::num::ParseIntError;
use thiserror::Error;

pub const GRANULARITY_VAR: &str = "MONOTON_GRANULARITY";
pub const NODE_VAR: &str = "MONOTON_NODE";
pub const INITIAL_TIME_VAR: &str = "MONOTON_INITIAL_TIME";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SettingsError {
    #[error("invalid {var}: {source}")]
    Granularity {
        var: &'static str,
        source: ParseGranularityError,
    },
    #[error("invalid {var} value {value:?}: {source}")]
    Number {
        var: &'static str,
        value: String,
        source: ParseIntError,
    },
}

/// Parameters of a generator that uses one of the built-in granularities.
///
/// Defaults to millisecond granularity, node `0` and no initial time.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Settings {
    pub granularity: Granularity,
    pub node: u64,
    /// Subtracted from every time unit, in units of the granularity.
    pub initial_time: u64,
}

impl Settings {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn granularity(mut self, granularity: Granularity) -> Self {
        self.granularity = granularity;
        self
    }

    pub fn node(mut self, node: u64) -> Self {
        self.node = node;
        self
    }

    pub fn initial_time(mut self, initial_time: u64) -> Self {
        self.initial_time = initial_time;
        self
    }

    /// Reads `MONOTON_GRANULARITY`, `MONOTON_NODE` and `MONOTON_INITIAL_TIME`.
    ///
    /// Unset variables keep their defaults.
    pub fn from_env() -> Result<Self, SettingsError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Reads the settings with a custom variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, SettingsError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut settings = Self::default();
        if let Some(value) = lookup(GRANULARITY_VAR) {
            settings.granularity = value
                .parse()
                .map_err(|source| SettingsError::Granularity {
                    var: GRANULARITY_VAR,
                    source,
                })?;
        }
        if let Some(value) = lookup(NODE_VAR) {
            settings.node = parse_number(NODE_VAR, value)?;
        }
        if let Some(value) = lookup(INITIAL_TIME_VAR) {
            settings.initial_time = parse_number(INITIAL_TIME_VAR, value)?;
        }
        Ok(settings)
    }

    /// Reads the settings from the environment and builds a generator.
    pub fn build_from_env() -> Result<Monoton, Error> {
        let monoton = Self::from_env()?.build()?;
        Ok(monoton)
    }

    pub fn build(&self) -> Result<Monoton, ConfigError> {
        self.build_with_clock(MonotonicClock::new())
    }

    pub fn build_with_clock<C: Clock>(
        &self,
        clock: C,
    ) -> Result<Monoton<Sequence<C>>, ConfigError> {
        let sequence = Sequence::new(clock, self.granularity);
        Monoton::new(sequence, self.node, self.initial_time)
    }
}

fn parse_number(var: &'static str, value: String) -> Result<u64, SettingsError> {
    value
        .trim()
        .parse()
        .map_err(|source| SettingsError::Number { var, value, source })
}
