use crate::settings::SettingsError;
use thiserror::Error;

/// Reasons a generator can't be created.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// No symbol is left for the node.
    #[error(
        "sum of time unit width ({time_unit_width}) and counter width ({counter_width}) \
         can't be >= total width ({total})"
    )]
    FieldSizing {
        time_unit_width: usize,
        counter_width: usize,
        total: usize,
    },
    #[error("node can't be greater than {max} (given {node})")]
    NodeCapacity { node: u64, max: u64 },
    #[error("initial time {initial_time} is ahead of the current time unit {current}")]
    InitialTime { initial_time: u64, current: u64 },
    /// The clock is already past what the time unit field can hold.
    #[error(
        "time unit {time_unit} (after subtracting the initial time) \
         can't be greater than {max}"
    )]
    TimeUnitCapacity { time_unit: u64, max: u64 },
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("can't read settings: {0}")]
    Settings(#[from] SettingsError),
    #[error("can't configure the generator: {0}")]
    Config(#[from] ConfigError),
}
