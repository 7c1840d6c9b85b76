//! Field widths of an identifier.

use crate::error::ConfigError;
use crate::identifier::Identifier;
use crate::TOTAL_WIDTH;
use monoton_base62::{decode, minimum_width, DecodeError};
use std::ops::Range;

/// How the symbols of an identifier are split between its fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Layout {
    pub time_unit_width: usize,
    pub counter_width: usize,
    pub node_width: usize,
}

/// Decoded fields of an identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Parts {
    pub time_unit: u64,
    pub counter: u64,
    pub node: u64,
}

impl Layout {
    /// Sizes the fields for the given maxima and leaves the rest to the node.
    pub fn new(max_time_unit: u64, max_counter: u64) -> Result<Self, ConfigError> {
        let time_unit_width = minimum_width(max_time_unit);
        let counter_width = minimum_width(max_counter);
        if time_unit_width + counter_width >= TOTAL_WIDTH {
            return Err(ConfigError::FieldSizing {
                time_unit_width,
                counter_width,
                total: TOTAL_WIDTH,
            });
        }
        Ok(Self {
            time_unit_width,
            counter_width,
            node_width: TOTAL_WIDTH - time_unit_width - counter_width,
        })
    }

    pub fn time_unit_range(&self) -> Range<usize> {
        0..self.time_unit_width
    }

    pub fn counter_range(&self) -> Range<usize> {
        let start = self.time_unit_width;
        start..start + self.counter_width
    }

    pub fn node_range(&self) -> Range<usize> {
        TOTAL_WIDTH - self.node_width..TOTAL_WIDTH
    }

    /// Decodes the fields of an identifier laid out this way.
    ///
    /// The time unit is returned as stored, without the initial time.
    pub fn split(&self, id: &Identifier) -> Result<Parts, DecodeError> {
        let bytes = id.as_bytes();
        Ok(Parts {
            time_unit: decode(&bytes[self.time_unit_range()])?,
            counter: decode(&bytes[self.counter_range()])?,
            node: decode(&bytes[self.node_range()])?,
        })
    }
}
