//! The identifier generator.

use crate::error::ConfigError;
use crate::identifier::Identifier;
use crate::layout::{Layout, Parts};
use crate::TOTAL_WIDTH;
use monoton_base62::{encode_fixed_width_into, max_for_width, DecodeError};
use monoton_sequencer::{Sequence, Sequencer};

/// Composes a sequencer and a node into identifiers.
///
/// All mutable state lives in the sequencer, so a shared reference is
/// enough to call [`Monoton::next`] from many threads.
#[derive(Debug)]
pub struct Monoton<S = Sequence> {
    sequencer: S,
    layout: Layout,
    node: u64,
    initial_time: u64,
    /// Zeros for the time unit and the counter, the encoded node at the end.
    template: [u8; TOTAL_WIDTH],
}

impl<S: Sequencer> Monoton<S> {
    /// Configures a generator.
    ///
    /// `initial_time` is subtracted from every time unit to free leading
    /// symbols, it can't be ahead of the sequencer's clock. What remains of
    /// the current time unit has to fit into the time unit field.
    pub fn new(sequencer: S, node: u64, initial_time: u64) -> Result<Self, ConfigError> {
        let layout = Layout::new(sequencer.max_time_unit(), sequencer.max_counter())?;

        let max = max_for_width(layout.node_width).unwrap_or(u64::MAX);
        if node > max {
            return Err(ConfigError::NodeCapacity { node, max });
        }

        let current = sequencer.time_unit();
        if initial_time > current {
            return Err(ConfigError::InitialTime {
                initial_time,
                current,
            });
        }
        let time_unit = current - initial_time;
        let max = sequencer.max_time_unit();
        if time_unit > max {
            return Err(ConfigError::TimeUnitCapacity { time_unit, max });
        }

        let mut template = [b'0'; TOTAL_WIDTH];
        encode_fixed_width_into(node, &mut template[layout.node_range()]);

        log::debug!(
            "Monoton configured: {} + {} + {} symbols, node {node}, initial time {initial_time}",
            layout.time_unit_width,
            layout.counter_width,
            layout.node_width,
        );
        Ok(Self {
            sequencer,
            layout,
            node,
            initial_time,
            template,
        })
    }

    /// Generates the next identifier.
    pub fn next(&self) -> Identifier {
        let stamp = self.sequencer.next();
        let mut symbols = self.template;
        let time_unit = stamp.time_unit.wrapping_sub(self.initial_time);
        encode_fixed_width_into(time_unit, &mut symbols[self.layout.time_unit_range()]);
        encode_fixed_width_into(stamp.counter, &mut symbols[self.layout.counter_range()]);
        Identifier::from_symbols(symbols)
    }

    pub fn next_string(&self) -> String {
        self.next().to_string()
    }

    /// Decodes an identifier issued with the same configuration.
    ///
    /// The initial time is added back to the time unit.
    pub fn parse(&self, id: &Identifier) -> Result<Parts, DecodeError> {
        let mut parts = self.layout.split(id)?;
        parts.time_unit = parts.time_unit.wrapping_add(self.initial_time);
        Ok(parts)
    }

    pub fn layout(&self) -> Layout {
        self.layout
    }

    pub fn node(&self) -> u64 {
        self.node
    }

    pub fn initial_time(&self) -> u64 {
        self.initial_time
    }

    pub fn sequencer(&self) -> &S {
        &self.sequencer
    }
}
