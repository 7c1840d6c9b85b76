//! Highly scalable, single or multi node, human-readable, predictable and
//! incremental unique id generator.
//!
//! Every identifier is exactly 16 Base62 symbols: a time unit, a counter
//! within that time unit and a node field configured by the operator. Ids
//! issued by one generator compare as strings in the order they were issued.
//!
//! Nodes don't coordinate with each other. Ids of different generators are
//! unique as long as every generator gets its own node value.
//!
//! ```
//! use monoton::kit::*;
//!
//! // Millisecond sequences leave 4 symbols for the node.
//! let monoton = Monoton::new(Sequence::millisecond(), 19, 0)?;
//! let id = monoton.next();
//! assert_eq!(id.len(), 16);
//! assert_eq!(&id[12..], "000J");
//! # Ok::<(), monoton::ConfigError>(())
//! ```

pub mod error;
pub mod generator;
pub mod identifier;
pub mod layout;
pub mod settings;

pub use error::{ConfigError, Error};
pub use generator::Monoton;
pub use identifier::{Identifier, ParseIdentifierError};
pub use layout::{Layout, Parts};
pub use settings::{Settings, SettingsError};

/// The length of every identifier.
pub const TOTAL_WIDTH: usize = 16;

pub mod kit {
    pub use crate::{
        ConfigError, Identifier, Layout, Monoton, Parts, Settings, SettingsError, TOTAL_WIDTH,
    };
    pub use monoton_base62 as base62;
    pub use monoton_clock::{Clock, FnClock, ManualClock, MonotonicClock};
    pub use monoton_sequencer::{Granularity, Sequence, Sequencer, Stamp};
}
