//! A fixed-size identifier.

use crate::TOTAL_WIDTH;
use monoton_base62::is_symbol;
use std::fmt;
use std::ops::Deref;
use std::str::FromStr;
use thiserror::Error;

/// A 16-symbol Base62 identifier.
///
/// The derived ordering compares bytes, which is the same order as the
/// string form.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Identifier([u8; TOTAL_WIDTH]);

impl Identifier {
    pub(crate) fn from_symbols(symbols: [u8; TOTAL_WIDTH]) -> Self {
        Self(symbols)
    }

    pub fn as_bytes(&self) -> &[u8; TOTAL_WIDTH] {
        &self.0
    }

    pub fn into_bytes(self) -> [u8; TOTAL_WIDTH] {
        self.0
    }

    pub fn as_str(&self) -> &str {
        // Only alphabet symbols get in, see `from_symbols` and `from_str`.
        std::str::from_utf8(&self.0).unwrap_or_default()
    }
}

impl Deref for Identifier {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        self.as_str()
    }
}

impl AsRef<str> for Identifier {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl AsRef<[u8]> for Identifier {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Debug for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Identifier({})", self.as_str())
    }
}

impl From<Identifier> for String {
    fn from(id: Identifier) -> Self {
        id.as_str().to_owned()
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseIdentifierError {
    #[error("identifier must be {TOTAL_WIDTH} symbols long (given {0})")]
    Length(usize),
    #[error("invalid symbol {symbol:?} at position {position}")]
    InvalidSymbol { symbol: char, position: usize },
}

impl FromStr for Identifier {
    type Err = ParseIdentifierError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let symbols: [u8; TOTAL_WIDTH] = s
            .as_bytes()
            .try_into()
            .map_err(|_| ParseIdentifierError::Length(s.len()))?;
        if let Some(position) = symbols.iter().position(|symbol| !is_symbol(*symbol)) {
            let symbol = s[position..].chars().next().unwrap_or_default();
            return Err(ParseIdentifierError::InvalidSymbol { symbol, position });
        }
        Ok(Self(symbols))
    }
}
