//! Symbols to integer conversion.

use crate::BASE;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DecodeError {
    #[error("nothing to decode")]
    Empty,
    #[error("invalid symbol {symbol:?} at position {position}")]
    InvalidSymbol { symbol: char, position: usize },
    #[error("decoded value doesn't fit into 64 bits")]
    Overflow,
}

/// The digit value of a symbol.
pub fn digit(symbol: u8) -> Option<u64> {
    let value = match symbol {
        b'0'..=b'9' => symbol - b'0',
        b'A'..=b'Z' => symbol - b'A' + 10,
        b'a'..=b'z' => symbol - b'a' + 36,
        _ => return None,
    };
    Some(u64::from(value))
}

pub fn is_symbol(symbol: u8) -> bool {
    symbol.is_ascii_alphanumeric()
}

/// Parses Base62 symbols back into a value. Leading zeros are allowed.
pub fn decode(input: impl AsRef<[u8]>) -> Result<u64, DecodeError> {
    let input = input.as_ref();
    if input.is_empty() {
        return Err(DecodeError::Empty);
    }
    input
        .iter()
        .enumerate()
        .try_fold(0u64, |acc, (position, &symbol)| {
            let digit = digit(symbol).ok_or(DecodeError::InvalidSymbol {
                symbol: char::from(symbol),
                position,
            })?;
            acc.checked_mul(BASE)
                .and_then(|acc| acc.checked_add(digit))
                .ok_or(DecodeError::Overflow)
        })
}
