//! Integer to symbols conversion.

use crate::{ALPHABET, BASE, MAX_WIDTH};
use std::fmt;
use std::ops::Deref;

/// An encoded value kept on the stack.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Encoded {
    buf: [u8; MAX_WIDTH],
    start: usize,
}

impl Encoded {
    /// Symbols of the value, most significant first.
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf[self.start..]
    }

    pub fn as_str(&self) -> &str {
        // The buffer only ever holds alphabet symbols.
        std::str::from_utf8(self.as_bytes()).unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        MAX_WIDTH - self.start
    }

    /// Always `false`: zero is encoded as a single `'0'`.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Deref for Encoded {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        self.as_str()
    }
}

impl AsRef<[u8]> for Encoded {
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl AsRef<str> for Encoded {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for Encoded {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Debug for Encoded {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Encoded({:?})", self.as_str())
    }
}

/// Converts a value to Base62 without leading zeros.
pub fn encode(mut value: u64) -> Encoded {
    let mut buf = [b'0'; MAX_WIDTH];
    let mut start = MAX_WIDTH;
    while value >= BASE {
        start -= 1;
        // Quotient first and the remainder by subtraction: on 32-bit
        // targets every 64-bit `/` and `%` is a separate runtime call.
        let quotient = value / BASE;
        buf[start] = ALPHABET[(value - quotient * BASE) as usize];
        value = quotient;
    }
    start -= 1;
    buf[start] = ALPHABET[value as usize];
    Encoded { buf, start }
}

/// Writes the value into `out`, left-padded with `'0'` to the slice length.
///
/// The caller guarantees `out.len() >= minimum_width(value)`. A narrower
/// slice keeps only the least significant symbols.
pub fn encode_fixed_width_into(mut value: u64, out: &mut [u8]) {
    debug_assert!(
        minimum_width(value) <= out.len(),
        "value {value} doesn't fit into {} symbols",
        out.len()
    );
    for slot in out.iter_mut().rev() {
        let quotient = value / BASE;
        *slot = ALPHABET[(value - quotient * BASE) as usize];
        value = quotient;
    }
}

/// Converts a value to exactly `width` symbols.
pub fn encode_fixed_width(value: u64, width: usize) -> String {
    let mut buf = vec![b'0'; width];
    encode_fixed_width_into(value, &mut buf);
    buf.into_iter().map(char::from).collect()
}

/// The number of symbols `encode(value)` produces.
pub fn minimum_width(mut value: u64) -> usize {
    let mut width = 1;
    while value >= BASE {
        value /= BASE;
        width += 1;
    }
    width
}

/// The largest value that fits into `width` symbols.
///
/// Returns `None` when every `u64` fits.
pub fn max_for_width(width: usize) -> Option<u64> {
    let exp = u32::try_from(width).ok()?;
    BASE.checked_pow(exp).map(|capacity| capacity - 1)
}
