//! Base62 codec with exact-width zero padding.
//!
//! The alphabet is ordered `0-9`, `A-Z`, `a-z`, so two encodings of the
//! same width compare bytewise in the same order as the values they carry.

pub mod decode;
pub mod encode;

pub use decode::{decode, digit, is_symbol, DecodeError};
pub use encode::{
    encode, encode_fixed_width, encode_fixed_width_into, max_for_width, minimum_width, Encoded,
};

/// The radix of the encoding.
pub const BASE: u64 = 62;

/// Symbols in ascending order of their digit value.
pub const ALPHABET: &[u8; 62] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz";

/// The widest encoding of a `u64`.
pub const MAX_WIDTH: usize = 11;
