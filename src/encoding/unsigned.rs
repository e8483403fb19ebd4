//! Unsigned LEB128 (ULEB128).
//!
//! The value is cut into 7-bit groups, least significant first, and every
//! group but the last carries the continuation flag:
//!
//! ```text
//! 300 = 0b10_0101100
//!   low group  0101100 -> 0x80 | 0x2C = 0xAC (more follows)
//!   next group 0000010 ->        0x02 = 0x02 (last)
//! result: [0xAC, 0x02]
//! ```
//!
//! Values are [`BigUint`]s, so there is no upper bound on the encoded length
//! and decoding never overflows.

use alloc::vec::Vec;
use core::borrow::Borrow;

use num_bigint::BigUint;

use super::groups::{groups_for_bits, read_groups, write_groups};
use crate::errors::Error;
use crate::sink::ByteSink;

/// Encode a non-negative integer as ULEB128 into a new buffer.
///
/// The output is the shortest encoding of `value`; zero encodes as `[0x00]`.
#[must_use]
pub fn encode_unsigned(value: &BigUint) -> Vec<u8> {
    let mut out = Vec::with_capacity(unsigned_len(value));
    encode_unsigned_into(value, &mut out);
    out
}

/// Encode a non-negative integer as ULEB128, appending to `sink`.
pub fn encode_unsigned_into<S: ByteSink + ?Sized>(value: &BigUint, sink: &mut S) {
    write_groups(&value.to_bytes_le(), 0x00, unsigned_len(value), sink);
}

/// Decode one ULEB128 value, pulling bytes from `bytes` until the terminator.
///
/// Bytes after the terminator are not touched, so passing `iter.by_ref()`
/// leaves the iterator positioned on the next value.
///
/// # Errors
///
/// Returns [`Error::UnexpectedEof`] if the input runs out before a byte with
/// the continuation flag clear is read. The payload is the number of bytes
/// consumed.
pub fn decode_unsigned<I>(bytes: I) -> Result<BigUint, Error>
where
    I: IntoIterator,
    I::Item: Borrow<u8>,
{
    read_groups(bytes).map(|groups| groups.magnitude)
}

/// Decode one ULEB128 value from the front of `data`.
///
/// Returns the decoded value and the number of bytes consumed.
///
/// # Errors
///
/// Returns [`Error::UnexpectedEof`] if `data` holds no terminating byte.
pub fn decode_unsigned_slice(data: &[u8]) -> Result<(BigUint, usize), Error> {
    read_groups(data).map(|groups| (groups.magnitude, groups.len))
}

/// Number of bytes [`encode_unsigned`] produces for `value`.
#[must_use]
pub fn unsigned_len(value: &BigUint) -> usize {
    groups_for_bits(value.bits())
}
