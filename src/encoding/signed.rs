//! Signed LEB128 (SLEB128).
//!
//! Framing is the same as the unsigned form. The difference is that the
//! value is read as two's complement of infinite width: a negative number
//! has infinitely many leading one bits, and bit 6 (`0x40`) of the final byte
//! says which bit fills every position above the encoded groups.
//!
//! ```text
//!  63 -> [0x3F]        bit 6 clear, remainder 0: done
//!  64 -> [0xC0, 0x00]  bit 6 of 0x40 would read as negative, so a zero group follows
//! -64 -> [0x40]        bit 6 set, remainder -1: done
//! -65 -> [0xBF, 0x7F]  bit 6 of 0x3F would read as positive, so a 0x7F group follows
//! ```

use alloc::vec::Vec;
use core::borrow::Borrow;

use num_bigint::{BigInt, Sign};
use num_traits::One;

use super::constants::SIGN_BIT;
use super::groups::{Groups, groups_for_bits, read_groups, write_groups};
use crate::errors::Error;
use crate::sink::ByteSink;

/// Encode an integer as SLEB128 into a new buffer.
///
/// The output is the shortest encoding that still sign-extends correctly;
/// zero encodes as `[0x00]` and minus one as `[0x7F]`.
#[must_use]
pub fn encode_signed(value: &BigInt) -> Vec<u8> {
    let mut out = Vec::with_capacity(signed_len(value));
    encode_signed_into(value, &mut out);
    out
}

/// Encode an integer as SLEB128, appending to `sink`.
///
/// The groups are cut from the two's-complement byte image of `value`,
/// sign-extended past its end, and stop at the first group whose bit 6 agrees
/// with every bit above it. That point is exactly [`signed_len`] groups in.
pub fn encode_signed_into<S: ByteSink + ?Sized>(value: &BigInt, sink: &mut S) {
    let fill = match value.sign() {
        Sign::Minus => 0xFF,
        Sign::NoSign | Sign::Plus => 0x00,
    };
    write_groups(&value.to_signed_bytes_le(), fill, signed_len(value), sink);
}

/// Decode one SLEB128 value, pulling bytes from `bytes` until the terminator.
///
/// Bytes after the terminator are not touched, so passing `iter.by_ref()`
/// leaves the iterator positioned on the next value.
///
/// # Errors
///
/// Returns [`Error::UnexpectedEof`] if the input runs out before a byte with
/// the continuation flag clear is read. The payload is the number of bytes
/// consumed.
pub fn decode_signed<I>(bytes: I) -> Result<BigInt, Error>
where
    I: IntoIterator,
    I::Item: Borrow<u8>,
{
    read_groups(bytes).map(sign_extend)
}

/// Decode one SLEB128 value from the front of `data`.
///
/// Returns the decoded value and the number of bytes consumed.
///
/// # Errors
///
/// Returns [`Error::UnexpectedEof`] if `data` holds no terminating byte.
pub fn decode_signed_slice(data: &[u8]) -> Result<(BigInt, usize), Error> {
    read_groups(data).map(|groups| {
        let len = groups.len;
        (sign_extend(groups), len)
    })
}

/// Number of bytes [`encode_signed`] produces for `value`.
#[must_use]
pub fn signed_len(value: &BigInt) -> usize {
    // Two's complement needs the magnitude bits of `n` (or of `-n - 1` when
    // negative) plus one sign bit.
    let bits = match value.sign() {
        Sign::Minus => (value.magnitude() - 1u32).bits(),
        Sign::NoSign | Sign::Plus => value.magnitude().bits(),
    };
    groups_for_bits(bits + 1)
}

fn sign_extend(groups: Groups) -> BigInt {
    let width = groups.bit_width();
    let value = BigInt::from(groups.magnitude);
    if groups.last & SIGN_BIT == 0 {
        value
    } else {
        value - (BigInt::one() << width)
    }
}
