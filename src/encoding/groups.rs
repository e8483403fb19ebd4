//! 7-bit group packing shared by the unsigned and signed codecs.
//!
//! Both variants frame values identically; they only disagree on how the
//! final byte is interpreted. [`read_groups`] does the framing and leaves
//! the interpretation to the caller, and [`write_groups`] does the reverse
//! over a little-endian byte image of the value.
//!
//! Both directions move whole bytes in and out of the big integer once, so
//! their cost is linear in the encoded length.

use alloc::vec::Vec;
use core::borrow::Borrow;

use num_bigint::BigUint;

use super::constants::{CONTINUATION, GROUP_BITS, PAYLOAD_MASK};
use crate::errors::Error;
use crate::sink::ByteSink;

/// The payload of one framed value, before any sign interpretation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Groups {
    /// Sum of `(byte & 0x7F) << (7 * i)` over every byte read.
    pub(crate) magnitude: BigUint,
    /// Bytes consumed, terminator included.
    pub(crate) len: usize,
    /// The terminating byte (continuation flag clear).
    pub(crate) last: u8,
}

impl Groups {
    /// Number of payload bits covered by the groups read.
    pub(crate) fn bit_width(&self) -> usize {
        self.len * GROUP_BITS
    }
}

/// Packs consecutive 7-bit groups into little-endian bytes.
#[derive(Debug, Default)]
struct GroupPacker {
    bytes: Vec<u8>,
    pending: u16,
    pending_bits: usize,
}

impl GroupPacker {
    fn push(&mut self, payload: u8) {
        self.pending |= u16::from(payload) << self.pending_bits;
        self.pending_bits += GROUP_BITS;
        if self.pending_bits >= 8 {
            self.bytes.push(self.pending.to_le_bytes()[0]);
            self.pending >>= 8;
            self.pending_bits -= 8;
        }
    }

    fn finish(mut self) -> BigUint {
        if self.pending_bits > 0 {
            self.bytes.push(self.pending.to_le_bytes()[0]);
        }
        BigUint::from_bytes_le(&self.bytes)
    }
}

/// Pull bytes until one has its continuation flag clear.
///
/// Exactly the bytes of one value are consumed: the iterator is not advanced
/// past the terminator.
pub(crate) fn read_groups<I>(bytes: I) -> Result<Groups, Error>
where
    I: IntoIterator,
    I::Item: Borrow<u8>,
{
    let mut packer = GroupPacker::default();
    let mut len = 0;

    for byte in bytes {
        let byte = *byte.borrow();
        packer.push(byte & PAYLOAD_MASK);
        len += 1;

        if byte & CONTINUATION == 0 {
            return Ok(Groups {
                magnitude: packer.finish(),
                len,
                last: byte,
            });
        }
    }

    Err(Error::UnexpectedEof(len))
}

/// The 7-bit group at `index` of a little-endian byte image.
///
/// Bytes past the end of `image` read as `fill`: `0x00` for non-negative
/// values, `0xFF` for the sign extension of negative ones.
fn group_at(image: &[u8], index: usize, fill: u8) -> u8 {
    let bit = index * GROUP_BITS;
    let byte = bit / 8;
    let low = image.get(byte).copied().unwrap_or(fill);
    let high = image.get(byte + 1).copied().unwrap_or(fill);
    let window = u16::from_le_bytes([low, high]) >> (bit % 8);
    window.to_le_bytes()[0] & PAYLOAD_MASK
}

/// Emit `count` groups of `image`, flagging all but the last as continued.
pub(crate) fn write_groups<S: ByteSink + ?Sized>(
    image: &[u8],
    fill: u8,
    count: usize,
    sink: &mut S,
) {
    for index in 0..count {
        let group = group_at(image, index, fill);
        if index + 1 == count {
            sink.push_byte(group);
        } else {
            sink.push_byte(group | CONTINUATION);
        }
    }
}

/// Number of bytes needed to carry `bits` significant bits. Never zero.
pub(crate) fn groups_for_bits(bits: u64) -> usize {
    let groups = bits.div_ceil(GROUP_BITS as u64).max(1);
    usize::try_from(groups).unwrap_or(usize::MAX)
}
