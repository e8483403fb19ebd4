//! Bit layout of a single LEB128 byte.

/// Continuation flag: set on every byte except the last one of a value.
pub const CONTINUATION: u8 = 0x80;

/// Mask selecting the 7 payload bits of a byte.
pub const PAYLOAD_MASK: u8 = 0x7F;

/// Highest payload bit. In the final byte of a signed value it carries the
/// sign of the implicit infinite extension.
pub const SIGN_BIT: u8 = 0x40;

/// Number of payload bits carried by each byte.
pub const GROUP_BITS: usize = 7;
