//! LEB128 encoding and decoding for arbitrary-precision integers.
//!
//! Both variants share the same byte framing: 7 payload bits per byte, least
//! significant group first, and bit 7 set on every byte except the last.

pub mod constants;
pub(crate) mod groups;
pub mod signed;
pub mod unsigned;

pub use signed::{decode_signed, decode_signed_slice, encode_signed, encode_signed_into, signed_len};
pub use unsigned::{
    decode_unsigned, decode_unsigned_slice, encode_unsigned, encode_unsigned_into, unsigned_len,
};
