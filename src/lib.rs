#![doc = include_str!("../README.md")]
#![no_std]
#![deny(clippy::mod_module_files)]

extern crate alloc;

pub mod encoding;
pub mod errors;
pub mod reader;
pub mod sink;
#[cfg(feature = "testing")]
pub mod testing;

// Re-export main operations
pub use encoding::{
    decode_signed, decode_signed_slice, decode_unsigned, decode_unsigned_slice, encode_signed,
    encode_signed_into, encode_unsigned, encode_unsigned_into, signed_len, unsigned_len,
};
pub use reader::Reader;
pub use sink::{ByteCount, ByteSink};

// Integer types, so callers don't need a direct `num-bigint` dependency
pub use num_bigint::{BigInt, BigUint, Sign};

// Re-export errors
pub use errors::Error;
