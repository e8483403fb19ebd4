//! Cursor over a byte slice holding consecutive LEB128 values.

use num_bigint::{BigInt, BigUint};

use crate::encoding::{decode_signed_slice, decode_unsigned_slice};
use crate::errors::Error;

/// Reads LEB128 values one after another from a borrowed buffer.
///
/// Unsigned and signed reads may be interleaved freely. A failed read leaves
/// the cursor where it was.
///
/// # Example
///
/// ```
/// use leb128_rs::{BigInt, BigUint, Reader};
///
/// let mut reader = Reader::new(&[0xAC, 0x02, 0x7F]);
/// assert_eq!(reader.read_unsigned().unwrap(), BigUint::from(300u32));
/// assert_eq!(reader.read_signed().unwrap(), BigInt::from(-1));
/// assert!(reader.is_empty());
/// ```
#[derive(Debug, Clone)]
pub struct Reader<'a> {
    data: &'a [u8],
    position: usize,
}

impl<'a> Reader<'a> {
    /// Create a reader positioned at the start of `data`.
    #[must_use]
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, position: 0 }
    }

    /// Offset of the next unread byte.
    #[must_use]
    pub fn position(&self) -> usize {
        self.position
    }

    /// The bytes not yet consumed.
    #[must_use]
    pub fn remaining(&self) -> &'a [u8] {
        &self.data[self.position..]
    }

    /// Whether every byte has been consumed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.position == self.data.len()
    }

    /// Read the next value as ULEB128.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnexpectedEof`] with the absolute offset at which the
    /// buffer ran out if the value is not terminated.
    pub fn read_unsigned(&mut self) -> Result<BigUint, Error> {
        let (value, len) = decode_unsigned_slice(self.remaining()).map_err(|e| self.absolute(e))?;
        self.position += len;
        Ok(value)
    }

    /// Read the next value as SLEB128.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnexpectedEof`] with the absolute offset at which the
    /// buffer ran out if the value is not terminated.
    pub fn read_signed(&mut self) -> Result<BigInt, Error> {
        let (value, len) = decode_signed_slice(self.remaining()).map_err(|e| self.absolute(e))?;
        self.position += len;
        Ok(value)
    }

    fn absolute(&self, error: Error) -> Error {
        match error {
            Error::UnexpectedEof(offset) => Error::UnexpectedEof(self.position + offset),
        }
    }
}
