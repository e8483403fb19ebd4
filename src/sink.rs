//! Append-only byte destinations for the encoders.
//!
//! Encoders never allocate on their own when handed a sink: they push one
//! byte at a time into whatever the caller provides. Implementations exist
//! for the common growable buffers plus [`ByteCount`], which only tallies
//! how many bytes would have been written.

use alloc::collections::VecDeque;
use alloc::vec::Vec;

/// A destination accepting encoded bytes one at a time.
///
/// Pushing a byte cannot fail. Growing the underlying storage, if any, is
/// the sink's own business.
pub trait ByteSink {
    /// Append a single byte.
    fn push_byte(&mut self, byte: u8);
}

impl ByteSink for Vec<u8> {
    #[inline]
    fn push_byte(&mut self, byte: u8) {
        self.push(byte);
    }
}

impl ByteSink for VecDeque<u8> {
    #[inline]
    fn push_byte(&mut self, byte: u8) {
        self.push_back(byte);
    }
}

impl<S: ByteSink + ?Sized> ByteSink for &mut S {
    #[inline]
    fn push_byte(&mut self, byte: u8) {
        (**self).push_byte(byte);
    }
}

/// A sink that discards its input and counts the bytes pushed into it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ByteCount(usize);

impl ByteCount {
    /// Create a counter starting at zero.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of bytes pushed so far.
    #[must_use]
    pub fn get(self) -> usize {
        self.0
    }
}

impl ByteSink for ByteCount {
    #[inline]
    fn push_byte(&mut self, _byte: u8) {
        self.0 += 1;
    }
}
