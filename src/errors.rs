//! Submodule defining the errors used across the crate.

/// Errors that can occur while decoding a LEB128 value.
///
/// Encoding never fails and any byte is a legal group, so running out of
/// input is the only way a decode can go wrong.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The input ended while the last byte read still had its continuation
    /// flag set, or no byte was available at all.
    ///
    /// Carries the offset at which the input ran out.
    #[error("Unexpected end of input at position {0}")]
    UnexpectedEof(usize),
}
