//! Malformed-input detail carried by [`Decoded::Error`](crate::Decoded::Error).

use std::fmt;

/// A malformed UTF-8 sequence found while decoding.
///
/// Carries the kind, byte position, and number of bytes examined before the
/// sequence was rejected. The decoder does not consume these bytes; `len`
/// only tells callers how much of the input is implicated.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, thiserror::Error)]
#[error("{kind} at byte {pos}")]
pub struct DecodeError {
    /// What was wrong with the sequence.
    pub kind: DecodeErrorKind,
    /// Byte offset of the first byte of the sequence.
    pub pos: usize,
    /// Number of bytes examined to detect the problem (at least 1).
    pub len: usize,
}

/// Kind of malformed UTF-8 sequence.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DecodeErrorKind {
    /// A continuation byte (`0x80..=0xBF`) where a lead byte was expected.
    UnexpectedContinuation,
    /// A byte that can never start a sequence (`0xC0`, `0xC1`, `0xF5..=0xFF`).
    InvalidLeadByte,
    /// Input ended, or a non-continuation byte appeared, inside a sequence.
    Truncated,
    /// A scalar encoded with more bytes than necessary.
    Overlong,
    /// An encoded UTF-16 surrogate (`U+D800..=U+DFFF`).
    Surrogate,
    /// A value above `U+10FFFF`.
    OutOfRange,
}

impl fmt::Display for DecodeErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            DecodeErrorKind::UnexpectedContinuation => "unexpected continuation byte",
            DecodeErrorKind::InvalidLeadByte => "invalid lead byte",
            DecodeErrorKind::Truncated => "truncated sequence",
            DecodeErrorKind::Overlong => "overlong encoding",
            DecodeErrorKind::Surrogate => "encoded surrogate",
            DecodeErrorKind::OutOfRange => "code point above U+10FFFF",
        })
    }
}
