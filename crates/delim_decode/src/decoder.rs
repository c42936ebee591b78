//! Rewindable UTF-8 decoder.
//!
//! The decoder is a plain [`Copy`] value. Saving a position for lookahead is
//! a copy; restoring it is an assignment.

use crate::error::{DecodeError, DecodeErrorKind};

/// Result of decoding one code point.
///
/// `End` and `Error` are sentinels distinct from every valid scalar value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Decoded {
    /// A valid Unicode scalar value.
    Scalar(char),
    /// The position is at the end of the input.
    End,
    /// The bytes at the position are not valid UTF-8.
    Error(DecodeError),
}

/// Size assertion: `Decoded` should fit in four words on 64-bit platforms.
const _: () = assert!(std::mem::size_of::<Decoded>() <= 32);

impl Decoded {
    /// Returns the scalar, or `None` for either sentinel.
    #[inline]
    pub fn scalar(self) -> Option<char> {
        match self {
            Decoded::Scalar(c) => Some(c),
            Decoded::End | Decoded::Error(_) => None,
        }
    }

    /// Returns `true` for [`Decoded::End`] and [`Decoded::Error`].
    #[inline]
    pub fn is_sentinel(self) -> bool {
        !matches!(self, Decoded::Scalar(_))
    }
}

/// Code-point-at-a-time decoder over a UTF-8 byte slice.
///
/// # Invariant
///
/// `pos` is always on a code point boundary or at the end of `input`.
/// Sentinel results never move `pos`.
#[derive(Clone, Copy, Debug)]
pub struct Decoder<'a> {
    /// Bytes being decoded. Never copied.
    input: &'a [u8],
    /// Offset of the next unread byte.
    pos: usize,
    /// Result of the most recent `decode_next()`.
    current: Decoded,
    /// Byte width of `current` (0 for sentinels).
    current_size: usize,
}

impl<'a> Decoder<'a> {
    /// Create a decoder positioned at byte 0.
    ///
    /// Until the first [`decode_next()`](Self::decode_next), `current()`
    /// reports [`Decoded::End`] with a size of 0.
    pub fn new(input: &'a [u8]) -> Self {
        Self {
            input,
            pos: 0,
            current: Decoded::End,
            current_size: 0,
        }
    }

    /// Decode the code point at the current position and advance past it.
    ///
    /// Returns [`Decoded::End`] at end of input and [`Decoded::Error`] on a
    /// malformed sequence. Neither sentinel advances the position, so calling
    /// again returns the same sentinel.
    #[inline]
    pub fn decode_next(&mut self) -> Decoded {
        let (decoded, size) = decode_at(self.input, self.pos);
        self.pos += size;
        self.current = decoded;
        self.current_size = size;
        decoded
    }

    /// Decode the code point at the current position without advancing.
    #[inline]
    pub fn peek(&self) -> Decoded {
        decode_at(self.input, self.pos).0
    }

    /// `?`-friendly form of [`decode_next()`](Self::decode_next).
    ///
    /// Returns `Ok(None)` at end of input.
    pub fn try_decode_next(&mut self) -> Result<Option<char>, DecodeError> {
        match self.decode_next() {
            Decoded::Scalar(c) => Ok(Some(c)),
            Decoded::End => Ok(None),
            Decoded::Error(err) => Err(err),
        }
    }

    /// Current byte offset.
    #[inline]
    pub fn pos(&self) -> usize {
        self.pos
    }

    /// Move to a previously observed byte offset.
    ///
    /// `pos` must be a code point boundary obtained from [`pos()`](Self::pos);
    /// offsets past the end are clamped to the end. Only the position is
    /// restored. Copy the whole decoder to snapshot `current()` as well.
    #[inline]
    pub fn seek(&mut self, pos: usize) {
        debug_assert!(
            pos >= self.input.len() || !is_continuation(self.input[pos]),
            "seek target {pos} is not a code point boundary"
        );
        self.pos = pos.min(self.input.len());
    }

    /// Result of the most recent [`decode_next()`](Self::decode_next).
    #[inline]
    pub fn current(&self) -> Decoded {
        self.current
    }

    /// Byte width of [`current()`](Self::current); 0 for sentinels.
    #[inline]
    pub fn current_size(&self) -> usize {
        self.current_size
    }

    /// Returns `true` if every byte has been consumed.
    #[inline]
    pub fn is_at_end(&self) -> bool {
        self.pos >= self.input.len()
    }

    /// Bytes not yet consumed.
    pub fn remaining(&self) -> &'a [u8] {
        &self.input[self.pos..]
    }

    /// The whole input.
    pub fn input(&self) -> &'a [u8] {
        self.input
    }
}

impl<'a> From<&'a str> for Decoder<'a> {
    fn from(text: &'a str) -> Self {
        Self::new(text.as_bytes())
    }
}

/// Yields scalars until the first sentinel.
impl Iterator for Decoder<'_> {
    type Item = char;

    fn next(&mut self) -> Option<char> {
        self.decode_next().scalar()
    }
}

impl std::iter::FusedIterator for Decoder<'_> {}

/// Returns the number of bytes in the UTF-8 sequence starting with `lead`.
///
/// - `0x00..=0x7F`: 1 byte
/// - `0xC2..=0xDF`: 2 bytes
/// - `0xE0..=0xEF`: 3 bytes
/// - `0xF0..=0xF4`: 4 bytes
/// - Everything else (continuation, `0xC0`, `0xC1`, `0xF5..`): 0
#[inline]
pub fn utf8_char_width(lead: u8) -> usize {
    match lead {
        0x00..=0x7F => 1,
        0xC2..=0xDF => 2,
        0xE0..=0xEF => 3,
        0xF0..=0xF4 => 4,
        _ => 0,
    }
}

/// Longest prefix of `input` that is valid UTF-8.
pub fn valid_prefix(input: &[u8]) -> &str {
    match std::str::from_utf8(input) {
        Ok(text) => text,
        Err(err) => std::str::from_utf8(&input[..err.valid_up_to()]).unwrap_or_default(),
    }
}

#[inline]
fn is_continuation(byte: u8) -> bool {
    byte & 0xC0 == 0x80
}

/// Decode at `pos`, returning the result and the number of bytes it spans.
#[inline]
fn decode_at(input: &[u8], pos: usize) -> (Decoded, usize) {
    let Some(&lead) = input.get(pos) else {
        return (Decoded::End, 0);
    };
    if lead.is_ascii() {
        return (Decoded::Scalar(char::from(lead)), 1);
    }
    match decode_multibyte(input, pos, lead) {
        Ok((c, width)) => (Decoded::Scalar(c), width),
        Err(err) => (Decoded::Error(err), 0),
    }
}

fn decode_multibyte(input: &[u8], pos: usize, lead: u8) -> Result<(char, usize), DecodeError> {
    let fail = |kind, len| DecodeError { kind, pos, len };

    let width = utf8_char_width(lead);
    if width == 0 {
        let kind = if is_continuation(lead) {
            DecodeErrorKind::UnexpectedContinuation
        } else {
            DecodeErrorKind::InvalidLeadByte
        };
        return Err(fail(kind, 1));
    }

    // Payload bits of the lead byte: 5, 4, or 3 for widths 2, 3, 4.
    let mut value = u32::from(lead) & (0x7F >> width);
    for offset in 1..width {
        match input.get(pos + offset) {
            Some(&byte) if is_continuation(byte) => {
                value = (value << 6) | u32::from(byte & 0x3F);
            }
            _ => return Err(fail(DecodeErrorKind::Truncated, offset)),
        }
    }

    let min = match width {
        2 => 0x80,
        3 => 0x800,
        _ => 0x1_0000,
    };
    if value < min {
        return Err(fail(DecodeErrorKind::Overlong, width));
    }

    match char::from_u32(value) {
        Some(c) => Ok((c, width)),
        None if (0xD800..=0xDFFF).contains(&value) => {
            Err(fail(DecodeErrorKind::Surrogate, width))
        }
        None => Err(fail(DecodeErrorKind::OutOfRange, width)),
    }
}
