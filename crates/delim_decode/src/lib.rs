//! Code-point-at-a-time UTF-8 decoding for the delimiter lexer.
//!
//! This crate is the leaf of the lexer stack. It walks a byte slice one
//! Unicode scalar value at a time, tracking the byte offset and the width of
//! the last decoded scalar, and lets callers rewind to any saved position.
//!
//! # Sentinels
//!
//! [`Decoder::decode_next`] never panics and never returns `Result`. End of
//! input and malformed input are reported in-band as [`Decoded::End`] and
//! [`Decoded::Error`]. Both are sticky: once reached, further calls return
//! the same sentinel without moving the position.
//!
//! # Example
//!
//! ```
//! use delim_decode::{Decoded, Decoder};
//!
//! let mut decoder = Decoder::from("a\u{e9}");
//! assert_eq!(decoder.decode_next(), Decoded::Scalar('a'));
//! let saved = decoder;
//! assert_eq!(decoder.decode_next(), Decoded::Scalar('\u{e9}'));
//! assert_eq!(decoder.current_size(), 2);
//! assert_eq!(decoder.decode_next(), Decoded::End);
//!
//! decoder = saved;
//! assert_eq!(decoder.pos(), 1);
//! ```

mod decoder;
mod error;

pub use decoder::{utf8_char_width, valid_prefix, Decoded, Decoder};
pub use error::{DecodeError, DecodeErrorKind};
