//! Lexeme types: classification, byte span, and the borrowed text.

use std::fmt;

/// Classification of a lexeme.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LexemeKind {
    /// Maximal run of code points that cannot start a delimiter.
    Text,
    /// Longest configured delimiter matching at the cursor.
    Delimiter,
    /// One space or tab. Text is always `" "`.
    Whitespace,
    /// `\n`, `\r`, or `\r\n`. Text is always `"\n"`.
    Newline,
    /// One code point that starts a delimiter but completes none.
    Unknown,
    /// End of input (or first malformed byte). Text is empty.
    End,
}

/// Byte range `[start, end)` in the lexer input.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    /// Create a new span.
    #[inline]
    pub const fn new(start: usize, end: usize) -> Self {
        Span { start, end }
    }

    /// Length of the span in bytes.
    #[inline]
    pub const fn len(&self) -> usize {
        self.end - self.start
    }

    /// Check if span is empty.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Convert to a `std::ops::Range`.
    #[inline]
    pub fn to_range(&self) -> std::ops::Range<usize> {
        self.start..self.end
    }
}

impl fmt::Debug for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

/// One lexeme produced by the lexer.
///
/// `text` borrows from the input for text, delimiter, and unknown lexemes.
/// Whitespace and newline lexemes carry normalized text, so `span` is the
/// only reliable record of which bytes were consumed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Lexeme<'a> {
    pub kind: LexemeKind,
    pub text: &'a str,
    pub span: Span,
}

impl Lexeme<'_> {
    /// Returns `true` for the end-of-stream lexeme.
    #[inline]
    pub fn is_end(&self) -> bool {
        self.kind == LexemeKind::End
    }
}
