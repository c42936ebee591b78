//! Lexer configuration.

/// Flags controlling which lexemes are emitted.
///
/// Both flags default to `false`. The lexer reads them on every extraction
/// call, so changing them mid-stream affects only later lexemes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LexerConfig {
    /// Skip spaces and tabs instead of emitting `" "` lexemes.
    pub ignore_whitespace: bool,

    /// Skip `\n`, `\r`, and `\r\n` instead of emitting `"\n"` lexemes.
    pub ignore_newlines: bool,
}

impl LexerConfig {
    /// Configuration that emits every lexeme.
    pub const fn new() -> Self {
        Self {
            ignore_whitespace: false,
            ignore_newlines: false,
        }
    }

    /// Set whether whitespace is skipped.
    #[must_use]
    pub const fn with_ignore_whitespace(self, ignore: bool) -> Self {
        Self {
            ignore_whitespace: ignore,
            ..self
        }
    }

    /// Set whether newlines are skipped.
    #[must_use]
    pub const fn with_ignore_newlines(self, ignore: bool) -> Self {
        Self {
            ignore_newlines: ignore,
            ..self
        }
    }
}
