//! Delimiter-driven lexical scanner.
//!
//! Splits text into lexemes using a caller-supplied set of delimiter strings.
//! Every call to [`Lexer::next_lexeme`] classifies the code point under the
//! cursor and returns one of:
//!
//! - a newline (`"\n"`, consuming `\n`, `\r`, or `\r\n`),
//! - a single whitespace character (returned as `" "`),
//! - a maximal run of text (code points that cannot start a delimiter),
//! - the longest delimiter matching at the cursor,
//! - a lone code point that starts a delimiter but completes none.
//!
//! End of input is signalled by the empty string. Lexemes borrow from the
//! input; nothing is copied.
//!
//! ```
//! let lexemes = delim_lexer::lex("a<=b", ["<", "<="]);
//! assert_eq!(lexemes, ["a", "<=", "b"]);
//! ```

mod config;
mod delimiters;
mod lexeme;
mod lexer;

pub use config::LexerConfig;
pub use delimiters::DelimiterSet;
pub use lexeme::{Lexeme, LexemeKind, Span};
pub use lexer::{Lexer, Spanned};

// Decoder types, for callers inspecting sentinels.
pub use delim_decode::{DecodeError, DecodeErrorKind, Decoded, Decoder};

/// Lex `input` with default configuration and collect every lexeme.
pub fn lex<'a, I, S>(input: &'a str, delimiters: I) -> Vec<&'a str>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    Lexer::new(input, delimiters).collect()
}
