//! Single-pass greedy lexer over a [`Decoder`].
//!
//! The lexer has no states beyond its cursor. Each call re-classifies the
//! code point under the cursor, in this order:
//!
//! 1. end of input (or malformed byte): return the end lexeme
//! 2. newline (`\n`, `\r`, `\r\n`)
//! 3. whitespace (space, tab)
//! 4. text: consume a maximal run of code points that cannot start a delimiter
//! 5. delimiter: greedy longest match, bounded by the longest delimiter
//!
//! Lookahead for rule 5 works on a copy of the decoder. The copy that sits
//! after the best match replaces the cursor; a failed search leaves the
//! cursor untouched.

use delim_decode::{valid_prefix, Decoded, Decoder};
use tracing::{debug, trace};

use crate::config::LexerConfig;
use crate::delimiters::DelimiterSet;
use crate::lexeme::{Lexeme, LexemeKind, Span};

/// Normalized text of every whitespace lexeme.
const WHITESPACE: &str = " ";

/// Normalized text of every newline lexeme.
const NEWLINE: &str = "\n";

/// Delimiter-driven lexer producing lexemes borrowed from its input.
///
/// Created via [`Lexer::new`], [`Lexer::with_config`], or
/// [`Lexer::from_bytes`]. Iterating yields `&str` lexemes; use
/// [`spanned()`](Self::spanned) for kinds and byte spans.
#[derive(Clone, Debug)]
pub struct Lexer<'a> {
    /// Valid UTF-8 prefix of the input. Every lexeme is sliced from here.
    text: &'a str,
    /// Cursor over the full input bytes.
    decoder: Decoder<'a>,
    delimiters: DelimiterSet,
    config: LexerConfig,
}

impl<'a> Lexer<'a> {
    /// Create a lexer with the default configuration.
    pub fn new<I, S>(input: &'a str, delimiters: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::with_config(input, delimiters, LexerConfig::default())
    }

    /// Create a lexer with an explicit configuration.
    pub fn with_config<I, S>(input: &'a str, delimiters: I, config: LexerConfig) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::from_parts(input.as_bytes(), DelimiterSet::new(delimiters), config)
    }

    /// Create a lexer over raw bytes.
    ///
    /// Lexing stops cleanly at the first malformed UTF-8 sequence.
    pub fn from_bytes<I, S>(input: &'a [u8], delimiters: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::from_parts(input, DelimiterSet::new(delimiters), LexerConfig::default())
    }

    /// Create a lexer from a prebuilt delimiter set.
    pub fn from_parts(input: &'a [u8], delimiters: DelimiterSet, config: LexerConfig) -> Self {
        Self {
            text: valid_prefix(input),
            decoder: Decoder::new(input),
            delimiters,
            config,
        }
    }

    /// Return the next lexeme's text, or `""` at end of input.
    pub fn next_lexeme(&mut self) -> &'a str {
        self.next_token().text
    }

    /// Return the next lexeme with its kind and span.
    ///
    /// Returns a [`LexemeKind::End`] lexeme with empty text when the input
    /// is exhausted or a malformed byte is reached. Subsequent calls keep
    /// returning it.
    pub fn next_token(&mut self) -> Lexeme<'a> {
        loop {
            let start = self.decoder.pos();
            let c = match self.decoder.peek() {
                Decoded::Scalar(c) => c,
                Decoded::End => return Self::end(start),
                Decoded::Error(err) => {
                    if !matches!(self.decoder.current(), Decoded::Error(_)) {
                        debug!(%err, "malformed UTF-8 ends the lexeme stream");
                    }
                    // Records the sentinel; the position does not move.
                    self.decoder.decode_next();
                    return Self::end(start);
                }
            };

            if is_newline(c) {
                self.eat_newline();
                if self.config.ignore_newlines {
                    continue;
                }
                return self.emit(LexemeKind::Newline, NEWLINE, start);
            }

            if is_whitespace(c) {
                self.decoder.decode_next();
                if self.config.ignore_whitespace {
                    continue;
                }
                return self.emit(LexemeKind::Whitespace, WHITESPACE, start);
            }

            if self.delimiters.starts_delimiter(c) {
                return self.delimiter(start);
            }
            return self.text_run(start);
        }
    }

    /// Iterate over lexemes with kinds and spans.
    pub fn spanned(self) -> Spanned<'a> {
        Spanned { lexer: self }
    }

    /// Current byte offset of the cursor.
    pub fn pos(&self) -> usize {
        self.decoder.pos()
    }

    /// The portion of the input that lexemes can be drawn from.
    ///
    /// Equal to the whole input unless it contains malformed UTF-8.
    pub fn source(&self) -> &'a str {
        self.text
    }

    /// The configured delimiters.
    pub fn delimiters(&self) -> &DelimiterSet {
        &self.delimiters
    }

    /// The current configuration.
    pub fn config(&self) -> LexerConfig {
        self.config
    }

    /// Mutable access to the configuration, read on every extraction call.
    pub fn config_mut(&mut self) -> &mut LexerConfig {
        &mut self.config
    }

    /// Set whether whitespace is skipped from the next call on.
    pub fn set_ignore_whitespace(&mut self, ignore: bool) {
        self.config.ignore_whitespace = ignore;
    }

    /// Set whether newlines are skipped from the next call on.
    pub fn set_ignore_newlines(&mut self, ignore: bool) {
        self.config.ignore_newlines = ignore;
    }

    // ─── Classification arms ───────────────────────────────────────

    /// Consume `\n`, `\r`, or `\r\n` as one unit.
    fn eat_newline(&mut self) {
        let first = self.decoder.decode_next();
        if first == Decoded::Scalar('\r') && self.decoder.peek() == Decoded::Scalar('\n') {
            self.decoder.decode_next();
        }
    }

    /// Consume a maximal run of text code points.
    ///
    /// The code point under the cursor is already known to be text, so the
    /// run is never empty. Sentinels end the run.
    fn text_run(&mut self, start: usize) -> Lexeme<'a> {
        while let Decoded::Scalar(c) = self.decoder.peek() {
            if !self.is_text(c) {
                break;
            }
            self.decoder.decode_next();
        }
        let end = self.decoder.pos();
        self.emit(LexemeKind::Text, self.slice(start, end), start)
    }

    /// Greedy longest-match delimiter search.
    ///
    /// Extends a candidate one code point at a time, up to the longest
    /// delimiter's length, remembering the decoder state after the longest
    /// candidate that is a delimiter. When nothing matches, the single code
    /// point under the cursor becomes an `Unknown` lexeme so the cursor
    /// always advances.
    fn delimiter(&mut self, start: usize) -> Lexeme<'a> {
        let mut probe = self.decoder;
        let mut best: Option<Decoder<'a>> = None;

        for _ in 0..self.delimiters.max_codepoints() {
            if probe.decode_next().is_sentinel() {
                break;
            }
            if self.delimiters.contains(self.slice(start, probe.pos())) {
                best = Some(probe);
            }
        }

        let kind = if let Some(matched) = best {
            self.decoder = matched;
            LexemeKind::Delimiter
        } else {
            self.decoder.decode_next();
            LexemeKind::Unknown
        };
        let end = self.decoder.pos();
        self.emit(kind, self.slice(start, end), start)
    }

    // ─── Helpers ───────────────────────────────────────────────────

    #[inline]
    fn is_text(&self, c: char) -> bool {
        !is_newline(c) && !is_whitespace(c) && !self.delimiters.starts_delimiter(c)
    }

    /// Slice the valid input. Bounds always come from decoded scalar
    /// boundaries, which lie inside `text`.
    #[inline]
    fn slice(&self, start: usize, end: usize) -> &'a str {
        debug_assert!(
            end <= self.text.len(),
            "slice end {end} exceeds valid input length {}",
            self.text.len()
        );
        self.text.get(start..end).unwrap_or_default()
    }

    fn emit(&self, kind: LexemeKind, text: &'a str, start: usize) -> Lexeme<'a> {
        let span = Span::new(start, self.decoder.pos());
        trace!(?kind, %span, "lexeme");
        Lexeme { kind, text, span }
    }

    fn end(pos: usize) -> Lexeme<'a> {
        Lexeme {
            kind: LexemeKind::End,
            text: "",
            span: Span::new(pos, pos),
        }
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        let lexeme = self.next_token();
        if lexeme.is_end() {
            None
        } else {
            Some(lexeme.text)
        }
    }
}

impl std::iter::FusedIterator for Lexer<'_> {}

/// Iterator over [`Lexeme`]s, created by [`Lexer::spanned`].
#[derive(Clone, Debug)]
pub struct Spanned<'a> {
    lexer: Lexer<'a>,
}

impl<'a> Spanned<'a> {
    /// The underlying lexer, e.g. to adjust its configuration mid-stream.
    pub fn lexer_mut(&mut self) -> &mut Lexer<'a> {
        &mut self.lexer
    }
}

impl<'a> Iterator for Spanned<'a> {
    type Item = Lexeme<'a>;

    fn next(&mut self) -> Option<Lexeme<'a>> {
        let lexeme = self.lexer.next_token();
        if lexeme.is_end() {
            None
        } else {
            Some(lexeme)
        }
    }
}

impl std::iter::FusedIterator for Spanned<'_> {}

#[inline]
fn is_newline(c: char) -> bool {
    c == '\n' || c == '\r'
}

#[inline]
fn is_whitespace(c: char) -> bool {
    c == ' ' || c == '\t'
}
