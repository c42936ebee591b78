//! The `lex` command: read input, lex it, print one lexeme per line.

use std::io::{self, Read};

use delim_lexer::{DelimiterSet, Lexeme, Lexer};
use tracing::debug;

use crate::error::CliError;
use crate::options::LexOptions;

/// Lex the input named by `options` and print the lexemes.
#[tracing::instrument(level = "debug", skip_all, fields(path = %options.path))]
pub fn lex_input(options: &LexOptions) -> Result<(), CliError> {
    let bytes = read_input(&options.path)?;
    let delimiters = DelimiterSet::new(&options.delimiters);
    let lexer = Lexer::from_parts(&bytes, delimiters, options.config);

    let valid_len = lexer.source().len();
    let mut count = 0usize;
    for lexeme in lexer.spanned() {
        println!("{}", render(&lexeme, options.show_spans));
        count += 1;
    }
    debug!(count, "lexing complete");

    if valid_len < bytes.len() {
        eprintln!(
            "warning: stopped at malformed UTF-8 at byte {valid_len} of {}",
            bytes.len()
        );
    }
    Ok(())
}

/// Format one lexeme. Text is debug-escaped so whitespace stays visible.
pub fn render(lexeme: &Lexeme<'_>, show_spans: bool) -> String {
    if show_spans {
        format!("{:?} @ {} {:?}", lexeme.kind, lexeme.span, lexeme.text)
    } else {
        format!("{:?}", lexeme.text)
    }
}

fn read_input(path: &str) -> Result<Vec<u8>, CliError> {
    let read_error = |source| CliError::Read {
        path: path.to_string(),
        source,
    };
    if path == "-" {
        let mut bytes = Vec::new();
        io::stdin().read_to_end(&mut bytes).map_err(read_error)?;
        Ok(bytes)
    } else {
        std::fs::read(path).map_err(read_error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use delim_lexer::{LexemeKind, Span};
    use pretty_assertions::assert_eq;

    #[test]
    fn render_plain_escapes_text() {
        let lexeme = Lexeme {
            kind: LexemeKind::Newline,
            text: "\n",
            span: Span::new(3, 5),
        };
        assert_eq!(render(&lexeme, false), "\"\\n\"");
    }

    #[test]
    fn render_with_spans() {
        let lexeme = Lexeme {
            kind: LexemeKind::Delimiter,
            text: "<=",
            span: Span::new(0, 2),
        };
        assert_eq!(render(&lexeme, true), "Delimiter @ 0..2 \"<=\"");
    }

    #[test]
    fn missing_file_reports_path() {
        let Err(err) = read_input("/nonexistent/delim-input.txt") else {
            panic!("reading a missing file should fail");
        };
        assert!(err.to_string().starts_with("cannot read '/nonexistent/delim-input.txt'"));
    }
}
