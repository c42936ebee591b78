//! Argument parsing for `delim lex`.

use delim_lexer::LexerConfig;

use crate::error::CliError;

/// Default separator between delimiters in `--delims=`.
const DEFAULT_SEPARATOR: char = ',';

/// Options for the `lex` command.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LexOptions {
    /// Input file, or `-` for stdin.
    pub path: String,
    /// Delimiters after unescaping. May contain empty strings, which the
    /// lexer drops.
    pub delimiters: Vec<String>,
    pub config: LexerConfig,
    /// Print kind and byte span next to each lexeme.
    pub show_spans: bool,
}

/// Parse the arguments following `lex`.
pub fn parse_lex_options(args: &[String]) -> Result<LexOptions, CliError> {
    let mut path: Option<String> = None;
    let mut raw_delimiters: Option<&str> = None;
    let mut separator = DEFAULT_SEPARATOR;
    let mut config = LexerConfig::default();
    let mut show_spans = false;

    for arg in args {
        if let Some(list) = arg.strip_prefix("--delims=") {
            raw_delimiters = Some(list);
        } else if let Some(sep) = arg.strip_prefix("--sep=") {
            separator = single_char(sep).ok_or_else(|| CliError::BadSeparator(sep.to_string()))?;
        } else if arg == "--ignore-whitespace" || arg == "-w" {
            config.ignore_whitespace = true;
        } else if arg == "--ignore-newlines" || arg == "-n" {
            config.ignore_newlines = true;
        } else if arg == "--spans" || arg == "-s" {
            show_spans = true;
        } else if arg == "-" || !arg.starts_with('-') {
            if path.is_some() {
                return Err(CliError::UnexpectedArgument(arg.clone()));
            }
            path = Some(arg.clone());
        } else {
            return Err(CliError::UnknownOption(arg.clone()));
        }
    }

    let path = path.ok_or(CliError::MissingInput)?;
    let delimiters: Vec<String> = raw_delimiters
        .map(|list| list.split(separator).map(unescape_delimiter).collect())
        .unwrap_or_default();

    Ok(LexOptions {
        path,
        delimiters,
        config,
        show_spans,
    })
}

/// Expand `\n`, `\r`, `\t`, `\s` (space), and `\\` in delimiter text.
///
/// Unrecognized escapes are kept verbatim.
pub fn unescape_delimiter(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut chars = raw.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('n') => out.push('\n'),
            Some('r') => out.push('\r'),
            Some('t') => out.push('\t'),
            Some('s') => out.push(' '),
            Some('\\') => out.push('\\'),
            Some(other) => {
                out.push('\\');
                out.push(other);
            }
            None => out.push('\\'),
        }
    }
    out
}

fn single_char(text: &str) -> Option<char> {
    let mut chars = text.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Some(c),
        _ => None,
    }
}

#[cfg(test)]
mod tests;
