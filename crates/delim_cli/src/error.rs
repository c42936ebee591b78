//! Errors surfaced to the command line.

use std::io;

/// Anything that stops a command before it produces output.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("missing input path (use '-' for stdin)")]
    MissingInput,

    #[error("unexpected argument '{0}'")]
    UnexpectedArgument(String),

    #[error("unknown option '{0}'")]
    UnknownOption(String),

    #[error("separator must be exactly one character, got '{0}'")]
    BadSeparator(String),

    #[error("cannot read '{path}': {source}")]
    Read {
        path: String,
        #[source]
        source: io::Error,
    },
}
