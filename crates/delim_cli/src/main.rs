//! `delim` command-line tool.
//!
//! Lexes a file (or stdin) with a caller-supplied delimiter set and prints
//! one lexeme per line. Set `RUST_LOG=delim_lexer=trace` to trace every
//! lexeme.

mod commands;
mod error;
mod options;

use commands::lex_input;
use options::parse_lex_options;

fn main() {
    init_tracing();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        return;
    }

    match args[1].as_str() {
        "lex" => {
            let result = parse_lex_options(&args[2..]).and_then(|options| lex_input(&options));
            if let Err(err) = result {
                eprintln!("error: {err}");
                std::process::exit(1);
            }
        }
        "help" | "--help" | "-h" => print_usage(),
        other => {
            eprintln!("error: unknown command '{other}'");
            eprintln!();
            print_usage();
            std::process::exit(1);
        }
    }
}

/// Install a subscriber when `RUST_LOG` is set; stay silent otherwise.
fn init_tracing() {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    if std::env::var("RUST_LOG").is_ok() {
        let filter = EnvFilter::from_default_env();
        tracing_subscriber::registry()
            .with(fmt::layer().with_target(true).with_level(true).with_writer(std::io::stderr))
            .with(filter)
            .init();
    }
}

fn print_usage() {
    println!("Usage: delim <command> [options]");
    println!();
    println!("Commands:");
    println!("  lex <file|->     Split input into lexemes, one per line");
    println!("  help             Show this message");
    println!();
    println!("Options for lex:");
    println!("  --delims=<list>          Delimiters separated by ',' (escapes: \\n \\r \\t \\s \\\\)");
    println!("  --sep=<char>             Separator for --delims (default ',')");
    println!("  -w, --ignore-whitespace  Skip spaces and tabs");
    println!("  -n, --ignore-newlines    Skip \\n, \\r, and \\r\\n");
    println!("  -s, --spans              Print kind and byte span with each lexeme");
}
