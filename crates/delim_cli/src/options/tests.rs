use super::*;
use pretty_assertions::assert_eq;

fn args(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| (*s).to_string()).collect()
}

#[test]
fn path_only() {
    let options = parse_lex_options(&args(&["input.txt"]));
    assert_eq!(
        options.ok(),
        Some(LexOptions {
            path: "input.txt".to_string(),
            ..LexOptions::default()
        })
    );
}

#[test]
fn stdin_dash_is_a_path() {
    let options = parse_lex_options(&args(&["-", "--spans"]));
    assert!(matches!(options, Ok(LexOptions { ref path, show_spans: true, .. }) if path == "-"));
}

#[test]
fn flags_set_config() {
    let Ok(options) = parse_lex_options(&args(&["-w", "f", "--ignore-newlines"])) else {
        panic!("flags should parse");
    };
    assert!(options.config.ignore_whitespace);
    assert!(options.config.ignore_newlines);
    assert!(!options.show_spans);
}

#[test]
fn delimiters_split_and_unescaped() {
    let Ok(options) = parse_lex_options(&args(&["f", "--delims=(,),\\n,\\s,++"])) else {
        panic!("delimiters should parse");
    };
    assert_eq!(options.delimiters, vec!["(", ")", "\n", " ", "++"]);
}

#[test]
fn custom_separator_applies_regardless_of_order() {
    let Ok(options) = parse_lex_options(&args(&["--delims=,|;", "--sep=|", "f"])) else {
        panic!("separator should parse");
    };
    assert_eq!(options.delimiters, vec![",", ";"]);
}

#[test]
fn missing_path_is_an_error() {
    assert!(matches!(
        parse_lex_options(&args(&["--spans"])),
        Err(CliError::MissingInput)
    ));
}

#[test]
fn second_path_is_an_error() {
    assert!(matches!(
        parse_lex_options(&args(&["a", "b"])),
        Err(CliError::UnexpectedArgument(arg)) if arg == "b"
    ));
}

#[test]
fn unknown_option_is_an_error() {
    assert!(matches!(
        parse_lex_options(&args(&["f", "--frobnicate"])),
        Err(CliError::UnknownOption(arg)) if arg == "--frobnicate"
    ));
}

#[test]
fn multi_char_separator_is_an_error() {
    assert!(matches!(
        parse_lex_options(&args(&["f", "--sep=ab"])),
        Err(CliError::BadSeparator(_))
    ));
}

#[test]
fn unescape_keeps_unknown_escapes() {
    assert_eq!(unescape_delimiter("\\q"), "\\q");
    assert_eq!(unescape_delimiter("a\\"), "a\\");
    assert_eq!(unescape_delimiter("\\\\\\t"), "\\\t");
    assert_eq!(unescape_delimiter("\u{2192}"), "\u{2192}");
}
