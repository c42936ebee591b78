//! End-to-end lexing of the documented examples through the public API.

use delim_lexer::{lex, LexemeKind, Lexer, LexerConfig};
use pretty_assertions::assert_eq;

const C_LIKE_DELIMITERS: [&str; 12] = [
    "(", ")", ";", " ", "{", "}", ".", "\n", "\r", "=", "++", "<",
];

#[test]
fn c_like_for_loop() {
    let input = "for (int i=0; i<arr.length; ++i)\r\n{doThing();}\n";
    let expected = vec![
        "for", " ", "(", "int", " ", "i", "=", "0", ";", " ", "i", "<", "arr", ".", "length",
        ";", " ", "++", "i", ")", "\n", "{", "doThing", "(", ")", ";", "}", "\n",
    ];
    assert_eq!(lex(input, C_LIKE_DELIMITERS), expected);
}

#[test]
fn c_like_for_loop_pull_api() {
    let input = "for (int i=0; i<arr.length; ++i)\r\n{doThing();}\n";
    let mut lexer = Lexer::new(input, C_LIKE_DELIMITERS);
    let mut pulled = Vec::new();
    loop {
        let lexeme = lexer.next_lexeme();
        if lexeme.is_empty() {
            break;
        }
        pulled.push(lexeme);
    }
    assert_eq!(pulled, lex(input, C_LIKE_DELIMITERS));
}

#[test]
fn c_like_for_loop_kinds() {
    let input = "for (i)\r\n";
    let kinds: Vec<LexemeKind> = Lexer::new(input, C_LIKE_DELIMITERS)
        .spanned()
        .map(|lexeme| lexeme.kind)
        .collect();
    assert_eq!(
        kinds,
        vec![
            LexemeKind::Text,
            LexemeKind::Whitespace,
            LexemeKind::Delimiter,
            LexemeKind::Text,
            LexemeKind::Delimiter,
            LexemeKind::Newline,
        ]
    );
}

#[test]
fn c_like_for_loop_ignoring_separators() {
    let input = "for (int i=0; i<arr.length; ++i)\r\n{doThing();}\n";
    let config = LexerConfig::new()
        .with_ignore_whitespace(true)
        .with_ignore_newlines(true);
    let lexed: Vec<&str> = Lexer::with_config(input, C_LIKE_DELIMITERS, config).collect();
    assert_eq!(
        lexed,
        vec![
            "for", "(", "int", "i", "=", "0", ";", "i", "<", "arr", ".", "length", ";", "++",
            "i", ")", "{", "doThing", "(", ")", ";", "}",
        ]
    );
}

#[test]
fn greedy_less_equal() {
    assert_eq!(lex("<=x", ["<", "<="]), vec!["<=", "x"]);
}

#[test]
fn crlf_between_words() {
    assert_eq!(lex("a\r\nb", [";"]), vec!["a", "\n", "b"]);
}

#[test]
fn ignored_whitespace_run() {
    let config = LexerConfig::new().with_ignore_whitespace(true);
    let lexed: Vec<&str> = Lexer::with_config("a   b", [";"], config).collect();
    assert_eq!(lexed, vec!["a", "b"]);
}

#[test]
fn empty_input() {
    assert_eq!(Lexer::new("", ["("]).next_lexeme(), "");
    assert!(lex("", ["("]).is_empty());
}
