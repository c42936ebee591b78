use super::*;
use pretty_assertions::assert_eq;

#[test]
fn empty_set() {
    let set = DelimiterSet::new(Vec::<String>::new());
    assert!(set.is_empty());
    assert_eq!(set.len(), 0);
    assert_eq!(set.max_codepoints(), 0);
    assert!(!set.starts_delimiter('a'));
}

#[test]
fn duplicates_collapse() {
    let set = DelimiterSet::new(["<", "<", "<="]);
    assert_eq!(set.len(), 2);
    assert!(set.contains("<"));
    assert!(set.contains("<="));
    assert!(!set.contains("="));
}

#[test]
fn empty_strings_are_dropped() {
    let set = DelimiterSet::new(["", ";", ""]);
    assert_eq!(set.len(), 1);
    assert_eq!(set.max_codepoints(), 1);
}

#[test]
fn max_width_counts_code_points_not_bytes() {
    // "\u{2192}" is 3 bytes but 1 code point.
    let set = DelimiterSet::new(["\u{2192}", "::"]);
    assert_eq!(set.max_codepoints(), 2);
}

#[test]
fn first_code_points_indexed() {
    let set = DelimiterSet::new(["++", "\u{3bb}x"]);
    assert!(set.starts_delimiter('+'));
    assert!(set.starts_delimiter('\u{3bb}'));
    assert!(!set.starts_delimiter('x'));
}

#[test]
fn insert_reports_novelty() {
    let mut set = DelimiterSet::default();
    assert!(set.insert("->"));
    assert!(!set.insert("->"));
    assert!(!set.insert(""));
    assert_eq!(set.len(), 1);
}

#[test]
fn collects_from_iterator() {
    let set: DelimiterSet = vec![String::from("("), String::from(")")]
        .into_iter()
        .collect();
    let mut delimiters: Vec<&str> = set.iter().collect();
    delimiters.sort_unstable();
    assert_eq!(delimiters, vec!["(", ")"]);
}
