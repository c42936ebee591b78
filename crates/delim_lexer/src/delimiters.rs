//! Delimiter set with first-code-point index.
//!
//! The lexer asks two questions of its delimiters on every call: "can this
//! code point start a delimiter?" (text classification) and "is this
//! candidate string a delimiter?" (greedy match). Both are hash lookups.
//! The longest delimiter, measured in code points, bounds how far the
//! greedy search looks ahead.

use rustc_hash::FxHashSet;
use tracing::debug;

/// Fixed set of non-empty delimiter strings.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DelimiterSet {
    delimiters: FxHashSet<Box<str>>,
    /// First code point of every delimiter.
    first_chars: FxHashSet<char>,
    /// Length in code points of the longest delimiter.
    max_codepoints: usize,
}

impl DelimiterSet {
    /// Build a set from any collection of strings.
    ///
    /// Duplicates collapse. Empty strings are dropped: they can never be
    /// matched and would make every position a delimiter start.
    pub fn new<I, S>(delimiters: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut set = Self::default();
        let mut dropped_empty = 0usize;
        for delimiter in delimiters {
            let delimiter = delimiter.as_ref();
            if delimiter.is_empty() {
                dropped_empty += 1;
            } else {
                set.insert(delimiter);
            }
        }
        debug!(
            count = set.len(),
            max_codepoints = set.max_codepoints,
            dropped_empty,
            "built delimiter set"
        );
        set
    }

    /// Add one delimiter. Returns `false` if it was empty or already present.
    pub fn insert(&mut self, delimiter: &str) -> bool {
        let Some(first) = delimiter.chars().next() else {
            return false;
        };
        if self.delimiters.contains(delimiter) {
            return false;
        }
        self.first_chars.insert(first);
        self.max_codepoints = self.max_codepoints.max(delimiter.chars().count());
        self.delimiters.insert(delimiter.into());
        true
    }

    /// Returns `true` if `candidate` is exactly one of the delimiters.
    #[inline]
    pub fn contains(&self, candidate: &str) -> bool {
        self.delimiters.contains(candidate)
    }

    /// Returns `true` if some delimiter begins with `c`.
    #[inline]
    pub fn starts_delimiter(&self, c: char) -> bool {
        self.first_chars.contains(&c)
    }

    /// Length in code points of the longest delimiter (0 when empty).
    #[inline]
    pub fn max_codepoints(&self) -> usize {
        self.max_codepoints
    }

    /// Number of distinct delimiters.
    pub fn len(&self) -> usize {
        self.delimiters.len()
    }

    /// Returns `true` if no delimiters are configured.
    pub fn is_empty(&self) -> bool {
        self.delimiters.is_empty()
    }

    /// Iterate over the delimiters in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.delimiters.iter().map(|delimiter| &**delimiter)
    }
}

impl<S: AsRef<str>> FromIterator<S> for DelimiterSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::new(iter)
    }
}

#[cfg(test)]
mod tests;
