//! Candidate table for matching an upcoming string token.

use std::collections::HashMap;

/// An ordered list of candidate strings, prepared for exact-match lookup.
///
/// When the same string appears more than once, lookups resolve to its first
/// position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StringOptions {
    strings: Vec<String>,
    index: HashMap<String, usize>,
}

impl StringOptions {
    pub fn of<I, S>(strings: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let strings: Vec<String> = strings.into_iter().map(Into::into).collect();
        let mut index = HashMap::with_capacity(strings.len());
        for (i, s) in strings.iter().enumerate() {
            index.entry(s.clone()).or_insert(i);
        }
        Self { strings, index }
    }

    /// Position of the first candidate equal to `value`.
    #[inline]
    pub fn find(&self, value: &str) -> Option<usize> {
        self.index.get(value).copied()
    }

    pub fn strings(&self) -> &[String] {
        &self.strings
    }

    pub fn len(&self) -> usize {
        self.strings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.strings.is_empty()
    }
}
