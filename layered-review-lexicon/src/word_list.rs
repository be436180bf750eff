//! A normalized set of lowercase words or phrases.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// A set of lowercase entries used for exact membership tests.
///
/// Entries are trimmed and lowercased on the way in and blank entries are
/// dropped, so lookups only ever need to lowercase the probe.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<String>", into = "Vec<String>")]
pub struct WordList {
    entries: BTreeSet<String>,
}

impl WordList {
    /// Build a word list from any iterator of words.
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut list = Self::default();
        for word in words {
            list.insert(word.as_ref());
        }
        list
    }

    /// Build a word list from a static table.
    pub fn from_static(words: &[&'static str]) -> Self {
        Self::new(words.iter().copied())
    }

    /// Add an entry. Returns `false` for blank or already present entries.
    pub fn insert(&mut self, word: &str) -> bool {
        let normalized = word.trim().to_lowercase();
        if normalized.is_empty() {
            return false;
        }
        self.entries.insert(normalized)
    }

    /// Exact membership of an already-lowercased probe.
    pub fn contains(&self, word: &str) -> bool {
        self.entries.contains(word)
    }

    /// The first entry (in sorted order) occurring as a substring of `haystack`.
    pub fn find_within(&self, haystack: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|entry| haystack.contains(entry.as_str()))
            .map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl From<Vec<String>> for WordList {
    fn from(words: Vec<String>) -> Self {
        Self::new(words)
    }
}

impl From<WordList> for Vec<String> {
    fn from(list: WordList) -> Self {
        list.entries.into_iter().collect()
    }
}

impl<'a> FromIterator<&'a str> for WordList {
    fn from_iter<T: IntoIterator<Item = &'a str>>(iter: T) -> Self {
        Self::new(iter)
    }
}
