//! Ordered word frequency tables.

use serde::ser::{Serialize, SerializeMap, Serializer};

/// An ordered mapping from word to count.
///
/// Order is meaningful: digested tables are sorted by descending count, and
/// derived tables keep the relative order of their source. Inserting an
/// existing word updates it in place; inserting a new word appends it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrequencyTable {
    entries: Vec<(String, usize)>,
}

impl FrequencyTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the count of `word`, keeping its position if already present.
    pub fn insert(&mut self, word: impl Into<String>, count: usize) {
        let word = word.into();
        match self.position(&word) {
            Some(pos) => self.entries[pos].1 = count,
            None => self.entries.push((word, count)),
        }
    }

    /// Removes `word`, returning its count if it was present.
    pub fn remove(&mut self, word: &str) -> Option<usize> {
        let pos = self.position(word)?;
        Some(self.entries.remove(pos).1)
    }

    pub fn get(&self, word: &str) -> Option<usize> {
        self.position(word).map(|pos| self.entries[pos].1)
    }

    pub fn contains(&self, word: &str) -> bool {
        self.position(word).is_some()
    }

    /// Iterates `(word, count)` pairs in table order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.entries.iter().map(|(word, count)| (word.as_str(), *count))
    }

    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(word, _)| word.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Total number of words counted, i.e. the sum of all counts.
    pub fn total(&self) -> usize {
        self.entries.iter().map(|(_, count)| count).sum()
    }

    /// Largest single count, 0 for an empty table.
    pub fn max_count(&self) -> usize {
        self.entries.iter().map(|(_, count)| *count).max().unwrap_or(0)
    }

    /// Keeps only the entries for which `keep` returns true, in order.
    pub fn retain(&mut self, mut keep: impl FnMut(&str, usize) -> bool) {
        self.entries.retain(|(word, count)| keep(word, *count));
    }

    /// Builds a table from entries already known to have unique words.
    pub(crate) fn from_unique_entries(entries: Vec<(String, usize)>) -> Self {
        Self { entries }
    }

    /// Stable sort by descending count.
    pub(crate) fn sort_descending(&mut self) {
        self.entries.sort_by(|a, b| b.1.cmp(&a.1));
    }

    fn position(&self, word: &str) -> Option<usize> {
        self.entries.iter().position(|(w, _)| w == word)
    }
}

impl<S: Into<String>> FromIterator<(S, usize)> for FrequencyTable {
    fn from_iter<T: IntoIterator<Item = (S, usize)>>(iter: T) -> Self {
        let mut table = Self::new();
        for (word, count) in iter {
            table.insert(word, count);
        }
        table
    }
}

impl Serialize for FrequencyTable {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (word, count) in &self.entries {
            map.serialize_entry(word, count)?;
        }
        map.end()
    }
}
