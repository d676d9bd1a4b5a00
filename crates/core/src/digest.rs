//! Word frequency digestion of section text.
//!
//! The digester lowercases the text, splits it on whitespace, drops stop
//! words, deletes a fixed set of punctuation characters from each remaining
//! token and counts what is left.
//!
//! Two behaviors are pinned by tests:
//!
//! - punctuation is deleted, not split on, so `hello,world` counts as
//!   `helloworld`;
//! - a token made only of punctuation becomes the empty string and is
//!   counted like any other word.
//!
//! Stop words are matched before punctuation is deleted, so `the.` survives
//! filtering and is counted as `the`.
//!
//! # Example
//!
//! ```rust
//! use wikistat_core::{FrequencyDigester, StopWords};
//!
//! let digester = FrequencyDigester::new(StopWords::new(["the"]));
//! let table = digester.digest("The cat sat. The cat ran.");
//!
//! let entries: Vec<_> = table.iter().collect();
//! assert_eq!(entries, vec![("cat", 2), ("sat", 1), ("ran", 1)]);
//! ```

use std::collections::HashMap;

use crate::{FrequencyTable, StopWords};

/// Characters deleted from every token after stop-word removal.
pub const STRIPPED_PUNCTUATION: [char; 4] = ['.', ',', '\'', '"'];

/// Turns section text into a descending frequency table.
#[derive(Debug, Clone, Default)]
pub struct FrequencyDigester {
    stop_words: StopWords,
}

impl FrequencyDigester {
    pub fn new(stop_words: StopWords) -> Self {
        Self { stop_words }
    }

    pub fn stop_words(&self) -> &StopWords {
        &self.stop_words
    }

    /// Produces the frequency table for `text`.
    ///
    /// Entries are sorted by descending count; equal counts keep the order
    /// in which each word was first seen.
    pub fn digest(&self, text: &str) -> FrequencyTable {
        let lowered = text.to_lowercase();

        let mut seen: HashMap<String, usize> = HashMap::new();
        let mut counts: Vec<(String, usize)> = Vec::new();

        for token in self.tokens(&lowered) {
            match seen.get(&token) {
                Some(&slot) => counts[slot].1 += 1,
                None => {
                    seen.insert(token.clone(), counts.len());
                    counts.push((token, 1));
                }
            }
        }

        let mut table = FrequencyTable::from_unique_entries(counts);
        table.sort_descending();
        table
    }

    /// Post-filter, post-strip tokens of already lowercased text, in order.
    pub fn tokens<'a>(&'a self, lowered: &'a str) -> impl Iterator<Item = String> + 'a {
        lowered
            .split_whitespace()
            .filter(|token| !self.stop_words.contains(token))
            .map(strip_punctuation)
    }
}

/// Deletes `.`, `,`, `'` and `"` from a token without splitting it.
pub fn strip_punctuation(token: &str) -> String {
    token.chars().filter(|c| !STRIPPED_PUNCTUATION.contains(c)).collect()
}
