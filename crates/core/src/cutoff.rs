//! Cutoff-based filtering and grouping of frequency tables.
//!
//! Every presenter runs its table through [`CutoffPolicy::apply`] first.
//! Words whose count is at or below the cutoff are "below cutoff"; they can
//! be removed, or summed into one synthetic [`GROUPED_WORDS`] entry.
//!
//! When a cutoff is set but neither `group_below_cutoff` nor
//! `remove_below_cutoff` is, the table is returned unchanged.
//!
//! # Example
//!
//! ```rust
//! use wikistat_core::{CutoffPolicy, FrequencyTable};
//!
//! let table: FrequencyTable = [("a", 3), ("b", 1), ("c", 1)].into_iter().collect();
//! let policy = CutoffPolicy::new(1).group_below_cutoff(true);
//!
//! let grouped: Vec<_> = policy.apply(&table).iter().map(|(w, c)| (w.to_string(), c)).collect();
//! assert_eq!(grouped, vec![("a".to_string(), 3), ("grouped_words".to_string(), 2)]);
//! ```

use std::collections::HashSet;

use crate::FrequencyTable;

/// Name of the synthetic entry holding the summed below-cutoff counts.
pub const GROUPED_WORDS: &str = "grouped_words";

/// How low-frequency words are treated before presentation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CutoffPolicy {
    /// Counts at or below this value are below cutoff; 0 disables filtering.
    pub cutoff: usize,
    /// Sum below-cutoff counts into one `grouped_words` entry.
    pub group_below_cutoff: bool,
    /// Drop below-cutoff entries.
    pub remove_below_cutoff: bool,
}

impl CutoffPolicy {
    /// A policy with the given cutoff and no grouping or removal.
    pub fn new(cutoff: usize) -> Self {
        Self { cutoff, ..Default::default() }
    }

    pub fn group_below_cutoff(mut self, value: bool) -> Self {
        self.group_below_cutoff = value;
        self
    }

    pub fn remove_below_cutoff(mut self, value: bool) -> Self {
        self.remove_below_cutoff = value;
        self
    }

    /// Whether this policy leaves every table unchanged: no cutoff, or a
    /// cutoff with neither grouping nor removal.
    pub fn is_identity(&self) -> bool {
        self.cutoff == 0 || !(self.group_below_cutoff || self.remove_below_cutoff)
    }

    /// Derives the table to present; `table` itself is left untouched.
    ///
    /// The grouped entry is upserted before below-cutoff words are removed,
    /// so a real word named `grouped_words` keeps its position and takes the
    /// grouped sum, unless it was itself below cutoff, in which case it is
    /// removed along with the rest.
    pub fn apply(&self, table: &FrequencyTable) -> FrequencyTable {
        let mut result = table.clone();

        if self.is_identity() {
            return result;
        }

        let below: HashSet<&str> =
            table.iter().filter(|(_, count)| *count <= self.cutoff).map(|(word, _)| word).collect();

        if self.group_below_cutoff {
            let grouped = table.iter().filter(|(word, _)| below.contains(word)).map(|(_, count)| count).sum();
            result.insert(GROUPED_WORDS, grouped);
        }

        result.retain(|word, _| !below.contains(word));

        result
    }
}

/// An ordered mapping from word to its share of the table, in percent.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PercentageTable {
    entries: Vec<(String, f64)>,
}

impl PercentageTable {
    /// Converts counts to `100 * count / total`, where `total` is the sum
    /// of `table`. An all-zero table yields 0.0 for every word.
    pub fn from_table(table: &FrequencyTable) -> Self {
        let total = table.total();
        let entries = table
            .iter()
            .map(|(word, count)| {
                let share = if total == 0 { 0.0 } else { count as f64 / total as f64 * 100.0 };
                (word.to_string(), share)
            })
            .collect();

        Self { entries }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.entries.iter().map(|(word, share)| (word.as_str(), *share))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn sum(&self) -> f64 {
        self.entries.iter().map(|(_, share)| share).sum()
    }
}
