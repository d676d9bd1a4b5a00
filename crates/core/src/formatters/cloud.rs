//! Terminal word clouds.
//!
//! A section's table is expanded into a synthetic corpus (each word repeated
//! `count` times), which the [`WordCloud`] generator re-tokenizes, sizes and
//! lays out. Sizes are font sizes between `min_font_size` and
//! `max_font_size`, proportional to each word's frequency relative to the
//! most frequent word; in colored output they map to four terminal styles.

use std::collections::HashMap;

use owo_colors::OwoColorize;

use super::section_heading;
use crate::{CutoffPolicy, FrequencyTable, Section};

const WORD_GAP: &str = "  ";

/// Word cloud generation settings.
#[derive(Debug, Clone)]
pub struct CloudConfig {
    /// Maximum line width in terminal columns.
    pub width: usize,
    /// Maximum number of words kept in a cloud.
    pub max_words: usize,
    pub min_font_size: u32,
    pub max_font_size: u32,
}

impl Default for CloudConfig {
    fn default() -> Self {
        Self { width: 80, max_words: 200, min_font_size: 10, max_font_size: 80 }
    }
}

/// A word placed in a cloud.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CloudWord {
    pub text: String,
    pub count: usize,
    pub font_size: u32,
}

/// A generated word cloud, largest words first.
#[derive(Debug, Clone)]
pub struct WordCloud {
    words: Vec<CloudWord>,
    config: CloudConfig,
}

impl WordCloud {
    /// Generates a cloud from free text, splitting it on whitespace.
    pub fn generate(corpus: &str, config: &CloudConfig) -> Self {
        let mut slots: HashMap<&str, usize> = HashMap::new();
        let mut counts: Vec<(&str, usize)> = Vec::new();

        for token in corpus.split_whitespace() {
            match slots.get(token) {
                Some(&slot) => counts[slot].1 += 1,
                None => {
                    slots.insert(token, counts.len());
                    counts.push((token, 1));
                }
            }
        }

        counts.sort_by(|a, b| b.1.cmp(&a.1));
        counts.truncate(config.max_words);

        let max_count = counts.first().map(|(_, count)| *count).unwrap_or(0);
        let words = counts
            .into_iter()
            .map(|(text, count)| CloudWord {
                text: text.to_string(),
                count,
                font_size: font_size(count, max_count, config),
            })
            .collect();

        Self { words, config: config.clone() }
    }

    /// Generates a cloud from a frequency table via its expanded corpus.
    pub fn from_table(table: &FrequencyTable, config: &CloudConfig) -> Self {
        Self::generate(&expand_corpus(table), config)
    }

    pub fn words(&self) -> &[CloudWord] {
        &self.words
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Style tier from 1 (smallest) to 4 (largest).
    pub fn tier(&self, word: &CloudWord) -> u8 {
        let min = self.config.min_font_size;
        let max = self.config.max_font_size;
        if max <= min {
            return 4;
        }
        let range = max - min;
        let offset = word.font_size.saturating_sub(min).min(range);
        (offset * 4 / (range + 1)) as u8 + 1
    }

    /// Lays the words out in centered lines no wider than the configured width.
    pub fn render(&self, color: bool) -> String {
        let mut output = String::new();

        for line in self.layout() {
            let plain_width: usize =
                line.iter().map(|w| w.text.chars().count()).sum::<usize>() + WORD_GAP.len() * (line.len() - 1);
            let padding = self.config.width.saturating_sub(plain_width) / 2;

            let styled: Vec<String> = line.iter().map(|w| self.style(w, color)).collect();
            output.push_str(&" ".repeat(padding));
            output.push_str(&styled.join(WORD_GAP));
            output.push('\n');
        }

        output
    }

    fn layout(&self) -> Vec<Vec<&CloudWord>> {
        let mut lines: Vec<Vec<&CloudWord>> = Vec::new();
        let mut current: Vec<&CloudWord> = Vec::new();
        let mut current_width = 0;

        for word in &self.words {
            let word_width = word.text.chars().count();

            if current.is_empty() {
                current.push(word);
                current_width = word_width;
            } else if current_width + WORD_GAP.len() + word_width <= self.config.width {
                current.push(word);
                current_width += WORD_GAP.len() + word_width;
            } else {
                lines.push(std::mem::take(&mut current));
                current.push(word);
                current_width = word_width;
            }
        }

        if !current.is_empty() {
            lines.push(current);
        }

        lines
    }

    fn style(&self, word: &CloudWord, color: bool) -> String {
        if !color {
            return word.text.clone();
        }
        match self.tier(word) {
            4 => word.text.bold().bright_magenta().to_string(),
            3 => word.text.bold().bright_cyan().to_string(),
            2 => word.text.bright_blue().to_string(),
            _ => word.text.dimmed().to_string(),
        }
    }
}

/// Expands a table into a corpus with each word repeated `count` times.
pub fn expand_corpus(table: &FrequencyTable) -> String {
    let mut tokens: Vec<&str> = Vec::with_capacity(table.total());
    for (word, count) in table.iter() {
        tokens.extend(std::iter::repeat_n(word, count));
    }
    tokens.join(" ")
}

fn font_size(count: usize, max_count: usize, config: &CloudConfig) -> u32 {
    if max_count == 0 || config.max_font_size <= config.min_font_size {
        return config.max_font_size.max(config.min_font_size);
    }
    let range = (config.max_font_size - config.min_font_size) as f64;
    config.min_font_size + (range * count as f64 / max_count as f64).round() as u32
}

/// Renders one word cloud per section.
pub fn render_word_clouds(
    sections: &[Section], policy: &CutoffPolicy, limit: usize, config: &CloudConfig, color: bool,
) -> String {
    let mut output = String::new();

    for section in sections.iter().take(limit) {
        let cloud = WordCloud::from_table(&policy.apply(&section.frequencies), config);

        output.push_str(&section_heading(&section.title, color));
        output.push('\n');

        if cloud.is_empty() {
            output.push_str("  (no words)\n");
        } else {
            output.push_str(&cloud.render(color));
        }

        output.push('\n');
    }

    output
}
