//! Stop-word lists.
//!
//! [`StopWords`] is an immutable set of lowercase words that the digester
//! drops before counting. The default English list is embedded at compile
//! time; custom lists can be loaded from a file.

use std::collections::HashSet;
use std::fs;
use std::path::Path;
use std::sync::{Arc, LazyLock};

use crate::{Result, WikistatError};

const ENGLISH_STOPWORDS_FILE: &str = include_str!("../resources/stopwords/en.txt");

static ENGLISH_STOPWORDS: LazyLock<Arc<HashSet<String>>> =
    LazyLock::new(|| Arc::new(parse_word_list(ENGLISH_STOPWORDS_FILE)));

/// An immutable stop-word set, cheap to clone.
#[derive(Debug, Clone)]
pub struct StopWords {
    words: Arc<HashSet<String>>,
}

impl StopWords {
    /// Creates a stop-word set from the given words.
    ///
    /// Words are lowercased so that they match lowercased tokens.
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words = words.into_iter().map(|w| w.as_ref().to_lowercase()).collect();
        Self { words: Arc::new(words) }
    }

    /// The standard English list (NLTK stopwords corpus).
    pub fn english() -> Self {
        Self { words: ENGLISH_STOPWORDS.clone() }
    }

    /// Loads a list from a file with one word per line.
    ///
    /// Blank lines and lines starting with `#` are ignored.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .map_err(|source| WikistatError::StopWords { path: path.to_path_buf(), source })?;

        Ok(Self { words: Arc::new(parse_word_list(&content)) })
    }

    /// Whole-token match against the list.
    pub fn contains(&self, token: &str) -> bool {
        self.words.contains(token)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl Default for StopWords {
    fn default() -> Self {
        Self::english()
    }
}

fn parse_word_list(content: &str) -> HashSet<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_lowercase)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_english_list_size() {
        let stop_words = StopWords::english();
        assert_eq!(stop_words.len(), 179);
        assert!(stop_words.contains("the"));
        assert!(stop_words.contains("don't"));
    }

    #[test]
    fn test_whole_token_match_only() {
        let stop_words = StopWords::english();
        assert!(!stop_words.contains("theory"));
        assert!(!stop_words.contains("the."));
        assert!(!stop_words.contains("The"));
    }

    #[test]
    fn test_new_lowercases() {
        let stop_words = StopWords::new(["The", "CAT"]);
        assert!(stop_words.contains("the"));
        assert!(stop_words.contains("cat"));
        assert_eq!(stop_words.len(), 2);
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "# custom list").unwrap();
        writeln!(file, "alpha").unwrap();
        writeln!(file).unwrap();
        writeln!(file, "  Beta  ").unwrap();

        let stop_words = StopWords::from_file(file.path()).unwrap();
        assert_eq!(stop_words.len(), 2);
        assert!(stop_words.contains("alpha"));
        assert!(stop_words.contains("beta"));
    }

    #[test]
    fn test_from_missing_file() {
        let result = StopWords::from_file("/nonexistent/stopwords.txt");
        assert!(matches!(result, Err(WikistatError::StopWords { .. })));
    }
}
