//! Article sections and the section HTML parser.
//!
//! A [`Section`] starts out with only a title and index taken from the
//! section list. [`SectionParser`] fills in its text and hyperlinks from
//! the section's rendered HTML, and the digester fills in its frequencies.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize};

use crate::parse::Fragment;
use crate::{FrequencyTable, ParseError};

/// Default prefix turning a site-relative href into an absolute link.
pub const DEFAULT_LINK_PREFIX: &str = "https://en.wikipedia.org/";

/// Marker identifying citation self-links, which are never collected.
const CITE_NOTE_MARKER: &str = "#cite_note";

/// One or more consecutive bracketed groups, e.g. `[12]`, `[12][13]`.
static CITATION_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(\[.*?\])+").unwrap());

/// Opaque section identifier assigned by the API.
///
/// The API usually sends it as a string (`"1"`, `"T-1"`), but numbers are
/// accepted too.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct SectionIndex(String);

impl SectionIndex {
    pub fn new(index: impl Into<String>) -> Self {
        Self(index.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SectionIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for SectionIndex {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Text(String),
            Number(i64),
        }

        Ok(match Raw::deserialize(deserializer)? {
            Raw::Text(s) => Self(s),
            Raw::Number(n) => Self(n.to_string()),
        })
    }
}

/// A titled subdivision of an article.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Section {
    pub title: String,
    pub index: SectionIndex,
    /// Paragraph text with citation markers removed.
    pub text: String,
    /// Absolute outbound links in document order.
    pub hyperlinks: Vec<String>,
    /// Word counts in descending order.
    pub frequencies: FrequencyTable,
}

impl Section {
    /// Creates a section with no text, links or frequencies yet.
    pub fn new(title: impl Into<String>, index: SectionIndex) -> Self {
        Self {
            title: title.into(),
            index,
            text: String::new(),
            hyperlinks: Vec::new(),
            frequencies: FrequencyTable::new(),
        }
    }
}

/// Text and links extracted from one section's HTML.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedSection {
    pub text: String,
    pub hyperlinks: Vec<String>,
}

/// Extracts paragraph text and outbound links from section HTML.
#[derive(Debug, Clone)]
pub struct SectionParser {
    link_prefix: String,
}

impl SectionParser {
    pub fn new(link_prefix: impl Into<String>) -> Self {
        Self { link_prefix: link_prefix.into() }
    }

    pub fn link_prefix(&self) -> &str {
        &self.link_prefix
    }

    /// Parses the HTML of the section identified by `index`.
    ///
    /// A fragment without paragraphs is not an error; it yields empty text
    /// and no links.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::EmptyFragment`] when `html` is blank.
    pub fn parse(&self, index: &SectionIndex, html: &str) -> Result<ParsedSection, ParseError> {
        if html.trim().is_empty() {
            return Err(ParseError::EmptyFragment { index: index.to_string() });
        }

        let fragment = Fragment::parse(html);
        let mut parsed = ParsedSection::default();

        for paragraph in fragment.select("p")? {
            parsed.text.push_str(&clean_paragraph(&paragraph.text()));

            for anchor in paragraph.select("a[href]")? {
                if let Some(href) = anchor.attr("href")
                    && !href.contains(CITE_NOTE_MARKER)
                {
                    parsed.hyperlinks.push(format!("{}{}", self.link_prefix, href));
                }
            }
        }

        Ok(parsed)
    }
}

impl Default for SectionParser {
    fn default() -> Self {
        Self::new(DEFAULT_LINK_PREFIX)
    }
}

/// Removes citation markers and turns newlines into spaces.
pub fn clean_paragraph(text: &str) -> String {
    CITATION_RE.replace_all(text, "").replace('\n', " ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn index(i: &str) -> SectionIndex {
        SectionIndex::new(i)
    }

    #[rstest]
    #[case("Cats purr.[1]", "Cats purr.")]
    #[case("Cats purr.[12][13] Dogs bark.", "Cats purr. Dogs bark.")]
    #[case("Disputed[citation needed] claim", "Disputed claim")]
    #[case("Line one\nline two\n", "Line one line two ")]
    #[case("No markers here", "No markers here")]
    fn test_clean_paragraph(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(clean_paragraph(input), expected);
    }

    #[test]
    fn test_paragraphs_joined_without_separator() {
        let html = r#"<div class="mw-parser-output"><h2>History</h2><p>First.</p><p>Second.</p></div>"#;
        let parsed = SectionParser::default().parse(&index("1"), html).unwrap();
        assert_eq!(parsed.text, "First.Second.");
    }

    #[test]
    fn test_non_paragraph_text_is_ignored() {
        let html = r#"<h2>Title</h2><ul><li>Item</li></ul><p>Body</p><table><tr><td>Cell</td></tr></table>"#;
        let parsed = SectionParser::default().parse(&index("1"), html).unwrap();
        assert_eq!(parsed.text, "Body");
    }

    #[test]
    fn test_links_prefixed_and_cite_notes_dropped() {
        let html = r##"
            <p>The <a href="/wiki/Cat">cat</a> sat.<sup><a href="/wiki/Cat#cite_note-1">[1]</a></sup>
            See <a href="/wiki/Cat">cats</a> and <a>no href</a>.</p>
        "##;
        let parsed = SectionParser::default().parse(&index("2"), html).unwrap();

        assert_eq!(
            parsed.hyperlinks,
            vec![
                "https://en.wikipedia.org//wiki/Cat".to_string(),
                "https://en.wikipedia.org//wiki/Cat".to_string(),
            ]
        );
        assert!(!parsed.text.contains("[1]"));
    }

    #[test]
    fn test_links_outside_paragraphs_are_ignored() {
        let html = r#"<ul><li><a href="/wiki/Elsewhere">x</a></li></ul><p><a href="/wiki/Here">y</a></p>"#;
        let parsed = SectionParser::new("https://example.org").parse(&index("1"), html).unwrap();
        assert_eq!(parsed.hyperlinks, vec!["https://example.org/wiki/Here".to_string()]);
    }

    #[test]
    fn test_no_paragraphs_yields_empty() {
        let parsed = SectionParser::default().parse(&index("4"), "<h2>References</h2><ol></ol>").unwrap();
        assert_eq!(parsed, ParsedSection::default());
    }

    #[test]
    fn test_blank_fragment_is_error() {
        let result = SectionParser::default().parse(&index("5"), "  \n ");
        assert!(matches!(result, Err(ParseError::EmptyFragment { index }) if index == "5"));
    }

    #[test]
    fn test_section_index_accepts_strings_and_numbers() {
        let from_str: SectionIndex = serde_json::from_str(r#""T-1""#).unwrap();
        let from_num: SectionIndex = serde_json::from_str("3").unwrap();
        assert_eq!(from_str.as_str(), "T-1");
        assert_eq!(from_num.as_str(), "3");
    }

    #[test]
    fn test_new_section_is_empty() {
        let section = Section::new("History", index("1"));
        assert!(section.text.is_empty());
        assert!(section.hyperlinks.is_empty());
        assert!(section.frequencies.is_empty());
    }
}
