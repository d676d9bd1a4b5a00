//! HTML fragment parsing and DOM navigation.
//!
//! This module provides the [`Fragment`] and [`Element`] types for parsing
//! the rendered HTML of a single article section and navigating it with
//! CSS selectors.
//!
//! # Example
//!
//! ```rust
//! use wikistat_core::parse::Fragment;
//!
//! let html = r#"<div class="mw-parser-output"><p>First</p><p>Second</p></div>"#;
//!
//! let fragment = Fragment::parse(html);
//! let paragraphs = fragment.select("p").unwrap();
//! assert_eq!(paragraphs.len(), 2);
//! ```

use scraper::{Html, Selector};

use crate::ParseError;

/// A parsed HTML fragment, as returned by the API for one section.
pub struct Fragment {
    html: Html,
}

impl Fragment {
    /// Parses an HTML fragment.
    ///
    /// Parsing is lenient: malformed markup is repaired the way a browser
    /// would, so this never fails.
    pub fn parse(html: &str) -> Self {
        Self { html: Html::parse_fragment(html) }
    }

    /// Selects elements using a CSS selector.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::InvalidSelector`] if the selector is invalid.
    pub fn select(&'_ self, selector: &str) -> Result<Vec<Element<'_>>, ParseError> {
        let sel = compile(selector)?;

        Ok(self.html.select(&sel).map(|el| Element { element: el }).collect())
    }
}

/// A wrapper around scraper's ElementRef.
///
/// # Example
///
/// ```rust
/// use wikistat_core::parse::Fragment;
///
/// let fragment = Fragment::parse(r#"<p>See <a href="/wiki/Cat">cats</a></p>"#);
/// let link = &fragment.select("a").unwrap()[0];
///
/// assert_eq!(link.text(), "cats");
/// assert_eq!(link.attr("href"), Some("/wiki/Cat"));
/// ```
#[derive(Clone, Debug)]
pub struct Element<'a> {
    element: scraper::ElementRef<'a>,
}

impl<'a> Element<'a> {
    /// Gets the text content of this element, concatenating all text nodes
    /// beneath it.
    pub fn text(&self) -> String {
        self.element.text().collect()
    }

    /// Gets the value of an attribute, or `None` if it is not present.
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.element.value().attr(name)
    }

    /// Selects descendant elements using a CSS selector.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::InvalidSelector`] if the selector is invalid.
    pub fn select(&'_ self, selector: &str) -> Result<Vec<Element<'_>>, ParseError> {
        let sel = compile(selector)?;

        Ok(self.element.select(&sel).map(|el| Element { element: el }).collect())
    }
}

fn compile(selector: &str) -> Result<Selector, ParseError> {
    Selector::parse(selector).map_err(|e| ParseError::InvalidSelector(format!("{}: {}", selector, e)))
}
