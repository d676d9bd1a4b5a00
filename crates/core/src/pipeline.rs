//! Main page digestion API.
//!
//! This module provides the entry point for turning an article URL into
//! digested sections. The main type is [`Wikistat`], configured through
//! [`WikistatConfig`], along with the [`fetch_and_digest`] convenience
//! function.
//!
//! A run is strictly sequential: the section list is fetched first, then each
//! section's HTML in order, then every section is digested.
//!
//! # Example
//!
//! ```rust
//! use wikistat_core::{ParseFailurePolicy, StopWords, WikistatConfig};
//!
//! let config = WikistatConfig::builder()
//!     .timeout(10)
//!     .stop_words(StopWords::new(["the", "a"]))
//!     .parse_failure(ParseFailurePolicy::Skip)
//!     .build();
//! assert_eq!(config.fetch.timeout, 10);
//! ```

use std::fmt;
use std::str::FromStr;

use crate::fetch::{FetchConfig, SectionMeta};
use crate::section::{DEFAULT_LINK_PREFIX, Section, SectionParser};
use crate::{FrequencyDigester, Result, StopWords};

#[cfg(feature = "fetch")]
use crate::fetch::{PageFetcher, page_name_from_url};

/// What to do with a section whose HTML cannot be parsed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ParseFailurePolicy {
    /// Keep the section with empty text and no links.
    #[default]
    Degrade,
    /// Drop the section from the result.
    Skip,
    /// Fail the whole run.
    Abort,
}

impl FromStr for ParseFailurePolicy {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "degrade" => Ok(Self::Degrade),
            "skip" => Ok(Self::Skip),
            "abort" => Ok(Self::Abort),
            _ => Err(format!("Invalid parse failure policy: {}. Valid options: degrade, skip, abort", s)),
        }
    }
}

impl fmt::Display for ParseFailurePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Degrade => "degrade",
            Self::Skip => "skip",
            Self::Abort => "abort",
        };
        f.write_str(name)
    }
}

/// Configuration for a [`Wikistat`] pipeline.
#[derive(Debug, Clone)]
pub struct WikistatConfig {
    /// HTTP settings for the page-content API.
    pub fetch: FetchConfig,

    /// Prefix joined to every collected href (default: `https://en.wikipedia.org/`).
    pub link_prefix: String,

    /// Handling of sections whose HTML cannot be parsed (default: degrade).
    pub parse_failure: ParseFailurePolicy,

    /// Words excluded from frequency counts (default: English list).
    pub stop_words: StopWords,
}

impl Default for WikistatConfig {
    fn default() -> Self {
        Self {
            fetch: FetchConfig::default(),
            link_prefix: DEFAULT_LINK_PREFIX.to_string(),
            parse_failure: ParseFailurePolicy::default(),
            stop_words: StopWords::english(),
        }
    }
}

impl WikistatConfig {
    /// Creates a new builder for WikistatConfig.
    pub fn builder() -> WikistatConfigBuilder {
        WikistatConfigBuilder::new()
    }
}

/// Builder for WikistatConfig.
pub struct WikistatConfigBuilder {
    config: WikistatConfig,
}

impl WikistatConfigBuilder {
    /// Creates a new builder with default values.
    pub fn new() -> Self {
        Self { config: WikistatConfig::default() }
    }

    /// Sets the API endpoint.
    pub fn api_url(mut self, value: impl Into<String>) -> Self {
        self.config.fetch.api_url = value.into();
        self
    }

    /// Sets the request timeout in seconds.
    pub fn timeout(mut self, value: u64) -> Self {
        self.config.fetch.timeout = value;
        self
    }

    /// Sets the User-Agent header.
    pub fn user_agent(mut self, value: impl Into<String>) -> Self {
        self.config.fetch.user_agent = value.into();
        self
    }

    /// Sets the prefix joined to every collected href.
    pub fn link_prefix(mut self, value: impl Into<String>) -> Self {
        self.config.link_prefix = value.into();
        self
    }

    /// Sets the parse failure policy.
    pub fn parse_failure(mut self, value: ParseFailurePolicy) -> Self {
        self.config.parse_failure = value;
        self
    }

    /// Sets the stop-word list.
    pub fn stop_words(mut self, value: StopWords) -> Self {
        self.config.stop_words = value;
        self
    }

    /// Builds the config.
    pub fn build(self) -> WikistatConfig {
        self.config
    }
}

impl Default for WikistatConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Fetches, parses and digests article sections.
pub struct Wikistat {
    config: WikistatConfig,
    parser: SectionParser,
    digester: FrequencyDigester,
    #[cfg(feature = "fetch")]
    fetcher: PageFetcher,
}

impl Wikistat {
    /// Creates a pipeline with default settings.
    pub fn new() -> Result<Self> {
        Self::with_config(WikistatConfig::default())
    }

    /// Creates a pipeline with a custom configuration.
    ///
    /// # Errors
    ///
    /// Fails if the HTTP client cannot be built from `config.fetch`.
    pub fn with_config(config: WikistatConfig) -> Result<Self> {
        Ok(Self {
            parser: SectionParser::new(config.link_prefix.clone()),
            digester: FrequencyDigester::new(config.stop_words.clone()),
            #[cfg(feature = "fetch")]
            fetcher: PageFetcher::new(config.fetch.clone())?,
            config,
        })
    }

    pub fn config(&self) -> &WikistatConfig {
        &self.config
    }

    /// Builds a section from its metadata and raw HTML.
    ///
    /// Returns `Ok(None)` when the HTML cannot be parsed and the policy is
    /// [`ParseFailurePolicy::Skip`].
    pub fn build_section(&self, meta: SectionMeta, html: &str) -> Result<Option<Section>> {
        let mut section = Section::new(meta.title, meta.index);

        match self.parser.parse(&section.index, html) {
            Ok(parsed) => {
                section.text = parsed.text;
                section.hyperlinks = parsed.hyperlinks;
            }
            Err(e) => match self.config.parse_failure {
                ParseFailurePolicy::Degrade => {
                    tracing::warn!(title = %section.title, error = %e, "section left empty");
                }
                ParseFailurePolicy::Skip => {
                    tracing::warn!(title = %section.title, error = %e, "section skipped");
                    return Ok(None);
                }
                ParseFailurePolicy::Abort => return Err(e.into()),
            },
        }

        Ok(Some(section))
    }

    /// Fills in the frequency table of one section.
    pub fn digest_section(&self, section: &mut Section) {
        section.frequencies = self.digester.digest(&section.text);
    }

    /// Fills in the frequency table of every section.
    pub fn digest_page(&self, sections: &mut [Section]) {
        for section in sections.iter_mut() {
            self.digest_section(section);
        }
    }
}

#[cfg(feature = "fetch")]
impl Wikistat {
    /// Fetches the section list of the page at `url`.
    ///
    /// Returns the page name together with the section metadata.
    pub async fn list_sections(&self, url: &str) -> Result<(String, Vec<SectionMeta>)> {
        let page = page_name_from_url(url)?;
        let sections = self.fetcher.fetch_sections(&page).await?;
        Ok((page, sections))
    }

    /// Fetches and parses one section.
    pub async fn load_section(&self, page: &str, meta: SectionMeta) -> Result<Option<Section>> {
        let html = self.fetcher.fetch_section_html(page, &meta.index).await?;
        self.build_section(meta, &html)
    }

    /// Fetches and parses the listed sections of `page`, one request at a
    /// time, in list order. Sections dropped by the parse failure policy are
    /// left out. Frequencies are left empty.
    pub async fn load_sections(&self, page: &str, metas: Vec<SectionMeta>) -> Result<Vec<Section>> {
        let mut sections = Vec::with_capacity(metas.len());

        for meta in metas {
            if let Some(section) = self.load_section(page, meta).await? {
                sections.push(section);
            }
        }

        Ok(sections)
    }

    /// Fetches and parses every section of the page at `url`.
    pub async fn load_page(&self, url: &str) -> Result<Vec<Section>> {
        let (page, metas) = self.list_sections(url).await?;
        self.load_sections(&page, metas).await
    }

    /// Loads and digests every section of the page at `url`.
    pub async fn fetch_and_digest(&self, url: &str) -> Result<Vec<Section>> {
        let mut sections = self.load_page(url).await?;
        self.digest_page(&mut sections);
        Ok(sections)
    }
}

/// Loads and digests a page with default settings.
#[cfg(feature = "fetch")]
pub async fn fetch_and_digest(url: &str) -> Result<Vec<Section>> {
    Wikistat::new()?.fetch_and_digest(url).await
}
