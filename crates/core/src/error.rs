//! Error types for wikistat operations.
//!
//! Each pipeline boundary has its own error type so callers can decide
//! whether to abort or continue:
//!
//! - [`FetchError`] for API requests and payload decoding,
//! - [`ParseError`] for section HTML that cannot be digested,
//! - [`PresentError`] for rendering and writing output.
//!
//! [`WikistatError`] wraps all of them and is the error of the crate-level
//! [`Result`] alias.
//!
//! # Example
//!
//! ```rust
//! use wikistat_core::{FetchError, WikistatError, page_name_from_url};
//!
//! match page_name_from_url("not a url") {
//!     Err(WikistatError::Fetch(FetchError::InvalidUrl(reason))) => println!("bad input: {}", reason),
//!     Err(e) => println!("Error: {}", e),
//!     Ok(name) => println!("page: {}", name),
//! }
//! ```

use std::path::PathBuf;
use thiserror::Error;

/// Failures while talking to the page-content API.
///
/// A fetch failure aborts the whole run; nothing is retried.
#[derive(Error, Debug)]
pub enum FetchError {
    /// HTTP request errors from reqwest.
    ///
    /// Wraps network errors, DNS failures, connection issues,
    /// and other transport problems.
    #[cfg(feature = "fetch")]
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Request timeout.
    #[error("Request timed out after {timeout} seconds")]
    Timeout { timeout: u64 },

    /// The page URL or API URL could not be used.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// The API answered with a non-success status code.
    #[error("API returned status {status} for {url}")]
    Status { status: u16, url: String },

    /// The API answered with an error object instead of a parse result.
    #[error("API error {code}: {info}")]
    Api { code: String, info: String },

    /// The response body was not the JSON shape we expect.
    #[error("Malformed API payload: {0}")]
    MalformedPayload(String),
}

/// Failures while turning a section's HTML into text and links.
#[derive(Error, Debug)]
pub enum ParseError {
    /// The API returned no markup at all for the section.
    #[error("Section {index} has an empty HTML fragment")]
    EmptyFragment { index: String },

    /// A CSS selector could not be compiled.
    #[error("Invalid selector: {0}")]
    InvalidSelector(String),
}

/// Failures while rendering or writing presentation output.
#[derive(Error, Debug)]
pub enum PresentError {
    /// Writing to the output stream failed.
    #[error("Failed to write output: {0}")]
    Io(#[from] std::io::Error),

    /// Structured output could not be serialized.
    #[error("Failed to serialize output: {0}")]
    Serialize(String),
}

/// Main error type for wikistat operations.
#[derive(Error, Debug)]
pub enum WikistatError {
    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Present(#[from] PresentError),

    /// A custom stop-word list could not be read.
    #[error("Failed to read stop words from {path}: {source}")]
    StopWords {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Result type alias for WikistatError.
///
/// This is a convenience alias for `std::result::Result<T, WikistatError>`.
pub type Result<T> = std::result::Result<T, WikistatError>;
