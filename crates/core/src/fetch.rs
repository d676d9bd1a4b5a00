//! Page fetching from the page-content API.
//!
//! [`PageFetcher`] issues the two kinds of `action=parse` queries the
//! pipeline needs: the section list of a page, and the rendered HTML of one
//! section. Requests are made one at a time and never retried.

use percent_encoding::percent_decode_str;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use url::Url;

#[cfg(feature = "fetch")]
use std::time::Duration;

#[cfg(feature = "fetch")]
use reqwest::Client;

#[cfg(feature = "fetch")]
use crate::Result;
use crate::{FetchError, SectionIndex};

/// Default API endpoint.
pub const DEFAULT_API_URL: &str = "https://en.wikipedia.org/w/api.php";

/// HTTP client configuration for API requests.
#[derive(Debug, Clone)]
pub struct FetchConfig {
    /// API endpoint queried for sections and section HTML.
    pub api_url: String,
    /// Request timeout in seconds.
    pub timeout: u64,
    /// Custom User-Agent string.
    pub user_agent: String,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            timeout: 30,
            user_agent: format!("wikistat/{} (section word statistics)", env!("CARGO_PKG_VERSION")),
        }
    }
}

/// One entry of a page's section list.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SectionMeta {
    /// Section heading as rendered by the API.
    #[serde(rename = "line")]
    pub title: String,
    pub index: SectionIndex,
}

#[derive(Debug, Deserialize)]
struct ApiResponse<T> {
    parse: Option<T>,
    error: Option<ApiErrorBody>,
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    #[serde(default)]
    code: String,
    #[serde(default)]
    info: String,
}

#[derive(Debug, Deserialize)]
struct SectionsPayload {
    sections: Vec<SectionMeta>,
}

#[derive(Debug, Deserialize)]
struct TextPayload {
    text: TextBody,
}

#[derive(Debug, Deserialize)]
struct TextBody {
    #[serde(rename = "*")]
    html: String,
}

/// Extracts the page name from a page URL: the last path segment,
/// percent-decoded.
///
/// `https://en.wikipedia.org/wiki/Pok%C3%A9mon` and
/// `https://en.wikipedia.org/wiki/Pokémon` both name `Pokémon`. The name is
/// sent to the API as a query value, which is encoded again on the way out.
///
/// # Errors
///
/// Returns [`FetchError::InvalidUrl`] when `url` is not an absolute URL,
/// ends in `/`, or its last segment does not decode to UTF-8.
pub fn page_name_from_url(url: &str) -> crate::Result<String> {
    let parsed = Url::parse(url).map_err(|e| FetchError::InvalidUrl(format!("{}: {}", url, e)))?;

    let segment = parsed
        .path_segments()
        .and_then(|mut segments| segments.next_back())
        .filter(|segment| !segment.is_empty())
        .ok_or_else(|| FetchError::InvalidUrl(format!("{}: no page name after the final '/'", url)))?;

    let name = percent_decode_str(segment)
        .decode_utf8()
        .map_err(|e| FetchError::InvalidUrl(format!("{}: {}", url, e)))?;

    Ok(name.into_owned())
}

/// Decodes a section-list payload.
pub fn decode_sections(body: &str) -> std::result::Result<Vec<SectionMeta>, FetchError> {
    decode::<SectionsPayload>(body).map(|payload| payload.sections)
}

/// Decodes a section-HTML payload.
pub fn decode_section_html(body: &str) -> std::result::Result<String, FetchError> {
    decode::<TextPayload>(body).map(|payload| payload.text.html)
}

fn decode<T: DeserializeOwned>(body: &str) -> std::result::Result<T, FetchError> {
    let response: ApiResponse<T> =
        serde_json::from_str(body).map_err(|e| FetchError::MalformedPayload(e.to_string()))?;

    if let Some(error) = response.error {
        return Err(FetchError::Api { code: error.code, info: error.info });
    }

    response
        .parse
        .ok_or_else(|| FetchError::MalformedPayload("missing \"parse\" object".to_string()))
}

/// Client for the page-content API.
#[cfg(feature = "fetch")]
#[derive(Debug, Clone)]
pub struct PageFetcher {
    client: Client,
    api_url: Url,
    config: FetchConfig,
}

#[cfg(feature = "fetch")]
impl PageFetcher {
    /// Builds a fetcher with its own HTTP client.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::InvalidUrl`] if the configured API URL cannot be
    /// parsed, or [`FetchError::Http`] if the client cannot be built.
    pub fn new(config: FetchConfig) -> Result<Self> {
        let api_url = Url::parse(&config.api_url)
            .map_err(|e| FetchError::InvalidUrl(format!("{}: {}", config.api_url, e)))?;

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout))
            .user_agent(config.user_agent.clone())
            .build()
            .map_err(FetchError::Http)?;

        Ok(Self { client, api_url, config })
    }

    pub fn config(&self) -> &FetchConfig {
        &self.config
    }

    /// Fetches the title and index of every section of `page`.
    pub async fn fetch_sections(&self, page: &str) -> Result<Vec<SectionMeta>> {
        tracing::debug!(page, "fetching section list");
        let body = self.get(&[("action", "parse"), ("prop", "sections"), ("format", "json"), ("page", page)]).await?;
        let sections = decode_sections(&body)?;
        tracing::debug!(page, count = sections.len(), "section list received");
        Ok(sections)
    }

    /// Fetches the rendered HTML of one section of `page`.
    pub async fn fetch_section_html(&self, page: &str, index: &SectionIndex) -> Result<String> {
        tracing::debug!(page, index = %index, "fetching section html");
        let body = self
            .get(&[
                ("action", "parse"),
                ("section", index.as_str()),
                ("prop", "text"),
                ("format", "json"),
                ("page", page),
            ])
            .await?;
        Ok(decode_section_html(&body)?)
    }

    async fn get(&self, query: &[(&str, &str)]) -> std::result::Result<String, FetchError> {
        let response = self
            .client
            .get(self.api_url.clone())
            .query(query)
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|e| self.map_transport_error(e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status { status: status.as_u16(), url: response.url().to_string() });
        }

        response.text().await.map_err(|e| self.map_transport_error(e))
    }

    fn map_transport_error(&self, e: reqwest::Error) -> FetchError {
        if e.is_timeout() { FetchError::Timeout { timeout: self.config.timeout } } else { FetchError::Http(e) }
    }
}
