pub mod cutoff;
pub mod digest;
pub mod error;
pub mod fetch;
pub mod formatters;
pub mod frequency;
pub mod parse;
pub mod pipeline;
pub mod section;
pub mod stopwords;

pub use cutoff::{CutoffPolicy, GROUPED_WORDS, PercentageTable};
pub use digest::{FrequencyDigester, STRIPPED_PUNCTUATION, strip_punctuation};
pub use error::{FetchError, ParseError, PresentError, Result, WikistatError};
#[cfg(feature = "fetch")]
pub use fetch::PageFetcher;
pub use fetch::{DEFAULT_API_URL, FetchConfig, SectionMeta, decode_section_html, decode_sections, page_name_from_url};
pub use formatters::{ChartConfig, CloudConfig, JsonConfig, OutputFormat, PresentConfig, Presenter, WordCloud};
pub use formatters::{render_bar_chart, render_json, render_pie_chart, render_raw, render_word_clouds};
pub use frequency::FrequencyTable;
#[doc(hidden)]
pub use parse::Fragment;
#[cfg(feature = "fetch")]
pub use pipeline::fetch_and_digest;
pub use pipeline::{ParseFailurePolicy, Wikistat, WikistatConfig, WikistatConfigBuilder};
pub use section::{DEFAULT_LINK_PREFIX, ParsedSection, Section, SectionIndex, SectionParser, clean_paragraph};
pub use stopwords::StopWords;
