//! Presentation of digested sections.
//!
//! Every formatter takes the sections, a [`CutoffPolicy`] and a limit on how
//! many leading sections to render, and returns the rendered text. Sections
//! are never modified; the cutoff is applied to a copy of each table.
//!
//! [`Presenter`] bundles the settings of all formats and writes the result
//! of one of them to a writer.

pub mod bar;
pub mod cloud;
pub mod json;
pub mod pie;
pub mod raw;

use std::fmt;
use std::io::Write;
use std::str::FromStr;

use owo_colors::OwoColorize;

use crate::{CutoffPolicy, PresentError, Section};

pub use bar::render_bar_chart;
pub use cloud::{CloudConfig, CloudWord, WordCloud, render_word_clouds};
pub use json::{JsonConfig, render_json};
pub use pie::render_pie_chart;
pub use raw::render_raw;

/// Output format for digested sections.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Titles, word counts and hyperlinks as plain text.
    #[default]
    Raw,
    /// Percentage share of each word.
    Pie,
    /// Count of each word as a horizontal bar.
    Bar,
    /// Words sized by frequency.
    Cloud,
    /// Structured JSON.
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "raw" | "text" | "txt" => Ok(Self::Raw),
            "pie" => Ok(Self::Pie),
            "bar" => Ok(Self::Bar),
            "cloud" | "wordcloud" => Ok(Self::Cloud),
            "json" => Ok(Self::Json),
            _ => Err(format!("Invalid format: {}. Valid options: raw, pie, bar, cloud, json", s)),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Raw => "raw",
            Self::Pie => "pie",
            Self::Bar => "bar",
            Self::Cloud => "cloud",
            Self::Json => "json",
        };
        f.write_str(name)
    }
}

/// Layout settings shared by the chart formats.
#[derive(Debug, Clone)]
pub struct ChartConfig {
    /// Total line width in terminal columns.
    pub width: usize,
    /// Style output with ANSI colors.
    pub color: bool,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self { width: 80, color: false }
    }
}

/// Settings for every output format.
#[derive(Debug, Clone)]
pub struct PresentConfig {
    pub policy: CutoffPolicy,
    /// Number of leading sections to render.
    pub limit: usize,
    pub chart: ChartConfig,
    pub cloud: CloudConfig,
    pub json: JsonConfig,
}

impl Default for PresentConfig {
    fn default() -> Self {
        Self {
            policy: CutoffPolicy::default(),
            limit: 5,
            chart: ChartConfig::default(),
            cloud: CloudConfig::default(),
            json: JsonConfig::default(),
        }
    }
}

/// Renders sections in a chosen format.
pub struct Presenter {
    config: PresentConfig,
}

impl Presenter {
    pub fn new(config: PresentConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &PresentConfig {
        &self.config
    }

    /// Renders `sections` as `format`.
    pub fn render(&self, format: OutputFormat, sections: &[Section]) -> Result<String, PresentError> {
        let config = &self.config;
        match format {
            OutputFormat::Raw => Ok(render_raw(sections, &config.policy, config.limit)),
            OutputFormat::Pie => Ok(render_pie_chart(sections, &config.policy, config.limit, &config.chart)),
            OutputFormat::Bar => Ok(render_bar_chart(sections, &config.policy, config.limit, &config.chart)),
            OutputFormat::Cloud => Ok(render_word_clouds(
                sections,
                &config.policy,
                config.limit,
                &config.cloud,
                config.chart.color,
            )),
            OutputFormat::Json => render_json(sections, &config.policy, config.limit, &config.json),
        }
    }

    /// Renders `sections` as `format` and writes the result to `out`.
    pub fn present<W: Write>(&self, out: &mut W, format: OutputFormat, sections: &[Section]) -> Result<(), PresentError> {
        let rendered = self.render(format, sections)?;
        out.write_all(rendered.as_bytes())?;
        out.flush()?;
        Ok(())
    }
}

/// `Section: <title>` heading used by the chart formats.
pub(crate) fn section_heading(title: &str, color: bool) -> String {
    let heading = format!("Section: {}", title);
    if color { heading.bold().bright_cyan().to_string() } else { heading }
}

/// Truncates or pads `word` to exactly `width` characters.
pub(crate) fn fit_label(word: &str, width: usize) -> String {
    let len = word.chars().count();
    if len > width && width > 1 {
        let truncated: String = word.chars().take(width - 1).collect();
        format!("{}…", truncated)
    } else {
        format!("{:<width$}", word, width = width)
    }
}
