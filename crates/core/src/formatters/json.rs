use serde::Serialize;

use crate::{CutoffPolicy, FrequencyTable, PresentError, Section, SectionIndex};

/// One section in JSON output.
#[derive(Debug, Clone, Serialize)]
pub struct JsonSection<'a> {
    pub title: &'a str,
    pub index: &'a SectionIndex,
    /// Cleaned section text, only when requested
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<&'a str>,
    pub hyperlinks: &'a [String],
    /// Frequencies after the cutoff, in descending order
    pub frequencies: FrequencyTable,
}

/// Configuration for JSON output
#[derive(Debug, Clone, Default)]
pub struct JsonConfig {
    /// Pretty print JSON output
    pub pretty: bool,
    /// Include each section's cleaned text
    pub include_text: bool,
}

/// Serializes the leading `limit` sections as a JSON array.
pub fn render_json(
    sections: &[Section], policy: &CutoffPolicy, limit: usize, config: &JsonConfig,
) -> Result<String, PresentError> {
    let output: Vec<JsonSection<'_>> = sections
        .iter()
        .take(limit)
        .map(|section| JsonSection {
            title: &section.title,
            index: &section.index,
            text: if config.include_text { Some(section.text.as_str()) } else { None },
            hyperlinks: &section.hyperlinks,
            frequencies: policy.apply(&section.frequencies),
        })
        .collect();

    let mut rendered = if config.pretty {
        serde_json::to_string_pretty(&output).map_err(|e| PresentError::Serialize(e.to_string()))?
    } else {
        serde_json::to_string(&output).map_err(|e| PresentError::Serialize(e.to_string()))?
    };
    rendered.push('\n');

    Ok(rendered)
}
