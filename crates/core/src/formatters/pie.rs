use owo_colors::OwoColorize;

use super::{ChartConfig, fit_label, section_heading};
use crate::{CutoffPolicy, PercentageTable, Section};

const FILLED: char = '█';
const EMPTY: char = '░';
const MAX_LABEL_WIDTH: usize = 20;
const MIN_SHARE_WIDTH: usize = 10;

/// Renders each surviving word's share of its section with a two-decimal
/// percentage label.
///
/// Percentages are computed after the cutoff, against the total of the
/// resulting table.
pub fn render_pie_chart(sections: &[Section], policy: &CutoffPolicy, limit: usize, config: &ChartConfig) -> String {
    let mut output = String::new();

    for section in sections.iter().take(limit) {
        let table = policy.apply(&section.frequencies);
        let percentages = PercentageTable::from_table(&table);

        output.push_str(&section_heading(&section.title, config.color));
        output.push('\n');

        if percentages.is_empty() {
            output.push_str("  (no words)\n\n");
            continue;
        }

        let label_width = table.words().map(|w| w.chars().count()).max().unwrap_or(0).clamp(1, MAX_LABEL_WIDTH);
        let share_width = config.width.saturating_sub(label_width + 12).max(MIN_SHARE_WIDTH);

        for (word, share) in percentages.iter() {
            let filled = ((share / 100.0) * share_width as f64).round() as usize;
            let filled = filled.min(share_width);
            let bar = format!(
                "{}{}",
                FILLED.to_string().repeat(filled),
                EMPTY.to_string().repeat(share_width - filled)
            );
            let bar = if config.color { bar.bright_green().to_string() } else { bar };

            output.push_str(&format!("  {} {} {:>6.2}%\n", fit_label(word, label_width), bar, share));
        }

        output.push('\n');
    }

    output
}
