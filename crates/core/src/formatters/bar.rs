use owo_colors::OwoColorize;

use super::{ChartConfig, fit_label, section_heading};
use crate::{CutoffPolicy, Section};

const BAR_CHAR: char = '█';
const MAX_LABEL_WIDTH: usize = 20;
const MIN_BAR_WIDTH: usize = 10;

/// Renders one horizontal bar per surviving word, scaled to the largest count.
pub fn render_bar_chart(sections: &[Section], policy: &CutoffPolicy, limit: usize, config: &ChartConfig) -> String {
    let mut output = String::new();

    for section in sections.iter().take(limit) {
        let table = policy.apply(&section.frequencies);

        output.push_str(&section_heading(&section.title, config.color));
        output.push('\n');

        if table.is_empty() {
            output.push_str("  (no words)\n\n");
            continue;
        }

        let label_width = table.words().map(|w| w.chars().count()).max().unwrap_or(0).clamp(1, MAX_LABEL_WIDTH);
        let max_count = table.max_count();
        let count_width = max_count.to_string().len();
        let bar_width = config
            .width
            .saturating_sub(label_width + count_width + 4)
            .max(MIN_BAR_WIDTH);

        for (word, count) in table.iter() {
            let bar = BAR_CHAR.to_string().repeat(bar_length(count, max_count, bar_width));
            let bar = if config.color { bar.bright_blue().to_string() } else { bar };

            let line = format!("  {} {} {}", fit_label(word, label_width), bar, count);
            output.push_str(line.trim_end());
            output.push('\n');
        }

        output.push('\n');
    }

    output
}

/// Bar length for `count`, at least one cell for any non-zero count.
fn bar_length(count: usize, max_count: usize, width: usize) -> usize {
    if count == 0 || max_count == 0 {
        return 0;
    }
    let scaled = (count as f64 / max_count as f64 * width as f64).round() as usize;
    scaled.max(1)
}
