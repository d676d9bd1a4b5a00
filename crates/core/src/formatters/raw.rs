use crate::{CutoffPolicy, Section};

/// Renders titles, word counts and hyperlinks as plain text.
///
/// Each section produces:
///
/// ```text
/// Section: <title>
/// Word frequencies for section: <title>
///     <word> - <count>
/// Hyperlinks for section: <title>
///     <link>
///
/// ```
///
/// with a tab before each word and link.
pub fn render_raw(sections: &[Section], policy: &CutoffPolicy, limit: usize) -> String {
    let mut output = String::new();

    for section in sections.iter().take(limit) {
        let title = &section.title;

        output.push_str(&format!("Section: {}\n", title));
        output.push_str(&format!("Word frequencies for section: {}\n", title));
        for (word, count) in policy.apply(&section.frequencies).iter() {
            output.push_str(&format!("\t{} - {}\n", word, count));
        }

        output.push_str(&format!("Hyperlinks for section: {}\n", title));
        for link in &section.hyperlinks {
            output.push_str(&format!("\t{}\n", link));
        }

        output.push('\n');
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::formatters::tests::sample_sections;

    #[test]
    fn test_render_raw_layout() {
        let output = render_raw(&sample_sections(), &CutoffPolicy::default(), 1);
        let expected = "Section: History\n\
                        Word frequencies for section: History\n\
                        \tcat - 4\n\
                        \tdog - 2\n\
                        \tfish - 1\n\
                        \tbird - 1\n\
                        Hyperlinks for section: History\n\
                        \thttps://en.wikipedia.org//wiki/Cat\n\
                        \n";
        assert_eq!(output, expected);
    }

    #[test]
    fn test_render_raw_respects_limit() {
        let sections = sample_sections();
        assert!(render_raw(&sections, &CutoffPolicy::default(), 5).contains("Section: Diet"));
        assert!(!render_raw(&sections, &CutoffPolicy::default(), 1).contains("Section: Diet"));
        assert!(render_raw(&sections, &CutoffPolicy::default(), 0).is_empty());
    }

    #[test]
    fn test_render_raw_applies_cutoff() {
        let policy = CutoffPolicy::new(1).remove_below_cutoff(true);
        let output = render_raw(&sample_sections(), &policy, 1);
        assert!(output.contains("\tdog - 2\n"));
        assert!(!output.contains("fish"));
    }
}
