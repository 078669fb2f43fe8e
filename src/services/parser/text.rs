//! Title and student-name extraction rules.

use super::patterns::{
    INLINE_LABEL_REGEX, LABEL_LINE_REGEX, NAME_LABEL_REGEX, NON_CONTENT_LINE_REGEX,
};
use crate::models::{Detected, ExtractionRule};

/// Extracts a title: the first line-like segment that is not a form
/// label and not purely numeric, capped at `max_length` and trimmed.
///
/// OCR output from a worksheet header is noisy; this is deliberately a
/// heuristic, not a grammar. The match rule is recorded so review UIs
/// can display how the title was chosen.
pub fn extract_title(text: &str, max_length: usize) -> Option<Detected<String>> {
    for line in text.lines() {
        let line = line.trim();
        if line.is_empty()
            || LABEL_LINE_REGEX.is_match(line)
            || NON_CONTENT_LINE_REGEX.is_match(line)
        {
            continue;
        }
        let title: String = line.chars().take(max_length).collect();
        return Some(Detected::new(
            title.trim().to_string(),
            ExtractionRule::HeadingTitle,
        ));
    }
    None
}

/// Extracts the student-name hint following a `Name:` or `Student:`
/// label, cut short at the next inline label keyword.
pub fn extract_student_name(text: &str) -> Option<Detected<String>> {
    let caps = NAME_LABEL_REGEX.captures(text)?;
    let raw = caps.get(1)?.as_str();

    // "Name: JJ  Date: 01/15" keeps only "JJ".
    let cut = INLINE_LABEL_REGEX
        .find(raw)
        .map_or(raw, |m| &raw[..m.start()]);
    let name = cut.trim();
    if name.is_empty() {
        return None;
    }
    Some(Detected::new(name.to_string(), ExtractionRule::NameLabel))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_skips_labels_and_numbers() {
        let text = "Name: JJ\n42/50\nScience Test\nDate: 01/15/2024";
        let title = extract_title(text, 120).unwrap();
        assert_eq!(title.value, "Science Test");
        assert_eq!(title.rule, ExtractionRule::HeadingTitle);
    }

    #[test]
    fn test_title_cap() {
        let long = "x".repeat(300);
        let title = extract_title(&long, 120).unwrap();
        assert_eq!(title.value.len(), 120);
    }

    #[test]
    fn test_title_absent_when_only_labels() {
        assert!(extract_title("Name: JJ\nScore: 42/50", 120).is_none());
    }

    #[test]
    fn test_name_simple() {
        let name = extract_student_name("Name: JJ\nScience Test").unwrap();
        assert_eq!(name.value, "JJ");
    }

    #[test]
    fn test_name_stops_at_next_label() {
        let name = extract_student_name("Name: JJ Smith   Date: 01/15/2024").unwrap();
        assert_eq!(name.value, "JJ Smith");
    }

    #[test]
    fn test_student_label_variant() {
        let name = extract_student_name("Student: Maya R.").unwrap();
        assert_eq!(name.value, "Maya R.");
    }

    #[test]
    fn test_empty_name_is_absent() {
        assert!(extract_student_name("Name:   \nScience").is_none());
    }
}
