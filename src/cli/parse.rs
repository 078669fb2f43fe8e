//! Parse command: show what the field parser extracts from a text file.

use crate::config::HomeroomConfig;
use crate::models::ParsedFields;
use crate::services::FieldParser;
use crate::{Error, Result};
use std::fmt::Write as _;
use std::path::Path;

/// Parses a text file and renders the extracted fields.
///
/// # Errors
///
/// Fails when the file cannot be read or (in JSON mode) serialization
/// fails; the parse itself is total.
pub fn run_parse(path: &Path, config: &HomeroomConfig, json: bool) -> Result<String> {
    let text = std::fs::read_to_string(path).map_err(|e| Error::OperationFailed {
        operation: "parse_read".to_string(),
        cause: format!("{}: {e}", path.display()),
    })?;

    let parser = FieldParser::new(config.parser.clone());
    let fields = parser.parse(&text);

    if json {
        return serde_json::to_string_pretty(&fields)
            .map_err(|e| Error::OperationFailed {
                operation: "parse_render".to_string(),
                cause: e.to_string(),
            });
    }
    Ok(render(&fields))
}

fn render(fields: &ParsedFields) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Extracted fields:");

    if let Some(score) = &fields.score {
        match score.value.max {
            Some(max) => {
                let _ = writeln!(
                    out,
                    "  score:   {}/{max}  ({})",
                    score.value.points, score.rule
                );
            },
            None => {
                let _ = writeln!(out, "  score:   {}  ({})", score.value.points, score.rule);
            },
        }
    }
    if let Some(letter) = &fields.letter_grade {
        let _ = writeln!(out, "  letter:  {}  ({})", letter.value, letter.rule);
    }
    if let Some(date) = &fields.date {
        let _ = writeln!(out, "  date:    {}  ({})", date.value, date.rule);
    }
    if let Some(title) = &fields.title {
        let _ = writeln!(out, "  title:   {}  ({})", title.value, title.rule);
    }
    if let Some(name) = &fields.student_name {
        let _ = writeln!(out, "  student: {}  ({})", name.value, name.rule);
    }
    if let Some(course) = &fields.course_name {
        let _ = writeln!(out, "  course:  {}  ({})", course.value, course.rule);
    }
    if fields.is_empty() {
        let _ = writeln!(out, "  (nothing recognized)");
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_command_renders_fields() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("paper.txt");
        std::fs::write(&path, "Name: JJ\nScience Test\nScore: 42/50").unwrap();

        let out = run_parse(&path, &HomeroomConfig::default(), false).unwrap();
        assert!(out.contains("42/50"));
        assert!(out.contains("Science Test"));
        assert!(out.contains("JJ"));
    }

    #[test]
    fn test_parse_command_json_mode() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("paper.txt");
        std::fs::write(&path, "Score: 84%").unwrap();

        let out = run_parse(&path, &HomeroomConfig::default(), true).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(parsed["score"]["value"]["points"], 84.0);
    }

    #[test]
    fn test_missing_file_fails() {
        let err = run_parse(
            Path::new("/nonexistent/paper.txt"),
            &HomeroomConfig::default(),
            false,
        );
        assert!(err.is_err());
    }
}
