//! Configuration management.
//!
//! Tunables for the matcher and parser, loadable from a TOML file:
//!
//! ```toml
//! [matcher]
//! title_weight = 0.5
//! date_weight = 0.3
//! course_weight = 0.2
//! auto_match_threshold = 0.70
//! date_tolerance_days = 7
//!
//! [parser]
//! known_courses = ["Math", "Science", "Reading"]
//! max_title_length = 120
//! ```

use crate::{Error, Result};
use serde::Deserialize;
use std::path::Path;

/// Weights and thresholds for the assignment matcher.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct MatcherConfig {
    /// Weight of the title-similarity component.
    pub title_weight: f64,
    /// Weight of the date-proximity component.
    pub date_weight: f64,
    /// Weight of the course-match component.
    pub course_weight: f64,
    /// Minimum confidence for auto-matching.
    pub auto_match_threshold: f64,
    /// Days of due-date slack before date proximity reaches zero.
    pub date_tolerance_days: i64,
    /// Trailing days of catalog to search when no date was parsed.
    pub fallback_window_days: i64,
    /// How many runner-up suggestions to keep on a result.
    pub max_suggestions: usize,
}

impl Default for MatcherConfig {
    fn default() -> Self {
        Self {
            title_weight: 0.5,
            date_weight: 0.3,
            course_weight: 0.2,
            auto_match_threshold: 0.70,
            date_tolerance_days: 7,
            fallback_window_days: 30,
            max_suggestions: 4,
        }
    }
}

impl MatcherConfig {
    /// Validates that the weights form a proper convex combination.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidInput` if the weights do not sum to 1.0 or
    /// any tunable is out of range.
    pub fn validate(&self) -> Result<()> {
        let sum = self.title_weight + self.date_weight + self.course_weight;
        if (sum - 1.0).abs() > 1e-9 {
            return Err(Error::InvalidInput(format!(
                "matcher weights must sum to 1.0, got {sum}"
            )));
        }
        if !(0.0..=1.0).contains(&self.auto_match_threshold) {
            return Err(Error::InvalidInput(format!(
                "auto_match_threshold must be within [0, 1], got {}",
                self.auto_match_threshold
            )));
        }
        if self.date_tolerance_days <= 0 {
            return Err(Error::InvalidInput(
                "date_tolerance_days must be positive".to_string(),
            ));
        }
        Ok(())
    }
}

/// Tunables for the field parser.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ParserConfig {
    /// Dictionary of known course names, matched case-insensitively
    /// anywhere in the document text.
    pub known_courses: Vec<String>,
    /// Maximum accepted title length; longer headings are truncated.
    pub max_title_length: usize,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            known_courses: [
                "Math",
                "Science",
                "Reading",
                "English",
                "History",
                "Social Studies",
                "Art",
                "Music",
                "PE",
                "Spanish",
                "French",
            ]
            .iter()
            .map(ToString::to_string)
            .collect(),
            max_title_length: 120,
        }
    }
}

/// Main configuration for homeroom.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct HomeroomConfig {
    /// Matcher weights and thresholds.
    pub matcher: MatcherConfig,
    /// Parser dictionary and limits.
    pub parser: ParserConfig,
}

impl HomeroomConfig {
    /// Loads configuration from a TOML file, validating the result.
    ///
    /// # Errors
    ///
    /// Returns `Error::OperationFailed` when the file cannot be read and
    /// `Error::InvalidInput` when it fails to parse or validate.
    pub fn load(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path).map_err(|e| Error::OperationFailed {
            operation: "config_read".to_string(),
            cause: format!("{}: {e}", path.display()),
        })?;
        let config: Self = toml::from_str(&raw)
            .map_err(|e| Error::InvalidInput(format!("config parse: {e}")))?;
        config.matcher.validate()?;
        Ok(config)
    }
}
