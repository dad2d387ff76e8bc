//! Drill configuration.
//!
//! Every knob has a default matching the stock `.6p` file format, so an empty
//! TOML document (or `Config::default()`) yields a working setup. A config
//! file only needs the keys it changes:
//!
//! ```toml
//! [format]
//! question_position = "right"
//!
//! [matching]
//! rewrite_rules = [{ find = "can't", replace = "cannot" }]
//! ```

use crate::error::ConfigError;
use crate::grading::GradeScale;
use crate::types::{ItemType, QuestionPosition};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Top-level configuration consumed by the parser, scheduler and UI.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub format: FormatConfig,
    pub matching: MatchingConfig,
    pub grade_scale: GradeScale,
    pub display: DisplayConfig,
}

/// Line format markers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormatConfig {
    pub comment_marker: String,
    pub hint_start: String,
    pub hint_end: String,
    pub answer_separator: String,
    pub question_position: QuestionPosition,
    pub type_sigil: String,
    pub known_types: Vec<ItemType>,
    pub skip_blank_lines: bool,
}

impl Default for FormatConfig {
    fn default() -> Self {
        Self {
            comment_marker: "//".to_string(),
            hint_start: "[".to_string(),
            hint_end: "]".to_string(),
            answer_separator: "|".to_string(),
            question_position: QuestionPosition::Left,
            type_sigil: "@".to_string(),
            known_types: ItemType::ALL.to_vec(),
            skip_blank_lines: true,
        }
    }
}

impl FormatConfig {
    /// Known types joined for error messages, e.g. `text, image, sound`.
    pub fn known_types_list(&self) -> String {
        self.known_types
            .iter()
            .map(ItemType::as_str)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// A literal find/replace applied while normalizing answers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RewriteRule {
    pub find: String,
    pub replace: String,
}

impl RewriteRule {
    pub fn new(find: impl Into<String>, replace: impl Into<String>) -> Self {
        Self {
            find: find.into(),
            replace: replace.into(),
        }
    }
}

/// Answer normalization settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchingConfig {
    pub ignore_case: bool,
    pub punctuation: Vec<char>,
    /// Applied in declaration order.
    pub rewrite_rules: Vec<RewriteRule>,
}

impl Default for MatchingConfig {
    fn default() -> Self {
        Self {
            ignore_case: true,
            punctuation: vec!['?', '!', ',', '.', ';', ':'],
            rewrite_rules: vec![
                RewriteRule::new("isn't", "is not"),
                RewriteRule::new("aren't", "are not"),
            ],
        }
    }
}

/// What the UI reveals to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    pub show_hints: bool,
    pub show_answers_on_fail: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            show_hints: true,
            show_answers_on_fail: true,
        }
    }
}

impl Config {
    /// Parse a TOML document layered over the defaults, then validate it.
    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        let config: Config = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Read and parse a TOML config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&contents)?;
        tracing::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Reject settings the parser or scheduler cannot work with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let format = &self.format;
        let markers = [
            ("comment_marker", &format.comment_marker),
            ("hint_start", &format.hint_start),
            ("hint_end", &format.hint_end),
            ("answer_separator", &format.answer_separator),
            ("type_sigil", &format.type_sigil),
        ];
        for (name, value) in markers {
            if value.is_empty() {
                return Err(ConfigError::Invalid(format!("format.{} must not be empty", name)));
            }
        }

        if format.known_types.is_empty() {
            return Err(ConfigError::Invalid(
                "format.known_types must list at least one type".to_string(),
            ));
        }

        if self
            .matching
            .rewrite_rules
            .iter()
            .any(|rule| rule.find.is_empty())
        {
            return Err(ConfigError::Invalid(
                "matching.rewrite_rules must not contain an empty `find`".to_string(),
            ));
        }

        self.grade_scale.validate()?;

        Ok(())
    }
}
