//! Line parser for item files.
//!
//! # Format
//! ```text
//! What is 2+2? [math] 4 | four // basic
//! @image paris.png [capital] France
//! ```
//!
//! One item per line: an optional `@type` sigil, the question, a `[hint]`
//! region (required, may be empty), `|`-separated answers and an optional
//! `// comment` running to the end of the line. With the question on the
//! right, answers come first and the question follows the hint.

use crate::config::{Config, FormatConfig};
use crate::error::{LoadError, ParseError, Result};
use crate::item::Item;
use crate::matching::{squeeze, Normalizer};
use crate::types::{ItemType, QuestionPosition};
use std::path::Path;
use std::sync::Arc;

/// Parse one line with the default configuration.
pub fn parse_line(line: &str) -> Result<Item> {
    Parser::default().parse_line(line)
}

/// Read and parse a whole item file.
pub fn load_items(path: impl AsRef<Path>, config: &Config) -> std::result::Result<Vec<Item>, LoadError> {
    Parser::new(config).load_file(path)
}

/// Turns lines into items according to a [`FormatConfig`].
///
/// All items produced by one parser share its normalizer.
#[derive(Debug, Clone)]
pub struct Parser {
    format: FormatConfig,
    normalizer: Arc<Normalizer>,
}

impl Default for Parser {
    fn default() -> Self {
        Self::new(&Config::default())
    }
}

/// A line split into its raw regions, before answers and type are resolved.
struct Regions<'a> {
    question: &'a str,
    answers: &'a str,
    hint: &'a str,
    comment: &'a str,
}

impl Parser {
    pub fn new(config: &Config) -> Self {
        Self {
            format: config.format.clone(),
            normalizer: Arc::new(Normalizer::from(&config.matching)),
        }
    }

    pub fn format(&self) -> &FormatConfig {
        &self.format
    }

    /// Parse a single line into an item.
    pub fn parse_line(&self, line: &str) -> Result<Item> {
        let regions = self.split_regions(line.trim())?;

        let answers: Vec<String> = regions
            .answers
            .split(self.format.answer_separator.as_str())
            .map(str::trim)
            .filter(|answer| !answer.is_empty())
            .map(squeeze)
            .collect();

        if answers.is_empty() {
            return Err(ParseError::NoAnswers);
        }

        let (item_type, question) = self.resolve_type(regions.question)?;

        tracing::debug!(
            question = %question,
            hint = regions.hint,
            answers = ?answers,
            comment = regions.comment,
            item_type = %item_type,
            "Parsed item"
        );

        Ok(Item::with_normalizer(
            question,
            answers,
            non_empty(regions.hint),
            non_empty(regions.comment),
            item_type,
            Arc::clone(&self.normalizer),
        ))
    }

    /// Parse every line of a document. Errors carry `path` and the 1-based
    /// physical line number; the first failure aborts the whole document.
    pub fn parse_document(
        &self,
        content: &str,
        path: impl AsRef<Path>,
    ) -> std::result::Result<Vec<Item>, LoadError> {
        let mut items = Vec::new();

        for (idx, line) in content.lines().enumerate() {
            let line_num = idx + 1;

            if self.format.skip_blank_lines && line.trim().is_empty() {
                continue;
            }

            let item = self.parse_line(line).map_err(|source| LoadError::Parse {
                path: path.as_ref().to_path_buf(),
                line: line_num,
                source,
            })?;
            items.push(item);
        }

        Ok(items)
    }

    /// Read a file to completion and parse it.
    pub fn load_file(&self, path: impl AsRef<Path>) -> std::result::Result<Vec<Item>, LoadError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| LoadError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let items = self.parse_document(&content, path)?;
        tracing::info!("Loaded {} items from {}", items.len(), path.display());
        Ok(items)
    }

    fn split_regions<'a>(&self, line: &'a str) -> Result<Regions<'a>> {
        let format = &self.format;

        let (working, comment) = match line.split_once(format.comment_marker.as_str()) {
            Some((working, comment)) => (working.trim(), comment.trim()),
            None => (line, ""),
        };

        let (left, hint_and_right) = working
            .split_once(format.hint_start.as_str())
            .ok_or_else(|| ParseError::MissingHintStart {
                delimiter: format.hint_start.clone(),
            })?;

        let (hint, right) = hint_and_right
            .split_once(format.hint_end.as_str())
            .ok_or_else(|| ParseError::MissingHintEnd {
                delimiter: format.hint_end.clone(),
            })?;

        let (question, answers) = match format.question_position {
            QuestionPosition::Left => (left.trim(), right.trim()),
            QuestionPosition::Right => (right.trim(), left.trim()),
        };

        Ok(Regions {
            question,
            answers,
            hint: hint.trim(),
            comment,
        })
    }

    /// Split off a leading `@type` marker; untyped questions are text.
    fn resolve_type(&self, question: &str) -> Result<(ItemType, String)> {
        let (name, rest) = match question.strip_prefix(self.format.type_sigil.as_str()) {
            Some(marked) => marked
                .split_once(char::is_whitespace)
                .unwrap_or((marked, "")),
            None => (ItemType::Text.as_str(), question),
        };

        let item_type = ItemType::from_name(name)
            .filter(|t| self.format.known_types.contains(t))
            .ok_or_else(|| ParseError::UnknownType {
                found: name.to_string(),
                known: self.format.known_types_list(),
            })?;

        Ok((item_type, squeeze(rest)))
    }
}

fn non_empty(s: &str) -> Option<String> {
    if s.is_empty() {
        None
    } else {
        Some(s.to_string())
    }
}
