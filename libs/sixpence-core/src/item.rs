//! The flashcard item.

use crate::config::FormatConfig;
use crate::matching::Normalizer;
use crate::types::{ItemType, QuestionPosition};
use serde::Serialize;
use std::sync::Arc;

/// One question with its accepted answers.
///
/// Items are immutable once built. Normalized answers are computed at
/// construction with the item's [`Normalizer`], which is also used to clean
/// submitted answers in [`Item::matches`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Item {
    question: String,
    answers: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    hint: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    comment: Option<String>,
    #[serde(rename = "type")]
    item_type: ItemType,
    #[serde(skip)]
    clean_answers: Vec<String>,
    #[serde(skip)]
    normalizer: Arc<Normalizer>,
}

impl Item {
    /// Build an item using the default normalization settings.
    pub fn new(
        question: impl Into<String>,
        answers: Vec<String>,
        hint: Option<String>,
        comment: Option<String>,
        item_type: ItemType,
    ) -> Self {
        Self::with_normalizer(
            question,
            answers,
            hint,
            comment,
            item_type,
            Arc::new(Normalizer::default()),
        )
    }

    /// Build an item that matches answers with the given normalizer.
    pub fn with_normalizer(
        question: impl Into<String>,
        answers: Vec<String>,
        hint: Option<String>,
        comment: Option<String>,
        item_type: ItemType,
        normalizer: Arc<Normalizer>,
    ) -> Self {
        let clean_answers = answers.iter().map(|a| normalizer.clean(a)).collect();
        Self {
            question: question.into(),
            answers,
            hint,
            comment,
            item_type,
            clean_answers,
            normalizer,
        }
    }

    pub fn question(&self) -> &str {
        &self.question
    }

    pub fn answers(&self) -> &[String] {
        &self.answers
    }

    pub fn hint(&self) -> Option<&str> {
        self.hint.as_deref()
    }

    pub fn comment(&self) -> Option<&str> {
        self.comment.as_deref()
    }

    pub fn item_type(&self) -> ItemType {
        self.item_type
    }

    /// Accepted answers after normalization.
    pub fn clean_answers(&self) -> &[String] {
        &self.clean_answers
    }

    /// Whether the normalized input equals any normalized accepted answer.
    pub fn matches(&self, input: &str) -> bool {
        let cleaned = self.normalizer.clean(input);
        self.clean_answers.iter().any(|answer| *answer == cleaned)
    }

    /// Whether the input is verbatim one of the accepted answers.
    pub fn matches_exactly(&self, input: &str) -> bool {
        self.answers.iter().any(|answer| answer == input)
    }

    /// Render the item back into its line format.
    pub fn to_text(&self, format: &FormatConfig) -> String {
        let separator = format!(" {} ", format.answer_separator);
        let answers = self.answers.join(separator.as_str());

        let question = match self.item_type {
            ItemType::Text => self.question.clone(),
            other => format!("{}{} {}", format.type_sigil, other, self.question),
        };

        let hint = format!(
            " {}{}{} ",
            format.hint_start,
            self.hint.as_deref().unwrap_or_default(),
            format.hint_end
        );

        let comment = self
            .comment
            .as_ref()
            .map(|c| format!(" {} {}", format.comment_marker, c))
            .unwrap_or_default();

        match format.question_position {
            QuestionPosition::Left => format!("{}{}{}{}", question, hint, answers, comment),
            QuestionPosition::Right => format!("{}{}{}{}", answers, hint, question, comment),
        }
    }
}
