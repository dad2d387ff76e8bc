//! Core enumerations shared by the parser, items and configuration.

use serde::{Deserialize, Serialize};
use std::fmt;

/// How an item's question should be presented.
///
/// The type only selects rendering; every type parses the same way.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemType {
    Text,
    Image,
    Sound,
}

impl Default for ItemType {
    fn default() -> Self {
        Self::Text
    }
}

impl ItemType {
    /// All item types, in canonical order.
    pub const ALL: [ItemType; 3] = [Self::Text, Self::Image, Self::Sound];

    /// Get the type name as written after the type sigil.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Image => "image",
            Self::Sound => "sound",
        }
    }

    /// Parse from the name written after the type sigil.
    pub fn from_name(s: &str) -> Option<Self> {
        match s {
            "text" => Some(Self::Text),
            "image" => Some(Self::Image),
            "sound" => Some(Self::Sound),
            _ => None,
        }
    }
}

impl fmt::Display for ItemType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which side of the hint region holds the question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestionPosition {
    /// `question [hint] answers`
    Left,
    /// `answers [hint] question`
    Right,
}

impl Default for QuestionPosition {
    fn default() -> Self {
        Self::Left
    }
}
