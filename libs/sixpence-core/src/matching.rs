//! Answer normalization for typed answers.
//!
//! Submitted answers and accepted answers go through the same [`Normalizer`]
//! and are then compared for exact equality. There is no fuzzy matching.

use crate::config::{MatchingConfig, RewriteRule};

/// Cleans answers before comparison.
///
/// Steps, in order:
/// 1. lower-case (when `ignore_case` is set)
/// 2. remove every configured punctuation character
/// 3. apply each rewrite rule as a literal replace-all, in declaration order
///
/// Whitespace is left alone here; see [`squeeze`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Normalizer {
    ignore_case: bool,
    punctuation: Vec<char>,
    rewrite_rules: Vec<RewriteRule>,
}

impl Default for Normalizer {
    fn default() -> Self {
        Self::from(&MatchingConfig::default())
    }
}

impl From<&MatchingConfig> for Normalizer {
    fn from(config: &MatchingConfig) -> Self {
        Self {
            ignore_case: config.ignore_case,
            punctuation: config.punctuation.clone(),
            rewrite_rules: config.rewrite_rules.clone(),
        }
    }
}

impl Normalizer {
    /// Normalize a single answer.
    pub fn clean(&self, s: &str) -> String {
        let cased = if self.ignore_case {
            s.to_lowercase()
        } else {
            s.to_string()
        };

        let stripped: String = cased
            .chars()
            .filter(|c| !self.punctuation.contains(c))
            .collect();

        self.rewrite_rules
            .iter()
            .fold(stripped, |acc, rule| acc.replace(&rule.find, &rule.replace))
    }
}

/// Trim and collapse interior whitespace runs to single spaces.
pub fn squeeze(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}
