//! Error types for sixpence-core.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using ParseError.
pub type Result<T> = std::result::Result<T, ParseError>;

/// Errors that can occur while parsing a single item line.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("missing hint: no `{delimiter}` found")]
    MissingHintStart { delimiter: String },

    #[error("missing hint: no closing `{delimiter}` found")]
    MissingHintEnd { delimiter: String },

    #[error("no answers given")]
    NoAnswers,

    #[error("Type {found} is not a known item type. Known types: {known}.")]
    UnknownType { found: String, known: String },
}

/// Errors that abort loading a whole item file.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{}:{line}> {source}", .path.display())]
    Parse {
        path: PathBuf,
        line: usize,
        #[source]
        source: ParseError,
    },
}

impl LoadError {
    /// Line number of the offending line, if the failure was a parse error.
    pub fn line(&self) -> Option<usize> {
        match self {
            Self::Parse { line, .. } => Some(*line),
            Self::Read { .. } => None,
        }
    }
}

/// A computed percentage fell outside every band of the grade scale.
///
/// Only a misconfigured scale can produce this.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GradeError {
    #[error("value of {percentage} not in range of grade scale {scale}")]
    OutOfScale { percentage: u32, scale: String },
}

/// Errors raised while loading or validating configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config syntax: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("invalid config: {0}")]
    Invalid(String),
}
