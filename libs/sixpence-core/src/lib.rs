//! Core library for the sixpence drill tool.
//!
//! Provides:
//! - Line parser for `.6p` item files
//! - Answer normalization and matching
//! - Drill scheduler with score and grade statistics
//! - Configuration for all of the above

pub mod config;
pub mod error;
pub mod grading;
pub mod item;
pub mod matching;
pub mod parser;
pub mod scheduler;
pub mod types;

pub use config::{Config, DisplayConfig, FormatConfig, MatchingConfig, RewriteRule};
pub use error::{ConfigError, GradeError, LoadError, ParseError, Result};
pub use grading::{GradeBand, GradeScale};
pub use item::Item;
pub use matching::{squeeze, Normalizer};
pub use parser::{load_items, parse_line, Parser};
pub use scheduler::{Scheduler, SessionStats};
pub use types::{ItemType, QuestionPosition};
