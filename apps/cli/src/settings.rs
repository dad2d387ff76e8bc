//! Config file resolution and command-line overrides.

use anyhow::Context;
use sixpence_core::{Config, QuestionPosition};
use std::path::{Path, PathBuf};

/// Environment variable naming a config file.
pub const CONFIG_ENV: &str = "SIXPENCE_CONFIG";

/// Config file picked up from the working directory when present.
pub const DEFAULT_CONFIG_FILE: &str = "sixpence.toml";

/// Pick the config file with priority: flag > env > ./sixpence.toml.
pub fn config_path(flag: Option<&Path>, env: Option<String>) -> Option<PathBuf> {
    if let Some(path) = flag {
        return Some(path.to_path_buf());
    }

    if let Some(path) = env.filter(|p| !p.is_empty()) {
        return Some(PathBuf::from(path));
    }

    let local = PathBuf::from(DEFAULT_CONFIG_FILE);
    local.exists().then_some(local)
}

/// Load the config for this run, falling back to the built-in defaults.
pub fn load_config(flag: Option<&Path>) -> anyhow::Result<Config> {
    match config_path(flag, std::env::var(CONFIG_ENV).ok()) {
        Some(path) => Config::load(&path)
            .with_context(|| format!("loading config from {}", path.display())),
        None => {
            tracing::info!("No config file found, using defaults");
            Ok(Config::default())
        }
    }
}

/// Command-line switches that override config values.
#[derive(Debug, Clone, Copy, Default)]
pub struct Overrides {
    pub right: bool,
    pub no_hints: bool,
    pub no_answers: bool,
}

impl Overrides {
    pub fn apply(self, config: &mut Config) {
        if self.right {
            config.format.question_position = QuestionPosition::Right;
        }
        if self.no_hints {
            config.display.show_hints = false;
        }
        if self.no_answers {
            config.display.show_answers_on_fail = false;
        }
    }
}
