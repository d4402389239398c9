//! Choice files: TOML lists of weighted items, plus built-in presets.
//!
//! ```toml
//! seed = 42
//!
//! [[choices]]
//! item = "lemon"
//! weight = 1
//! ```

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;
use weightedrand_core::{Choice, Chooser, ChooserError};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("{} lists no choices", .0.display())]
    Empty(PathBuf),

    #[error("unknown preset '{0}' (available: {available})", available = PRESETS.join(", "))]
    UnknownPreset(String),
}

/// Names accepted by [`ChoiceFile::preset`].
pub const PRESETS: &[&str] = &["fruit"];

/// One weighted item as written in a choice file.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ChoiceEntry {
    pub item: String,
    /// Zero makes the item unreachable; negative excludes it.
    pub weight: i64,
}

/// A parsed choice file.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ChoiceFile {
    /// Master seed for reproducible draws. A `--seed` flag overrides it.
    #[serde(default)]
    pub seed: Option<u64>,
    pub choices: Vec<ChoiceEntry>,
}

impl ChoiceFile {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let file: Self = toml::from_str(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        if file.choices.is_empty() {
            return Err(ConfigError::Empty(path.to_path_buf()));
        }
        log::info!("loaded {} choices from {}", file.choices.len(), path.display());
        Ok(file)
    }

    /// A built-in choice set.
    ///
    /// `fruit`: cherry 0, lemon 1, orange 1, watermelon 3, avocado 5. Lemon and
    /// orange come up 10% of the time each, watermelon 30%, avocado 50%,
    /// cherry never.
    pub fn preset(name: &str) -> Result<Self, ConfigError> {
        match name {
            "fruit" => Ok(Self {
                seed: None,
                choices: [("🍒", 0), ("🍋", 1), ("🍊", 1), ("🍉", 3), ("🥑", 5)]
                    .into_iter()
                    .map(|(item, weight)| ChoiceEntry {
                        item: item.to_string(),
                        weight,
                    })
                    .collect(),
            }),
            other => Err(ConfigError::UnknownPreset(other.to_string())),
        }
    }

    pub fn into_chooser(self) -> Result<Chooser<String, i64>, ChooserError> {
        Chooser::new(
            self.choices
                .into_iter()
                .map(|entry| Choice::new(entry.item, entry.weight)),
        )
    }
}
