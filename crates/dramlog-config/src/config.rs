use anyhow::Result;
use dramlog_models::Lang;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// CLI-level settings from `config.toml`. The per-collection language
/// preference lives in the store (`wmg-lang`); this is only the fallback
/// used before a preference has been persisted.
#[derive(Debug, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub language: Lang,
    /// Overrides the default storage directory.
    #[serde(default)]
    pub data_dir: Option<PathBuf>,
}

impl Config {
    /// Loads from the given file; a missing file is the default config.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}
