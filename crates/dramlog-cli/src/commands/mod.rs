pub mod add;
pub mod card;
pub mod clear;
pub mod config;
pub mod delete;
pub mod draft;
pub mod list;
pub mod share;
pub mod show;
pub mod transfer;
pub mod update;

use color_eyre::eyre::{eyre, Context};
use color_eyre::Result;
use dramlog_config::{Config, PathManager};
use dramlog_core::{FileBackend, ReviewStore};
use dramlog_models::{Lang, ReviewInput};
use std::io::Read;
use std::path::PathBuf;
use tracing::debug;

/// Opens the file-backed store at the configured data directory.
pub fn open_store() -> Result<(ReviewStore<FileBackend>, Config)> {
    let path_manager = PathManager::default();
    path_manager
        .ensure_directories()
        .map_err(|e| eyre!("{:#}", e))?;
    let config = Config::load(&path_manager.config_file()).map_err(|e| eyre!("{:#}", e))?;
    let data_dir = config
        .data_dir
        .clone()
        .unwrap_or_else(|| path_manager.data_dir().to_path_buf());
    debug!("opening store at {}", data_dir.display());
    let backend = FileBackend::new(data_dir)?;
    Ok((ReviewStore::new(backend), config))
}

/// --lang flag, then the persisted preference, then the config fallback.
pub fn resolve_lang(arg: Option<Lang>, store: &ReviewStore<FileBackend>, config: &Config) -> Lang {
    if let Some(lang) = arg {
        return lang;
    }
    store.language().ok().flatten().unwrap_or(config.language)
}

/// Reads a JSON payload from a file, or stdin when no file was given.
pub fn read_payload(file: Option<&PathBuf>) -> Result<String> {
    match file {
        Some(path) => std::fs::read_to_string(path)
            .wrap_err_with(|| format!("failed to read {}", path.display())),
        None => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            Ok(buf)
        }
    }
}

/// Expands a unique id prefix to the full review id.
pub fn resolve_id(store: &ReviewStore<FileBackend>, prefix: &str) -> Result<String> {
    let reviews = store.list()?;
    if reviews.iter().any(|r| r.id == prefix) {
        return Ok(prefix.to_string());
    }
    let matches: Vec<&str> = reviews
        .iter()
        .filter(|r| r.id.starts_with(prefix))
        .map(|r| r.id.as_str())
        .collect();
    match matches.as_slice() {
        [id] => Ok(id.to_string()),
        [] => Err(eyre!("no review matching '{}'", prefix)),
        _ => Err(eyre!("'{}' matches {} reviews, use more characters", prefix, matches.len())),
    }
}

/// The checks the original left to HTML form constraints.
pub fn validate_input(input: &ReviewInput) -> Result<()> {
    if input.whisky.name.trim().is_empty() {
        return Err(eyre!("whisky name is required"));
    }
    if !input.scores.is_valid() {
        return Err(eyre!("scores must be between 0 and 25"));
    }
    for entry in input
        .flavors
        .nose
        .iter()
        .chain(&input.flavors.palate)
        .chain(&input.flavors.finish)
    {
        if !(1..=5).contains(&entry.strength) {
            return Err(eyre!("flavor strength must be between 1 and 5 ({})", entry.id));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_open_store_under_base_path_override() {
        let dir = TempDir::new().unwrap();
        std::env::set_var("DRAMLOG_BASE_PATH", dir.path());
        let result = open_store();
        std::env::remove_var("DRAMLOG_BASE_PATH");

        let (store, config) = result.unwrap();
        assert!(store.list().unwrap().is_empty());
        assert_eq!(config.language, Lang::En);
        assert!(dir.path().join("data").is_dir());
    }
}
