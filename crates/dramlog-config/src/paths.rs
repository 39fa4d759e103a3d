use anyhow::Result;
use std::path::{Path, PathBuf};

/// Base path override for containers and tests.
pub fn base_path_override() -> Option<PathBuf> {
    std::env::var("DRAMLOG_BASE_PATH").map(PathBuf::from).ok()
}

pub struct PathManager {
    config_dir: PathBuf,
    data_dir: PathBuf,
}

impl PathManager {
    pub fn new() -> Result<Self> {
        let base_dir = dirs::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?
            .join("dramlog");
        Ok(Self::from_base(base_dir))
    }

    pub fn from_base(base: PathBuf) -> Self {
        Self {
            config_dir: base.clone(),
            data_dir: base.join("data"),
        }
    }

    pub fn config_dir(&self) -> &Path {
        &self.config_dir
    }

    /// Where the storage backend keeps its key files.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn config_file(&self) -> PathBuf {
        self.config_dir.join("config.toml")
    }

    pub fn ensure_directories(&self) -> Result<()> {
        std::fs::create_dir_all(&self.config_dir)?;
        std::fs::create_dir_all(&self.data_dir)?;
        Ok(())
    }
}

impl Default for PathManager {
    fn default() -> Self {
        if let Some(base) = base_path_override() {
            return Self::from_base(base);
        }
        Self::new().unwrap_or_else(|_| Self::from_base(PathBuf::from(".dramlog")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_under_base() {
        let pm = PathManager::from_base(PathBuf::from("/tmp/dramlog-test"));
        assert_eq!(pm.data_dir(), Path::new("/tmp/dramlog-test/data"));
        assert_eq!(pm.config_file(), PathBuf::from("/tmp/dramlog-test/config.toml"));
    }
}
