use std::collections::HashMap;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing::debug;

/// Key/value persistence behind the review store. Keys are opaque short
/// strings; values are whatever text the store serialized. Implementations
/// are not expected to provide locking - the store is single-writer.
pub trait StorageBackend {
    fn read(&self, key: &str) -> io::Result<Option<String>>;
    fn write(&self, key: &str, value: &str) -> io::Result<()>;
    fn remove(&self, key: &str) -> io::Result<()>;
}

/// One file per key under a directory. Writes go through a temp file and
/// rename so a crash mid-write never leaves a half-written collection.
pub struct FileBackend {
    dir: PathBuf,
}

impl FileBackend {
    pub fn new(dir: impl Into<PathBuf>) -> io::Result<Self> {
        let dir = dir.into();
        std::fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn key_path(&self, key: &str) -> PathBuf {
        self.dir.join(key)
    }
}

impl StorageBackend for FileBackend {
    fn read(&self, key: &str) -> io::Result<Option<String>> {
        let path = self.key_path(key);
        if !path.exists() {
            debug!("storage miss: {} (file does not exist)", key);
            return Ok(None);
        }
        std::fs::read_to_string(&path).map(Some)
    }

    fn write(&self, key: &str, value: &str) -> io::Result<()> {
        let path = self.key_path(key);
        let temp_path = self.dir.join(format!("{}.tmp", key));
        std::fs::write(&temp_path, value)?;
        std::fs::rename(&temp_path, &path)?;
        debug!("storage write: {} ({} bytes)", key, value.len());
        Ok(())
    }

    fn remove(&self, key: &str) -> io::Result<()> {
        let path = self.key_path(key);
        if path.exists() {
            std::fs::remove_file(&path)?;
        }
        Ok(())
    }
}

/// In-memory backend for tests and embedding.
#[derive(Default)]
pub struct MemoryBackend {
    data: Mutex<HashMap<String, String>>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }
}

impl StorageBackend for MemoryBackend {
    fn read(&self, key: &str) -> io::Result<Option<String>> {
        let data = self.data.lock().unwrap_or_else(|e| e.into_inner());
        Ok(data.get(key).cloned())
    }

    fn write(&self, key: &str, value: &str) -> io::Result<()> {
        let mut data = self.data.lock().unwrap_or_else(|e| e.into_inner());
        data.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> io::Result<()> {
        let mut data = self.data.lock().unwrap_or_else(|e| e.into_inner());
        data.remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_file_backend_round_trip() {
        let dir = TempDir::new().unwrap();
        let backend = FileBackend::new(dir.path()).unwrap();

        assert_eq!(backend.read("wmg-reviews").unwrap(), None);
        backend.write("wmg-reviews", "[]").unwrap();
        assert_eq!(backend.read("wmg-reviews").unwrap(), Some("[]".to_string()));

        backend.remove("wmg-reviews").unwrap();
        assert_eq!(backend.read("wmg-reviews").unwrap(), None);
        // removing a missing key is a no-op
        backend.remove("wmg-reviews").unwrap();
    }

    #[test]
    fn test_file_backend_overwrite() {
        let dir = TempDir::new().unwrap();
        let backend = FileBackend::new(dir.path()).unwrap();
        backend.write("wmg-lang", "ko").unwrap();
        backend.write("wmg-lang", "en").unwrap();
        assert_eq!(backend.read("wmg-lang").unwrap(), Some("en".to_string()));
    }

    #[test]
    fn test_memory_backend_round_trip() {
        let backend = MemoryBackend::new();
        backend.write("k", "v").unwrap();
        assert_eq!(backend.read("k").unwrap(), Some("v".to_string()));
        backend.remove("k").unwrap();
        assert_eq!(backend.read("k").unwrap(), None);
    }
}
