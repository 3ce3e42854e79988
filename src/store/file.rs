//! File-backed store implementation
//!
//! One file per key under a root directory. This is the durable default
//! for the retry queue, the role browser local storage plays for a web
//! embedder.

use super::KvStore;
use crate::core::error::{LoggerError, Result};
use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    /// Create a store rooted at the given directory, creating it if needed
    pub fn new(root: impl Into<PathBuf>) -> Result<Self> {
        let root = root.into();
        fs::create_dir_all(&root)
            .map_err(|e| LoggerError::persistence(root.display().to_string(), e.to_string()))?;
        Ok(Self { root })
    }

    /// Open a store under the platform-local data directory, scoped by
    /// application name. Falls back to the system temp directory when no
    /// local data directory is known.
    pub fn open_default(app_name: &str) -> Result<Self> {
        let base = dirs::data_local_dir().unwrap_or_else(std::env::temp_dir);
        Self::new(base.join(app_name))
    }

    pub fn root(&self) -> &std::path::Path {
        &self.root
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.root.join(format!("{}.json", key))
    }
}

impl KvStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        match fs::read_to_string(self.path_for(key)) {
            Ok(raw) => Ok(Some(raw)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(LoggerError::persistence(key, e.to_string())),
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        fs::write(self.path_for(key), value)
            .map_err(|e| LoggerError::persistence(key, e.to_string()))
    }

    fn name(&self) -> &str {
        "file"
    }
}
