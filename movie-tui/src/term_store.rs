use anyhow::Result;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
#[cfg(unix)]
use std::{io::Write, os::unix::fs::OpenOptionsExt};
use tracing::warn;

use crate::config::MovieTuiConfig;

/// Synchronous key-value string store. Every operation is total: a store that
/// cannot be reached behaves as if it were empty.
pub trait TermStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str);
    fn remove(&mut self, key: &str);
}

/// One file per key under the application config directory.
#[derive(Debug, Clone)]
pub struct FileTermStore {
    root: PathBuf,
}

impl FileTermStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn in_config_dir() -> Result<Self> {
        Ok(Self::new(MovieTuiConfig::app_dir()?))
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.root.join(key)
    }
}

fn secure_write(path: &Path, content: &str) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    #[cfg(unix)]
    {
        std::fs::OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .mode(0o600)
            .open(path)?
            .write_all(content.as_bytes())?;
    }

    #[cfg(not(unix))]
    {
        std::fs::write(path, content)?;
    }

    Ok(())
}

impl TermStore for FileTermStore {
    fn get(&self, key: &str) -> Option<String> {
        let path = self.path_for(key);
        if !path.exists() {
            return None;
        }
        match std::fs::read_to_string(&path) {
            Ok(raw) => {
                let raw = raw.trim();
                if raw.is_empty() {
                    None
                } else {
                    Some(raw.to_string())
                }
            }
            Err(e) => {
                warn!(path = %path.display(), "failed to read term store: {}", e);
                None
            }
        }
    }

    fn set(&mut self, key: &str, value: &str) {
        let path = self.path_for(key);
        if let Err(e) = secure_write(&path, value) {
            warn!(path = %path.display(), "failed to write term store: {}", e);
        }
    }

    fn remove(&mut self, key: &str) {
        let path = self.path_for(key);
        if !path.exists() {
            return;
        }
        if let Err(e) = std::fs::remove_file(&path) {
            warn!(path = %path.display(), "failed to remove term store entry: {}", e);
        }
    }
}

/// Volatile store used for `--no-history` runs and tests.
#[derive(Debug, Default)]
pub struct MemoryTermStore {
    values: HashMap<String, String>,
    #[cfg(test)]
    writes: usize,
}

impl MemoryTermStore {
    pub fn new() -> Self {
        Self::default()
    }

    #[cfg(test)]
    pub fn with_value(key: &str, value: &str) -> Self {
        let mut store = Self::default();
        store.values.insert(key.to_string(), value.to_string());
        store
    }

    /// Number of `set` calls observed.
    #[cfg(test)]
    pub fn write_count(&self) -> usize {
        self.writes
    }
}

impl TermStore for MemoryTermStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        #[cfg(test)]
        {
            self.writes += 1;
        }
        self.values.insert(key.to_string(), value.to_string());
    }

    fn remove(&mut self, key: &str) {
        self.values.remove(key);
    }
}

/// Lets the runtime pick a store at startup without making the app generic.
impl TermStore for Box<dyn TermStore> {
    fn get(&self, key: &str) -> Option<String> {
        self.as_ref().get(key)
    }

    fn set(&mut self, key: &str, value: &str) {
        self.as_mut().set(key, value)
    }

    fn remove(&mut self, key: &str) {
        self.as_mut().remove(key)
    }
}
