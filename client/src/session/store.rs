//! # Persistent Key-Value Store
//!
//! Durable storage for the two session blobs (credential and identity).
//!
//! - [`MemoryStore`]: process-local, for tests and throwaway runs
//! - [`FileStore`]: a JSON object on disk, survives restarts
//!
//! Multi-key writes and removals are all-or-nothing: the session manager
//! relies on this so the credential and the identity never diverge.

use std::collections::HashMap;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use parking_lot::RwLock;

use crate::core::error::{ClientError, Result};

/// Storage key of the bearer credential.
pub const STORE_KEY_TOKEN: &str = "token";

/// Storage key of the serialized identity.
pub const STORE_KEY_USER: &str = "user";

/// Async key-value persistence for small string blobs.
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Read one value. `Ok(None)` when the key is absent.
    async fn get(&self, key: &str) -> Result<Option<String>>;

    /// Write every pair, or none of them.
    async fn set_many(&self, entries: &[(&str, String)]) -> Result<()>;

    /// Remove every key, or none of them. Absent keys are not an error.
    async fn remove_many(&self, keys: &[&str]) -> Result<()>;
}

/// In-memory store.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RwLock<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored keys.
    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }
}

#[async_trait]
impl KeyValueStore for MemoryStore {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.read().get(key).cloned())
    }

    async fn set_many(&self, entries: &[(&str, String)]) -> Result<()> {
        let mut map = self.entries.write();
        for (key, value) in entries {
            map.insert((*key).to_string(), value.clone());
        }
        Ok(())
    }

    async fn remove_many(&self, keys: &[&str]) -> Result<()> {
        let mut map = self.entries.write();
        for key in keys {
            map.remove(*key);
        }
        Ok(())
    }
}

enum Contents {
    Parsed(HashMap<String, String>),
    Corrupt(serde_json::Error),
}

/// JSON-file store.
///
/// Every mutation rewrites the whole file through a temporary sibling and
/// a rename, so a crash mid-write leaves either the old or the new content.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    write_lock: tokio::sync::Mutex<()>,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: tokio::sync::Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_else(|| "store".into());
        name.push(".tmp");
        self.path.with_file_name(name)
    }

    async fn read(&self) -> Result<Contents> {
        match tokio::fs::read_to_string(&self.path).await {
            Ok(contents) if contents.trim().is_empty() => Ok(Contents::Parsed(HashMap::new())),
            Ok(contents) => Ok(serde_json::from_str(&contents)
                .map(Contents::Parsed)
                .unwrap_or_else(Contents::Corrupt)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(Contents::Parsed(HashMap::new())),
            Err(e) => Err(e.into()),
        }
    }

    async fn load(&self) -> Result<HashMap<String, String>> {
        match self.read().await? {
            Contents::Parsed(map) => Ok(map),
            Contents::Corrupt(e) => Err(ClientError::Storage(format!(
                "corrupt store file {}: {}",
                self.path.display(),
                e
            ))),
        }
    }

    /// Load for a mutation. A corrupt file reads as empty so the write can
    /// replace it; the flag says whether that happened.
    async fn load_for_write(&self) -> Result<(HashMap<String, String>, bool)> {
        match self.read().await? {
            Contents::Parsed(map) => Ok((map, false)),
            Contents::Corrupt(e) => {
                tracing::warn!(path = %self.path.display(), error = %e, "Overwriting corrupt store file");
                Ok((HashMap::new(), true))
            }
        }
    }

    async fn persist(&self, map: &HashMap<String, String>) -> Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent).await?;
        }
        let json = serde_json::to_vec_pretty(map)
            .map_err(|e| ClientError::Storage(format!("failed to serialize store: {}", e)))?;
        let temp = self.temp_path();
        tokio::fs::write(&temp, json).await?;
        if let Err(e) = tokio::fs::rename(&temp, &self.path).await {
            let _ = tokio::fs::remove_file(&temp).await;
            return Err(e.into());
        }
        Ok(())
    }
}

#[async_trait]
impl KeyValueStore for FileStore {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.load().await?.remove(key))
    }

    async fn set_many(&self, entries: &[(&str, String)]) -> Result<()> {
        let _guard = self.write_lock.lock().await;
        let (mut map, _) = self.load_for_write().await?;
        for (key, value) in entries {
            map.insert((*key).to_string(), value.clone());
        }
        self.persist(&map).await
    }

    async fn remove_many(&self, keys: &[&str]) -> Result<()> {
        let _guard = self.write_lock.lock().await;
        let (mut map, reset) = self.load_for_write().await?;
        let before = map.len();
        for key in keys {
            map.remove(*key);
        }
        if map.len() == before && !reset {
            return Ok(());
        }
        self.persist(&map).await
    }
}
