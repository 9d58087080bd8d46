//! Single-document JSON file backend.
//!
//! The file holds one JSON object. It is read once at open; afterwards reads
//! are served from memory and every write rewrites the whole document.

use crate::KeyValueStore;
use blue1_error::{Blue1Result, StorageError, StorageErrorKind};
use serde_json::Value as JsonValue;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tokio::io::AsyncWriteExt;
use tokio::sync::{Mutex, RwLock};

/// File-backed store.
///
/// # Durability
///
/// A write serializes the updated document to `<file>.tmp`, calls
/// `sync_all`, and renames it over the target. Readers of the file never
/// observe a half-written document, and a crash leaves either the old or
/// the new document in place.
///
/// Writers are serialized by an internal mutex so the document on disk
/// always reflects the last completed `put`.
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    entries: RwLock<BTreeMap<String, JsonValue>>,
    write_lock: Mutex<()>,
}

impl JsonFileStore {
    /// Open the store at `path`, loading its contents.
    ///
    /// A missing file opens an empty store; the file and its parent
    /// directories are created on the first write.
    ///
    /// # Errors
    ///
    /// Returns a storage error if the file exists but cannot be read, or if
    /// it does not hold a JSON object.
    #[tracing::instrument(skip(path))]
    pub async fn open(path: impl Into<PathBuf>) -> Blue1Result<Self> {
        let path = path.into();

        let entries = match tokio::fs::read(&path).await {
            Ok(bytes) => Self::decode(&path, &bytes)?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "No store file yet, starting empty");
                BTreeMap::new()
            }
            Err(e) => {
                return Err(StorageError::new(StorageErrorKind::FileRead(format!(
                    "{}: {}",
                    path.display(),
                    e
                )))
                .into());
            }
        };

        tracing::info!(path = %path.display(), keys = entries.len(), "Opened JSON file store");
        Ok(Self {
            path,
            entries: RwLock::new(entries),
            write_lock: Mutex::new(()),
        })
    }

    /// Location of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn decode(path: &Path, bytes: &[u8]) -> Blue1Result<BTreeMap<String, JsonValue>> {
        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(BTreeMap::new());
        }
        serde_json::from_slice(bytes).map_err(|e| {
            StorageError::new(StorageErrorKind::Corrupt(format!(
                "{}: {}",
                path.display(),
                e
            )))
            .into()
        })
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }

    /// Write `document` to disk. Caller must hold `write_lock`.
    async fn persist(&self, document: &BTreeMap<&str, &JsonValue>) -> Blue1Result<()> {
        let bytes = serde_json::to_vec(document).map_err(|e| {
            StorageError::new(StorageErrorKind::Encode(e.to_string()))
        })?;

        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            tokio::fs::create_dir_all(parent).await.map_err(|e| {
                StorageError::new(StorageErrorKind::DirectoryCreation(format!(
                    "{}: {}",
                    parent.display(),
                    e
                )))
            })?;
        }

        let temp_path = self.temp_path();
        let write_err = |e: std::io::Error| {
            StorageError::new(StorageErrorKind::FileWrite(format!(
                "{}: {}",
                temp_path.display(),
                e
            )))
        };
        let mut file = tokio::fs::File::create(&temp_path).await.map_err(write_err)?;
        file.write_all(&bytes).await.map_err(write_err)?;
        file.sync_all().await.map_err(write_err)?;
        drop(file);

        tokio::fs::rename(&temp_path, &self.path).await.map_err(|e| {
            StorageError::new(StorageErrorKind::FileWrite(format!(
                "rename {} to {}: {}",
                temp_path.display(),
                self.path.display(),
                e
            )))
        })?;

        tracing::debug!(path = %self.path.display(), size = bytes.len(), "Persisted store");
        Ok(())
    }
}

#[async_trait::async_trait]
impl KeyValueStore for JsonFileStore {
    async fn get(&self, key: &str) -> Blue1Result<Option<JsonValue>> {
        Ok(self.entries.read().await.get(key).cloned())
    }

    #[tracing::instrument(skip(self, value), fields(path = %self.path.display()))]
    async fn put(&self, key: &str, value: JsonValue) -> Blue1Result<()> {
        let _guard = self.write_lock.lock().await;

        // Memory only changes once the new document is on disk.
        {
            let entries = self.entries.read().await;
            let mut document = borrowed(&entries);
            document.insert(key, &value);
            self.persist(&document).await?;
        }

        self.entries.write().await.insert(key.to_string(), value);
        Ok(())
    }

    #[tracing::instrument(skip(self), fields(path = %self.path.display()))]
    async fn remove(&self, key: &str) -> Blue1Result<Option<JsonValue>> {
        let _guard = self.write_lock.lock().await;

        {
            let entries = self.entries.read().await;
            if !entries.contains_key(key) {
                return Ok(None);
            }
            let mut document = borrowed(&entries);
            document.remove(key);
            self.persist(&document).await?;
        }

        Ok(self.entries.write().await.remove(key))
    }

    async fn len(&self) -> usize {
        self.entries.read().await.len()
    }
}

/// A view of `entries` that serializes identically without copying values.
fn borrowed(entries: &BTreeMap<String, JsonValue>) -> BTreeMap<&str, &JsonValue> {
    entries.iter().map(|(k, v)| (k.as_str(), v)).collect()
}
