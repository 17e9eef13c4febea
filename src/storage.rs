//! String key/value persistence shared by the stores.
//!
//! Mirrors the browser's `localStorage`: string keys, string values,
//! synchronous reads and writes. Two backends:
//! - [`MemoryStorage`] - process-local, used by tests and `--ephemeral` runs
//! - [`FileStorage`] - one JSON object on disk (~/.adobe-keys/storage.json)

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use parking_lot::Mutex;
use tracing::{debug, info, instrument, warn};

use crate::error::{AdobeKeysError, Result};

/// Synchronous string key/value store.
pub trait LocalStorage: Send + Sync {
    /// Read the value stored under `key`, if any.
    fn get_item(&self, key: &str) -> Option<String>;
    /// Replace the value stored under `key`.
    fn set_item(&self, key: &str, value: &str) -> Result<()>;
}

/// Storage handle shared between stores.
pub type SharedStorage = Arc<dyn LocalStorage>;

#[derive(Debug, Default)]
pub struct MemoryStorage {
    items: Mutex<BTreeMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn shared() -> SharedStorage {
        Arc::new(Self::new())
    }
}

impl LocalStorage for MemoryStorage {
    fn get_item(&self, key: &str) -> Option<String> {
        self.items.lock().get(key).cloned()
    }

    fn set_item(&self, key: &str, value: &str) -> Result<()> {
        self.items.lock().insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Storage backed by a single JSON file (`{"key": "value", ...}`).
///
/// The file is read once on open. Every write rewrites the whole file
/// (write temp + rename).
#[derive(Debug)]
pub struct FileStorage {
    items: Mutex<BTreeMap<String, String>>,
    file_path: PathBuf,
}

impl FileStorage {
    /// Open the storage file at `path`, starting empty if it doesn't exist.
    ///
    /// A file that isn't a JSON object of strings is logged and ignored; it
    /// is replaced on the next write.
    #[instrument(name = "storage_open")]
    pub fn open(path: &Path) -> Self {
        let items = match std::fs::read_to_string(path) {
            Ok(content) => match serde_json::from_str::<BTreeMap<String, String>>(&content) {
                Ok(items) => {
                    info!(path = %path.display(), item_count = items.len(), "Loaded storage file");
                    items
                }
                Err(e) => {
                    warn!(path = %path.display(), error = %e, "Storage file is not valid, starting empty");
                    BTreeMap::new()
                }
            },
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                info!(path = %path.display(), "Storage file not found, starting fresh");
                BTreeMap::new()
            }
            Err(e) => {
                warn!(path = %path.display(), error = %e, "Failed to read storage file, starting empty");
                BTreeMap::new()
            }
        };

        Self {
            items: Mutex::new(items),
            file_path: path.to_path_buf(),
        }
    }

    pub fn shared(path: &Path) -> SharedStorage {
        Arc::new(Self::open(path))
    }

    fn flush(&self, key: &str, items: &BTreeMap<String, String>) -> Result<()> {
        if let Some(parent) = self.file_path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| AdobeKeysError::storage(key, e))?;
        }

        let json = serde_json::to_string_pretty(items)?;
        let temp_path = self.file_path.with_extension("json.tmp");

        std::fs::write(&temp_path, &json).map_err(|e| AdobeKeysError::storage(key, e))?;
        std::fs::rename(&temp_path, &self.file_path).map_err(|e| AdobeKeysError::storage(key, e))?;

        debug!(
            path = %self.file_path.display(),
            key = key,
            bytes = json.len(),
            "Wrote storage file"
        );
        Ok(())
    }
}

impl LocalStorage for FileStorage {
    fn get_item(&self, key: &str) -> Option<String> {
        self.items.lock().get(key).cloned()
    }

    fn set_item(&self, key: &str, value: &str) -> Result<()> {
        let mut items = self.items.lock();
        items.insert(key.to_string(), value.to_string());
        self.flush(key, &items)
    }
}

/// Storage whose writes always fail; reads see nothing.
#[cfg(test)]
#[derive(Debug, Default)]
pub(crate) struct FailingStorage;

#[cfg(test)]
impl FailingStorage {
    pub(crate) fn shared() -> SharedStorage {
        Arc::new(Self)
    }
}

#[cfg(test)]
impl LocalStorage for FailingStorage {
    fn get_item(&self, _key: &str) -> Option<String> {
        None
    }

    fn set_item(&self, key: &str, _value: &str) -> Result<()> {
        Err(AdobeKeysError::storage(key, "disk full"))
    }
}
