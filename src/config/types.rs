//! Configuration type definitions

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use super::defaults::*;

/// User configuration, read from `config.json` (camelCase keys).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Storage file for favorites and locale (default: ~/.adobe-keys/storage.json)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub storage_path: Option<String>,
    /// Directory holding `<appId>.json` shortcut lists (default: ~/.adobe-keys/data)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_dir: Option<String>,
    /// Platform string used instead of the host's, e.g. "MacIntel"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub platform: Option<String>,
}

impl Config {
    /// Storage path with `~` expanded
    pub fn get_storage_path(&self) -> PathBuf {
        expand(self.storage_path.as_deref().unwrap_or(DEFAULT_STORAGE_PATH))
    }

    /// Data directory with `~` expanded
    pub fn get_data_dir(&self) -> PathBuf {
        expand(self.data_dir.as_deref().unwrap_or(DEFAULT_DATA_DIR))
    }

    /// Configured platform override, if any
    pub fn get_platform(&self) -> Option<&str> {
        self.platform.as_deref().filter(|p| !p.trim().is_empty())
    }
}

fn expand(path: &str) -> PathBuf {
    PathBuf::from(shellexpand::tilde(path).as_ref())
}
