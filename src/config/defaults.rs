//! Default configuration values

/// Where the config file is looked up when no path is given
pub const DEFAULT_CONFIG_PATH: &str = "~/.adobe-keys/config.json";

/// Backing file for favorites and locale
pub const DEFAULT_STORAGE_PATH: &str = "~/.adobe-keys/storage.json";

/// Directory of `<appId>.json` shortcut lists
pub const DEFAULT_DATA_DIR: &str = "~/.adobe-keys/data";
