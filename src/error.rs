use thiserror::Error;
use tracing::error;

/// Domain-specific errors for adobe-keys
#[derive(Error, Debug)]
pub enum AdobeKeysError {
    #[error("Storage operation failed for '{key}': {message}")]
    Storage { key: String, message: String },

    #[error("Failed to encode or decode JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Failed to load shortcut data from '{path}': {source}")]
    DataLoad {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Shortcut data in '{path}' is malformed: {source}")]
    DataParse {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("No route matches '{0}'")]
    UnknownRoute(String),

    #[error("Unknown application '{0}'")]
    UnknownApp(String),
}

impl AdobeKeysError {
    pub fn storage(key: impl Into<String>, message: impl std::fmt::Display) -> Self {
        Self::Storage {
            key: key.into(),
            message: message.to_string(),
        }
    }

    /// Short text suitable for printing to the user.
    pub fn user_message(&self) -> String {
        match self {
            Self::Storage { key, .. } => format!("Could not save '{}'", key),
            Self::Json(e) => format!("Invalid data format: {}", e),
            Self::DataLoad { path, .. } => format!("Could not read shortcuts from {}", path),
            Self::DataParse { path, .. } => format!("Shortcut file {} is not valid", path),
            Self::UnknownRoute(path) => format!("Nothing to show at {}", path),
            Self::UnknownApp(app) => format!("No shortcuts for '{}'", app),
        }
    }
}

pub type Result<T> = std::result::Result<T, AdobeKeysError>;

/// Extension trait for silent error logging with caller location tracking.
/// Use when the operation is recoverable and the user doesn't need to know.
///
/// # Examples
///
/// ```ignore
/// use adobe_keys::error::ResultExt;
///
/// storage.set_item(KEY, &json).log_err();
/// ```
pub trait ResultExt<T> {
    /// Log error with caller location and return None. Use for recoverable failures.
    fn log_err(self) -> Option<T>;
}

impl<T, E: std::fmt::Debug> ResultExt<T> for std::result::Result<T, E> {
    #[track_caller]
    fn log_err(self) -> Option<T> {
        match self {
            Ok(value) => Some(value),
            Err(error) => {
                let caller = std::panic::Location::caller();
                error!(
                    error = ?error,
                    file = caller.file(),
                    line = caller.line(),
                    "Operation failed"
                );
                None
            }
        }
    }
}
