//! adobe-keys - keyboard shortcut reference for creative applications
//!
//! This library provides the state behind the shortcut browser:
//! per-app favorites, UI language and target OS, each persisted through a
//! small key/value storage seam, plus the router and listing helpers the
//! command-line front end is built on.

pub mod catalog;
pub mod cli;
pub mod config;
pub mod context;
pub mod data;
pub mod error;
pub mod favorites;
pub mod locale;
pub mod logging;
pub mod os;
pub mod router;
pub mod storage;
pub mod types;
pub mod watch;

pub use context::AppContext;
pub use error::{AdobeKeysError, Result};
