//! Shared data types for shortcut listings.

use serde::{Deserialize, Serialize};

use crate::locale::Locale;

/// Text available in both UI languages.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LocalizedString {
    pub en: String,
    pub zh: String,
}

impl LocalizedString {
    pub fn new(en: impl Into<String>, zh: impl Into<String>) -> Self {
        Self {
            en: en.into(),
            zh: zh.into(),
        }
    }

    pub fn get(&self, locale: Locale) -> &str {
        match locale {
            Locale::En => &self.en,
            Locale::Zh => &self.zh,
        }
    }
}

/// A single keyboard shortcut as listed for an application.
///
/// `key` is platform-neutral text such as `Ctrl+S`; see
/// [`crate::os::OsStore::format_key`] for the macOS rendering.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Shortcut {
    pub key: String,
    pub description: LocalizedString,
    pub category: LocalizedString,
}

impl Shortcut {
    pub fn new(key: impl Into<String>, description: LocalizedString, category: LocalizedString) -> Self {
        Self {
            key: key.into(),
            description,
            category,
        }
    }
}

/// A named, ordered run of shortcuts as shown in one section of a listing.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShortcutGroup {
    pub name: String,
    pub items: Vec<Shortcut>,
    /// Set on the synthetic group built from the user's favorites.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub is_favorites: bool,
}
