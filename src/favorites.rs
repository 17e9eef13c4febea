//! Per-application favorite shortcuts.
//!
//! Favorites are kept as `app id -> ordered shortcut ids` and rewritten in
//! full to [`FAVORITES_STORAGE_KEY`] after every toggle.

use std::collections::BTreeMap;

use tracing::{debug, error, info};

use crate::error::ResultExt;
use crate::storage::SharedStorage;
use crate::types::Shortcut;
use crate::watch::Watched;

pub const FAVORITES_STORAGE_KEY: &str = "adobe-keys-favorites";

/// Application id -> favorited shortcut ids, in the order they were added.
pub type FavoritesMap = BTreeMap<String, Vec<String>>;

/// Identifier for a shortcut within one application: `category.en-key`.
///
/// The English category label is used so the id does not change with the
/// UI language. No escaping is done, so a `-` inside the category or key
/// can make two shortcuts share an id.
pub fn generate_id(shortcut: &Shortcut) -> String {
    format!("{}-{}", shortcut.category.en, shortcut.key)
}

/// Parse persisted favorites. Anything that isn't `{string: [string]}` is
/// logged and yields `None`.
pub fn parse_favorites(stored: &str) -> Option<FavoritesMap> {
    match serde_json::from_str::<FavoritesMap>(stored) {
        Ok(map) => Some(map),
        Err(e) => {
            error!(error = %e, "Failed to parse favorites");
            None
        }
    }
}

#[derive(Debug)]
pub struct FavoritesStore {
    favorites: Watched<FavoritesMap>,
}

impl FavoritesStore {
    /// Restore favorites from storage and start persisting changes.
    pub fn new(storage: SharedStorage) -> Self {
        let initial = match storage.get_item(FAVORITES_STORAGE_KEY) {
            Some(stored) if !stored.is_empty() => match parse_favorites(&stored) {
                Some(map) => {
                    info!(app_count = map.len(), "Restored favorites");
                    map
                }
                None => FavoritesMap::new(),
            },
            _ => FavoritesMap::new(),
        };

        let mut favorites = Watched::new(initial);
        favorites.watch(move |map: &FavoritesMap| {
            if let Some(json) = serde_json::to_string(map).log_err() {
                storage.set_item(FAVORITES_STORAGE_KEY, &json).log_err();
            }
        });

        Self { favorites }
    }

    pub fn favorites(&self) -> &FavoritesMap {
        self.favorites.get()
    }

    /// Favorite ids for `app_id`, empty if none were recorded.
    pub fn get_favorites(&self, app_id: &str) -> &[String] {
        self.favorites
            .get()
            .get(app_id)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn is_favorite(&self, app_id: &str, id: &str) -> bool {
        self.get_favorites(app_id).iter().any(|fav| fav == id)
    }

    /// Remove `id` if it is a favorite of `app_id`, otherwise append it.
    ///
    /// Returns whether `id` is a favorite afterwards.
    pub fn toggle_favorite(&mut self, app_id: &str, id: &str) -> bool {
        let now_favorite = self.favorites.update(|map| {
            let ids = map.entry(app_id.to_string()).or_default();
            if ids.iter().any(|fav| fav == id) {
                ids.retain(|fav| fav != id);
                false
            } else {
                ids.push(id.to_string());
                true
            }
        });
        debug!(
            app_id = app_id,
            id = id,
            favorite = now_favorite,
            "Toggled favorite"
        );
        now_favorite
    }

    pub fn generate_id(&self, shortcut: &Shortcut) -> String {
        generate_id(shortcut)
    }
}
