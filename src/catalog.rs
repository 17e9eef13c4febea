//! Shortcut listing assembly for the app view.
//!
//! Turns a flat shortcut list into the sections shown on screen:
//! an optional FAVORITES section first, then one section per category in
//! first-appearance order. A search query narrows both.

use tracing::{debug, instrument};

use crate::favorites::generate_id;
use crate::locale::Locale;
use crate::types::{Shortcut, ShortcutGroup};

/// Application ids that have listings and home-page entries.
pub const KNOWN_APPS: [&str; 3] = ["ps", "ai", "pr"];

pub fn is_known_app(app_id: &str) -> bool {
    KNOWN_APPS.contains(&app_id)
}

/// Case-insensitive match of `query` against a shortcut's key and both
/// descriptions. A blank query matches everything.
pub fn matches_query(shortcut: &Shortcut, query: &str) -> bool {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return true;
    }
    [
        shortcut.key.as_str(),
        shortcut.description.en.as_str(),
        shortcut.description.zh.as_str(),
    ]
    .iter()
    .any(|text| text.to_lowercase().contains(&query))
}

pub fn search<'a>(shortcuts: &'a [Shortcut], query: &str) -> Vec<&'a Shortcut> {
    shortcuts
        .iter()
        .filter(|shortcut| matches_query(shortcut, query))
        .collect()
}

/// Group shortcuts by category, named in `locale`.
///
/// Categories are keyed by their English label so the grouping is the
/// same in both languages.
pub fn group_by_category<'a>(
    shortcuts: impl IntoIterator<Item = &'a Shortcut>,
    locale: Locale,
) -> Vec<ShortcutGroup> {
    let mut keys: Vec<&str> = Vec::new();
    let mut groups: Vec<ShortcutGroup> = Vec::new();

    for shortcut in shortcuts {
        let category = shortcut.category.en.as_str();
        match keys.iter().position(|k| *k == category) {
            Some(idx) => groups[idx].items.push(shortcut.clone()),
            None => {
                keys.push(category);
                groups.push(ShortcutGroup {
                    name: shortcut.category.get(locale).to_string(),
                    items: vec![shortcut.clone()],
                    is_favorites: false,
                });
            }
        }
    }
    groups
}

/// Synthetic group of favorited shortcuts, in favorites order.
///
/// Ids with no matching shortcut are skipped. `None` when nothing matches.
pub fn favorites_group<'a>(
    shortcuts: impl IntoIterator<Item = &'a Shortcut>,
    favorite_ids: &[String],
    label: &str,
) -> Option<ShortcutGroup> {
    let candidates: Vec<(String, &Shortcut)> = shortcuts
        .into_iter()
        .map(|shortcut| (generate_id(shortcut), shortcut))
        .collect();

    let items: Vec<Shortcut> = favorite_ids
        .iter()
        .filter_map(|id| {
            candidates
                .iter()
                .find(|(candidate, _)| candidate == id)
                .map(|(_, shortcut)| (*shortcut).clone())
        })
        .collect();

    if items.is_empty() {
        return None;
    }
    Some(ShortcutGroup {
        name: label.to_string(),
        items,
        is_favorites: true,
    })
}

/// Sections for an app listing: favorites (if any) then categories,
/// all restricted to shortcuts matching `query`.
#[instrument(level = "debug", skip_all, fields(query_len = query.len()))]
pub fn build_groups(
    shortcuts: &[Shortcut],
    favorite_ids: &[String],
    query: &str,
    locale: Locale,
    favorites_label: &str,
) -> Vec<ShortcutGroup> {
    let matching = search(shortcuts, query);

    let mut groups = Vec::new();
    if let Some(favorites) = favorites_group(matching.iter().copied(), favorite_ids, favorites_label) {
        groups.push(favorites);
    }
    groups.extend(group_by_category(matching.iter().copied(), locale));

    debug!(
        total = shortcuts.len(),
        matching = matching.len(),
        group_count = groups.len(),
        "Built shortcut groups"
    );
    groups
}
