//! Shortcut datasets consumed by the app view.
//!
//! The stores only need keys and category labels from a dataset; where it
//! comes from is behind [`ShortcutSource`]. The CLI uses [`JsonDirSource`],
//! a directory of `<appId>.json` files each holding a JSON array of
//! shortcuts.

use std::path::PathBuf;

use tracing::{info, instrument};

use crate::error::{AdobeKeysError, Result};
use crate::types::Shortcut;

pub trait ShortcutSource {
    fn load(&self, app_id: &str) -> Result<Vec<Shortcut>>;
}

#[derive(Clone, Debug)]
pub struct JsonDirSource {
    dir: PathBuf,
}

impl JsonDirSource {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn path_for(&self, app_id: &str) -> PathBuf {
        self.dir.join(format!("{}.json", app_id))
    }
}

impl ShortcutSource for JsonDirSource {
    #[instrument(name = "shortcuts_load", skip(self))]
    fn load(&self, app_id: &str) -> Result<Vec<Shortcut>> {
        let path = self.path_for(app_id);
        let content = std::fs::read_to_string(&path).map_err(|source| {
            if source.kind() == std::io::ErrorKind::NotFound {
                AdobeKeysError::UnknownApp(app_id.to_string())
            } else {
                AdobeKeysError::DataLoad {
                    path: path.display().to_string(),
                    source,
                }
            }
        })?;
        let shortcuts: Vec<Shortcut> =
            serde_json::from_str(&content).map_err(|source| AdobeKeysError::DataParse {
                path: path.display().to_string(),
                source,
            })?;
        info!(app_id = app_id, count = shortcuts.len(), "Loaded shortcuts");
        Ok(shortcuts)
    }
}

/// Fixed in-memory dataset, keyed by app id.
#[derive(Clone, Debug, Default)]
pub struct StaticSource {
    apps: Vec<(String, Vec<Shortcut>)>,
}

impl StaticSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_app(mut self, app_id: impl Into<String>, shortcuts: Vec<Shortcut>) -> Self {
        self.apps.push((app_id.into(), shortcuts));
        self
    }
}

impl ShortcutSource for StaticSource {
    fn load(&self, app_id: &str) -> Result<Vec<Shortcut>> {
        self.apps
            .iter()
            .find(|(id, _)| id == app_id)
            .map(|(_, shortcuts)| shortcuts.clone())
            .ok_or_else(|| AdobeKeysError::UnknownApp(app_id.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::LocalizedString;
    use tempfile::tempdir;

    #[test]
    fn loads_app_file() {
        let dir = tempdir().unwrap();
        std::fs::write(
            dir.path().join("ps.json"),
            r#"[{"key": "Ctrl+J", "description": {"en": "Duplicate Layer", "zh": "复制图层"}, "category": {"en": "Layers", "zh": "图层"}}]"#,
        )
        .unwrap();

        let source = JsonDirSource::new(dir.path());
        let shortcuts = source.load("ps").unwrap();
        assert_eq!(shortcuts.len(), 1);
        assert_eq!(shortcuts[0].category.zh, "图层");
    }

    #[test]
    fn missing_file_is_unknown_app() {
        let dir = tempdir().unwrap();
        let err = JsonDirSource::new(dir.path()).load("xd").unwrap_err();
        assert!(matches!(err, AdobeKeysError::UnknownApp(app) if app == "xd"));
    }

    #[test]
    fn bad_json_is_reported() {
        let dir = tempdir().unwrap();
        std::fs::write(dir.path().join("ai.json"), "{").unwrap();
        let err = JsonDirSource::new(dir.path()).load("ai").unwrap_err();
        let expected_path = dir.path().join("ai.json").display().to_string();
        match &err {
            AdobeKeysError::DataParse { path, .. } => assert_eq!(path, &expected_path),
            other => panic!("Expected DataParse error, got {:?}", other),
        }
        assert!(err.to_string().contains(&expected_path));
        assert!(err.user_message().contains(&expected_path));
    }

    #[test]
    fn static_source_lookup() {
        let source = StaticSource::new().with_app(
            "pr",
            vec![Shortcut::new(
                "C",
                LocalizedString::new("Razor Tool", "剃刀工具"),
                LocalizedString::new("Tools", "工具"),
            )],
        );
        assert_eq!(source.load("pr").unwrap().len(), 1);
        assert!(source.load("ps").is_err());
    }
}
