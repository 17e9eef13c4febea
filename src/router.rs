//! Two static routes: `/` (home) and `/:appId` (shortcut listing).

use std::fmt;

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Route {
    Home,
    Shortcut { app_id: String },
}

impl Route {
    /// Match a path. `/` is home; a single non-empty segment is an app
    /// listing. A trailing slash is tolerated; anything deeper is unmatched.
    pub fn resolve(path: &str) -> Option<Route> {
        let rest = path.strip_prefix('/')?;
        if rest.is_empty() {
            return Some(Route::Home);
        }

        let trimmed = rest.strip_suffix('/').unwrap_or(rest);
        if trimmed.is_empty() || trimmed.contains('/') {
            return None;
        }
        Some(Route::Shortcut {
            app_id: trimmed.to_string(),
        })
    }

    pub fn name(&self) -> &'static str {
        match self {
            Route::Home => "home",
            Route::Shortcut { .. } => "shortcut",
        }
    }

    pub fn path(&self) -> String {
        match self {
            Route::Home => "/".to_string(),
            Route::Shortcut { app_id } => format!("/{}", app_id),
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.path(), self.name())
    }
}
