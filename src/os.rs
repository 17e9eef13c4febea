//! Target operating system for key display.
//!
//! Shortcut data is written with Windows modifier names (`Ctrl+Alt+S`).
//! When the store is set to [`Os::Mac`] keys are shown with Mac names
//! (`Cmd+Opt+S`) or glyphs (`⌘ ⌥ S`). The OS is not persisted: it starts
//! as [`Os::Win`] and is seeded once by [`OsStore::init_os`].

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::watch::Watched;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Os {
    #[default]
    Win,
    Mac,
}

impl Os {
    pub fn as_str(&self) -> &'static str {
        match self {
            Os::Win => "win",
            Os::Mac => "mac",
        }
    }

    /// `Mac` when the platform string mentions `mac` in any case.
    pub fn from_platform(platform: &str) -> Self {
        if platform.to_lowercase().contains("mac") {
            Os::Mac
        } else {
            Os::Win
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Os::Win => Os::Mac,
            Os::Mac => Os::Win,
        }
    }
}

impl fmt::Display for Os {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Platform identifier for the running binary, in the style browsers report.
pub fn host_platform() -> String {
    #[cfg(target_os = "macos")]
    {
        "MacIntel".to_string()
    }
    #[cfg(target_os = "windows")]
    {
        "Win32".to_string()
    }
    #[cfg(not(any(target_os = "macos", target_os = "windows")))]
    {
        format!("Linux {}", std::env::consts::ARCH)
    }
}

#[derive(Debug, Default)]
pub struct OsStore {
    os: Watched<Os>,
}

impl OsStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn os(&self) -> Os {
        *self.os.get()
    }

    /// Pick the OS from a platform string such as `MacIntel` or `Win32`.
    pub fn init_os(&mut self, platform: &str) {
        let os = Os::from_platform(platform);
        info!(platform = platform, os = %os, "Detected OS");
        self.os.set(os);
    }

    pub fn toggle_os(&mut self) {
        let next = self.os().toggled();
        debug!(os = %next, "Toggled OS");
        self.os.set(next);
    }

    /// Rewrite modifier names for the current OS.
    ///
    /// On Mac every `Ctrl` becomes `Cmd` and every `Alt` becomes `Opt`.
    /// Matching is case-sensitive and also hits substrings (`Alternate`
    /// becomes `Opternate`).
    pub fn format_key(&self, key: &str) -> String {
        match self.os() {
            Os::Win => key.to_string(),
            Os::Mac => key.replace("Ctrl", "Cmd").replace("Alt", "Opt"),
        }
    }

    /// Glyph for a single modifier token on Mac; other tokens pass through.
    pub fn get_key_symbol(&self, token: &str) -> String {
        if self.os() == Os::Win {
            return token.to_string();
        }
        match token.to_lowercase().as_str() {
            "ctrl" | "cmd" => "⌘",
            "alt" | "opt" => "⌥",
            "shift" => "⇧",
            _ => return token.to_string(),
        }
        .to_string()
    }

    /// Split a combination on `+` and map each part through
    /// [`get_key_symbol`](Self::get_key_symbol), for keycap display.
    ///
    /// A `+` where a key is expected (`Ctrl++`) is the plus key itself.
    pub fn key_symbols(&self, key: &str) -> Vec<String> {
        let parts: Vec<&str> = key.split('+').map(str::trim).collect();
        let mut symbols = Vec::with_capacity(parts.len());

        let mut i = 0;
        while i < parts.len() {
            let part = parts[i];
            if !part.is_empty() {
                symbols.push(self.get_key_symbol(part));
            } else if parts.get(i + 1) == Some(&"") {
                symbols.push("+".to_string());
                i += 1;
            }
            i += 1;
        }
        symbols
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store(os: Os) -> OsStore {
        let mut store = OsStore::new();
        if os == Os::Mac {
            store.toggle_os();
        }
        store
    }

    #[test]
    fn starts_as_windows() {
        assert_eq!(OsStore::new().os(), Os::Win);
    }

    #[test]
    fn init_os_detects_mac_case_insensitively() {
        for platform in ["MacIntel", "macintosh", "MACPPC", "iMac"] {
            let mut store = OsStore::new();
            store.init_os(platform);
            assert_eq!(store.os(), Os::Mac, "platform {:?}", platform);
        }
        for platform in ["Win32", "Linux x86_64", "", "iPhone"] {
            let mut mac = store(Os::Mac);
            mac.init_os(platform);
            assert_eq!(mac.os(), Os::Win, "platform {:?}", platform);
        }
    }

    #[test]
    fn host_platform_matches_compile_target() {
        let os = Os::from_platform(&host_platform());
        assert_eq!(os == Os::Mac, cfg!(target_os = "macos"));
    }

    #[test]
    fn toggle_flips() {
        let mut store = OsStore::new();
        store.toggle_os();
        assert_eq!(store.os(), Os::Mac);
        store.toggle_os();
        assert_eq!(store.os(), Os::Win);
    }

    #[test]
    fn format_key_per_os() {
        assert_eq!(store(Os::Mac).format_key("Ctrl+Alt+S"), "Cmd+Opt+S");
        assert_eq!(store(Os::Win).format_key("Ctrl+Alt+S"), "Ctrl+Alt+S");
    }

    #[test]
    fn format_key_is_case_sensitive_and_hits_substrings() {
        let mac = store(Os::Mac);
        assert_eq!(mac.format_key("ctrl+alt+S"), "ctrl+alt+S");
        assert_eq!(mac.format_key("Alternate+Ctrl+Ctrl"), "Opternate+Cmd+Cmd");
        assert_eq!(mac.format_key("Shift+F1"), "Shift+F1");
    }

    #[test]
    fn key_symbols_on_mac() {
        let mac = store(Os::Mac);
        assert_eq!(mac.get_key_symbol("Shift"), "⇧");
        assert_eq!(mac.get_key_symbol("CTRL"), "⌘");
        assert_eq!(mac.get_key_symbol("Cmd"), "⌘");
        assert_eq!(mac.get_key_symbol("alt"), "⌥");
        assert_eq!(mac.get_key_symbol("Opt"), "⌥");
        assert_eq!(mac.get_key_symbol("F1"), "F1");
    }

    #[test]
    fn key_symbols_on_windows_pass_through() {
        let win = store(Os::Win);
        assert_eq!(win.get_key_symbol("Shift"), "Shift");
        assert_eq!(win.get_key_symbol("F1"), "F1");
    }

    #[test]
    fn key_symbols_split_combination() {
        assert_eq!(store(Os::Mac).key_symbols("Ctrl+Shift+S"), ["⌘", "⇧", "S"]);
        assert_eq!(store(Os::Win).key_symbols("Ctrl + S"), ["Ctrl", "S"]);
    }

    #[test]
    fn key_symbols_keep_plus_key() {
        let mac = store(Os::Mac);
        assert_eq!(mac.key_symbols("Ctrl++"), ["⌘", "+"]);
        assert_eq!(mac.key_symbols("Ctrl+Shift++"), ["⌘", "⇧", "+"]);
        assert_eq!(mac.key_symbols("+"), ["+"]);
        assert_eq!(store(Os::Win).key_symbols("Ctrl++"), ["Ctrl", "+"]);
        assert_eq!(mac.key_symbols("Ctrl+-"), ["⌘", "-"]);
    }
}
