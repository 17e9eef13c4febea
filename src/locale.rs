//! UI language selection and translation tables.
//!
//! The locale defaults to Chinese and is persisted as a bare token
//! (`zh` / `en`) under [`LOCALE_STORAGE_KEY`]. Any other stored text is
//! ignored.

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::error::ResultExt;
use crate::storage::SharedStorage;
use crate::watch::Watched;

pub const LOCALE_STORAGE_KEY: &str = "adobe-keys-locale";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    Zh,
    En,
}

impl Locale {
    pub fn as_str(&self) -> &'static str {
        match self {
            Locale::Zh => "zh",
            Locale::En => "en",
        }
    }

    /// Parse a persisted token. Only the exact tokens are accepted.
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "zh" => Some(Locale::Zh),
            "en" => Some(Locale::En),
            _ => None,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Locale::Zh => Locale::En,
            Locale::En => Locale::Zh,
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Short descriptions of the supported applications.
#[derive(Debug, PartialEq, Eq)]
pub struct AppMessages {
    pub ps: &'static str,
    pub ai: &'static str,
    pub pr: &'static str,
}

/// All UI strings for one language.
#[derive(Debug, PartialEq, Eq)]
pub struct Messages {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub back: &'static str,
    pub search_placeholder: &'static str,
    pub no_results: &'static str,
    pub clear_search: &'static str,
    pub loading: &'static str,
    pub error: &'static str,
    pub favorites: &'static str,
    pub apps: AppMessages,
}

impl Messages {
    pub fn for_locale(locale: Locale) -> &'static Messages {
        match locale {
            Locale::En => &MESSAGES_EN,
            Locale::Zh => &MESSAGES_ZH,
        }
    }

    pub fn app_description(&self, app_id: &str) -> Option<&'static str> {
        match app_id {
            "ps" => Some(self.apps.ps),
            "ai" => Some(self.apps.ai),
            "pr" => Some(self.apps.pr),
            _ => None,
        }
    }

    /// Every key paired with its text, dotted for nested keys.
    pub fn entries(&self) -> [(&'static str, &'static str); 12] {
        [
            ("title", self.title),
            ("subtitle", self.subtitle),
            ("back", self.back),
            ("searchPlaceholder", self.search_placeholder),
            ("noResults", self.no_results),
            ("clearSearch", self.clear_search),
            ("loading", self.loading),
            ("error", self.error),
            ("favorites", self.favorites),
            ("apps.ps", self.apps.ps),
            ("apps.ai", self.apps.ai),
            ("apps.pr", self.apps.pr),
        ]
    }
}

pub static MESSAGES_EN: Messages = Messages {
    title: "Master Your Workflow",
    subtitle: "Select an application to browse its keyboard shortcuts and boost your productivity.",
    back: "Back",
    search_placeholder: "Search for a command (e.g., \"Save\", \"Undo\")...",
    no_results: "No shortcuts found matching",
    clear_search: "Clear search",
    loading: "Loading...",
    error: "Failed to load shortcuts.",
    favorites: "Favorites",
    apps: AppMessages {
        ps: "Image Editing & Composition",
        ai: "Vector Graphics & Illustration",
        pr: "Video Editing & Production",
    },
};

pub static MESSAGES_ZH: Messages = Messages {
    title: "掌握高效工作流",
    subtitle: "选择一款应用查看其快捷键，助你事半功倍。",
    back: "返回",
    search_placeholder: "搜索功能（例如：\"保存\", \"撤销\"）...",
    no_results: "未找到匹配的快捷键",
    clear_search: "清空搜索",
    loading: "加载中...",
    error: "加载快捷键失败。",
    favorites: "我的收藏",
    apps: AppMessages {
        ps: "图像编辑与合成",
        ai: "矢量图形与插画",
        pr: "视频剪辑与制作",
    },
};

/// A translation key that is blank in one of the tables.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MissingTranslation {
    pub locale: Locale,
    pub key: &'static str,
}

/// Report keys whose text is empty in either language table.
pub fn audit_translations() -> Vec<MissingTranslation> {
    [Locale::En, Locale::Zh]
        .into_iter()
        .flat_map(|locale| {
            Messages::for_locale(locale)
                .entries()
                .into_iter()
                .filter(|(_, text)| text.trim().is_empty())
                .map(move |(key, _)| MissingTranslation { locale, key })
        })
        .collect()
}

/// Current UI language, persisted on every change.
#[derive(Debug)]
pub struct LocaleStore {
    locale: Watched<Locale>,
}

impl LocaleStore {
    /// Restore the locale from storage and start persisting changes.
    pub fn new(storage: SharedStorage) -> Self {
        let stored = storage.get_item(LOCALE_STORAGE_KEY);
        let initial = match stored.as_deref().map(Locale::from_token) {
            Some(Some(locale)) => {
                info!(locale = %locale, "Restored locale");
                locale
            }
            Some(None) => {
                debug!(stored = ?stored, "Ignoring unrecognized stored locale");
                Locale::default()
            }
            None => Locale::default(),
        };

        let mut locale = Watched::new(initial);
        locale.watch(move |value: &Locale| {
            storage.set_item(LOCALE_STORAGE_KEY, value.as_str()).log_err();
        });

        for missing in audit_translations() {
            warn!(locale = %missing.locale, key = missing.key, "Translation is empty");
        }

        Self { locale }
    }

    pub fn locale(&self) -> Locale {
        *self.locale.get()
    }

    pub fn toggle_locale(&mut self) {
        let next = self.locale().toggled();
        debug!(locale = %next, "Toggled locale");
        self.locale.set(next);
    }

    pub fn set_locale(&mut self, locale: Locale) {
        if self.locale() != locale {
            debug!(locale = %locale, "Set locale");
            self.locale.set(locale);
        }
    }

    /// Translation table for the current locale.
    pub fn t(&self) -> &'static Messages {
        Messages::for_locale(self.locale())
    }
}
