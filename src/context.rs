//! Application-wide state, built once at startup.

use crate::favorites::FavoritesStore;
use crate::locale::LocaleStore;
use crate::os::OsStore;
use crate::storage::SharedStorage;

/// Owns the favorites, locale and OS stores for the whole session.
///
/// Construct one at startup and pass it to whatever needs the stores.
#[derive(Debug)]
pub struct AppContext {
    favorites: FavoritesStore,
    locale: LocaleStore,
    os: OsStore,
}

impl AppContext {
    /// Restore favorites and locale from `storage`. The OS stays at its
    /// default until [`OsStore::init_os`] is called.
    pub fn new(storage: SharedStorage) -> Self {
        Self {
            favorites: FavoritesStore::new(storage.clone()),
            locale: LocaleStore::new(storage),
            os: OsStore::new(),
        }
    }

    /// Like [`AppContext::new`], then seed the OS from `platform`.
    pub fn with_platform(storage: SharedStorage, platform: &str) -> Self {
        let mut ctx = Self::new(storage);
        ctx.os.init_os(platform);
        ctx
    }

    pub fn favorites(&self) -> &FavoritesStore {
        &self.favorites
    }

    pub fn favorites_mut(&mut self) -> &mut FavoritesStore {
        &mut self.favorites
    }

    pub fn locale(&self) -> &LocaleStore {
        &self.locale
    }

    pub fn locale_mut(&mut self) -> &mut LocaleStore {
        &mut self.locale
    }

    pub fn os(&self) -> &OsStore {
        &self.os
    }

    pub fn os_mut(&mut self) -> &mut OsStore {
        &mut self.os
    }
}
