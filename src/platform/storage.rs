use crate::error::GameError;
use crate::state::leaderboard::{KeyValueStore, MemoryStore};
use crate::util::clog;

pub struct LocalStorage {
    storage: web_sys::Storage,
}

impl LocalStorage {
    pub fn open() -> Option<Self> {
        let storage = web_sys::window()?.local_storage().ok().flatten()?;
        Some(Self { storage })
    }
}

impl KeyValueStore for LocalStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.storage.get_item(key).ok().flatten()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), GameError> {
        self.storage
            .set_item(key, value)
            .map_err(|e| GameError::ResourceUnavailable {
                resource: "localStorage",
                detail: format!("{:?}", e),
            })
    }
}

/// `localStorage` when the page may use it, otherwise a store that lasts for
/// this page load only.
pub fn browser_store() -> Box<dyn KeyValueStore> {
    match LocalStorage::open() {
        Some(s) => Box::new(s),
        None => {
            clog("localStorage unavailable, scores will not persist");
            Box::new(MemoryStore::default())
        }
    }
}
