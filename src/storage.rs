use crate::core::{KeyValueStore, RoomError};
use web_sys as web;

/// `window.localStorage` as a room backend.
pub struct LocalStorage {
    storage: web::Storage,
}

impl LocalStorage {
    pub fn open() -> anyhow::Result<Self> {
        let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
        let storage = window
            .local_storage()
            .map_err(|e| anyhow::anyhow!("localStorage error: {:?}", e))?
            .ok_or_else(|| anyhow::anyhow!("localStorage unavailable"))?;
        Ok(Self { storage })
    }
}

impl KeyValueStore for LocalStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, RoomError> {
        self.storage
            .get_item(key)
            .map_err(|e| RoomError::Storage(format!("{:?}", e)))
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<(), RoomError> {
        self.storage
            .set_item(key, value)
            .map_err(|e| RoomError::Storage(format!("{:?}", e)))
    }
}
