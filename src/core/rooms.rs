use super::defaults::STORAGE_KEY;
use super::settings::RoomSettings;
use std::collections::BTreeMap;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RoomError {
    #[error("room name must not be empty")]
    EmptyName,
    #[error("room not found: {0}")]
    NotFound(String),
    #[error("storage error: {0}")]
    Storage(String),
    #[error("stored rooms are not valid JSON: {0}")]
    Codec(#[from] serde_json::Error),
}

/// String key/value backend; local storage in the browser.
pub trait KeyValueStore {
    fn get_item(&self, key: &str) -> Result<Option<String>, RoomError>;
    fn set_item(&mut self, key: &str, value: &str) -> Result<(), RoomError>;
}

/// In-memory backend.
#[cfg_attr(target_arch = "wasm32", allow(dead_code))]
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    items: BTreeMap<String, String>,
}

#[cfg_attr(target_arch = "wasm32", allow(dead_code))]
impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_item(key: &str, value: &str) -> Self {
        let mut store = Self::default();
        store.items.insert(key.to_string(), value.to_string());
        store
    }

    pub fn raw(&self, key: &str) -> Option<&str> {
        self.items.get(key).map(String::as_str)
    }
}

impl KeyValueStore for MemoryStore {
    fn get_item(&self, key: &str) -> Result<Option<String>, RoomError> {
        Ok(self.items.get(key).cloned())
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<(), RoomError> {
        self.items.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

pub type RoomMap = BTreeMap<String, RoomSettings>;

/// Named room snapshots kept as one JSON object under [`STORAGE_KEY`].
///
/// Every operation re-reads the backend so edits made elsewhere (another tab)
/// are picked up rather than overwritten from a stale copy.
pub struct RoomStore<S> {
    backend: S,
}

impl<S: KeyValueStore> RoomStore<S> {
    pub fn new(backend: S) -> Self {
        Self { backend }
    }

    #[cfg_attr(target_arch = "wasm32", allow(dead_code))]
    pub fn backend(&self) -> &S {
        &self.backend
    }

    pub fn read_all(&self) -> Result<RoomMap, RoomError> {
        match self.backend.get_item(STORAGE_KEY)? {
            Some(raw) if !raw.trim().is_empty() => Ok(serde_json::from_str(&raw)?),
            _ => Ok(RoomMap::new()),
        }
    }

    fn write_all(&mut self, rooms: &RoomMap) -> Result<(), RoomError> {
        let raw = serde_json::to_string(rooms)?;
        self.backend.set_item(STORAGE_KEY, &raw)
    }

    /// Store `settings` under the trimmed `name`, overwriting any previous entry.
    /// Returns the name actually used.
    pub fn save(&mut self, name: &str, settings: RoomSettings) -> Result<String, RoomError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(RoomError::EmptyName);
        }
        let mut rooms = self.read_all()?;
        rooms.insert(name.to_string(), settings);
        self.write_all(&rooms)?;
        log::info!("[rooms] saved room: {}", name);
        Ok(name.to_string())
    }

    pub fn load(&self, name: &str) -> Result<RoomSettings, RoomError> {
        self.read_all()?
            .get(name)
            .copied()
            .ok_or_else(|| RoomError::NotFound(name.to_string()))
    }

    /// Remove `name`; returns whether an entry existed.
    pub fn delete(&mut self, name: &str) -> Result<bool, RoomError> {
        let mut rooms = self.read_all()?;
        let removed = rooms.remove(name).is_some();
        if removed {
            self.write_all(&rooms)?;
            log::info!("[rooms] deleted room: {}", name);
        }
        Ok(removed)
    }

    /// Saved room names in sorted order.
    pub fn names(&self) -> Result<Vec<String>, RoomError> {
        Ok(self.read_all()?.into_keys().collect())
    }
}
