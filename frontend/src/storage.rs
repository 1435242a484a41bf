use gloo_utils::window;
use wasm_bindgen::JsValue;
use web_sys::Storage;
use workout_tracker_lib::{
    persistence::{KeyValueStore, MemoryStore},
    Result, TrackerError,
};

/// `localStorage`, or an in-memory stand in when the browser refuses access
/// (private mode, disabled storage). Workouts then last for the page only.
pub enum BrowserStorage {
    Local(Storage),
    Ephemeral(MemoryStore),
}

impl BrowserStorage {
    pub fn local() -> Result<Self> {
        window()
            .local_storage()
            .map_err(|err| js_error("localStorage unavailable", err))?
            .map(Self::Local)
            .ok_or_else(|| TrackerError::storage("localStorage unavailable"))
    }

    pub fn ephemeral() -> Self {
        Self::Ephemeral(MemoryStore::new())
    }
}

impl KeyValueStore for BrowserStorage {
    fn get(&self, key: &str) -> Result<Option<String>> {
        match self {
            Self::Local(storage) => storage.get_item(key).map_err(|err| js_error("read failed", err)),
            Self::Ephemeral(memory) => memory.get(key),
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        match self {
            Self::Local(storage) => storage.set_item(key, value).map_err(|err| js_error("write failed", err)),
            Self::Ephemeral(memory) => memory.set(key, value),
        }
    }

    fn remove(&self, key: &str) -> Result<()> {
        match self {
            Self::Local(storage) => storage.remove_item(key).map_err(|err| js_error("remove failed", err)),
            Self::Ephemeral(memory) => memory.remove(key),
        }
    }
}

fn js_error(context: &str, err: JsValue) -> TrackerError {
    TrackerError::storage(format!("{context}: {err:?}"))
}
