use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use portugalex_wizard_core::{PortError, ProofCachePort};

/// In-memory stand-in for the browser's localStorage: a shared string
/// key-value store the demo wallet writes into and the wizard polls.
/// Cloning yields another handle onto the same store.
#[derive(Debug, Clone, Default)]
pub struct MemoryCacheAdapter {
    entries: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryCacheAdapter {
    pub fn in_memory() -> Self {
        Self::default()
    }

    pub fn set(&self, key: &str, value: &str) -> Result<(), PortError> {
        self.lock()?.insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    pub fn remove(&self, key: &str) -> Result<(), PortError> {
        self.lock()?.remove(key);
        Ok(())
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, HashMap<String, String>>, PortError> {
        self.entries
            .lock()
            .map_err(|_| PortError::Transport("cache store poisoned".to_owned()))
    }
}

impl ProofCachePort for MemoryCacheAdapter {
    fn read(&self, key: &str) -> Result<Option<String>, PortError> {
        Ok(self.lock()?.get(key).cloned())
    }
}

/// Reads the real browser localStorage, where the wallet SDK keeps its SIWX
/// record when the demo runs on the web.
#[cfg(target_arch = "wasm32")]
#[derive(Debug, Clone, Default)]
pub struct LocalStorageCacheAdapter;

#[cfg(target_arch = "wasm32")]
impl ProofCachePort for LocalStorageCacheAdapter {
    fn read(&self, key: &str) -> Result<Option<String>, PortError> {
        let window =
            web_sys::window().ok_or_else(|| PortError::Transport("no window".to_owned()))?;
        let storage = window
            .local_storage()
            .map_err(|_| PortError::Transport("localStorage unavailable".to_owned()))?
            .ok_or_else(|| PortError::Transport("localStorage disabled".to_owned()))?;
        storage
            .get_item(key)
            .map_err(|_| PortError::Transport(format!("localStorage read failed: {key}")))
    }
}
