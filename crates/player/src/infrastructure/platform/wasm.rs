//! WASM platform implementations
//!
//! Browser-backed providers. Handles to `localStorage` are not `Send`, so the
//! storage provider looks the store up on every call instead of holding it.

use crate::config::PlayerConfig;
use crate::ports::outbound::platform::{RandomProvider, StorageProvider, TimeProvider};
use crate::state::Platform;

/// WASM time provider using `Date.now()`
#[derive(Clone, Default)]
pub struct WasmTimeProvider;

impl TimeProvider for WasmTimeProvider {
    fn now_millis(&self) -> u64 {
        js_sys::Date::now() as u64
    }
}

/// WASM random provider using `Math.random()`
#[derive(Clone, Default)]
pub struct WasmRandomProvider;

impl RandomProvider for WasmRandomProvider {
    fn random_range(&self, min: i32, max: i32) -> i32 {
        if max <= min {
            return min;
        }
        let span = (max as i64 - min as i64 + 1) as f64;
        let offset = (js_sys::Math::random() * span).floor() as i64;
        (min as i64 + offset).min(max as i64) as i32
    }
}

/// WASM storage provider backed by `window.localStorage`
#[derive(Clone, Default)]
pub struct WasmStorageProvider;

impl WasmStorageProvider {
    fn local_storage() -> Option<web_sys::Storage> {
        match web_sys::window().map(|w| w.local_storage()) {
            Some(Ok(Some(storage))) => Some(storage),
            _ => {
                tracing::error!("localStorage is unavailable");
                None
            }
        }
    }
}

impl StorageProvider for WasmStorageProvider {
    fn save(&self, key: &str, value: &str) {
        if let Some(storage) = Self::local_storage() {
            if let Err(e) = storage.set_item(key, value) {
                tracing::error!("Failed to write localStorage key {}: {:?}", key, e);
            }
        }
    }

    fn load(&self, key: &str) -> Option<String> {
        let storage = Self::local_storage()?;
        match storage.get_item(key) {
            Ok(value) => value,
            Err(e) => {
                tracing::error!("Failed to read localStorage key {}: {:?}", key, e);
                None
            }
        }
    }

    fn remove(&self, key: &str) {
        if let Some(storage) = Self::local_storage() {
            if let Err(e) = storage.remove_item(key) {
                tracing::error!("Failed to remove localStorage key {}: {:?}", key, e);
            }
        }
    }
}

/// Create platform services for the browser
///
/// The storage path override has no meaning here and is ignored.
pub fn create_platform(_config: &PlayerConfig) -> Platform {
    Platform::new(WasmTimeProvider, WasmRandomProvider, WasmStorageProvider)
}
