//! In-memory platform for tests and headless runs
//!
//! Every provider is cheaply cloneable and shares its state between clones, so
//! a test can keep a handle and observe or steer what the `Platform` sees.

use std::collections::{HashMap, VecDeque};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

use crate::ports::outbound::platform::{RandomProvider, StorageProvider, TimeProvider};
use crate::state::Platform;

/// Key-value storage held in a shared map
#[derive(Clone, Default)]
pub struct InMemoryStorageProvider {
    values: Arc<Mutex<HashMap<String, String>>>,
}

impl InMemoryStorageProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Keys currently stored, sorted
    pub fn keys(&self) -> Vec<String> {
        let mut keys: Vec<String> = match self.values.lock() {
            Ok(guard) => guard.keys().cloned().collect(),
            Err(_) => Vec::new(),
        };
        keys.sort();
        keys
    }
}

impl StorageProvider for InMemoryStorageProvider {
    fn save(&self, key: &str, value: &str) {
        if let Ok(mut guard) = self.values.lock() {
            guard.insert(key.to_string(), value.to_string());
        }
    }

    fn load(&self, key: &str) -> Option<String> {
        self.values.lock().ok()?.get(key).cloned()
    }

    fn remove(&self, key: &str) {
        if let Ok(mut guard) = self.values.lock() {
            guard.remove(key);
        }
    }
}

/// Random provider that replays queued values, then falls back to `min`
///
/// Queued values are clamped into the requested range.
#[derive(Clone, Default)]
pub struct ScriptedRandomProvider {
    queue: Arc<Mutex<VecDeque<i32>>>,
}

impl ScriptedRandomProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&self, value: i32) {
        if let Ok(mut queue) = self.queue.lock() {
            queue.push_back(value);
        }
    }

    pub fn push_all(&self, values: impl IntoIterator<Item = i32>) {
        for value in values {
            self.push(value);
        }
    }
}

impl RandomProvider for ScriptedRandomProvider {
    fn random_range(&self, min: i32, max: i32) -> i32 {
        let next = self.queue.lock().ok().and_then(|mut q| q.pop_front());
        next.unwrap_or(min).clamp(min, max.max(min))
    }
}

/// Settable clock
#[derive(Clone, Default)]
pub struct FixedTimeProvider {
    millis: Arc<AtomicU64>,
}

impl FixedTimeProvider {
    pub fn new(millis: u64) -> Self {
        Self {
            millis: Arc::new(AtomicU64::new(millis)),
        }
    }

    pub fn set(&self, millis: u64) {
        self.millis.store(millis, Ordering::SeqCst);
    }

    pub fn advance(&self, millis: u64) {
        self.millis.fetch_add(millis, Ordering::SeqCst);
    }
}

impl TimeProvider for FixedTimeProvider {
    fn now_millis(&self) -> u64 {
        self.millis.load(Ordering::SeqCst)
    }
}

/// Handles to the providers inside a mock `Platform`
#[derive(Clone)]
pub struct MockPlatformHandles {
    pub time: FixedTimeProvider,
    pub random: ScriptedRandomProvider,
    pub storage: InMemoryStorageProvider,
}

/// Build a `Platform` over in-memory providers
pub fn create_mock_platform() -> (Platform, MockPlatformHandles) {
    let handles = MockPlatformHandles {
        time: FixedTimeProvider::new(0),
        random: ScriptedRandomProvider::new(),
        storage: InMemoryStorageProvider::new(),
    };
    let platform = Platform::new(
        handles.time.clone(),
        handles.random.clone(),
        handles.storage.clone(),
    );
    (platform, handles)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scripted_random_replays_then_defaults() {
        let random = ScriptedRandomProvider::new();
        random.push_all([3, 42]);

        assert_eq!(random.random_range(0, 5), 3);
        assert_eq!(random.random_range(0, 5), 5);
        assert_eq!(random.random_range(2, 5), 2);
    }

    #[test]
    fn clones_share_state() {
        let storage = InMemoryStorageProvider::new();
        storage.clone().save("a", "1");
        assert_eq!(storage.load("a").as_deref(), Some("1"));
        assert_eq!(storage.keys(), vec!["a".to_string()]);

        let time = FixedTimeProvider::new(10);
        time.clone().advance(5);
        assert_eq!(time.now_millis(), 15);
    }
}
