//! Platform DI Container
//!
//! This module provides the `Platform` struct - a dependency injection container
//! that aggregates all platform-specific service implementations behind port traits.
//!
//! Usage:
//! - Created by `create_platform()` in platform/desktop.rs or platform/wasm.rs,
//!   or by `create_mock_platform()` in tests
//! - Handed to application services through `storage_adapter()` and
//!   `random_adapter()`

use std::sync::Arc;

use kidsapp_domain::ActivityId;

use crate::ports::outbound::{RandomProvider, StorageProvider, TimeProvider};

/// Unified platform services container
///
/// Provides all platform abstractions through a single injectable type.
#[derive(Clone)]
pub struct Platform {
    time: Arc<dyn TimeProviderDyn>,
    random: Arc<dyn RandomProviderDyn>,
    storage: Arc<dyn StorageProviderDyn>,
}

// =============================================================================
// Dynamic trait versions for Arc storage
// =============================================================================

trait TimeProviderDyn: Send + Sync {
    fn now_millis(&self) -> u64;
}

trait RandomProviderDyn: Send + Sync {
    fn random_range(&self, min: i32, max: i32) -> i32;
}

trait StorageProviderDyn: Send + Sync {
    fn save(&self, key: &str, value: &str);
    fn load(&self, key: &str) -> Option<String>;
    fn remove(&self, key: &str);
}

// =============================================================================
// Blanket implementations - convert port traits to dyn-safe wrappers
// =============================================================================

impl<T: TimeProvider + Send + Sync> TimeProviderDyn for T {
    fn now_millis(&self) -> u64 {
        TimeProvider::now_millis(self)
    }
}

impl<T: RandomProvider + Send + Sync> RandomProviderDyn for T {
    fn random_range(&self, min: i32, max: i32) -> i32 {
        RandomProvider::random_range(self, min, max)
    }
}

impl<T: StorageProvider + Send + Sync> StorageProviderDyn for T {
    fn save(&self, key: &str, value: &str) {
        StorageProvider::save(self, key, value)
    }
    fn load(&self, key: &str) -> Option<String> {
        StorageProvider::load(self, key)
    }
    fn remove(&self, key: &str) {
        StorageProvider::remove(self, key)
    }
}

// =============================================================================
// Platform implementation
// =============================================================================

impl Platform {
    /// Create a new Platform with the given providers
    pub fn new<Tm, R, S>(time: Tm, random: R, storage: S) -> Self
    where
        Tm: TimeProvider + Send + Sync,
        R: RandomProvider + Send + Sync,
        S: StorageProvider + Send + Sync,
    {
        Self {
            time: Arc::new(time),
            random: Arc::new(random),
            storage: Arc::new(storage),
        }
    }

    // -------------------------------------------------------------------------
    // Time operations
    // -------------------------------------------------------------------------

    /// Get current time in milliseconds since epoch
    pub fn now_millis(&self) -> u64 {
        self.time.now_millis()
    }

    // -------------------------------------------------------------------------
    // Random operations
    // -------------------------------------------------------------------------

    /// Generate random i32 in range [min, max] (inclusive)
    pub fn random_range(&self, min: i32, max: i32) -> i32 {
        self.random.random_range(min, max)
    }

    /// Get a RandomProvider adapter for use with application services
    pub fn random_adapter(&self) -> PlatformRandomAdapter {
        PlatformRandomAdapter {
            platform: self.clone(),
        }
    }

    // -------------------------------------------------------------------------
    // Storage operations
    // -------------------------------------------------------------------------

    /// Save a string value with the given key
    pub fn storage_save(&self, key: &str, value: &str) {
        self.storage.save(key, value)
    }

    /// Load a string value by key, returns None if not found
    pub fn storage_load(&self, key: &str) -> Option<String> {
        self.storage.load(key)
    }

    /// Remove a value by key
    pub fn storage_remove(&self, key: &str) {
        self.storage.remove(key)
    }

    /// Get a StorageProvider adapter for use with application services
    ///
    /// This allows the store adapters and services to use Platform's storage
    /// without exposing internal implementation details.
    ///
    /// # Example
    /// ```ignore
    /// let custom = CustomActivitiesStorage::new(platform.storage_adapter());
    /// let activities = custom.read_custom();
    /// ```
    pub fn storage_adapter(&self) -> PlatformStorageAdapter {
        PlatformStorageAdapter {
            platform: self.clone(),
        }
    }

    // -------------------------------------------------------------------------
    // Identity operations (convenience method)
    // -------------------------------------------------------------------------

    /// Fresh id for a parent-created activity: `custom-<millis>-<uuid>`.
    pub fn new_custom_activity_id(&self) -> ActivityId {
        ActivityId::new(format!(
            "custom-{}-{}",
            self.now_millis(),
            uuid::Uuid::new_v4().simple()
        ))
    }
}

// =============================================================================
// Adapters for application services
// =============================================================================

/// Adapter that allows application services to use Platform's storage
///
/// This implements the StorageProvider port trait, delegating to Platform's
/// internal storage.
#[derive(Clone)]
pub struct PlatformStorageAdapter {
    platform: Platform,
}

impl StorageProvider for PlatformStorageAdapter {
    fn save(&self, key: &str, value: &str) {
        self.platform.storage_save(key, value)
    }

    fn load(&self, key: &str) -> Option<String> {
        self.platform.storage_load(key)
    }

    fn remove(&self, key: &str) {
        self.platform.storage_remove(key)
    }
}

/// Adapter that allows application services to use Platform's randomness
#[derive(Clone)]
pub struct PlatformRandomAdapter {
    platform: Platform,
}

impl RandomProvider for PlatformRandomAdapter {
    fn random_range(&self, min: i32, max: i32) -> i32 {
        self.platform.random_range(min, max)
    }
}

#[cfg(test)]
mod tests {
    use crate::infrastructure::platform::mock::create_mock_platform;
    use crate::ports::outbound::StorageProvider;

    #[test]
    fn storage_adapter_shares_platform_storage() {
        let (platform, _handles) = create_mock_platform();
        let adapter = platform.storage_adapter();

        adapter.save("k", "v");
        assert_eq!(platform.storage_load("k").as_deref(), Some("v"));

        platform.storage_remove("k");
        assert_eq!(adapter.load("k"), None);
    }

    #[test]
    fn custom_ids_carry_time_and_are_unique() {
        let (platform, handles) = create_mock_platform();
        handles.time.set(1_700_000_000_000);

        let first = platform.new_custom_activity_id();
        let second = platform.new_custom_activity_id();

        assert!(first.as_str().starts_with("custom-1700000000000-"));
        assert_ne!(first, second);
    }
}
