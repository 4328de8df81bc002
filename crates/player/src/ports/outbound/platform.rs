//! Platform abstraction ports for cross-platform compatibility
//!
//! These traits abstract platform-specific operations so that:
//! 1. Application code remains platform-agnostic
//! 2. Platform-specific code is isolated in infrastructure
//! 3. Code becomes easily testable with in-memory implementations
//!
//! NOTE: The `Platform` struct (DI container) that aggregates these traits
//! lives in `state/platform.rs`, not here.
//! Ports layer contains only trait definitions.

/// Time operations abstraction
pub trait TimeProvider: Clone + 'static {
    /// Get current time in milliseconds since epoch
    fn now_millis(&self) -> u64;
}

/// Random number generation abstraction
pub trait RandomProvider: Clone + 'static {
    /// Generate random i32 in range [min, max] (inclusive)
    fn random_range(&self, min: i32, max: i32) -> i32;
}

/// Persistent storage abstraction (localStorage/file-based)
pub trait StorageProvider: Clone + 'static {
    /// Save a string value with the given key
    fn save(&self, key: &str, value: &str);

    /// Load a string value by key, returns None if not found
    fn load(&self, key: &str) -> Option<String>;

    /// Remove a value by key
    fn remove(&self, key: &str);
}

/// Storage key constants
///
/// These are kept in the ports layer as they define the contract for
/// what keys are used across the application. The values match what earlier
/// releases wrote, so existing data keeps loading.
pub mod storage_keys {
    pub const CUSTOM_ACTIVITIES: &str = "kidsapp_custom_activities";
    pub const HIDDEN_ACTIVITY_IDS: &str = "kidsapp_hidden_activity_ids";
    pub const SELECTED_LOCATION: &str = "kidsapp_weather_city_id";
    pub const PARENT_PIN: &str = "kidsapp_parent_pin";
}
