//! Outbound ports - Interfaces for external services
//!
//! These ports define the contracts that infrastructure adapters must implement,
//! allowing application services to interact with storage and the platform
//! without depending on concrete implementations.

pub mod activity_stores;
pub mod platform;

pub use activity_stores::{CustomActivityStorePort, HiddenActivityStorePort, LocationStorePort};
pub use platform::{storage_keys, RandomProvider, StorageProvider, TimeProvider};

#[cfg(test)]
pub use activity_stores::{
    MockCustomActivityStorePort, MockHiddenActivityStorePort, MockLocationStorePort,
};
