pub mod base_catalog;
pub mod platform;
pub mod storage;

#[cfg(test)]
pub mod testing;

pub use base_catalog::{load_base_activities, BaseCatalogError};
pub use storage::{CustomActivitiesStorage, HiddenActivitiesStorage, SelectedLocationStorage};
