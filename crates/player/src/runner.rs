//! Composition root: wires the platform, stores and services for one session.

use std::sync::Arc;

use kidsapp_domain::Activity;

use crate::application::{CatalogService, LocationService, ParentGateService, SelectionService};
use crate::infrastructure::{
    load_base_activities, BaseCatalogError, CustomActivitiesStorage, HiddenActivitiesStorage,
    SelectedLocationStorage,
};
use crate::state::{Platform, PlatformRandomAdapter, PlatformStorageAdapter};

/// Everything a presentation layer needs, built from one `Platform`.
pub struct PlayerSession {
    pub platform: Platform,
    pub catalog: CatalogService,
    pub selection: SelectionService<PlatformRandomAdapter>,
    pub locations: LocationService,
    pub parent_gate: ParentGateService<PlatformStorageAdapter, PlatformRandomAdapter>,
}

impl PlayerSession {
    /// Start a session over the compiled-in base catalog.
    pub fn start(platform: Platform) -> Result<Self, BaseCatalogError> {
        let base = load_base_activities()?;
        Ok(Self::with_base(platform, base))
    }

    /// Start a session over an explicit base catalog.
    pub fn with_base(platform: Platform, base: Vec<Activity>) -> Self {
        let storage = platform.storage_adapter();
        let random = platform.random_adapter();

        let catalog = CatalogService::load(
            base,
            Arc::new(CustomActivitiesStorage::new(storage.clone())),
            Arc::new(HiddenActivitiesStorage::new(storage.clone())),
        );
        let locations = LocationService::new(Arc::new(SelectedLocationStorage::new(
            storage.clone(),
        )));

        Self {
            selection: SelectionService::new(random.clone()),
            parent_gate: ParentGateService::new(storage, random),
            catalog,
            locations,
            platform,
        }
    }
}
