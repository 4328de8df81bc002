//! Location Service - the parent's chosen preset city

use std::sync::Arc;

use tracing::info;

use kidsapp_domain::{
    default_location, find_preset_location, DomainError, LocationId, PresetLocation,
    PRESET_LOCATIONS,
};

use crate::ports::outbound::LocationStorePort;

#[derive(Clone)]
pub struct LocationService {
    store: Arc<dyn LocationStorePort>,
}

impl LocationService {
    pub fn new(store: Arc<dyn LocationStorePort>) -> Self {
        Self { store }
    }

    /// Every location the parent can pick from.
    pub fn presets(&self) -> &'static [PresetLocation] {
        PRESET_LOCATIONS
    }

    pub fn current_location_id(&self) -> LocationId {
        self.store.read_location_id()
    }

    /// The selected preset, or the default one.
    pub fn current_location(&self) -> &'static PresetLocation {
        find_preset_location(self.current_location_id().as_str()).unwrap_or_else(default_location)
    }

    /// Select a preset by id. Unknown ids are rejected and nothing is stored.
    pub fn select_location(&self, id: &str) -> Result<&'static PresetLocation, DomainError> {
        let location = find_preset_location(id.trim())
            .ok_or_else(|| DomainError::not_found("Location", id.trim()))?;

        self.store.write_location_id(&location.location_id());
        info!(location_id = %location.id, "Selected location");
        Ok(location)
    }
}
