//! Selected-location store. The id is kept as a raw string, not JSON.

use kidsapp_domain::{find_preset_location, LocationId, DEFAULT_LOCATION_ID};

use crate::ports::outbound::{storage_keys, LocationStorePort, StorageProvider};

#[derive(Clone)]
pub struct SelectedLocationStorage<S: StorageProvider> {
    storage: S,
}

impl<S: StorageProvider> SelectedLocationStorage<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }
}

impl<S: StorageProvider + Send + Sync> LocationStorePort for SelectedLocationStorage<S> {
    fn read_location_id(&self) -> LocationId {
        let stored = self.storage.load(storage_keys::SELECTED_LOCATION);
        match stored.as_deref().map(str::trim) {
            Some(id) if find_preset_location(id).is_some() => LocationId::new(id),
            Some(id) if !id.is_empty() => {
                tracing::warn!(location_id = %id, "Unknown stored location, using default");
                LocationId::new(DEFAULT_LOCATION_ID)
            }
            _ => LocationId::new(DEFAULT_LOCATION_ID),
        }
    }

    fn write_location_id(&self, id: &LocationId) {
        self.storage.save(storage_keys::SELECTED_LOCATION, id.as_str());
        tracing::debug!(location_id = %id, "Persisted selected location");
    }
}
