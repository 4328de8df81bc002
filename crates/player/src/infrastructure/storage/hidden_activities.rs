//! Hidden-id store: a JSON array of strings, read back as a set.

use std::collections::HashSet;

use kidsapp_domain::ActivityId;

use crate::ports::outbound::{storage_keys, HiddenActivityStorePort, StorageProvider};

#[derive(Clone)]
pub struct HiddenActivitiesStorage<S: StorageProvider> {
    storage: S,
}

impl<S: StorageProvider> HiddenActivitiesStorage<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }
}

impl<S: StorageProvider + Send + Sync> HiddenActivityStorePort for HiddenActivitiesStorage<S> {
    fn read_hidden_ids(&self) -> HashSet<ActivityId> {
        let Some(raw) = self.storage.load(storage_keys::HIDDEN_ACTIVITY_IDS) else {
            return HashSet::new();
        };
        if raw.trim().is_empty() {
            return HashSet::new();
        }

        match serde_json::from_str::<serde_json::Value>(&raw) {
            Ok(serde_json::Value::Array(items)) => items
                .iter()
                .filter_map(serde_json::Value::as_str)
                .map(ActivityId::from)
                .collect(),
            Ok(_) => {
                tracing::warn!("Stored hidden activity ids are not a list");
                HashSet::new()
            }
            Err(e) => {
                tracing::warn!("Discarding unreadable hidden activity ids: {}", e);
                HashSet::new()
            }
        }
    }

    fn write_hidden_ids(&self, ids: &HashSet<ActivityId>) {
        // Sorted so the stored value does not churn with hash order
        let mut sorted: Vec<&str> = ids.iter().map(ActivityId::as_str).collect();
        sorted.sort_unstable();

        match serde_json::to_string(&sorted) {
            Ok(json) => {
                self.storage.save(storage_keys::HIDDEN_ACTIVITY_IDS, &json);
                tracing::debug!(count = sorted.len(), "Persisted hidden activity ids");
            }
            Err(e) => tracing::error!("Failed to serialize hidden activity ids: {}", e),
        }
    }
}
