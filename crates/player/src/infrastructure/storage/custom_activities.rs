//! Custom activities store over a key-value `StorageProvider`
//!
//! The stored value is a JSON array of activity objects. Reads validate every
//! entry and drop the ones that do not fit; anything unparseable reads as an
//! empty list.

use kidsapp_domain::{decode_activities, Activity, ActivitySource};

use crate::ports::outbound::{storage_keys, CustomActivityStorePort, StorageProvider};

#[derive(Clone)]
pub struct CustomActivitiesStorage<S: StorageProvider> {
    storage: S,
}

impl<S: StorageProvider> CustomActivitiesStorage<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }
}

impl<S: StorageProvider + Send + Sync> CustomActivityStorePort for CustomActivitiesStorage<S> {
    fn read_custom(&self) -> Vec<Activity> {
        let Some(raw) = self.storage.load(storage_keys::CUSTOM_ACTIVITIES) else {
            return Vec::new();
        };
        if raw.trim().is_empty() {
            return Vec::new();
        }

        let value: serde_json::Value = match serde_json::from_str(&raw) {
            Ok(value) => value,
            Err(e) => {
                tracing::warn!("Discarding unreadable custom activities: {}", e);
                return Vec::new();
            }
        };

        let stored = value.as_array().map(Vec::len);
        let mut activities = decode_activities(value);
        match stored {
            Some(total) if total > activities.len() => {
                tracing::warn!(
                    dropped = total - activities.len(),
                    "Dropped invalid custom activity records"
                );
            }
            None => tracing::warn!("Stored custom activities are not a list"),
            _ => {}
        }

        for activity in &mut activities {
            activity.source = ActivitySource::Custom;
        }
        activities
    }

    fn write_custom(&self, activities: &[Activity]) {
        match serde_json::to_string(activities) {
            Ok(json) => {
                self.storage.save(storage_keys::CUSTOM_ACTIVITIES, &json);
                tracing::debug!(count = activities.len(), "Persisted custom activities");
            }
            Err(e) => tracing::error!("Failed to serialize custom activities: {}", e),
        }
    }
}
