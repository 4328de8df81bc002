//! Store ports for parent-managed catalog state.
//!
//! Three independent collections, each with total reads: a missing or
//! corrupt value reads as its default and never as an error. Writes replace
//! the whole value; the caller owns merge semantics.

use std::collections::HashSet;

use kidsapp_domain::{Activity, ActivityId, LocationId};

/// Parent-created activities, in display order.
#[cfg_attr(test, mockall::automock)]
pub trait CustomActivityStorePort: Send + Sync {
    /// Stored custom activities; structurally invalid entries are dropped.
    fn read_custom(&self) -> Vec<Activity>;

    /// Replace the stored list.
    fn write_custom(&self, activities: &[Activity]);
}

/// Ids of activities hidden from the child, base or custom.
#[cfg_attr(test, mockall::automock)]
pub trait HiddenActivityStorePort: Send + Sync {
    fn read_hidden_ids(&self) -> HashSet<ActivityId>;

    fn write_hidden_ids(&self, ids: &HashSet<ActivityId>);
}

/// The parent's chosen preset location.
#[cfg_attr(test, mockall::automock)]
pub trait LocationStorePort: Send + Sync {
    /// Stored id, or the default id when absent or not a known preset.
    fn read_location_id(&self) -> LocationId;

    fn write_location_id(&self, id: &LocationId);
}
