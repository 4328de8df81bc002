//! Built-in activities shipped with the player
//!
//! The JSON is compiled into the binary and parsed once at startup. Unlike
//! stored custom data it is trusted: a malformed file is a build defect and
//! surfaces as an error instead of being filtered.

use std::collections::HashSet;

use kidsapp_domain::{Activity, ActivitySource};

const BASE_ACTIVITIES_JSON: &str = include_str!("../../data/base_activities.json");

#[derive(Debug, thiserror::Error)]
pub enum BaseCatalogError {
    #[error("Base catalog is not valid activity JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Base catalog contains duplicate id: {0}")]
    DuplicateId(String),
}

/// Parse the compiled-in base catalog.
pub fn load_base_activities() -> Result<Vec<Activity>, BaseCatalogError> {
    parse_base_activities(BASE_ACTIVITIES_JSON)
}

/// Parse a base catalog document. Every entry is marked as a base activity.
pub fn parse_base_activities(json: &str) -> Result<Vec<Activity>, BaseCatalogError> {
    let mut activities: Vec<Activity> = serde_json::from_str(json)?;

    let mut seen = HashSet::new();
    for activity in &mut activities {
        if !seen.insert(activity.id.clone()) {
            return Err(BaseCatalogError::DuplicateId(activity.id.to_string()));
        }
        activity.source = ActivitySource::Base;
    }

    tracing::debug!(count = activities.len(), "Loaded base catalog");
    Ok(activities)
}
