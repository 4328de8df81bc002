//! Activity entity - a suggestion a child can pick
//!
//! Activities come from two places: the built-in base catalog (read-only) and
//! parent-created custom activities. Visibility is not part of the record; it
//! is an overlay kept in the hidden-id set and joined at read time.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::ids::ActivityId;
use crate::value_objects::{AgeGroup, Setting, TimeOfDay};

/// Where an activity comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivitySource {
    /// Shipped with the application, never mutated or deleted
    Base,
    /// Created by a parent, editable and deletable
    Custom,
}

impl ActivitySource {
    pub fn is_custom(&self) -> bool {
        matches!(self, ActivitySource::Custom)
    }
}

/// Image metadata for an activity.
///
/// `src` holds a self-contained data URI for uploaded images, `file` is a key
/// into the static asset map. `src` wins when both are present.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityImage {
    #[serde(default)]
    pub alt: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub src: Option<String>,
}

impl ActivityImage {
    pub fn from_file(file: impl Into<String>, alt: impl Into<String>) -> Self {
        Self {
            alt: alt.into(),
            file: Some(file.into()),
            src: None,
        }
    }

    pub fn from_data_uri(src: impl Into<String>, alt: impl Into<String>) -> Self {
        Self {
            alt: alt.into(),
            file: None,
            src: Some(src.into()),
        }
    }
}

/// A single activity record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Activity {
    pub id: ActivityId,
    pub title: String,
    pub description: String,
    /// Ordered instructions
    pub steps: Vec<String>,

    pub age_groups: Vec<AgeGroup>,
    /// Setting tag (indoor/outdoor/any); the key is `weather` in stored data
    #[serde(rename = "weather")]
    pub setting: Setting,
    pub time_of_day: TimeOfDay,

    #[serde(
        default,
        deserialize_with = "lenient_optional",
        skip_serializing_if = "Option::is_none"
    )]
    pub duration_minutes: Option<u32>,
    #[serde(
        default,
        deserialize_with = "lenient_optional",
        skip_serializing_if = "Option::is_none"
    )]
    pub materials: Option<Vec<String>>,

    #[serde(
        default,
        deserialize_with = "lenient_optional",
        skip_serializing_if = "Option::is_none"
    )]
    pub image: Option<ActivityImage>,

    pub source: ActivitySource,
}

/// Optional fields are not part of the structural check, so a malformed
/// value reads as absent instead of failing the whole record.
fn lenient_optional<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).ok())
}

impl Activity {
    pub fn new(
        id: impl Into<ActivityId>,
        title: impl Into<String>,
        setting: Setting,
        time_of_day: TimeOfDay,
        source: ActivitySource,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: String::new(),
            steps: Vec::new(),
            age_groups: Vec::new(),
            setting,
            time_of_day,
            duration_minutes: None,
            materials: None,
            image: None,
            source,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_steps(mut self, steps: Vec<String>) -> Self {
        self.steps = steps;
        self
    }

    pub fn with_age_groups(mut self, age_groups: Vec<AgeGroup>) -> Self {
        self.age_groups = age_groups;
        self
    }

    pub fn with_duration_minutes(mut self, minutes: u32) -> Self {
        self.duration_minutes = Some(minutes);
        self
    }

    pub fn with_materials(mut self, materials: Vec<String>) -> Self {
        self.materials = Some(materials);
        self
    }

    pub fn with_image(mut self, image: ActivityImage) -> Self {
        self.image = Some(image);
        self
    }

    pub fn suits_age(&self, age: AgeGroup) -> bool {
        self.age_groups.contains(&age)
    }

    pub fn is_custom(&self) -> bool {
        self.source.is_custom()
    }
}

// =============================================================================
// Structural validation of untrusted data
// =============================================================================

fn is_string_array(value: &Value) -> bool {
    value
        .as_array()
        .is_some_and(|items| items.iter().all(Value::is_string))
}

fn is_non_empty_string(value: &Value) -> bool {
    value.as_str().is_some_and(|s| !s.is_empty())
}

/// Structural check for a persisted activity.
///
/// True only if every required field is present with the right primitive
/// shape: `id`, `title` and `description` are strings, `steps` and `ageGroups`
/// are arrays of strings, and the tag fields (`weather`, `timeOfDay`,
/// `source`) are non-empty strings. Optional fields are not inspected here.
pub fn is_valid_activity(value: &Value) -> bool {
    let Some(record) = value.as_object() else {
        return false;
    };

    let field = |name: &str, check: fn(&Value) -> bool| record.get(name).is_some_and(check);

    field("id", Value::is_string)
        && field("title", Value::is_string)
        && field("description", Value::is_string)
        && field("steps", is_string_array)
        && field("ageGroups", is_string_array)
        && field("weather", is_non_empty_string)
        && field("timeOfDay", is_non_empty_string)
        && field("source", is_non_empty_string)
}

/// Decode a list of activities from untrusted JSON.
///
/// Anything that is not an array yields an empty list. Entries that fail the
/// structural check, or that carry tags outside the known vocabularies, are
/// dropped one by one; the rest are kept in order.
pub fn decode_activities(value: Value) -> Vec<Activity> {
    let Value::Array(items) = value else {
        return Vec::new();
    };

    items
        .into_iter()
        .filter(is_valid_activity)
        .filter_map(|item| serde_json::from_value::<Activity>(item).ok())
        .collect()
}
