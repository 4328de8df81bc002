//! Parent-entered activity form data, validated before it becomes an Activity
//!
//! Validation collects every failing field so the form can show all messages
//! at once. Messages are the fixed Swedish labels shown next to each field.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::entities::{Activity, ActivityImage, ActivitySource};
use crate::ids::ActivityId;

use super::tags::{AgeGroup, Setting, TimeOfDay};

const MIN_TITLE_CHARS: usize = 3;
const MIN_DESCRIPTION_CHARS: usize = 10;
const MIN_STEP_CHARS: usize = 3;

/// Form field a validation message belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DraftField {
    Title,
    Description,
    AgeGroups,
    Steps,
}

/// One failing field and its message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: DraftField,
    pub message: &'static str,
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}: {}", self.field, self.message)
    }
}

/// All validation failures of a draft.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Activity draft is invalid: {}", join_errors(.errors))]
pub struct DraftError {
    pub errors: Vec<FieldError>,
}

fn join_errors(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

impl DraftError {
    pub fn message_for(&self, field: DraftField) -> Option<&'static str> {
        self.errors
            .iter()
            .find(|e| e.field == field)
            .map(|e| e.message)
    }

    pub fn has(&self, field: DraftField) -> bool {
        self.message_for(field).is_some()
    }
}

/// Raw form input for creating or editing a custom activity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityDraft {
    pub title: String,
    pub description: String,
    pub steps: Vec<String>,
    pub age_groups: Vec<AgeGroup>,
    #[serde(rename = "weather")]
    pub setting: Setting,
    pub time_of_day: TimeOfDay,
    #[serde(default)]
    pub duration_minutes: Option<u32>,
    #[serde(default)]
    pub materials: Option<Vec<String>>,
    /// Data URI of an uploaded image
    #[serde(default)]
    pub image_data_uri: Option<String>,
}

/// A draft that passed validation, trimmed and cleaned.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidDraft {
    title: String,
    description: String,
    steps: Vec<String>,
    age_groups: Vec<AgeGroup>,
    setting: Setting,
    time_of_day: TimeOfDay,
    duration_minutes: Option<u32>,
    materials: Option<Vec<String>>,
    image: Option<ActivityImage>,
}

impl ActivityDraft {
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        setting: Setting,
        time_of_day: TimeOfDay,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            steps: Vec::new(),
            age_groups: Vec::new(),
            setting,
            time_of_day,
            duration_minutes: None,
            materials: None,
            image_data_uri: None,
        }
    }

    pub fn with_steps<S: Into<String>>(mut self, steps: impl IntoIterator<Item = S>) -> Self {
        self.steps = steps.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_age_groups(mut self, age_groups: Vec<AgeGroup>) -> Self {
        self.age_groups = age_groups;
        self
    }

    pub fn with_image_data_uri(mut self, src: impl Into<String>) -> Self {
        self.image_data_uri = Some(src.into());
        self
    }

    /// Prefill a draft from an existing activity, for the edit form.
    pub fn from_activity(activity: &Activity) -> Self {
        Self {
            title: activity.title.clone(),
            description: activity.description.clone(),
            steps: activity.steps.clone(),
            age_groups: activity.age_groups.clone(),
            setting: activity.setting,
            time_of_day: activity.time_of_day,
            duration_minutes: activity.duration_minutes,
            materials: activity.materials.clone(),
            image_data_uri: activity.image.as_ref().and_then(|i| i.src.clone()),
        }
    }

    /// Validate the draft, collecting every failing field.
    pub fn validate(&self) -> Result<ValidDraft, DraftError> {
        let mut errors = Vec::new();

        let title = self.title.trim();
        let description = self.description.trim();
        let steps: Vec<String> = self
            .steps
            .iter()
            .map(|s| s.trim())
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect();

        if title.chars().count() < MIN_TITLE_CHARS {
            errors.push(FieldError {
                field: DraftField::Title,
                message: "Skriv en titel (minst 3 tecken).",
            });
        }
        if description.chars().count() < MIN_DESCRIPTION_CHARS {
            errors.push(FieldError {
                field: DraftField::Description,
                message: "Skriv en beskrivning (minst 10 tecken).",
            });
        }
        if self.age_groups.is_empty() {
            errors.push(FieldError {
                field: DraftField::AgeGroups,
                message: "Välj minst en ålder.",
            });
        }
        if steps.is_empty() {
            errors.push(FieldError {
                field: DraftField::Steps,
                message: "Lägg till minst ett steg.",
            });
        } else if steps.iter().any(|s| s.chars().count() < MIN_STEP_CHARS) {
            errors.push(FieldError {
                field: DraftField::Steps,
                message: "Varje steg måste ha minst 3 tecken.",
            });
        }

        if !errors.is_empty() {
            return Err(DraftError { errors });
        }

        let mut age_groups = Vec::with_capacity(self.age_groups.len());
        for age in &self.age_groups {
            if !age_groups.contains(age) {
                age_groups.push(*age);
            }
        }

        let image = self
            .image_data_uri
            .as_deref()
            .filter(|src| !src.is_empty())
            .map(|src| ActivityImage::from_data_uri(src, title));

        Ok(ValidDraft {
            title: title.to_string(),
            description: description.to_string(),
            steps,
            age_groups,
            setting: self.setting,
            time_of_day: self.time_of_day,
            duration_minutes: self.duration_minutes,
            materials: self.materials.clone(),
            image,
        })
    }
}

impl ValidDraft {
    /// Turn the draft into a custom activity with the given id.
    pub fn into_activity(self, id: ActivityId) -> Activity {
        Activity {
            id,
            title: self.title,
            description: self.description,
            steps: self.steps,
            age_groups: self.age_groups,
            setting: self.setting,
            time_of_day: self.time_of_day,
            duration_minutes: self.duration_minutes,
            materials: self.materials,
            image: self.image,
            source: ActivitySource::Custom,
        }
    }

    /// Apply the draft to an existing activity, keeping its id and source.
    ///
    /// An activity that had a bundled image file keeps it when the draft
    /// carries no upload.
    pub fn apply_to(self, existing: &Activity) -> Activity {
        let mut activity = self.into_activity(existing.id.clone());
        activity.source = existing.source;
        if activity.image.is_none() {
            activity.image = existing.image.clone();
        }
        activity
    }
}
