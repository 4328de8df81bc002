//! Kidsapp domain: activity records, tag vocabularies, and the rules for
//! composing, filtering and picking from the activity catalog.
//!
//! This crate does no I/O. Storage, time and randomness are provided by the
//! player crate through ports.

pub mod catalog;
pub mod entities;
pub mod error;
pub mod ids;
pub mod value_objects;

pub use entities::{
    decode_activities, is_valid_activity, Activity, ActivityImage, ActivitySource,
};

pub use error::DomainError;

// Re-export ID types
pub use ids::{ActivityId, LocationId};

// Re-export catalog rules
pub use catalog::{
    compose_catalog, filter_activities, matches_query, matches_setting, matches_time, pick,
    reroll, with_hidden_flags, CatalogEntry, Reroll,
};

// Re-export value objects (explicit list in value_objects/mod.rs)
pub use value_objects::{
    default_location, find_preset_location, resolve_image, ActivityDraft, ActivityQuery,
    AgeGroup, AssetMap, CompleteQuery, DraftError, DraftField, FieldError, ParentPin,
    PresetLocation, QueryTime, Setting, SetupChallenge, TimeOfDay, ValidDraft,
    DEFAULT_LOCATION_ID, PIN_LENGTH, PRESET_LOCATIONS,
};
