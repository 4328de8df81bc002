//! Value objects - Immutable objects defined by their attributes

mod activity_draft;
mod activity_query;
mod asset_map;
mod parent_pin;
mod preset_location;
mod tags;

// Tag vocabularies (wire strings are the stored Swedish tags)
pub use tags::{AgeGroup, QueryTime, Setting, TimeOfDay};

// Query over the catalog
pub use activity_query::{ActivityQuery, CompleteQuery};

// Parent form input
pub use activity_draft::{ActivityDraft, DraftError, DraftField, FieldError, ValidDraft};

// Image references
pub use asset_map::{resolve_image, AssetMap};

// Parent gate
pub use parent_pin::{ParentPin, SetupChallenge, PIN_LENGTH};

// Locations
pub use preset_location::{
    default_location, find_preset_location, PresetLocation, DEFAULT_LOCATION_ID,
    PRESET_LOCATIONS,
};
