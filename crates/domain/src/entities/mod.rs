//! Domain entities - Core business objects with identity

mod activity;

pub use activity::{decode_activities, is_valid_activity, Activity, ActivityImage, ActivitySource};
