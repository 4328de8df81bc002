//! Store adapters over the platform key-value storage

mod custom_activities;
mod hidden_activities;
mod selected_location;

pub use custom_activities::CustomActivitiesStorage;
pub use hidden_activities::HiddenActivitiesStorage;
pub use selected_location::SelectedLocationStorage;
