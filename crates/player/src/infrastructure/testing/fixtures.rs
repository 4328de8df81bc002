//! Simple test fixtures used across unit tests.

use kidsapp_domain::{Activity, ActivitySource, AgeGroup, Setting, TimeOfDay};

pub fn base_activity(id: &str, setting: Setting, time: TimeOfDay) -> Activity {
    Activity::new(id, format!("Bas {id}"), setting, time, ActivitySource::Base)
        .with_description("En aktivitet från grundkatalogen.")
        .with_steps(vec!["Gör så här".to_string()])
        .with_age_groups(AgeGroup::all().to_vec())
}

pub fn custom_activity(id: &str) -> Activity {
    Activity::new(
        id,
        format!("Egen {id}"),
        Setting::Any,
        TimeOfDay::Any,
        ActivitySource::Custom,
    )
    .with_description("En aktivitet som en förälder har lagt till.")
    .with_steps(vec!["Första steget".to_string()])
    .with_age_groups(vec![AgeGroup::FiveToSeven])
}

/// Two base activities, one indoor morning and one flexible
pub fn base_pair() -> Vec<Activity> {
    vec![
        base_activity("base-a", Setting::Indoor, TimeOfDay::Morning),
        base_activity("base-b", Setting::Any, TimeOfDay::Any),
    ]
}
