//! End-to-end flows through a `PlayerSession` on the in-memory platform.

use kidsapp_domain::{
    filter_activities, ActivityDraft, ActivityId, ActivityQuery, AgeGroup, QueryTime, Setting,
    TimeOfDay,
};
use kidsapp_player::application::Suggestion;
use kidsapp_player::infrastructure::platform::mock::create_mock_platform;
use kidsapp_player::ports::outbound::{storage_keys, StorageProvider};
use kidsapp_player::PlayerSession;

fn draft(title: &str) -> ActivityDraft {
    ActivityDraft::new(
        title,
        "Något roligt att göra tillsammans.",
        Setting::Outdoor,
        TimeOfDay::Evening,
    )
    .with_steps(["Gå ut", "Titta upp"])
    .with_age_groups(vec![AgeGroup::EightToTen])
}

#[test]
fn parent_changes_survive_a_new_session() {
    let (platform, handles) = create_mock_platform();
    handles.time.set(1_700_000_000_000);

    let created_id = {
        let mut session = PlayerSession::start(platform.clone()).unwrap();
        let id = platform.new_custom_activity_id();
        session.catalog.create_from_draft(id.clone(), &draft("Fladdermöss")).unwrap();
        session
            .catalog
            .set_hidden(&ActivityId::new("base-kuddkoja"), true)
            .unwrap();
        session.locations.select_location("umea").unwrap();
        id
    };

    let session = PlayerSession::start(platform).unwrap();
    let catalog = session.catalog.compose_catalog();

    assert_eq!(catalog.first().map(|a| &a.id), Some(&created_id));
    assert!(catalog.iter().all(|a| a.id.as_str() != "base-kuddkoja"));
    assert!(session.catalog.is_hidden(&ActivityId::new("base-kuddkoja")));
    assert_eq!(session.locations.current_location().name, "Umeå");
}

#[test]
fn deleting_hidden_custom_activity_leaves_no_overlay() {
    let (platform, handles) = create_mock_platform();
    let mut session = PlayerSession::start(platform).unwrap();
    let before = session.catalog.compose_catalog();

    let id = ActivityId::new("custom-1-abc");
    session.catalog.create_from_draft(id.clone(), &draft("Mörkerpromenad")).unwrap();
    session.catalog.set_hidden(&id, true).unwrap();
    session.catalog.delete_custom(&id).unwrap();

    assert_eq!(session.catalog.compose_catalog(), before);
    assert_eq!(
        handles.storage.load(storage_keys::HIDDEN_ACTIVITY_IDS).as_deref(),
        Some("[]")
    );
    assert_eq!(
        handles.storage.load(storage_keys::CUSTOM_ACTIVITIES).as_deref(),
        Some("[]")
    );
}

#[test]
fn corrupt_storage_degrades_to_defaults() {
    let (platform, handles) = create_mock_platform();
    handles.storage.save(storage_keys::CUSTOM_ACTIVITIES, "not json");
    handles.storage.save(storage_keys::HIDDEN_ACTIVITY_IDS, "{\"oops\": 1}");
    handles.storage.save(storage_keys::SELECTED_LOCATION, "narnia");
    handles.storage.save(storage_keys::PARENT_PIN, "abcd");

    let session = PlayerSession::start(platform).unwrap();

    assert!(session.catalog.custom().is_empty());
    assert!(session.catalog.hidden_ids().is_empty());
    assert_eq!(
        session.catalog.compose_catalog().len(),
        session.catalog.base().len()
    );
    assert_eq!(session.locations.current_location().id, "malmo");
    assert!(!session.parent_gate.has_pin());
}

#[test]
fn suggestion_flow_over_base_catalog() {
    let (platform, handles) = create_mock_platform();
    let session = PlayerSession::start(platform).unwrap();
    let catalog = session.catalog.compose_catalog();

    let partial = ActivityQuery::default().with_age(AgeGroup::TwoToFour);
    assert_eq!(
        session.selection.suggest(&catalog, &partial),
        Suggestion::IncompleteQuery
    );

    let query = ActivityQuery::complete(AgeGroup::EightToTen, Setting::Outdoor, QueryTime::Evening);
    let filtered = filter_activities(&catalog, &query);
    assert!(filtered.len() >= 2, "base catalog should offer a choice");

    handles.random.push(0);
    let first = match session.selection.suggest(&catalog, &query) {
        Suggestion::Picked(activity) => activity,
        other => panic!("expected a pick, got {other:?}"),
    };
    assert_eq!(first.id, filtered[0].id);

    let second = session
        .selection
        .suggest_another(&catalog, &query, &first.id);
    let second = second.activity().unwrap();
    assert_ne!(second.id, first.id);
    assert!(filtered.iter().any(|a| a.id == second.id));
}
