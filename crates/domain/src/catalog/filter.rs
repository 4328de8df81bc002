use crate::entities::Activity;
use crate::value_objects::{ActivityQuery, CompleteQuery, QueryTime, Setting, TimeOfDay};

/// Setting compatibility. `valfritt` on either side matches anything,
/// otherwise the tags must be equal.
pub fn matches_setting(activity: Setting, query: Setting) -> bool {
    activity == Setting::Any || query == Setting::Any || activity == query
}

/// Time-of-day compatibility between the activity vocabulary and the coarser
/// query vocabulary. See [`QueryTime::accepts`].
pub fn matches_time(activity: TimeOfDay, query: QueryTime) -> bool {
    query.accepts(activity)
}

/// Whether one activity satisfies a complete query.
pub fn matches_query(activity: &Activity, query: &CompleteQuery) -> bool {
    activity.suits_age(query.age)
        && matches_setting(activity.setting, query.place)
        && matches_time(activity.time_of_day, query.when)
}

/// Activities matching the query, in catalog order.
///
/// An incomplete query yields nothing: partial choices never surface a
/// suggestion.
pub fn filter_activities(catalog: &[Activity], query: &ActivityQuery) -> Vec<Activity> {
    let Some(query) = query.as_complete() else {
        return Vec::new();
    };

    catalog
        .iter()
        .filter(|activity| matches_query(activity, &query))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::ActivitySource;
    use crate::value_objects::AgeGroup;

    fn activity(id: &str, ages: &[AgeGroup], setting: Setting, time: TimeOfDay) -> Activity {
        Activity::new(id, id, setting, time, ActivitySource::Base).with_age_groups(ages.to_vec())
    }

    fn ids(activities: &[Activity]) -> Vec<&str> {
        activities.iter().map(|a| a.id.as_str()).collect()
    }

    fn everything_for(age: AgeGroup) -> Vec<Activity> {
        let mut all = Vec::new();
        for setting in Setting::all() {
            for time in TimeOfDay::all() {
                all.push(activity(
                    &format!("{}-{}", setting, time),
                    &[age],
                    setting,
                    time,
                ));
            }
        }
        all
    }

    #[test]
    fn incomplete_query_returns_nothing() {
        let catalog = everything_for(AgeGroup::TwoToFour);
        let partial = [
            ActivityQuery::default(),
            ActivityQuery::new(Some(AgeGroup::TwoToFour), Some(Setting::Indoor), None),
            ActivityQuery::new(Some(AgeGroup::TwoToFour), None, Some(QueryTime::Day)),
            ActivityQuery::new(None, Some(Setting::Any), Some(QueryTime::Evening)),
        ];
        for query in partial {
            assert!(filter_activities(&catalog, &query).is_empty(), "{:?}", query);
        }
    }

    #[test]
    fn age_must_be_a_member() {
        let catalog = vec![
            activity(
                "small",
                &[AgeGroup::TwoToFour],
                Setting::Any,
                TimeOfDay::Any,
            ),
            activity(
                "mixed",
                &[AgeGroup::TwoToFour, AgeGroup::EightToTen],
                Setting::Any,
                TimeOfDay::Any,
            ),
        ];
        let query = ActivityQuery::complete(AgeGroup::EightToTen, Setting::Any, QueryTime::Day);
        assert_eq!(ids(&filter_activities(&catalog, &query)), vec!["mixed"]);
    }

    #[test]
    fn activity_without_age_groups_never_matches() {
        let catalog = vec![activity("none", &[], Setting::Any, TimeOfDay::Any)];
        for age in AgeGroup::all() {
            let query = ActivityQuery::complete(age, Setting::Any, QueryTime::Day);
            assert!(filter_activities(&catalog, &query).is_empty());
        }
    }

    #[test]
    fn valfritt_activity_matches_every_setting_query() {
        for place in Setting::all() {
            assert!(matches_setting(Setting::Any, place), "{:?}", place);
        }
    }

    #[test]
    fn indoor_activity_matches_only_indoor_or_valfritt_query() {
        assert!(matches_setting(Setting::Indoor, Setting::Indoor));
        assert!(matches_setting(Setting::Indoor, Setting::Any));
        assert!(!matches_setting(Setting::Indoor, Setting::Outdoor));
    }

    // Earlier revisions only let `valfritt` on the activity side match anything.
    // The symmetric rule is the intended one; this pins it.
    #[test]
    fn valfritt_query_matches_every_activity_setting() {
        for tag in Setting::all() {
            assert!(matches_setting(tag, Setting::Any), "{:?}", tag);
        }
    }

    #[test]
    fn time_of_day_mapping() {
        assert!(matches_time(TimeOfDay::Morning, QueryTime::Day));
        assert!(!matches_time(TimeOfDay::Morning, QueryTime::Evening));
        assert!(matches_time(TimeOfDay::Afternoon, QueryTime::Day));
        assert!(!matches_time(TimeOfDay::Afternoon, QueryTime::Evening));
        assert!(!matches_time(TimeOfDay::Evening, QueryTime::Day));
        assert!(matches_time(TimeOfDay::Evening, QueryTime::Evening));
        assert!(matches_time(TimeOfDay::Any, QueryTime::Day));
        assert!(matches_time(TimeOfDay::Any, QueryTime::Evening));
    }

    #[test]
    fn outdoor_evening_query_only_finds_flexible_activity() {
        let a = activity(
            "A",
            &[AgeGroup::FiveToSeven],
            Setting::Indoor,
            TimeOfDay::Morning,
        );
        let b = activity(
            "B",
            &[AgeGroup::FiveToSeven],
            Setting::Any,
            TimeOfDay::Any,
        );
        let query =
            ActivityQuery::complete(AgeGroup::FiveToSeven, Setting::Outdoor, QueryTime::Evening);

        assert_eq!(filter_activities(&[a, b.clone()], &query), vec![b]);
    }

    #[test]
    fn result_keeps_catalog_order() {
        let catalog = everything_for(AgeGroup::FiveToSeven);
        let query = ActivityQuery::complete(AgeGroup::FiveToSeven, Setting::Any, QueryTime::Day);

        let result = filter_activities(&catalog, &query);
        let expected: Vec<&str> = catalog
            .iter()
            .filter(|a| a.time_of_day != TimeOfDay::Evening)
            .map(|a| a.id.as_str())
            .collect();
        assert_eq!(ids(&result), expected);
        assert_eq!(result.len(), 9);
    }
}
