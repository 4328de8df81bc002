//! The child's three-part choice that drives filtering

use serde::{Deserialize, Serialize};

use super::tags::{AgeGroup, QueryTime, Setting};

/// Query over the available catalog.
///
/// Each part is `None` until the child has chosen it. Filtering only yields
/// candidates for a complete query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ActivityQuery {
    pub age: Option<AgeGroup>,
    #[serde(rename = "where")]
    pub place: Option<Setting>,
    pub when: Option<QueryTime>,
}

/// A query with every part chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CompleteQuery {
    pub age: AgeGroup,
    pub place: Setting,
    pub when: QueryTime,
}

impl ActivityQuery {
    pub fn new(age: Option<AgeGroup>, place: Option<Setting>, when: Option<QueryTime>) -> Self {
        Self { age, place, when }
    }

    pub fn complete(age: AgeGroup, place: Setting, when: QueryTime) -> Self {
        Self {
            age: Some(age),
            place: Some(place),
            when: Some(when),
        }
    }

    pub fn with_age(mut self, age: AgeGroup) -> Self {
        self.age = Some(age);
        self
    }

    pub fn with_place(mut self, place: Setting) -> Self {
        self.place = Some(place);
        self
    }

    pub fn with_when(mut self, when: QueryTime) -> Self {
        self.when = Some(when);
        self
    }

    /// Returns the chosen parts, or `None` while any part is unset.
    pub fn as_complete(&self) -> Option<CompleteQuery> {
        Some(CompleteQuery {
            age: self.age?,
            place: self.place?,
            when: self.when?,
        })
    }

    pub fn is_complete(&self) -> bool {
        self.as_complete().is_some()
    }
}

impl From<CompleteQuery> for ActivityQuery {
    fn from(query: CompleteQuery) -> Self {
        Self::complete(query.age, query.place, query.when)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_query_is_incomplete() {
        let query = ActivityQuery::default();
        assert!(!query.is_complete());
        assert!(query.as_complete().is_none());
    }

    #[test]
    fn query_completes_once_every_part_is_chosen() {
        let query = ActivityQuery::default()
            .with_age(AgeGroup::TwoToFour)
            .with_place(Setting::Indoor);
        assert!(!query.is_complete());

        let query = query.with_when(QueryTime::Day);
        assert_eq!(
            query.as_complete(),
            Some(CompleteQuery {
                age: AgeGroup::TwoToFour,
                place: Setting::Indoor,
                when: QueryTime::Day,
            })
        );
    }

    #[test]
    fn serializes_place_as_where() {
        let query = ActivityQuery::complete(AgeGroup::FiveToSeven, Setting::Any, QueryTime::Evening);
        let json = serde_json::to_value(query).unwrap();
        assert_eq!(json["where"], "valfritt");
        assert_eq!(json["when"], "kväll");
        assert_eq!(json["age"], "5-7");
    }
}
