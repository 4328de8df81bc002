//! Selection Service - random suggestions for the child view
//!
//! Wraps the domain's pick and re-roll rules with a `RandomProvider` and adds
//! the outcome distinctions the view needs: an incomplete query, no match at
//! all, and no other activity to switch to.

use kidsapp_domain::{filter_activities, pick, reroll, Activity, ActivityId, ActivityQuery};

use crate::ports::outbound::RandomProvider;

/// Result of asking for a suggestion.
#[derive(Debug, Clone, PartialEq)]
pub enum Suggestion {
    /// Age, place or time is still unset
    IncompleteQuery,
    /// The query is complete but nothing in the catalog fits
    NoMatch,
    /// The only fitting activity is the one already shown
    NothingElse,
    Picked(Activity),
}

impl Suggestion {
    pub fn activity(&self) -> Option<&Activity> {
        match self {
            Suggestion::Picked(activity) => Some(activity),
            _ => None,
        }
    }
}

pub struct SelectionService<R: RandomProvider> {
    random: R,
}

impl<R: RandomProvider> SelectionService<R> {
    pub fn new(random: R) -> Self {
        Self { random }
    }

    /// Random index in `0..len`; `len` is never zero here.
    fn roll(&self, len: usize) -> usize {
        let max = i32::try_from(len.saturating_sub(1)).unwrap_or(i32::MAX);
        self.random.random_range(0, max).max(0) as usize
    }

    pub fn pick<'a>(&self, filtered: &'a [Activity]) -> Option<&'a Activity> {
        pick(filtered, |len| self.roll(len))
    }

    /// A different activity than `current`, or `None` when there is no other.
    pub fn reroll<'a>(&self, filtered: &'a [Activity], current: &ActivityId) -> Option<&'a Activity> {
        reroll(filtered, current, |len| self.roll(len)).activity()
    }

    /// Filter the catalog and pick one activity.
    pub fn suggest(&self, catalog: &[Activity], query: &ActivityQuery) -> Suggestion {
        if !query.is_complete() {
            return Suggestion::IncompleteQuery;
        }
        let filtered = filter_activities(catalog, query);
        match self.pick(&filtered) {
            Some(activity) => Suggestion::Picked(activity.clone()),
            None => Suggestion::NoMatch,
        }
    }

    /// Like [`suggest`](Self::suggest), but never returns `current`.
    pub fn suggest_another(
        &self,
        catalog: &[Activity],
        query: &ActivityQuery,
        current: &ActivityId,
    ) -> Suggestion {
        if !query.is_complete() {
            return Suggestion::IncompleteQuery;
        }
        let filtered = filter_activities(catalog, query);
        if filtered.is_empty() {
            return Suggestion::NoMatch;
        }
        match self.reroll(&filtered, current) {
            Some(activity) => Suggestion::Picked(activity.clone()),
            None => Suggestion::NothingElse,
        }
    }
}
