//! Random suggestion and re-roll
//!
//! `roll(n)` must return an index in `0..n`; it is only called with `n > 0`.
//! Out-of-range results are clamped rather than trusted.

use crate::entities::Activity;
use crate::ids::ActivityId;

/// Outcome of asking for a different activity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Reroll<'a> {
    Picked(&'a Activity),
    /// Nothing else to offer: the filtered set has no other member.
    Unavailable,
}

impl<'a> Reroll<'a> {
    pub fn activity(&self) -> Option<&'a Activity> {
        match self {
            Reroll::Picked(activity) => Some(activity),
            Reroll::Unavailable => None,
        }
    }

    pub fn is_available(&self) -> bool {
        matches!(self, Reroll::Picked(_))
    }
}

fn choose<'a>(pool: &[&'a Activity], roll: impl FnOnce(usize) -> usize) -> Option<&'a Activity> {
    if pool.is_empty() {
        return None;
    }
    let index = roll(pool.len()).min(pool.len() - 1);
    pool.get(index).copied()
}

/// Pick one activity uniformly from the filtered set; `None` means no match.
pub fn pick(filtered: &[Activity], roll: impl FnOnce(usize) -> usize) -> Option<&Activity> {
    let pool: Vec<&Activity> = filtered.iter().collect();
    choose(&pool, roll)
}

/// Pick a different activity than `current`, uniformly among the rest.
pub fn reroll<'a>(
    filtered: &'a [Activity],
    current: &ActivityId,
    roll: impl FnOnce(usize) -> usize,
) -> Reroll<'a> {
    let pool: Vec<&Activity> = filtered.iter().filter(|a| &a.id != current).collect();
    match choose(&pool, roll) {
        Some(activity) => Reroll::Picked(activity),
        None => Reroll::Unavailable,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::ActivitySource;
    use crate::value_objects::{Setting, TimeOfDay};

    fn activity(id: &str) -> Activity {
        Activity::new(id, id, Setting::Any, TimeOfDay::Any, ActivitySource::Base)
    }

    #[test]
    fn pick_on_empty_set_is_no_match() {
        assert!(pick(&[], |_| 0).is_none());
    }

    #[test]
    fn pick_uses_rolled_index() {
        let filtered = vec![activity("a"), activity("b"), activity("c")];
        assert_eq!(pick(&filtered, |n| n - 1).map(|a| a.id.as_str()), Some("c"));
        assert_eq!(pick(&filtered, |_| 0).map(|a| a.id.as_str()), Some("a"));
    }

    #[test]
    fn out_of_range_roll_is_clamped() {
        let filtered = vec![activity("a"), activity("b")];
        assert_eq!(pick(&filtered, |_| 99).map(|a| a.id.as_str()), Some("b"));
    }

    #[test]
    fn reroll_with_one_alternative_is_deterministic() {
        let filtered = vec![activity("a"), activity("b")];
        let current = ActivityId::new("a");
        for index in 0..5 {
            let outcome = reroll(&filtered, &current, |_| index);
            assert_eq!(outcome.activity().map(|a| a.id.as_str()), Some("b"));
        }
    }

    #[test]
    fn reroll_with_single_member_is_unavailable() {
        let filtered = vec![activity("a")];
        let outcome = reroll(&filtered, &ActivityId::new("a"), |_| 0);
        assert_eq!(outcome, Reroll::Unavailable);
        assert!(!outcome.is_available());
    }

    #[test]
    fn reroll_on_empty_set_is_unavailable() {
        assert_eq!(reroll(&[], &ActivityId::new("a"), |_| 0), Reroll::Unavailable);
    }

    #[test]
    fn reroll_never_returns_current() {
        let filtered = vec![activity("a"), activity("b"), activity("c")];
        let current = ActivityId::new("b");
        for index in 0..2 {
            let picked = reroll(&filtered, &current, |_| index).activity().unwrap();
            assert_ne!(picked.id, current);
        }
    }

    #[test]
    fn reroll_pool_size_excludes_current() {
        let filtered = vec![activity("a"), activity("b"), activity("c")];
        let mut seen = 0;
        let _ = reroll(&filtered, &ActivityId::new("c"), |n| {
            seen = n;
            0
        });
        assert_eq!(seen, 2);
    }
}
