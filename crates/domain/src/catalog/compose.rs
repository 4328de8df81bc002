use std::collections::HashSet;

use crate::entities::Activity;
use crate::ids::ActivityId;

/// Build the available catalog: custom activities first, then base ones,
/// minus every id in `hidden`.
pub fn compose_catalog(
    base: &[Activity],
    custom: &[Activity],
    hidden: &HashSet<ActivityId>,
) -> Vec<Activity> {
    custom
        .iter()
        .chain(base.iter())
        .filter(|activity| !hidden.contains(&activity.id))
        .cloned()
        .collect()
}

/// An activity paired with its computed visibility, for the parent view.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CatalogEntry<'a> {
    pub activity: &'a Activity,
    pub hidden: bool,
}

/// Every activity (custom first), each joined with the hidden-id set.
pub fn with_hidden_flags<'a>(
    base: &'a [Activity],
    custom: &'a [Activity],
    hidden: &HashSet<ActivityId>,
) -> Vec<CatalogEntry<'a>> {
    custom
        .iter()
        .chain(base.iter())
        .map(|activity| CatalogEntry {
            activity,
            hidden: hidden.contains(&activity.id),
        })
        .collect()
}
