//! Catalog rules: composing the available catalog, filtering it against a
//! query, and picking a suggestion.
//!
//! Everything here is pure and synchronous. Persistence and randomness live
//! with the caller; randomness is injected as a closure.

mod compose;
mod filter;
mod selection;

pub use compose::{compose_catalog, with_hidden_flags, CatalogEntry};
pub use filter::{filter_activities, matches_query, matches_setting, matches_time};
pub use selection::{pick, reroll, Reroll};
