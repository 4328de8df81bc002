//! Application services
//!
//! This module contains application services that implement use cases
//! for the Kidsapp Player. Services depend on port traits, not concrete
//! infrastructure implementations.

pub mod catalog_service;
pub mod location_service;
pub mod parent_gate_service;
pub mod selection_service;

pub use catalog_service::{CatalogError, CatalogService};
pub use location_service::LocationService;
pub use parent_gate_service::ParentGateService;
pub use selection_service::{SelectionService, Suggestion};
