//! Application layer: use cases over the outbound ports

pub mod services;

pub use services::{
    CatalogError, CatalogService, LocationService, ParentGateService, SelectionService,
    Suggestion,
};
