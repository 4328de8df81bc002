//! Kidsapp Player crate.
//!
//! Local client for the activity catalog: storage-backed stores, the catalog,
//! selection, location and parent-gate services, and platform adapters.
//! Multi-platform support is provided via compile-time `cfg` selection.

pub mod application;
pub mod config;
pub mod infrastructure;
pub mod ports;
pub mod runner;
pub mod state;

#[cfg(not(target_arch = "wasm32"))]
pub mod cli;

pub use config::PlayerConfig;
pub use runner::PlayerSession;
pub use state::Platform;
