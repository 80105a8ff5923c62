//! # Steiny Web
//!
//! HTTP server for the Steiny B's site: brochure page, subscription gate,
//! media upload relay and crawler metadata.

pub mod config;
pub mod handlers;
pub mod routes;
pub mod security;
pub mod services;
pub mod state;
pub mod telemetry;
pub mod utils;

#[cfg(test)]
mod test_support;

pub use config::Settings;
pub use routes::build_router;
pub use state::{build_object_store, AppState};
