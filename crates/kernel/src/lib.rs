//! LibreCCM Kernel Library
//!
//! Content type registry, module discovery and the read-only content API.
//! The main entry point for running the server is the `libreccm` binary.

pub mod cli;
pub mod config;
pub mod content;
pub mod error;
pub mod i18n;
pub mod models;
pub mod module;
pub mod routes;
pub mod state;

pub use config::Config;
pub use state::AppState;
