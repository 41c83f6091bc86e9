//! Module system for LibreCCM.
//!
//! This module handles:
//! - Parsing module manifests from `.info.toml` files
//! - Registering modules implemented in code
//! - Ordering modules by their requirements

mod dependency;
mod discovery;
mod error;
mod info_parser;
mod set;

pub use dependency::resolve_load_order;
pub use discovery::{discover_modules, load_module_dir};
pub use error::ModuleError;
pub use info_parser::{parse_manifest, parse_manifest_str};
pub use set::{CcmModule, InstalledModule, ModuleSet, ModuleSource};
