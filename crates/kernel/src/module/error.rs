//! Module system error types.

use thiserror::Error;

/// Errors raised while discovering, parsing or ordering modules.
///
/// All of them abort startup.
#[derive(Debug, Error)]
pub enum ModuleError {
    /// Module directory has no `.info.toml` manifest.
    #[error("module '{module}': no .info.toml manifest found in {path}")]
    MissingManifest { module: String, path: String },

    /// Module directory has more than one manifest.
    #[error("module directory '{path}': multiple .info.toml files found, expected exactly one")]
    MultipleManifests { path: String },

    /// The manifest could not be read or parsed, or failed validation.
    #[error("module '{module}': invalid manifest: {details}")]
    InvalidManifest { module: String, details: String },

    /// The modules directory could not be read.
    #[error("failed to read modules directory '{path}': {details}")]
    Unreadable { path: String, details: String },

    /// Two modules share a name.
    #[error("module '{module}' is installed more than once")]
    DuplicateModule { module: String },

    /// A module requires another module that isn't installed.
    #[error("module '{module}': requires '{dependency}' which is not installed")]
    MissingDependency { module: String, dependency: String },

    /// Module requirements form a cycle.
    #[error("circular dependency detected involving modules: {cycle}")]
    CircularDependency { cycle: String },
}

impl ModuleError {
    /// Create a missing manifest error, naming the module after its directory.
    pub fn missing_manifest(path: impl Into<String>) -> Self {
        let path = path.into();
        let module = std::path::Path::new(&path)
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("unknown")
            .to_string();
        Self::MissingManifest { module, path }
    }

    /// Create an invalid manifest error.
    pub fn invalid(module: impl Into<String>, details: impl Into<String>) -> Self {
        Self::InvalidManifest {
            module: module.into(),
            details: details.into(),
        }
    }
}
