//! The set of installed modules.
//!
//! Modules come from two places: manifests discovered on disk and
//! [`CcmModule`] implementations registered in code. Both end up as
//! [`InstalledModule`]s in one [`ModuleSet`], which hands them out in
//! dependency order.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use libreccm_sdk::types::ModuleDeclaration;
use tracing::{debug, info, warn};

use super::dependency::resolve_load_order;
use super::discovery::discover_modules;
use super::error::ModuleError;
use super::info_parser::validate;

/// A module compiled into the binary that contributes content types.
pub trait CcmModule: Send + Sync {
    /// Describe what the module contributes.
    fn declaration(&self) -> ModuleDeclaration;
}

/// Where an installed module was found.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModuleSource {
    /// Parsed from the manifest at this path.
    Manifest(PathBuf),
    /// Registered in code.
    Registered,
}

/// A module known to the kernel.
#[derive(Debug, Clone)]
pub struct InstalledModule {
    pub declaration: ModuleDeclaration,
    /// Module directory, used to locate bundle files. `None` for modules
    /// registered in code without a directory.
    pub dir: Option<PathBuf>,
    pub source: ModuleSource,
}

impl InstalledModule {
    /// Module machine name.
    pub fn name(&self) -> &str {
        &self.declaration.name
    }
}

/// Installed modules indexed by name.
#[derive(Debug, Clone, Default)]
pub struct ModuleSet {
    modules: BTreeMap<String, InstalledModule>,
}

impl ModuleSet {
    /// Create an empty module set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Discover all modules below `modules_dir`.
    pub fn discover(modules_dir: &Path) -> Result<Self, ModuleError> {
        let mut set = Self::new();
        for module in discover_modules(modules_dir)? {
            set.insert(module)?;
        }
        Ok(set)
    }

    /// Register a module implemented in code.
    pub fn register(&mut self, module: &dyn CcmModule) -> Result<(), ModuleError> {
        let declaration = module.declaration();
        validate(&declaration, Path::new("<registered>"))?;

        self.insert(InstalledModule {
            declaration,
            dir: None,
            source: ModuleSource::Registered,
        })
    }

    /// Add an installed module. Names must be unique.
    pub fn insert(&mut self, module: InstalledModule) -> Result<(), ModuleError> {
        let name = module.name().to_string();
        if self.modules.contains_key(&name) {
            return Err(ModuleError::DuplicateModule { module: name });
        }

        debug!(module = %name, source = ?module.source, "module installed");
        self.modules.insert(name, module);
        Ok(())
    }

    /// Remove disabled modules by name, returning how many were removed.
    ///
    /// Names that match no installed module are logged and skipped.
    pub fn disable(&mut self, names: &[String]) -> usize {
        let mut removed = 0;
        for name in names {
            if self.modules.remove(name).is_some() {
                info!(module = %name, "module disabled by configuration");
                removed += 1;
            } else {
                warn!(module = %name, "disabled module is not installed");
            }
        }
        removed
    }

    /// Get a module by name.
    pub fn get(&self, name: &str) -> Option<&InstalledModule> {
        self.modules.get(name)
    }

    /// Get the number of installed modules.
    pub fn len(&self) -> usize {
        self.modules.len()
    }

    /// Check if no modules are installed.
    pub fn is_empty(&self) -> bool {
        self.modules.is_empty()
    }

    /// Iterate modules in name order.
    pub fn iter(&self) -> impl Iterator<Item = &InstalledModule> {
        self.modules.values()
    }

    /// Consume the set, returning modules with requirements first.
    pub fn into_load_order(mut self) -> Result<Vec<InstalledModule>, ModuleError> {
        let order = resolve_load_order(self.modules.values().map(|m| &m.declaration))?;

        Ok(order
            .iter()
            .filter_map(|name| self.modules.remove(name))
            .collect())
    }
}
