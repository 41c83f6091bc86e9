//! Content type registry.
//!
//! Collects the content types declared by installed modules and serves
//! their descriptors to the authoring UI and the content API.

use std::collections::BTreeSet;
use std::sync::Arc;

use parking_lot::RwLock;
use tracing::{debug, info};

use super::catalog::{ContentItemClass, TypeCatalog};
use super::error::ContentTypeError;
use super::type_info::{ContentTypeInfo, resolve_content_type_info};
use crate::models::ContentType;
use crate::module::{InstalledModule, ModuleError, ModuleSet};
use libreccm_sdk::types::{CONTENT_ITEM_CLASS, ContentTypeMode};

/// Registry of content types.
///
/// The list of available types is built by [`initialize`](Self::initialize)
/// and shared read-only; single-type lookups build a fresh descriptor on
/// every call. Clone is cheap.
#[derive(Clone)]
pub struct ContentTypeRegistry {
    inner: Arc<ContentTypeRegistryInner>,
}

struct ContentTypeRegistryInner {
    /// Installed modules in load order.
    modules: Vec<InstalledModule>,
    catalog: TypeCatalog,
    available: RwLock<Arc<[ContentTypeInfo]>>,
}

impl ContentTypeRegistry {
    /// Create a registry over the installed modules.
    ///
    /// Orders the modules by their requirements and indexes every declared
    /// class. Fails if the requirements can't be satisfied or a module
    /// declares a content type that does not extend the root content item.
    /// The available list stays empty until [`initialize`](Self::initialize).
    pub fn new(modules: ModuleSet) -> Result<Self, ModuleError> {
        let modules = modules.into_load_order()?;
        let catalog = TypeCatalog::build(&modules);

        for module in &modules {
            for content_type in &module.declaration.content_types {
                if !catalog.is_content_item(&content_type.class) {
                    return Err(ModuleError::invalid(
                        module.name(),
                        format!(
                            "content type '{}' does not extend {CONTENT_ITEM_CLASS}",
                            content_type.class
                        ),
                    ));
                }
            }
        }

        debug!(
            modules = modules.len(),
            classes = catalog.len(),
            "content type catalog built"
        );

        Ok(Self {
            inner: Arc::new(ContentTypeRegistryInner {
                modules,
                catalog,
                available: RwLock::new(Arc::from(Vec::new())),
            }),
        })
    }

    /// Build the list of content types that have an authoring kit.
    ///
    /// Types are collected from every module, deduplicated and ordered by
    /// identifier. Running it again rebuilds the list.
    pub fn initialize(&self) {
        let classes: BTreeSet<&str> = self
            .inner
            .modules
            .iter()
            .flat_map(|m| m.declaration.content_types.iter())
            .map(|ct| ct.class.as_str())
            .collect();

        let available: Vec<ContentTypeInfo> = classes
            .into_iter()
            .filter(|class| {
                self.inner
                    .catalog
                    .declaration(class)
                    .is_some_and(|d| d.declaration.authoring_kit.is_some())
            })
            .filter_map(|class| self.inner.catalog.content_item_class(class).ok())
            .map(|class| self.content_type_info(&class))
            .collect();

        info!(count = available.len(), "content types initialized");
        *self.inner.available.write() = Arc::from(available);
    }

    /// Content types with an authoring kit, ordered by identifier.
    pub fn available_content_types(&self) -> Arc<[ContentTypeInfo]> {
        self.inner.available.read().clone()
    }

    /// Available content types that may be offered for direct creation.
    pub fn creatable_content_types(&self) -> Vec<ContentTypeInfo> {
        self.available_content_types()
            .iter()
            .filter(|info| info.mode() != ContentTypeMode::Internal)
            .cloned()
            .collect()
    }

    /// Narrow a fully-qualified name to a content-item type.
    pub fn content_item_class(&self, name: &str) -> Result<ContentItemClass, ContentTypeError> {
        self.inner.catalog.content_item_class(name)
    }

    /// Describe a content type, whether or not it has an authoring kit.
    pub fn content_type_info(&self, class: &ContentItemClass) -> ContentTypeInfo {
        resolve_content_type_info(class, self.inner.catalog.declaration(class.name()))
    }

    /// Describe a content type by its fully-qualified name.
    pub fn content_type_info_by_name(&self, name: &str) -> Result<ContentTypeInfo, ContentTypeError> {
        let class = self.content_item_class(name)?;
        Ok(self.content_type_info(&class))
    }

    /// Describe the content type of a content-type record.
    pub fn content_type_info_for(
        &self,
        content_type: &ContentType,
    ) -> Result<ContentTypeInfo, ContentTypeError> {
        self.content_type_info_by_name(&content_type.content_item_class)
    }

    /// Describe every content type a module declares, ordered by identifier.
    ///
    /// Returns an empty list for unknown modules.
    pub fn content_types_of_module(&self, module: &str) -> Vec<ContentTypeInfo> {
        let Some(installed) = self.inner.modules.iter().find(|m| m.name() == module) else {
            return Vec::new();
        };

        installed
            .declaration
            .content_types
            .iter()
            .map(|ct| ct.class.as_str())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .filter_map(|class| self.content_type_info_by_name(class).ok())
            .collect()
    }

    /// Installed modules in load order.
    pub fn modules(&self) -> &[InstalledModule] {
        &self.inner.modules
    }

    /// The class catalog built from the installed modules.
    pub fn catalog(&self) -> &TypeCatalog {
        &self.inner.catalog
    }

    /// Get the number of available content types.
    pub fn len(&self) -> usize {
        self.inner.available.read().len()
    }

    /// Check if no content types are available.
    pub fn is_empty(&self) -> bool {
        self.inner.available.read().is_empty()
    }
}
