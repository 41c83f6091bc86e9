//! Catalog of the class identifiers declared by installed modules.
//!
//! Stands in for class loading: a name resolves if some module declared
//! it, either as a content type, as an authoring component, or as a plain
//! class. Content-item subtyping follows the declared `extends` chain.

use std::collections::{HashMap, HashSet};
use std::fmt;

use libreccm_sdk::types::{CCM_OBJECT_CLASS, CONTENT_ITEM_CLASS, ContentTypeDeclaration};
use tracing::debug;

use super::error::ContentTypeError;
use crate::module::InstalledModule;

/// A resolved content-item type.
///
/// Only the catalog hands these out, so holding one proves the name is
/// known and extends the root content item.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ContentItemClass(String);

impl ContentItemClass {
    /// Fully-qualified identifier.
    pub fn name(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ContentItemClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A known class identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassEntry {
    pub name: String,
    /// Declared parent, if any.
    pub parent: Option<String>,
    /// Module that declared it. `None` for the built-in root.
    pub module: Option<String>,
}

/// A content type declaration together with its owning module.
#[derive(Debug, Clone)]
pub struct DeclaredType {
    pub module: String,
    pub declaration: ContentTypeDeclaration,
}

/// Index of every class identifier declared by the installed modules.
#[derive(Debug, Clone)]
pub struct TypeCatalog {
    classes: HashMap<String, ClassEntry>,
    declarations: HashMap<String, DeclaredType>,
}

impl TypeCatalog {
    /// Build the catalog from modules in load order.
    ///
    /// Seeded with the kernel's base object class and the root content
    /// item. The first module to declare a name owns it; later
    /// declarations of the same name are ignored, but the authoring
    /// components they name are still indexed.
    pub fn build(modules: &[InstalledModule]) -> Self {
        let mut catalog = Self {
            classes: HashMap::new(),
            declarations: HashMap::new(),
        };

        catalog.add_class(CCM_OBJECT_CLASS, None, None);
        catalog.add_class(CONTENT_ITEM_CLASS, Some(CCM_OBJECT_CLASS), None);

        for module in modules {
            let module_name = module.name();

            for content_type in &module.declaration.content_types {
                // Kit components are indexed even when the type itself is ignored.
                if let Some(kit) = &content_type.authoring_kit {
                    catalog.add_class(&kit.create_component, None, Some(module_name));
                    for step in &kit.steps {
                        catalog.add_class(&step.component, None, Some(module_name));
                    }
                }

                if catalog.declarations.contains_key(&content_type.class) {
                    debug!(
                        module = %module_name,
                        class = %content_type.class,
                        "content type already declared by an earlier module"
                    );
                    continue;
                }

                catalog.add_class(
                    &content_type.class,
                    Some(content_type.parent()),
                    Some(module_name),
                );
                catalog.declarations.insert(
                    content_type.class.clone(),
                    DeclaredType {
                        module: module_name.to_string(),
                        declaration: content_type.clone(),
                    },
                );
            }

            for class in &module.declaration.classes {
                catalog.add_class(&class.name, class.extends.as_deref(), Some(module_name));
            }
        }

        catalog
    }

    fn add_class(&mut self, name: &str, parent: Option<&str>, module: Option<&str>) {
        self.classes
            .entry(name.to_string())
            .or_insert_with(|| ClassEntry {
                name: name.to_string(),
                parent: parent.map(str::to_string),
                module: module.map(str::to_string),
            });
    }

    /// Resolve a fully-qualified name.
    pub fn resolve(&self, name: &str) -> Result<&ClassEntry, ContentTypeError> {
        self.classes
            .get(name)
            .ok_or_else(|| ContentTypeError::ClassResolution {
                name: name.to_string(),
            })
    }

    /// Whether `name` is the root content item or extends it.
    ///
    /// Chains through unknown parents or around a cycle are not content items.
    pub fn is_content_item(&self, name: &str) -> bool {
        let mut visited = HashSet::new();
        let mut current = name;

        loop {
            if current == CONTENT_ITEM_CLASS {
                return true;
            }
            if !visited.insert(current) {
                return false;
            }
            match self.classes.get(current).and_then(|c| c.parent.as_deref()) {
                Some(parent) => current = parent,
                None => return false,
            }
        }
    }

    /// Narrow a name to a content-item type.
    pub fn content_item_class(&self, name: &str) -> Result<ContentItemClass, ContentTypeError> {
        let entry = self.resolve(name)?;
        if !self.is_content_item(&entry.name) {
            return Err(ContentTypeError::TypeMismatch {
                name: name.to_string(),
            });
        }
        Ok(ContentItemClass(entry.name.clone()))
    }

    /// The declaration that owns a content type, if one was made.
    pub fn declaration(&self, name: &str) -> Option<&DeclaredType> {
        self.declarations.get(name)
    }

    /// Number of known class identifiers, including the built-in ones.
    pub fn len(&self) -> usize {
        self.classes.len()
    }

    /// Always false: the built-in classes are always present.
    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }
}
