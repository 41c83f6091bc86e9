//! Declaration types for LibreCCM modules.
//!
//! A module describes the content types it contributes with these
//! structs, either in its `.info.toml` manifest or in code through the
//! kernel's module registration trait. Empty strings mean "not declared";
//! the kernel substitutes defaults when it resolves descriptors.

use serde::{Deserialize, Serialize};

/// Identifier of the root content-item type every content type extends.
pub const CONTENT_ITEM_CLASS: &str = "org.librecms.contentsection.ContentItem";

/// Identifier of the kernel's base object class. The root content item
/// extends it; it is not a content item itself.
pub const CCM_OBJECT_CLASS: &str = "org.libreccm.core.CcmObject";

/// Suffix appended to a type identifier to form its default bundle name.
pub const BUNDLE_SUFFIX: &str = "Bundle";

/// Type-level label key used when a declaration names none.
pub const DEFAULT_LABEL_KEY: &str = "label";

/// Type-level description key used when a declaration names none.
pub const DEFAULT_DESCRIPTION_KEY: &str = "description";

/// Return the last segment of a fully-qualified identifier.
///
/// Nested names separated by `$` yield the innermost segment, so
/// `org.librecms.ui.ArticleForm$TextStep` becomes `TextStep`.
pub fn simple_name(identifier: &str) -> &str {
    let tail = identifier.rsplit('.').next().unwrap_or(identifier);
    tail.rsplit('$').next().unwrap_or(tail)
}

/// Visibility of a content type in the authoring UI.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContentTypeMode {
    /// Offered everywhere.
    #[default]
    Default,
    /// Registered and editable, but not listed in pickers unless asked.
    Hidden,
    /// Used by other types only; never offered for direct creation.
    Internal,
}

/// Label and description bundle/key pairs of a content type.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeDescription {
    #[serde(default)]
    pub label_bundle: String,
    #[serde(default)]
    pub label_key: String,
    #[serde(default)]
    pub description_bundle: String,
    #[serde(default)]
    pub description_key: String,
}

impl TypeDescription {
    /// Use the same bundle for label and description.
    pub fn bundle(mut self, bundle: impl Into<String>) -> Self {
        let bundle = bundle.into();
        self.label_bundle = bundle.clone();
        self.description_bundle = bundle;
        self
    }

    pub fn label_key(mut self, key: impl Into<String>) -> Self {
        self.label_key = key.into();
        self
    }

    pub fn description_key(mut self, key: impl Into<String>) -> Self {
        self.description_key = key.into();
        self
    }
}

/// One step of an authoring kit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthoringStepDeclaration {
    /// Fully-qualified identifier of the UI component implementing the step.
    pub component: String,
    #[serde(default)]
    pub label_bundle: String,
    #[serde(default)]
    pub label_key: String,
    #[serde(default)]
    pub description_bundle: String,
    #[serde(default)]
    pub description_key: String,
    /// Display rank, lower first. Need not be unique.
    #[serde(default)]
    pub order: i32,
}

impl AuthoringStepDeclaration {
    pub fn new(component: impl Into<String>, order: i32) -> Self {
        Self {
            component: component.into(),
            label_bundle: String::new(),
            label_key: String::new(),
            description_bundle: String::new(),
            description_key: String::new(),
            order,
        }
    }

    /// Use the same bundle for label and description.
    pub fn bundle(mut self, bundle: impl Into<String>) -> Self {
        let bundle = bundle.into();
        self.label_bundle = bundle.clone();
        self.description_bundle = bundle;
        self
    }

    pub fn label_key(mut self, key: impl Into<String>) -> Self {
        self.label_key = key.into();
        self
    }

    pub fn description_key(mut self, key: impl Into<String>) -> Self {
        self.description_key = key.into();
        self
    }
}

/// The set of UI steps used to create and edit a content type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthoringKitDeclaration {
    /// Fully-qualified identifier of the "create new item" form.
    pub create_component: String,
    /// Steps in declaration order.
    #[serde(default)]
    pub steps: Vec<AuthoringStepDeclaration>,
}

impl AuthoringKitDeclaration {
    pub fn new(create_component: impl Into<String>) -> Self {
        Self {
            create_component: create_component.into(),
            steps: Vec::new(),
        }
    }

    pub fn step(mut self, step: AuthoringStepDeclaration) -> Self {
        self.steps.push(step);
        self
    }
}

/// A content type contributed by a module.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentTypeDeclaration {
    /// Fully-qualified identifier of the content-item type.
    pub class: String,
    /// Parent content-item type. `None` means [`CONTENT_ITEM_CLASS`].
    #[serde(default)]
    pub extends: Option<String>,
    #[serde(default)]
    pub mode: ContentTypeMode,
    #[serde(default)]
    pub description: Option<TypeDescription>,
    #[serde(default)]
    pub authoring_kit: Option<AuthoringKitDeclaration>,
}

impl ContentTypeDeclaration {
    pub fn new(class: impl Into<String>) -> Self {
        Self {
            class: class.into(),
            extends: None,
            mode: ContentTypeMode::Default,
            description: None,
            authoring_kit: None,
        }
    }

    pub fn extends(mut self, parent: impl Into<String>) -> Self {
        self.extends = Some(parent.into());
        self
    }

    pub fn mode(mut self, mode: ContentTypeMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn description(mut self, description: TypeDescription) -> Self {
        self.description = Some(description);
        self
    }

    pub fn authoring_kit(mut self, kit: AuthoringKitDeclaration) -> Self {
        self.authoring_kit = Some(kit);
        self
    }

    /// Parent type, falling back to the root content item.
    pub fn parent(&self) -> &str {
        self.extends.as_deref().unwrap_or(CONTENT_ITEM_CLASS)
    }
}

/// A loadable identifier that is not itself a content type declaration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassDeclaration {
    pub name: String,
    #[serde(default)]
    pub extends: Option<String>,
}

impl ClassDeclaration {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            extends: None,
        }
    }

    pub fn extends(mut self, parent: impl Into<String>) -> Self {
        self.extends = Some(parent.into());
        self
    }
}

/// Everything one installed module contributes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModuleDeclaration {
    /// Module machine name (must match its directory and manifest file name).
    pub name: String,
    pub version: String,
    #[serde(default)]
    pub description: String,
    /// Modules that must be loaded before this one.
    #[serde(default)]
    pub requires: Vec<String>,
    #[serde(default)]
    pub content_types: Vec<ContentTypeDeclaration>,
    #[serde(default)]
    pub classes: Vec<ClassDeclaration>,
}

impl ModuleDeclaration {
    pub fn new(name: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            version: version.into(),
            description: String::new(),
            requires: Vec::new(),
            content_types: Vec::new(),
            classes: Vec::new(),
        }
    }

    pub fn requires(mut self, module: impl Into<String>) -> Self {
        self.requires.push(module.into());
        self
    }

    pub fn content_type(mut self, content_type: ContentTypeDeclaration) -> Self {
        self.content_types.push(content_type);
        self
    }

    pub fn class(mut self, class: ClassDeclaration) -> Self {
        self.classes.push(class);
        self
    }
}
