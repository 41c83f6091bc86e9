//! Content type descriptors.

use libreccm_sdk::types::{
    BUNDLE_SUFFIX, ContentTypeMode, DEFAULT_DESCRIPTION_KEY, DEFAULT_LABEL_KEY,
};
use serde::Serialize;

use super::authoring::{AuthoringKitInfo, or_default, resolve_authoring_kit};
use super::catalog::{ContentItemClass, DeclaredType};

/// Descriptive metadata and authoring kit of one content type.
///
/// Bundle and key fields are never empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContentTypeInfo {
    content_item_class: String,
    module: Option<String>,
    mode: ContentTypeMode,
    label_bundle: String,
    label_key: String,
    description_bundle: String,
    description_key: String,
    authoring_kit: Option<AuthoringKitInfo>,
}

impl ContentTypeInfo {
    /// Fully-qualified identifier of the content-item type.
    pub fn content_item_class(&self) -> &str {
        &self.content_item_class
    }

    /// Module whose declaration produced this descriptor.
    pub fn module(&self) -> Option<&str> {
        self.module.as_deref()
    }

    pub fn mode(&self) -> ContentTypeMode {
        self.mode
    }

    pub fn label_bundle(&self) -> &str {
        &self.label_bundle
    }

    pub fn label_key(&self) -> &str {
        &self.label_key
    }

    pub fn description_bundle(&self) -> &str {
        &self.description_bundle
    }

    pub fn description_key(&self) -> &str {
        &self.description_key
    }

    pub fn authoring_kit(&self) -> Option<&AuthoringKitInfo> {
        self.authoring_kit.as_ref()
    }
}

/// Bundle used when a declaration names none: the identifier plus `Bundle`.
pub fn default_bundle_name(content_item_class: &str) -> String {
    format!("{content_item_class}{BUNDLE_SUFFIX}")
}

/// Build the descriptor of `class` from its declaration, if it has one.
///
/// Pure: the same inputs always produce an equal descriptor.
pub fn resolve_content_type_info(
    class: &ContentItemClass,
    declared: Option<&DeclaredType>,
) -> ContentTypeInfo {
    let name = class.name();
    let default_bundle = default_bundle_name(name);

    let description = declared.and_then(|d| d.declaration.description.as_ref());
    let (label_bundle, label_key, description_bundle, description_key) = match description {
        Some(desc) => (
            or_default(&desc.label_bundle, || default_bundle.clone()),
            or_default(&desc.label_key, || DEFAULT_LABEL_KEY.to_string()),
            or_default(&desc.description_bundle, || default_bundle.clone()),
            or_default(&desc.description_key, || DEFAULT_DESCRIPTION_KEY.to_string()),
        ),
        None => (
            default_bundle.clone(),
            DEFAULT_LABEL_KEY.to_string(),
            default_bundle.clone(),
            DEFAULT_DESCRIPTION_KEY.to_string(),
        ),
    };

    ContentTypeInfo {
        content_item_class: name.to_string(),
        module: declared.map(|d| d.module.clone()),
        mode: declared.map(|d| d.declaration.mode).unwrap_or_default(),
        label_bundle,
        label_key,
        description_bundle,
        description_key,
        authoring_kit: declared
            .and_then(|d| d.declaration.authoring_kit.as_ref())
            .map(|kit| resolve_authoring_kit(name, kit)),
    }
}
