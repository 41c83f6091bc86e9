//! Content type management.
//!
//! This module provides:
//! - ContentTypeRegistry: content types declared by installed modules
//! - TypeCatalog: the class identifiers those modules declare
//! - ContentTypeInfo / AuthoringKitInfo / AuthoringStepInfo: resolved descriptors
//! - ContentTypeView: descriptors with texts resolved for a locale

mod authoring;
mod catalog;
mod error;
mod type_info;
mod type_registry;
mod view;

pub use authoring::{
    AuthoringKitInfo, AuthoringStepInfo, resolve_authoring_kit, resolve_authoring_step,
};
pub use catalog::{ClassEntry, ContentItemClass, DeclaredType, TypeCatalog};
pub use error::ContentTypeError;
pub use type_info::{ContentTypeInfo, default_bundle_name, resolve_content_type_info};
pub use type_registry::ContentTypeRegistry;
pub use view::{AuthoringStepView, ContentTypeView};
