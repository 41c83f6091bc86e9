//! ContentType record.
//!
//! A content section's registration of a content-item type. Storage is
//! outside the kernel; the registry only needs the type identifier.

use libreccm_sdk::types::ContentTypeMode;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Content type record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentType {
    /// Unique identifier (UUIDv7, time-sortable).
    pub id: Uuid,

    /// Fully-qualified identifier of the content-item type.
    pub content_item_class: String,

    #[serde(default)]
    pub mode: ContentTypeMode,

    /// Lifecycle applied to new items of this type.
    #[serde(default)]
    pub default_lifecycle: Option<String>,

    /// Workflow applied to new items of this type.
    #[serde(default)]
    pub default_workflow: Option<String>,
}

impl ContentType {
    /// Create a record for a content-item type with default settings.
    pub fn new(content_item_class: impl Into<String>) -> Self {
        Self {
            id: Uuid::now_v7(),
            content_item_class: content_item_class.into(),
            mode: ContentTypeMode::Default,
            default_lifecycle: None,
            default_workflow: None,
        }
    }
}
