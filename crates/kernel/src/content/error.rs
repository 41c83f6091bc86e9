//! Content type lookup errors.

use thiserror::Error;

/// Why a name could not be turned into a content type.
///
/// Both variants mean "invalid content type" to callers. The API maps
/// them to different statuses.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ContentTypeError {
    /// The name does not resolve to any class known to the installed modules.
    #[error("invalid content type '{name}': no such class")]
    ClassResolution { name: String },

    /// The name resolves, but not to a content-item type.
    #[error("invalid content type '{name}': not a content item type")]
    TypeMismatch { name: String },
}

impl ContentTypeError {
    /// The name the caller asked for.
    pub fn name(&self) -> &str {
        match self {
            Self::ClassResolution { name } | Self::TypeMismatch { name } => name,
        }
    }
}
