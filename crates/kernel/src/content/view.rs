//! Localized views of content type descriptors.
//!
//! Shared by the JSON API and the CLI so both render the same texts.

use libreccm_sdk::types::ContentTypeMode;
use serde::Serialize;

use super::authoring::AuthoringStepInfo;
use super::type_info::ContentTypeInfo;
use crate::i18n::BundleCatalog;

/// A content type with its texts resolved for one locale.
#[derive(Debug, Clone, Serialize)]
pub struct ContentTypeView {
    pub content_item_class: String,
    pub module: Option<String>,
    pub mode: ContentTypeMode,
    pub label: String,
    pub description: String,
    pub create_component: Option<String>,
    pub steps: Vec<AuthoringStepView>,
}

/// An authoring step with its texts resolved for one locale.
#[derive(Debug, Clone, Serialize)]
pub struct AuthoringStepView {
    pub component: String,
    pub order: i32,
    pub label: String,
    pub description: String,
}

impl ContentTypeView {
    pub fn localize(info: &ContentTypeInfo, bundles: &BundleCatalog, locale: &str) -> Self {
        let kit = info.authoring_kit();

        Self {
            content_item_class: info.content_item_class().to_string(),
            module: info.module().map(str::to_string),
            mode: info.mode(),
            label: bundles.localize(info.label_bundle(), info.label_key(), locale),
            description: bundles.localize(info.description_bundle(), info.description_key(), locale),
            create_component: kit.map(|k| k.create_component().to_string()),
            steps: kit
                .map(|k| {
                    k.steps()
                        .iter()
                        .map(|step| AuthoringStepView::localize(step, bundles, locale))
                        .collect()
                })
                .unwrap_or_default(),
        }
    }
}

impl AuthoringStepView {
    pub fn localize(step: &AuthoringStepInfo, bundles: &BundleCatalog, locale: &str) -> Self {
        Self {
            component: step.component().to_string(),
            order: step.order(),
            label: bundles.localize(step.label_bundle(), step.label_key(), locale),
            description: bundles.localize(step.description_bundle(), step.description_key(), locale),
        }
    }
}
