//! Authoring kit and authoring step descriptors.

use libreccm_sdk::types::{AuthoringKitDeclaration, AuthoringStepDeclaration, simple_name};
use serde::Serialize;

use super::type_info::default_bundle_name;

/// One page of an authoring kit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AuthoringStepInfo {
    label_bundle: String,
    label_key: String,
    description_bundle: String,
    description_key: String,
    order: i32,
    component: String,
}

impl AuthoringStepInfo {
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

    /// Display rank, lower first.
    pub fn order(&self) -> i32 {
        self.order
    }

    /// Identifier of the UI component implementing the step.
    pub fn component(&self) -> &str {
        &self.component
    }
}

/// The create form and ordered steps of a content type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AuthoringKitInfo {
    create_component: String,
    steps: Vec<AuthoringStepInfo>,
}

impl AuthoringKitInfo {
    /// Identifier of the "create new item" form.
    pub fn create_component(&self) -> &str {
        &self.create_component
    }

    /// Steps ascending by order; equal orders keep declaration order.
    pub fn steps(&self) -> &[AuthoringStepInfo] {
        &self.steps
    }
}

/// Resolve one step declared for `content_item_class`.
///
/// Missing bundles fall back to the type's default bundle. Missing keys
/// become `<Component>.label` and `<Component>.description`, unlike the
/// bare keys used at type level.
pub fn resolve_authoring_step(
    content_item_class: &str,
    step: &AuthoringStepDeclaration,
) -> AuthoringStepInfo {
    let default_bundle = default_bundle_name(content_item_class);
    let component_name = simple_name(&step.component);

    AuthoringStepInfo {
        label_bundle: or_default(&step.label_bundle, || default_bundle.clone()),
        label_key: or_default(&step.label_key, || format!("{component_name}.label")),
        description_bundle: or_default(&step.description_bundle, || default_bundle.clone()),
        description_key: or_default(&step.description_key, || {
            format!("{component_name}.description")
        }),
        order: step.order,
        component: step.component.clone(),
    }
}

/// Resolve a kit, sorting its steps before they are stored.
pub fn resolve_authoring_kit(
    content_item_class: &str,
    kit: &AuthoringKitDeclaration,
) -> AuthoringKitInfo {
    let mut steps: Vec<AuthoringStepInfo> = kit
        .steps
        .iter()
        .map(|step| resolve_authoring_step(content_item_class, step))
        .collect();

    // sort_by_key is stable
    steps.sort_by_key(|step| step.order);

    AuthoringKitInfo {
        create_component: kit.create_component.clone(),
        steps,
    }
}

pub(super) fn or_default(value: &str, default: impl FnOnce() -> String) -> String {
    if value.is_empty() {
        default()
    } else {
        value.to_string()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    const ARTICLE: &str = "org.librecms.contenttypes.Article";

    #[test]
    fn step_defaults_use_component_simple_name() {
        let step = AuthoringStepDeclaration::new("org.librecms.ui.authoring.ArticleTextStep", 2);
        let info = resolve_authoring_step(ARTICLE, &step);

        assert_eq!(info.label_bundle(), "org.librecms.contenttypes.ArticleBundle");
        assert_eq!(info.description_bundle(), "org.librecms.contenttypes.ArticleBundle");
        assert_eq!(info.label_key(), "ArticleTextStep.label");
        assert_eq!(info.description_key(), "ArticleTextStep.description");
        assert_eq!(info.order(), 2);
        assert_eq!(info.component(), "org.librecms.ui.authoring.ArticleTextStep");
    }

    #[test]
    fn step_keeps_declared_values() {
        let step = AuthoringStepDeclaration::new("org.librecms.ui.authoring.ArticleTextStep", 0)
            .bundle("org.librecms.CmsResources")
            .label_key("text.label")
            .description_key("text.description");
        let info = resolve_authoring_step(ARTICLE, &step);

        assert_eq!(info.label_bundle(), "org.librecms.CmsResources");
        assert_eq!(info.description_bundle(), "org.librecms.CmsResources");
        assert_eq!(info.label_key(), "text.label");
        assert_eq!(info.description_key(), "text.description");
    }

    #[test]
    fn step_mixes_declared_and_default_values() {
        let mut step = AuthoringStepDeclaration::new("org.example.ui.Body", 0);
        step.label_key = "body".to_string();
        let info = resolve_authoring_step("org.example.Page", &step);

        assert_eq!(info.label_key(), "body");
        assert_eq!(info.description_key(), "Body.description");
        assert_eq!(info.label_bundle(), "org.example.PageBundle");
    }

    #[test]
    fn kit_steps_sorted_ascending() {
        let kit = AuthoringKitDeclaration::new("org.example.ui.Create")
            .step(AuthoringStepDeclaration::new("org.example.ui.Third", 3))
            .step(AuthoringStepDeclaration::new("org.example.ui.First", 1))
            .step(AuthoringStepDeclaration::new("org.example.ui.Second", 2));

        let info = resolve_authoring_kit(ARTICLE, &kit);
        let orders: Vec<i32> = info.steps().iter().map(|s| s.order()).collect();
        assert_eq!(orders, vec![1, 2, 3]);
        assert_eq!(info.create_component(), "org.example.ui.Create");
    }

    #[test]
    fn kit_sort_is_stable_for_equal_orders() {
        let kit = AuthoringKitDeclaration::new("org.example.ui.Create")
            .step(AuthoringStepDeclaration::new("org.example.ui.Late", 5))
            .step(AuthoringStepDeclaration::new("org.example.ui.TieA", 1))
            .step(AuthoringStepDeclaration::new("org.example.ui.TieB", 1))
            .step(AuthoringStepDeclaration::new("org.example.ui.Early", -1))
            .step(AuthoringStepDeclaration::new("org.example.ui.TieC", 1));

        let info = resolve_authoring_kit(ARTICLE, &kit);
        let names: Vec<&str> = info.steps().iter().map(|s| simple_name(s.component())).collect();
        assert_eq!(names, vec!["Early", "TieA", "TieB", "TieC", "Late"]);
    }

    #[test]
    fn empty_kit_has_no_steps() {
        let kit = AuthoringKitDeclaration::new("org.example.ui.Create");
        assert!(resolve_authoring_kit(ARTICLE, &kit).steps().is_empty());
    }
}
