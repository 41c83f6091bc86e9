//! Integration tests for the content type registry.
//!
//! Runs the real discovery, catalog and registry code against the sample
//! modules in `modules/` and against temporary module trees.
//!
//! ```bash
//! cargo test --test registry_test
//! ```

#![allow(clippy::unwrap_used, clippy::expect_used)]

use libreccm_kernel::content::{ContentTypeError, ContentTypeRegistry};
use libreccm_kernel::models::ContentType;
use libreccm_kernel::module::{CcmModule, ModuleError, ModuleSet};
use libreccm_sdk::types::{
    CCM_OBJECT_CLASS, CONTENT_ITEM_CLASS, ContentTypeDeclaration, ContentTypeMode, ModuleDeclaration,
};
use libreccm_test_utils::{ModuleTree, content_types, modules, repo_modules_dir};

const ARTICLE: &str = "org.librecms.contenttypes.Article";
const MULTI_PART_ARTICLE: &str = "org.librecms.contenttypes.MultiPartArticle";

fn repo_registry() -> ContentTypeRegistry {
    let modules = ModuleSet::discover(&repo_modules_dir()).expect("sample modules must load");
    let registry = ContentTypeRegistry::new(modules).expect("sample modules must resolve");
    registry.initialize();
    registry
}

fn class_names(registry: &ContentTypeRegistry) -> Vec<String> {
    registry
        .available_content_types()
        .iter()
        .map(|info| info.content_item_class().to_string())
        .collect()
}

fn step_components(registry: &ContentTypeRegistry, class: &str) -> Vec<String> {
    let info = registry.content_type_info_by_name(class).unwrap();
    info.authoring_kit()
        .unwrap()
        .steps()
        .iter()
        .map(|s| s.component().rsplit('.').next().unwrap().to_string())
        .collect()
}

struct CodeModule(ModuleDeclaration);

impl CcmModule for CodeModule {
    fn declaration(&self) -> ModuleDeclaration {
        self.0.clone()
    }
}

// =============================================================================
// Sample modules
// =============================================================================

#[test]
fn sample_modules_load_in_dependency_order() {
    let registry = repo_registry();
    let order: Vec<&str> = registry.modules().iter().map(|m| m.name()).collect();
    assert_eq!(order, vec!["ccm_cms", "ccm_cms_mpa", "ccm_docrepo"]);
}

#[test]
fn sample_available_types_have_kits_and_are_sorted() {
    let registry = repo_registry();
    assert_eq!(
        class_names(&registry),
        vec![
            "org.librecms.contenttypes.Article",
            "org.librecms.contenttypes.Bookmark",
            "org.librecms.contenttypes.Event",
            "org.librecms.contenttypes.GlossaryItem",
            "org.librecms.contenttypes.MultiPartArticle",
            "org.librecms.contenttypes.News",
        ]
    );
}

#[test]
fn article_declared_by_two_modules_keeps_first_owner() {
    let registry = repo_registry();

    let articles = registry
        .available_content_types()
        .iter()
        .filter(|info| info.content_item_class() == ARTICLE)
        .count();
    assert_eq!(articles, 1);

    let article = registry.content_type_info_by_name(ARTICLE).unwrap();
    assert_eq!(article.module(), Some("ccm_cms"));
    assert_eq!(
        article.authoring_kit().unwrap().create_component(),
        "org.librecms.ui.authoring.PageCreate"
    );
}

#[test]
fn article_steps_follow_order() {
    let registry = repo_registry();
    assert_eq!(
        step_components(&registry, ARTICLE),
        vec!["PagePropertiesStep", "ArticleLeadStep", "ArticleTextStep"]
    );
}

#[test]
fn event_steps_with_equal_order_keep_declaration_order() {
    let registry = repo_registry();
    assert_eq!(
        step_components(&registry, "org.librecms.contenttypes.Event"),
        vec!["PagePropertiesStep", "EventDateStep", "EventLocationStep"]
    );
}

#[test]
fn undescribed_type_uses_default_bundle_and_keys() {
    let registry = repo_registry();
    let article = registry.content_type_info_by_name(ARTICLE).unwrap();

    assert_eq!(article.label_bundle(), "org.librecms.contenttypes.ArticleBundle");
    assert_eq!(article.description_bundle(), "org.librecms.contenttypes.ArticleBundle");
    assert_eq!(article.label_key(), "label");
    assert_eq!(article.description_key(), "description");
}

#[test]
fn partially_described_type_fills_missing_bundles() {
    let registry = repo_registry();
    let mpa = registry.content_type_info_by_name(MULTI_PART_ARTICLE).unwrap();

    assert_eq!(mpa.label_key(), "mpa.label");
    assert_eq!(mpa.description_key(), "mpa.description");
    assert_eq!(
        mpa.label_bundle(),
        "org.librecms.contenttypes.MultiPartArticleBundle"
    );
}

#[test]
fn step_without_keys_uses_component_simple_name() {
    let registry = repo_registry();
    let article = registry.content_type_info_by_name(ARTICLE).unwrap();
    let steps = article.authoring_kit().unwrap().steps();

    let text = steps.last().unwrap();
    assert_eq!(text.label_key(), "ArticleTextStep.label");
    assert_eq!(text.description_key(), "ArticleTextStep.description");
    assert_eq!(text.label_bundle(), "org.librecms.contenttypes.ArticleBundle");

    let properties = steps.first().unwrap();
    assert_eq!(properties.label_key(), "basic_properties.label");
    assert_eq!(properties.label_bundle(), "org.librecms.CmsResources");
}

#[test]
fn subtype_of_declared_type_is_content_item() {
    let registry = repo_registry();
    let class = registry.content_item_class(MULTI_PART_ARTICLE).unwrap();
    assert_eq!(class.name(), MULTI_PART_ARTICLE);
}

#[test]
fn type_without_kit_is_described_but_not_available() {
    let registry = repo_registry();

    let resource = registry
        .content_type_info_by_name("org.libreccm.docrepo.Resource")
        .unwrap();
    assert!(resource.authoring_kit().is_none());
    assert_eq!(resource.module(), Some("ccm_docrepo"));
    assert!(
        !class_names(&registry).contains(&"org.libreccm.docrepo.Resource".to_string())
    );
}

#[test]
fn root_content_item_resolves_with_defaults() {
    let registry = repo_registry();
    let root = registry.content_type_info_by_name(CONTENT_ITEM_CLASS).unwrap();

    assert!(root.module().is_none());
    assert!(root.authoring_kit().is_none());
    assert_eq!(
        root.label_bundle(),
        "org.librecms.contentsection.ContentItemBundle"
    );
}

#[test]
fn unknown_name_is_class_resolution_error() {
    let registry = repo_registry();
    let err = registry
        .content_type_info_by_name("not.a.real.Class")
        .unwrap_err();
    assert!(matches!(err, ContentTypeError::ClassResolution { .. }));
}

#[test]
fn non_content_item_names_are_type_mismatch() {
    let registry = repo_registry();
    for name in [
        "org.librecms.contentsection.ContentSection",
        "org.librecms.ui.authoring.ArticleTextStep",
        "org.libreccm.docrepo.BlobObject",
        CCM_OBJECT_CLASS,
    ] {
        let err = registry.content_type_info_by_name(name).unwrap_err();
        assert!(
            matches!(err, ContentTypeError::TypeMismatch { .. }),
            "{name} should be a type mismatch, got {err:?}"
        );
        assert_eq!(err.name(), name);
    }
}

#[test]
fn components_of_ignored_redeclaration_are_known_classes() {
    let registry = repo_registry();

    let err = registry
        .content_type_info_by_name("org.libreccm.docrepo.ui.ArticleCreate")
        .unwrap_err();
    assert!(
        matches!(err, ContentTypeError::TypeMismatch { .. }),
        "expected a type mismatch, got {err:?}"
    );

    let owner = registry
        .catalog()
        .resolve("org.libreccm.docrepo.ui.ArticleCreate")
        .unwrap();
    assert_eq!(owner.module.as_deref(), Some("ccm_docrepo"));
}

#[test]
fn internal_types_are_not_creatable() {
    let registry = repo_registry();
    let creatable: Vec<String> = registry
        .creatable_content_types()
        .iter()
        .map(|info| info.content_item_class().to_string())
        .collect();

    assert!(!creatable.contains(&"org.librecms.contenttypes.GlossaryItem".to_string()));
    assert!(creatable.contains(&"org.librecms.contenttypes.Bookmark".to_string()));
    assert_eq!(creatable.len(), registry.len() - 1);
}

#[test]
fn hidden_mode_is_reported() {
    let registry = repo_registry();
    let bookmark = registry
        .content_type_info_by_name("org.librecms.contenttypes.Bookmark")
        .unwrap();
    assert_eq!(bookmark.mode(), ContentTypeMode::Hidden);
}

#[test]
fn lookup_by_content_type_record() {
    let registry = repo_registry();

    let record = ContentType::new("org.librecms.contenttypes.News");
    let info = registry.content_type_info_for(&record).unwrap();
    assert_eq!(info.label_key(), "news.label");

    let stale = ContentType::new("org.librecms.contenttypes.Removed");
    assert!(matches!(
        registry.content_type_info_for(&stale),
        Err(ContentTypeError::ClassResolution { .. })
    ));
}

#[test]
fn per_module_listing() {
    let registry = repo_registry();
    let docrepo: Vec<String> = registry
        .content_types_of_module("ccm_docrepo")
        .iter()
        .map(|info| info.content_item_class().to_string())
        .collect();

    assert_eq!(docrepo, vec!["org.libreccm.docrepo.Resource", ARTICLE]);
    assert!(registry.content_types_of_module("ccm_unknown").is_empty());
}

#[test]
fn repeated_lookups_return_equal_descriptors() {
    let registry = repo_registry();
    let first = registry.content_type_info_by_name(ARTICLE).unwrap();
    let second = registry.content_type_info_by_name(ARTICLE).unwrap();
    assert_eq!(first, second);
}

// =============================================================================
// Module sets built in tests
// =============================================================================

#[test]
fn module_with_kit_and_without_kit() {
    let mut set = ModuleSet::new();
    set.register(&CodeModule(modules::cms())).unwrap();

    let registry = ContentTypeRegistry::new(set).unwrap();
    assert!(registry.available_content_types().is_empty());

    registry.initialize();
    assert_eq!(class_names(&registry), vec![content_types::ARTICLE]);
    assert_eq!(
        step_components(&registry, content_types::ARTICLE),
        vec!["PagePropertiesStep", "ArticleLeadStep", "ArticleTextStep"]
    );

    let orders: Vec<i32> = registry.available_content_types()[0]
        .authoring_kit()
        .unwrap()
        .steps()
        .iter()
        .map(|s| s.order())
        .collect();
    assert_eq!(orders, vec![1, 2, 3]);
}

#[test]
fn two_modules_declaring_the_same_type() {
    let mut set = ModuleSet::new();
    set.register(&CodeModule(modules::cms())).unwrap();
    set.register(&CodeModule(modules::events())).unwrap();

    let registry = ContentTypeRegistry::new(set).unwrap();
    registry.initialize();

    assert_eq!(
        class_names(&registry),
        vec![content_types::ARTICLE, content_types::EVENT]
    );
}

#[test]
fn registered_and_discovered_modules_mix() {
    let tree = ModuleTree::new();
    tree.module(
        "cms",
        r#"
name = "cms"
version = "1.0.0"

[[content_types]]
class = "org.librecms.contenttypes.Article"

[content_types.authoring_kit]
create_component = "org.librecms.ui.authoring.PageCreate"
"#,
    );

    let mut set = ModuleSet::discover(tree.path()).unwrap();
    set.register(&CodeModule(
        ModuleDeclaration::new("events", "1.0.0")
            .requires("cms")
            .content_type(content_types::event()),
    ))
    .unwrap();

    let registry = ContentTypeRegistry::new(set).unwrap();
    registry.initialize();

    assert_eq!(registry.len(), 2);
    assert_eq!(
        registry.modules().iter().map(|m| m.name()).collect::<Vec<_>>(),
        vec!["cms", "events"]
    );
}

#[test]
fn missing_requirement_fails_construction() {
    let mut set = ModuleSet::new();
    set.register(&CodeModule(modules::events())).unwrap();

    let err = ContentTypeRegistry::new(set).err().unwrap();
    assert!(matches!(err, ModuleError::MissingDependency { .. }));
}

#[test]
fn declared_type_outside_content_item_hierarchy_fails_construction() {
    let mut set = ModuleSet::new();
    set.register(&CodeModule(
        ModuleDeclaration::new("broken", "1.0.0").content_type(
            ContentTypeDeclaration::new("org.example.Orphan").extends("org.example.Unknown"),
        ),
    ))
    .unwrap();

    let err = ContentTypeRegistry::new(set).err().unwrap();
    assert!(err.to_string().contains("does not extend"));
}

#[test]
fn disabled_module_types_disappear() {
    let mut set = ModuleSet::discover(&repo_modules_dir()).unwrap();
    assert_eq!(set.disable(&["ccm_cms_mpa".to_string()]), 1);

    let registry = ContentTypeRegistry::new(set).unwrap();
    registry.initialize();

    assert!(!class_names(&registry).contains(&MULTI_PART_ARTICLE.to_string()));
    assert!(matches!(
        registry.content_type_info_by_name(MULTI_PART_ARTICLE),
        Err(ContentTypeError::ClassResolution { .. })
    ));
}

#[test]
fn initialize_can_run_twice() {
    let registry = repo_registry();
    let before = class_names(&registry);
    registry.initialize();
    assert_eq!(class_names(&registry), before);
}

#[test]
fn clones_share_the_available_list() {
    let mut set = ModuleSet::new();
    set.register(&CodeModule(modules::cms())).unwrap();

    let registry = ContentTypeRegistry::new(set).unwrap();
    let clone = registry.clone();
    registry.initialize();

    assert_eq!(clone.len(), 1);
}
