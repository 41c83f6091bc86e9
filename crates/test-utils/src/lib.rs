//! LibreCCM test utilities.
//!
//! Helpers for integration testing: sample module declarations, on-disk
//! module trees, and the path of the sample modules shipped with the repo.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use std::path::{Path, PathBuf};

use libreccm_sdk::types::{
    AuthoringKitDeclaration, AuthoringStepDeclaration, ContentTypeDeclaration, ModuleDeclaration,
};

/// The `modules/` directory at the repository root.
pub fn repo_modules_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("..")
        .join("modules")
}

/// Build a kit whose steps are `(component, order)` pairs in declaration order.
pub fn kit(create_component: &str, steps: &[(&str, i32)]) -> AuthoringKitDeclaration {
    steps.iter().fold(
        AuthoringKitDeclaration::new(create_component),
        |kit, (component, order)| kit.step(AuthoringStepDeclaration::new(*component, *order)),
    )
}

/// Content type builders for testing.
pub mod content_types {
    use super::*;

    pub const ARTICLE: &str = "org.librecms.contenttypes.Article";
    pub const NEWS: &str = "org.librecms.contenttypes.News";
    pub const EVENT: &str = "org.librecms.contenttypes.Event";

    /// Article with steps declared out of order (3, 1, 2).
    pub fn article() -> ContentTypeDeclaration {
        ContentTypeDeclaration::new(ARTICLE).authoring_kit(kit(
            "org.librecms.ui.authoring.PageCreate",
            &[
                ("org.librecms.ui.authoring.ArticleTextStep", 3),
                ("org.librecms.ui.authoring.PagePropertiesStep", 1),
                ("org.librecms.ui.authoring.ArticleLeadStep", 2),
            ],
        ))
    }

    /// News without an authoring kit.
    pub fn news() -> ContentTypeDeclaration {
        ContentTypeDeclaration::new(NEWS)
    }

    /// Event with two steps sharing an order.
    pub fn event() -> ContentTypeDeclaration {
        ContentTypeDeclaration::new(EVENT).authoring_kit(kit(
            "org.librecms.ui.authoring.PageCreate",
            &[
                ("org.librecms.ui.authoring.EventDateStep", 2),
                ("org.librecms.ui.authoring.EventLocationStep", 2),
                ("org.librecms.ui.authoring.PagePropertiesStep", 1),
            ],
        ))
    }
}

/// Module declaration builders for testing.
pub mod modules {
    use super::*;

    /// Module declaring article (kit) and news (no kit).
    pub fn cms() -> ModuleDeclaration {
        ModuleDeclaration::new("cms", "1.0.0")
            .content_type(content_types::article())
            .content_type(content_types::news())
    }

    /// Module that declares article again, plus event.
    pub fn events() -> ModuleDeclaration {
        ModuleDeclaration::new("events", "1.0.0")
            .requires("cms")
            .content_type(content_types::article())
            .content_type(content_types::event())
    }
}

/// A temporary modules directory populated from manifests.
pub struct ModuleTree {
    dir: tempfile::TempDir,
}

impl ModuleTree {
    /// Create an empty modules directory.
    pub fn new() -> Self {
        Self {
            dir: tempfile::tempdir().expect("Failed to create temp modules dir"),
        }
    }

    /// Path of the modules directory.
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Write `{name}/{name}.info.toml` with the given manifest body.
    pub fn module(&self, name: &str, manifest: &str) -> &Self {
        let module_dir = self.dir.path().join(name);
        std::fs::create_dir_all(&module_dir).expect("Failed to create module dir");
        std::fs::write(module_dir.join(format!("{name}.info.toml")), manifest)
            .expect("Failed to write manifest");
        self
    }

    /// Write `{module}/bundles/{file_stem}.toml`.
    pub fn bundle(&self, module: &str, file_stem: &str, body: &str) -> &Self {
        let bundles_dir = self.dir.path().join(module).join("bundles");
        std::fs::create_dir_all(&bundles_dir).expect("Failed to create bundles dir");
        std::fs::write(bundles_dir.join(format!("{file_stem}.toml")), body)
            .expect("Failed to write bundle");
        self
    }
}

impl Default for ModuleTree {
    fn default() -> Self {
        Self::new()
    }
}
