//! Application state shared across all handlers.

use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::info;

use crate::config::Config;
use crate::content::ContentTypeRegistry;
use crate::i18n::BundleCatalog;
use crate::module::ModuleSet;

/// Shared application state.
///
/// Wrapped in Arc internally so Clone is cheap.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    /// Content type registry, initialized.
    content_types: ContentTypeRegistry,

    /// Resource bundles of the installed modules.
    bundles: BundleCatalog,

    /// Locale used when a request names none.
    default_locale: String,
}

impl AppState {
    /// Discover modules from the configured directory and build the state.
    pub fn new(config: &Config) -> Result<Self> {
        let modules = ModuleSet::discover(&config.modules_dir).with_context(|| {
            format!(
                "failed to discover modules in {}",
                config.modules_dir.display()
            )
        })?;

        Self::with_modules(config, modules)
    }

    /// Build the state from an already assembled module set.
    ///
    /// Modules listed in `config.disabled_modules` are dropped first.
    pub fn with_modules(config: &Config, mut modules: ModuleSet) -> Result<Self> {
        modules.disable(&config.disabled_modules);

        let content_types =
            ContentTypeRegistry::new(modules).context("failed to build content type registry")?;
        content_types.initialize();

        let bundles = BundleCatalog::load(
            content_types
                .modules()
                .iter()
                .filter_map(|m| m.dir.as_deref()),
        )
        .context("failed to load resource bundles")?;

        info!(
            modules = content_types.modules().len(),
            content_types = content_types.len(),
            bundles = bundles.len(),
            "application state ready"
        );

        Ok(Self::from_parts(
            content_types,
            bundles,
            config.default_locale.clone(),
        ))
    }

    /// Assemble the state from its parts.
    pub fn from_parts(
        content_types: ContentTypeRegistry,
        bundles: BundleCatalog,
        default_locale: impl Into<String>,
    ) -> Self {
        Self {
            inner: Arc::new(AppStateInner {
                content_types,
                bundles,
                default_locale: default_locale.into(),
            }),
        }
    }

    /// Get the content type registry.
    pub fn content_types(&self) -> &ContentTypeRegistry {
        &self.inner.content_types
    }

    /// Get the resource bundles.
    pub fn bundles(&self) -> &BundleCatalog {
        &self.inner.bundles
    }

    /// Get the default locale.
    pub fn default_locale(&self) -> &str {
        &self.inner.default_locale
    }

    /// Pick the requested locale or fall back to the default.
    pub fn locale_or_default<'a>(&'a self, requested: Option<&'a str>) -> &'a str {
        requested
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .unwrap_or(self.default_locale())
    }
}
