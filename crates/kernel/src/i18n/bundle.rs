//! Resource bundles for localized labels and descriptions.
//!
//! Bundles are TOML files in each module's `bundles/` directory. The
//! default-locale file is `{bundle}.toml`; translations live next to it as
//! `{bundle}_{locale}.toml`. Each file is a flat table of strings:
//!
//! ```toml
//! label = "Article"
//! "ArticleTextStep.label" = "Text"
//! ```

use std::collections::HashMap;
use std::path::Path;

use thiserror::Error;
use tracing::{debug, info};

/// Errors raised while loading bundle files.
#[derive(Debug, Error)]
pub enum BundleError {
    #[error("failed to read bundle '{path}': {details}")]
    Unreadable { path: String, details: String },

    #[error("bundle '{path}' is not valid TOML: {details}")]
    InvalidToml { path: String, details: String },

    #[error("bundle '{path}': key '{key}' must be a string")]
    NotAString { path: String, key: String },
}

/// All bundles of the installed modules, keyed by file stem.
#[derive(Debug, Clone, Default)]
pub struct BundleCatalog {
    bundles: HashMap<String, HashMap<String, String>>,
}

impl BundleCatalog {
    /// Create an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load the `bundles/` directory of every given module directory.
    ///
    /// When two modules ship the same bundle, keys from the earlier
    /// directory win.
    pub fn load<'a, I>(module_dirs: I) -> Result<Self, BundleError>
    where
        I: IntoIterator<Item = &'a Path>,
    {
        let mut catalog = Self::new();

        for dir in module_dirs {
            let bundles_dir = dir.join("bundles");
            if !bundles_dir.is_dir() {
                continue;
            }

            let mut files: Vec<_> = std::fs::read_dir(&bundles_dir)
                .map_err(|e| BundleError::Unreadable {
                    path: bundles_dir.display().to_string(),
                    details: e.to_string(),
                })?
                .filter_map(|e| e.ok())
                .map(|e| e.path())
                .filter(|p| p.extension().is_some_and(|ext| ext == "toml"))
                .collect();
            files.sort();

            for file in files {
                catalog.load_file(&file)?;
            }
        }

        info!(bundles = catalog.len(), "resource bundles loaded");
        Ok(catalog)
    }

    fn load_file(&mut self, path: &Path) -> Result<(), BundleError> {
        let content = std::fs::read_to_string(path).map_err(|e| BundleError::Unreadable {
            path: path.display().to_string(),
            details: e.to_string(),
        })?;

        let Some(stem) = path.file_stem().and_then(|s| s.to_str()) else {
            return Ok(());
        };

        let entries = parse_bundle(&content, &path.display().to_string())?;
        debug!(bundle = %stem, keys = entries.len(), "loaded bundle file");
        self.insert(stem, entries);
        Ok(())
    }

    /// Add entries to a bundle. Existing keys are kept.
    ///
    /// `name` is the bundle name, with a `_{locale}` suffix for translations.
    pub fn insert(&mut self, name: &str, entries: HashMap<String, String>) {
        let bundle = self.bundles.entry(name.to_string()).or_default();
        for (key, text) in entries {
            bundle.entry(key).or_insert(text);
        }
    }

    /// Look up a text.
    ///
    /// Tries `{bundle}_{locale}`, then `{bundle}_{language}` for locales
    /// like `de_AT`, then the default `{bundle}`.
    pub fn text(&self, bundle: &str, key: &str, locale: &str) -> Option<&str> {
        let locale = locale.replace('-', "_");
        let language = locale.split('_').next().unwrap_or_default();

        let mut candidates = Vec::with_capacity(3);
        if !locale.is_empty() {
            candidates.push(format!("{bundle}_{locale}"));
        }
        if !language.is_empty() && language != locale {
            candidates.push(format!("{bundle}_{language}"));
        }
        candidates.push(bundle.to_string());

        candidates
            .iter()
            .filter_map(|name| self.bundles.get(name))
            .find_map(|entries| entries.get(key))
            .map(String::as_str)
    }

    /// Look up a text, falling back to the key itself.
    pub fn localize(&self, bundle: &str, key: &str, locale: &str) -> String {
        match self.text(bundle, key, locale) {
            Some(text) => text.to_string(),
            None => {
                debug!(bundle = %bundle, key = %key, locale = %locale, "missing bundle text");
                key.to_string()
            }
        }
    }

    /// Number of loaded bundle files (translations count separately).
    pub fn len(&self) -> usize {
        self.bundles.len()
    }

    /// Check if no bundles are loaded.
    pub fn is_empty(&self) -> bool {
        self.bundles.is_empty()
    }
}

/// Parse a bundle file into key/text pairs.
pub fn parse_bundle(content: &str, path: &str) -> Result<HashMap<String, String>, BundleError> {
    let table: toml::Table = toml::from_str(content).map_err(|e| BundleError::InvalidToml {
        path: path.to_string(),
        details: e.to_string(),
    })?;

    table
        .into_iter()
        .map(|(key, value)| match value {
            toml::Value::String(text) => Ok((key, text)),
            _ => Err(BundleError::NotAString {
                path: path.to_string(),
                key,
            }),
        })
        .collect()
}
