//! Configuration loaded from environment variables.

use std::env;
use std::path::PathBuf;

use anyhow::{Context, Result};

/// Application configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP server port (default: 3000).
    pub port: u16,

    /// Path to the installed modules directory (default: ./modules).
    pub modules_dir: PathBuf,

    /// Locale used when a request names none (default: "en").
    pub default_locale: String,

    /// CORS allowed origins (comma-separated, default: "*").
    pub cors_allowed_origins: Vec<String>,

    /// Discovered modules to skip (from DISABLED_MODULES env var).
    pub disabled_modules: Vec<String>,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self> {
        let port = env::var("PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse()
            .context("PORT must be a valid u16")?;

        let modules_dir = env::var("MODULES_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("./modules"));

        let default_locale = env::var("DEFAULT_LOCALE")
            .map(|v| v.trim().to_string())
            .ok()
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| "en".to_string());

        let cors_allowed_origins = env::var("CORS_ALLOWED_ORIGINS")
            .map(|v| v.split(',').map(|s| s.trim().to_string()).collect())
            .unwrap_or_else(|_| vec!["*".to_string()]);

        let disabled_modules = env::var("DISABLED_MODULES")
            .map(|v| split_list(&v))
            .unwrap_or_default();

        Ok(Self {
            port,
            modules_dir,
            default_locale,
            cors_allowed_origins,
            disabled_modules,
        })
    }

    /// Configuration for the given modules directory, everything else default.
    pub fn for_modules_dir(modules_dir: impl Into<PathBuf>) -> Self {
        Self {
            port: 3000,
            modules_dir: modules_dir.into(),
            default_locale: "en".to_string(),
            cors_allowed_origins: vec!["*".to_string()],
            disabled_modules: Vec::new(),
        }
    }
}

fn split_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}
