//! Parser for module `.info.toml` manifest files.
//!
//! Each module has a `{name}.info.toml` file that declares:
//! - name, version, description
//! - requires (other modules that must load first)
//! - content types with their descriptions and authoring kits
//! - additional loadable classes

use std::path::Path;

use libreccm_sdk::types::ModuleDeclaration;

use super::error::ModuleError;

/// Parse a module manifest from the given path.
pub fn parse_manifest(path: &Path) -> Result<ModuleDeclaration, ModuleError> {
    let content = std::fs::read_to_string(path).map_err(|e| {
        ModuleError::invalid(
            manifest_stem(path),
            format!("failed to read {}: {e}", path.display()),
        )
    })?;

    parse_manifest_str(&content, path)
}

/// Parse a module manifest from a TOML string.
///
/// `path` is only used in error messages.
pub fn parse_manifest_str(content: &str, path: &Path) -> Result<ModuleDeclaration, ModuleError> {
    let declaration: ModuleDeclaration = toml::from_str(content).map_err(|e| {
        ModuleError::invalid(
            manifest_stem(path),
            format!("failed to parse TOML at {}: {e}", path.display()),
        )
    })?;

    validate(&declaration, path)?;
    Ok(declaration)
}

/// Validate a declaration, whether parsed or registered in code.
pub fn validate(declaration: &ModuleDeclaration, path: &Path) -> Result<(), ModuleError> {
    if declaration.name.is_empty() {
        return Err(ModuleError::invalid(
            manifest_stem(path),
            format!("manifest at {} has empty 'name' field", path.display()),
        ));
    }

    let module = declaration.name.as_str();

    if declaration.version.is_empty() {
        return Err(ModuleError::invalid(module, "empty 'version' field"));
    }

    for content_type in &declaration.content_types {
        if content_type.class.is_empty() {
            return Err(ModuleError::invalid(
                module,
                "content type with empty 'class' field",
            ));
        }

        let Some(kit) = &content_type.authoring_kit else {
            continue;
        };

        if kit.create_component.is_empty() {
            return Err(ModuleError::invalid(
                module,
                format!(
                    "authoring kit of '{}' has empty 'create_component'",
                    content_type.class
                ),
            ));
        }

        if let Some(pos) = kit.steps.iter().position(|s| s.component.is_empty()) {
            return Err(ModuleError::invalid(
                module,
                format!(
                    "authoring step #{} of '{}' has empty 'component'",
                    pos + 1,
                    content_type.class
                ),
            ));
        }
    }

    if declaration.classes.iter().any(|c| c.name.is_empty()) {
        return Err(ModuleError::invalid(module, "class with empty 'name' field"));
    }

    Ok(())
}

/// Module name implied by a manifest file name (`ccm_cms.info.toml` -> `ccm_cms`).
pub fn manifest_stem(path: &Path) -> String {
    path.file_name()
        .and_then(|n| n.to_str())
        .map(|n| n.trim_end_matches(".info.toml").to_string())
        .unwrap_or_else(|| "unknown".to_string())
}
