//! On-disk module discovery.
//!
//! Each installed module lives in its own sub-directory of the modules
//! directory with exactly one `{name}.info.toml` manifest and an optional
//! `bundles/` folder of localized texts.

use std::path::{Path, PathBuf};

use tracing::{debug, info};

use super::error::ModuleError;
use super::info_parser::{manifest_stem, parse_manifest};
use super::set::{InstalledModule, ModuleSource};

/// Discover every module below `modules_dir`, in directory name order.
///
/// A missing directory yields no modules. Any unreadable or malformed
/// module aborts discovery.
pub fn discover_modules(modules_dir: &Path) -> Result<Vec<InstalledModule>, ModuleError> {
    if !modules_dir.exists() {
        info!(
            ?modules_dir,
            "modules directory does not exist, nothing to discover"
        );
        return Ok(Vec::new());
    }

    let mut dirs: Vec<PathBuf> = std::fs::read_dir(modules_dir)
        .map_err(|e| unreadable(modules_dir, &e))?
        .filter_map(|e| e.ok())
        .map(|e| e.path())
        .filter(|p| p.is_dir())
        .collect();

    dirs.sort();

    let mut modules = Vec::with_capacity(dirs.len());
    for dir in dirs {
        modules.push(load_module_dir(&dir)?);
    }

    info!(count = modules.len(), dir = %modules_dir.display(), "discovered modules");
    Ok(modules)
}

/// Load a single module from its directory.
pub fn load_module_dir(module_dir: &Path) -> Result<InstalledModule, ModuleError> {
    let manifest = find_manifest(module_dir)?;
    let declaration = parse_manifest(&manifest)?;

    let stem = manifest_stem(&manifest);
    if declaration.name != stem {
        return Err(ModuleError::invalid(
            &declaration.name,
            format!(
                "name does not match manifest file {}",
                manifest.display()
            ),
        ));
    }

    debug!(
        module = %declaration.name,
        content_types = declaration.content_types.len(),
        "loaded module manifest"
    );

    Ok(InstalledModule {
        declaration,
        dir: Some(module_dir.to_path_buf()),
        source: ModuleSource::Manifest(manifest),
    })
}

fn find_manifest(module_dir: &Path) -> Result<PathBuf, ModuleError> {
    let mut manifests: Vec<PathBuf> = std::fs::read_dir(module_dir)
        .map_err(|e| unreadable(module_dir, &e))?
        .filter_map(|e| e.ok())
        .map(|e| e.path())
        .filter(|p| {
            p.file_name()
                .and_then(|n| n.to_str())
                .is_some_and(|n| n.ends_with(".info.toml"))
        })
        .collect();

    match manifests.len() {
        0 => Err(ModuleError::missing_manifest(
            module_dir.display().to_string(),
        )),
        1 => Ok(manifests.remove(0)),
        _ => Err(ModuleError::MultipleManifests {
            path: module_dir.display().to_string(),
        }),
    }
}

fn unreadable(path: &Path, err: &std::io::Error) -> ModuleError {
    ModuleError::Unreadable {
        path: path.display().to_string(),
        details: err.to_string(),
    }
}
