//! Module dependency resolution using topological sort.
//!
//! Ensures modules are loaded in the correct order based on `requires`.
//! Uses Kahn's algorithm with cycle detection. Modules that become ready
//! at the same time are taken in name order so the result is stable.

use std::collections::{BTreeMap, BTreeSet};

use libreccm_sdk::types::ModuleDeclaration;

use super::error::ModuleError;

/// Resolve module load order.
///
/// Returns module names sorted so that requirements come before the
/// modules requiring them.
///
/// # Errors
/// - A module requires a module that isn't in `modules`
/// - Requirements form a cycle
pub fn resolve_load_order<'a, I>(modules: I) -> Result<Vec<String>, ModuleError>
where
    I: IntoIterator<Item = &'a ModuleDeclaration>,
{
    let modules: BTreeMap<&str, &ModuleDeclaration> =
        modules.into_iter().map(|m| (m.name.as_str(), m)).collect();

    // in_degree[m] = number of modules m still waits for
    let mut in_degree: BTreeMap<&str, usize> = modules.keys().map(|name| (*name, 0)).collect();
    let mut dependents: BTreeMap<&str, Vec<&str>> = BTreeMap::new();

    for (name, module) in &modules {
        for dep in &module.requires {
            if !modules.contains_key(dep.as_str()) {
                return Err(ModuleError::MissingDependency {
                    module: (*name).to_string(),
                    dependency: dep.clone(),
                });
            }

            if let Some(degree) = in_degree.get_mut(name) {
                *degree += 1;
            }
            dependents.entry(dep.as_str()).or_default().push(*name);
        }
    }

    let mut ready: BTreeSet<&str> = in_degree
        .iter()
        .filter(|(_, degree)| **degree == 0)
        .map(|(name, _)| *name)
        .collect();

    let mut result = Vec::with_capacity(modules.len());

    while let Some(module) = ready.pop_first() {
        result.push(module.to_string());

        for dependent in dependents.get(module).into_iter().flatten() {
            if let Some(degree) = in_degree.get_mut(dependent) {
                *degree -= 1;
                if *degree == 0 {
                    ready.insert(*dependent);
                }
            }
        }
    }

    if result.len() != modules.len() {
        let in_cycle: Vec<&str> = in_degree
            .iter()
            .filter(|(_, degree)| **degree > 0)
            .map(|(name, _)| *name)
            .collect();

        return Err(ModuleError::CircularDependency {
            cycle: in_cycle.join(", "),
        });
    }

    Ok(result)
}
