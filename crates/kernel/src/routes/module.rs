//! Installed module listing.

use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use serde::Serialize;

use crate::module::{InstalledModule, ModuleSource};
use crate::state::AppState;

#[derive(Serialize)]
struct ModuleSummary {
    name: String,
    version: String,
    description: String,
    requires: Vec<String>,
    content_types: Vec<String>,
    source: &'static str,
}

impl From<&InstalledModule> for ModuleSummary {
    fn from(module: &InstalledModule) -> Self {
        let declaration = &module.declaration;
        Self {
            name: declaration.name.clone(),
            version: declaration.version.clone(),
            description: declaration.description.clone(),
            requires: declaration.requires.clone(),
            content_types: declaration
                .content_types
                .iter()
                .map(|ct| ct.class.clone())
                .collect(),
            source: match module.source {
                ModuleSource::Manifest(_) => "manifest",
                ModuleSource::Registered => "registered",
            },
        }
    }
}

/// List installed modules in load order.
///
/// GET /api/modules
async fn list_modules(State(state): State<AppState>) -> Json<Vec<ModuleSummary>> {
    Json(
        state
            .content_types()
            .modules()
            .iter()
            .map(ModuleSummary::from)
            .collect(),
    )
}

/// Create the module router.
pub fn router() -> Router<AppState> {
    Router::new().route("/api/modules", get(list_modules))
}
