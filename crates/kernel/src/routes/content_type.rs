//! Content type API routes.
//!
//! Read-only endpoints used by content-type pickers and authoring wizards.

use axum::extract::{Path, Query, State};
use axum::routing::get;
use axum::{Json, Router};
use serde::Deserialize;

use crate::content::{ContentTypeInfo, ContentTypeView};
use crate::error::AppResult;
use crate::state::AppState;

/// Create the content type router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/content-types", get(list_content_types))
        .route("/api/content-types/creatable", get(list_creatable_content_types))
        .route("/api/content-types/{class}", get(get_content_type))
}

#[derive(Debug, Default, Deserialize)]
struct LocaleParams {
    locale: Option<String>,
}

fn localize_all<'a>(
    state: &AppState,
    infos: impl IntoIterator<Item = &'a ContentTypeInfo>,
    params: &LocaleParams,
) -> Vec<ContentTypeView> {
    let locale = state.locale_or_default(params.locale.as_deref());
    infos
        .into_iter()
        .map(|info| ContentTypeView::localize(info, state.bundles(), locale))
        .collect()
}

/// List content types that have an authoring kit.
///
/// GET /api/content-types
async fn list_content_types(
    State(state): State<AppState>,
    Query(params): Query<LocaleParams>,
) -> Json<Vec<ContentTypeView>> {
    let available = state.content_types().available_content_types();
    Json(localize_all(&state, available.iter(), &params))
}

/// List content types that may be created directly.
///
/// GET /api/content-types/creatable
async fn list_creatable_content_types(
    State(state): State<AppState>,
    Query(params): Query<LocaleParams>,
) -> Json<Vec<ContentTypeView>> {
    let creatable = state.content_types().creatable_content_types();
    Json(localize_all(&state, creatable.iter(), &params))
}

/// Describe one content type, with or without an authoring kit.
///
/// GET /api/content-types/{class}
async fn get_content_type(
    State(state): State<AppState>,
    Path(class): Path<String>,
    Query(params): Query<LocaleParams>,
) -> AppResult<Json<ContentTypeView>> {
    let info = state.content_types().content_type_info_by_name(&class)?;
    let locale = state.locale_or_default(params.locale.as_deref());

    Ok(Json(ContentTypeView::localize(&info, state.bundles(), locale)))
}
