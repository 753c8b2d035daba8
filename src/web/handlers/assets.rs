use crate::models::{StaticAsset, UpdateAsset, UploadAsset};
use crate::services::assets;
use crate::services::listing::{ListParams, Page};
use crate::web::error::{service_error, AppError, AppResult};
use crate::web::extractors::AdminUser;
use crate::web::handlers::list_query;
use crate::web::state::AppState;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use std::sync::Arc;

/// GET /api/admin/assets
pub async fn list(
    State(state): State<Arc<AppState>>,
    _auth: AdminUser,
    Query(params): Query<ListParams>,
) -> AppResult<Json<Page<StaticAsset>>> {
    let query = list_query(&state, &params);
    let page = assets::list(&state.db, &query)?;
    Ok(Json(page))
}

/// POST /api/admin/assets
pub async fn upload(
    State(state): State<Arc<AppState>>,
    _auth: AdminUser,
    Json(input): Json<UploadAsset>,
) -> AppResult<(StatusCode, Json<StaticAsset>)> {
    let mut conn = state.db.get()?;
    let tx = conn.transaction()?;

    let asset = assets::upload(
        &tx,
        state.store.as_ref(),
        &input,
        state.config.storage.max_upload_bytes,
    )
    .map_err(service_error)?;
    tx.commit()?;

    Ok((StatusCode::CREATED, Json(asset)))
}

/// PUT /api/admin/assets/:id
pub async fn update(
    State(state): State<Arc<AppState>>,
    _auth: AdminUser,
    Path(id): Path<String>,
    Json(input): Json<UpdateAsset>,
) -> AppResult<Json<StaticAsset>> {
    let mut conn = state.db.get()?;
    let tx = conn.transaction()?;

    let asset = assets::update(&tx, &id, &input)?
        .ok_or_else(|| AppError::not_found("Static asset not found"))?;
    tx.commit()?;

    Ok(Json(asset))
}

/// DELETE /api/admin/assets/:id
pub async fn delete(
    State(state): State<Arc<AppState>>,
    _auth: AdminUser,
    Path(id): Path<String>,
) -> AppResult<Json<serde_json::Value>> {
    let mut conn = state.db.get()?;
    let tx = conn.transaction()?;

    if !assets::delete(&tx, state.store.as_ref(), &id)? {
        return Err(AppError::not_found("Static asset not found"));
    }
    tx.commit()?;

    Ok(Json(serde_json::json!({ "message": "Static asset deleted successfully" })))
}
