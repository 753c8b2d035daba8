use crate::models::{PageContent, PublicPage, UpsertPage};
use crate::services::pages;
use crate::web::error::{AppError, AppResult};
use crate::web::extractors::AdminUser;
use crate::web::state::AppState;
use axum::extract::{Path, State};
use axum::Json;
use std::sync::Arc;

/// GET /api/pages/:key
pub async fn get_page(
    State(state): State<Arc<AppState>>,
    Path(key): Path<String>,
) -> AppResult<Json<PublicPage>> {
    if !pages::is_known_key(&key) {
        return Err(AppError::not_found("Page not found"));
    }

    let page = pages::get_public(&state.db, &key)?
        .ok_or_else(|| AppError::not_found("Page not configured"))?;
    Ok(Json(page))
}

/// GET /api/admin/pages/:key
pub async fn admin_get_page(
    State(state): State<Arc<AppState>>,
    _auth: AdminUser,
    Path(key): Path<String>,
) -> AppResult<Json<PageContent>> {
    if !pages::is_known_key(&key) {
        return Err(AppError::not_found("Page not found"));
    }

    let page = pages::get(&state.db, &key)?
        .ok_or_else(|| AppError::not_found("Page not configured"))?;
    Ok(Json(page))
}

/// PUT /api/admin/pages/:key
pub async fn upsert_page(
    State(state): State<Arc<AppState>>,
    _auth: AdminUser,
    Path(key): Path<String>,
    Json(input): Json<UpsertPage>,
) -> AppResult<Json<PageContent>> {
    if !pages::is_known_key(&key) {
        return Err(AppError::BadRequest(format!("Unknown page key: {}", key)));
    }

    let mut conn = state.db.get()?;
    let tx = conn.transaction()?;
    let page = pages::upsert(&tx, &key, &input)?;
    tx.commit()?;

    Ok(Json(page))
}
