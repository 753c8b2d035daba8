use crate::models::{MaintenanceMode, MaintenanceStatus, UpdateMaintenance};
use crate::services::maintenance;
use crate::web::error::{AppError, AppResult};
use crate::web::extractors::AdminUser;
use crate::web::state::AppState;
use axum::extract::State;
use axum::Json;
use std::sync::Arc;

/// GET /api/maintenance
pub async fn status(State(state): State<Arc<AppState>>) -> AppResult<Json<MaintenanceStatus>> {
    let status = maintenance::get_status(&state.db)?
        .ok_or_else(|| AppError::not_found("Maintenance mode not configured"))?;
    Ok(Json(status))
}

/// GET /api/admin/maintenance
pub async fn admin_get(
    State(state): State<Arc<AppState>>,
    _auth: AdminUser,
) -> AppResult<Json<MaintenanceMode>> {
    let conn = state.db.get()?;
    let mode = maintenance::get_admin(&conn)?;
    Ok(Json(mode))
}

/// PUT /api/admin/maintenance
pub async fn update(
    State(state): State<Arc<AppState>>,
    _auth: AdminUser,
    Json(input): Json<UpdateMaintenance>,
) -> AppResult<Json<MaintenanceMode>> {
    let mut conn = state.db.get()?;
    let tx = conn.transaction()?;
    let mode = maintenance::update(&tx, &input)?;
    tx.commit()?;

    Ok(Json(mode))
}
