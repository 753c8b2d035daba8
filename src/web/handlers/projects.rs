use crate::models::{
    CreateProject, Project, ProjectCard, ProjectSlugEntry, PublicPage, PublicProject,
    UpdateProject,
};
use crate::services::listing::{ListParams, Page};
use crate::services::{pages, projects};
use crate::web::error::{service_error, AppError, AppResult};
use crate::web::extractors::AdminUser;
use crate::web::handlers::list_query;
use crate::web::state::AppState;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Serialize;
use std::sync::Arc;

/// Projects page data: the page singleton plus the paginated, filtered
/// project listing.
#[derive(Serialize)]
pub struct ProjectsPageData {
    #[serde(flatten)]
    pub page: PublicPage,
    pub projects: Page<ProjectCard>,
}

/// GET /api/projects
pub async fn list_public(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ListParams>,
) -> AppResult<Json<ProjectsPageData>> {
    let query = list_query(&state, &params);

    let page = pages::get_public(&state.db, "projects")?
        .ok_or_else(|| AppError::not_found("Projects page not configured"))?;
    let projects = projects::public_listing(&state.db, &query)?;

    Ok(Json(ProjectsPageData { page, projects }))
}

/// GET /api/projects/slugs
pub async fn slugs(State(state): State<Arc<AppState>>) -> AppResult<Json<Vec<ProjectSlugEntry>>> {
    let entries = projects::slugs(&state.db)?;
    Ok(Json(entries))
}

/// GET /api/projects/:slug
pub async fn get_by_slug(
    State(state): State<Arc<AppState>>,
    Path(slug): Path<String>,
) -> AppResult<Json<PublicProject>> {
    let project = projects::get_published_by_slug(&state.db, &slug)?
        .ok_or_else(|| AppError::not_found("Project not found"))?;
    Ok(Json(project))
}

/// GET /api/admin/projects
pub async fn admin_list(
    State(state): State<Arc<AppState>>,
    auth: AdminUser,
    Query(params): Query<ListParams>,
) -> AppResult<Json<Page<Project>>> {
    let query = list_query(&state, &params);
    let page = projects::admin_listing(&state.db, &auth.user_id, &query)?;
    Ok(Json(page))
}

/// GET /api/admin/projects/by-slug/:slug
pub async fn admin_get_by_slug(
    State(state): State<Arc<AppState>>,
    _auth: AdminUser,
    Path(slug): Path<String>,
) -> AppResult<Json<Project>> {
    let project = projects::get_by_slug_admin(&state.db, &slug)?
        .ok_or_else(|| AppError::not_found("Project not found"))?;
    Ok(Json(project))
}

/// POST /api/admin/projects
pub async fn create(
    State(state): State<Arc<AppState>>,
    auth: AdminUser,
    Json(input): Json<CreateProject>,
) -> AppResult<(StatusCode, Json<Project>)> {
    let mut conn = state.db.get()?;
    let tx = conn.transaction()?;

    let project = projects::create(&tx, &input, &auth.user_id).map_err(service_error)?;
    tx.commit()?;

    Ok((StatusCode::CREATED, Json(project)))
}

/// PUT /api/admin/projects/:id
pub async fn update(
    State(state): State<Arc<AppState>>,
    _auth: AdminUser,
    Path(id): Path<String>,
    Json(input): Json<UpdateProject>,
) -> AppResult<Json<Project>> {
    let mut conn = state.db.get()?;
    let tx = conn.transaction()?;

    let project = projects::update(&tx, &id, &input)?
        .ok_or_else(|| AppError::not_found("Project not found"))?;
    tx.commit()?;

    Ok(Json(project))
}

/// DELETE /api/admin/projects/:id
pub async fn delete(
    State(state): State<Arc<AppState>>,
    _auth: AdminUser,
    Path(id): Path<String>,
) -> AppResult<Json<serde_json::Value>> {
    let conn = state.db.get()?;
    if !projects::delete(&conn, &id)? {
        return Err(AppError::not_found("Project not found"));
    }
    Ok(Json(serde_json::json!({ "message": "Project deleted successfully" })))
}

/// POST /api/admin/projects/:id/publish
pub async fn toggle_published(
    State(state): State<Arc<AppState>>,
    _auth: AdminUser,
    Path(id): Path<String>,
) -> AppResult<Json<Project>> {
    let conn = state.db.get()?;
    let project = projects::toggle_published(&conn, &id)?
        .ok_or_else(|| AppError::not_found("Project not found"))?;
    Ok(Json(project))
}

/// POST /api/admin/projects/:id/feature
pub async fn toggle_featured(
    State(state): State<Arc<AppState>>,
    _auth: AdminUser,
    Path(id): Path<String>,
) -> AppResult<Json<Project>> {
    let conn = state.db.get()?;
    let project = projects::toggle_featured(&conn, &id)?
        .ok_or_else(|| AppError::not_found("Project not found"))?;
    Ok(Json(project))
}
