use crate::models::{
    Article, ArticleCard, ArticleSlugEntry, CreateArticle, PublicArticle, PublicPage,
    UpdateArticle,
};
use crate::services::listing::{ListParams, Page};
use crate::services::{articles, pages};
use crate::web::error::{service_error, AppError, AppResult};
use crate::web::extractors::AdminUser;
use crate::web::handlers::list_query;
use crate::web::state::AppState;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Serialize;
use std::sync::Arc;

/// Blog page data: the page singleton plus the paginated, filtered
/// article listing.
#[derive(Serialize)]
pub struct BlogPageData {
    #[serde(flatten)]
    pub page: PublicPage,
    pub articles: Page<ArticleCard>,
}

/// GET /api/articles
pub async fn list_published(
    State(state): State<Arc<AppState>>,
) -> AppResult<Json<Vec<ArticleCard>>> {
    let articles = articles::list_published(&state.db)?;
    Ok(Json(articles))
}

/// GET /api/articles/slugs
pub async fn slugs(State(state): State<Arc<AppState>>) -> AppResult<Json<Vec<ArticleSlugEntry>>> {
    let entries = articles::slugs(&state.db)?;
    Ok(Json(entries))
}

/// GET /api/articles/blog
pub async fn blog(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ListParams>,
) -> AppResult<Json<BlogPageData>> {
    let query = list_query(&state, &params);

    let page = pages::get_public(&state.db, "blog")?
        .ok_or_else(|| AppError::not_found("Blog page not configured"))?;
    let articles = articles::blog_listing(&state.db, &query)?;

    Ok(Json(BlogPageData { page, articles }))
}

/// GET /api/articles/:slug
pub async fn get_by_slug(
    State(state): State<Arc<AppState>>,
    Path(slug): Path<String>,
) -> AppResult<Json<PublicArticle>> {
    let article = articles::get_published_by_slug(&state.db, &slug)?
        .ok_or_else(|| AppError::not_found("Article not found"))?;
    Ok(Json(article))
}

/// GET /api/admin/articles
pub async fn admin_list(
    State(state): State<Arc<AppState>>,
    auth: AdminUser,
    Query(params): Query<ListParams>,
) -> AppResult<Json<Page<Article>>> {
    let query = list_query(&state, &params);
    let page = articles::admin_listing(&state.db, &auth.user_id, &query)?;
    Ok(Json(page))
}

/// GET /api/admin/articles/by-slug/:slug
pub async fn admin_get_by_slug(
    State(state): State<Arc<AppState>>,
    _auth: AdminUser,
    Path(slug): Path<String>,
) -> AppResult<Json<Article>> {
    let article = articles::get_by_slug_admin(&state.db, &slug)?
        .ok_or_else(|| AppError::not_found("Article not found"))?;
    Ok(Json(article))
}

/// POST /api/admin/articles
pub async fn create(
    State(state): State<Arc<AppState>>,
    auth: AdminUser,
    Json(input): Json<CreateArticle>,
) -> AppResult<(StatusCode, Json<Article>)> {
    let mut conn = state.db.get()?;
    let tx = conn.transaction()?;

    let article = articles::create(&tx, &input, &auth.user_id).map_err(service_error)?;
    tx.commit()?;

    Ok((StatusCode::CREATED, Json(article)))
}

/// PUT /api/admin/articles/:id
pub async fn update(
    State(state): State<Arc<AppState>>,
    _auth: AdminUser,
    Path(id): Path<String>,
    Json(input): Json<UpdateArticle>,
) -> AppResult<Json<Article>> {
    let mut conn = state.db.get()?;
    let tx = conn.transaction()?;

    let article = articles::update(&tx, &id, &input)?
        .ok_or_else(|| AppError::not_found("Article not found"))?;
    tx.commit()?;

    Ok(Json(article))
}

/// DELETE /api/admin/articles/:id
pub async fn delete(
    State(state): State<Arc<AppState>>,
    _auth: AdminUser,
    Path(id): Path<String>,
) -> AppResult<Json<serde_json::Value>> {
    let conn = state.db.get()?;
    if !articles::delete(&conn, &id)? {
        return Err(AppError::not_found("Article not found"));
    }
    Ok(Json(serde_json::json!({ "message": "Article deleted successfully" })))
}

/// POST /api/admin/articles/:id/publish
pub async fn toggle_published(
    State(state): State<Arc<AppState>>,
    _auth: AdminUser,
    Path(id): Path<String>,
) -> AppResult<Json<Article>> {
    let conn = state.db.get()?;
    let article = articles::toggle_published(&conn, &id)?
        .ok_or_else(|| AppError::not_found("Article not found"))?;
    Ok(Json(article))
}

/// POST /api/admin/articles/:id/feature
pub async fn toggle_featured(
    State(state): State<Arc<AppState>>,
    _auth: AdminUser,
    Path(id): Path<String>,
) -> AppResult<Json<Article>> {
    let conn = state.db.get()?;
    let article = articles::toggle_featured(&conn, &id)?
        .ok_or_else(|| AppError::not_found("Article not found"))?;
    Ok(Json(article))
}
