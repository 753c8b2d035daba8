use super::handlers;
use super::state::AppState;
use axum::extract::DefaultBodyLimit;
use axum::routing::{get, post, put};
use axum::Router;
use std::sync::Arc;

pub fn public_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/articles", get(handlers::articles::list_published))
        .route("/api/articles/slugs", get(handlers::articles::slugs))
        .route("/api/articles/blog", get(handlers::articles::blog))
        .route("/api/articles/:slug", get(handlers::articles::get_by_slug))
        .route("/api/projects", get(handlers::projects::list_public))
        .route("/api/projects/slugs", get(handlers::projects::slugs))
        .route("/api/projects/:slug", get(handlers::projects::get_by_slug))
        .route("/api/pages/:key", get(handlers::pages::get_page))
        .route("/api/maintenance", get(handlers::maintenance::status))
}

pub fn admin_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route(
            "/api/admin/articles",
            get(handlers::articles::admin_list).post(handlers::articles::create),
        )
        .route(
            "/api/admin/articles/by-slug/:slug",
            get(handlers::articles::admin_get_by_slug),
        )
        .route(
            "/api/admin/articles/:id",
            put(handlers::articles::update).delete(handlers::articles::delete),
        )
        .route(
            "/api/admin/articles/:id/publish",
            post(handlers::articles::toggle_published),
        )
        .route(
            "/api/admin/articles/:id/feature",
            post(handlers::articles::toggle_featured),
        )
        .route(
            "/api/admin/projects",
            get(handlers::projects::admin_list).post(handlers::projects::create),
        )
        .route(
            "/api/admin/projects/by-slug/:slug",
            get(handlers::projects::admin_get_by_slug),
        )
        .route(
            "/api/admin/projects/:id",
            put(handlers::projects::update).delete(handlers::projects::delete),
        )
        .route(
            "/api/admin/projects/:id/publish",
            post(handlers::projects::toggle_published),
        )
        .route(
            "/api/admin/projects/:id/feature",
            post(handlers::projects::toggle_featured),
        )
        .route(
            "/api/admin/pages/:key",
            get(handlers::pages::admin_get_page).put(handlers::pages::upsert_page),
        )
        .route(
            "/api/admin/maintenance",
            get(handlers::maintenance::admin_get).put(handlers::maintenance::update),
        )
        .route(
            "/api/admin/assets",
            get(handlers::assets::list)
                .post(handlers::assets::upload)
                .layer(DefaultBodyLimit::max(50 * 1024 * 1024)),
        )
        .route(
            "/api/admin/assets/:id",
            put(handlers::assets::update).delete(handlers::assets::delete),
        )
}
