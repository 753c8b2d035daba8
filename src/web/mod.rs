mod error;
mod extractors;
mod handlers;
mod routes;
mod security;
mod state;

pub use state::AppState;

use crate::config::CorsConfig;
use crate::{Config, Database};
use anyhow::Result;
use axum::http::{header, HeaderValue, Method};
use axum::middleware;
use axum::Router;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::compression::CompressionLayer;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

pub async fn serve(config: Config, db: Database) -> Result<()> {
    let addr = format!("{}:{}", config.server.host, config.server.port);
    let cors = build_cors(&config.cors);

    let state = Arc::new(AppState::new(config, db));

    let app = Router::new()
        .merge(routes::public_routes())
        .merge(routes::admin_routes())
        .layer(middleware::from_fn(security::apply_security_headers))
        .layer(cors)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    tracing::info!("Listening on http://{}", addr);
    let listener = TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

fn build_cors(config: &CorsConfig) -> CorsLayer {
    let layer = CorsLayer::new()
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
        ])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION]);

    if config.allowed_origins.is_empty() {
        return layer;
    }

    let origins: Vec<HeaderValue> = config
        .allowed_origins
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();
    layer.allow_origin(origins)
}
