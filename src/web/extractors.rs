use crate::services::api_token;
use crate::web::state::AppState;
use axum::extract::FromRequestParts;
use axum::http::header;
use axum::http::request::Parts;
use axum::http::StatusCode;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

/// Bearer-token guard for admin routes. Resolves to the owning user id
/// recorded against the token.
pub struct AdminUser {
    pub user_id: String,
}

impl FromRequestParts<Arc<AppState>> for AdminUser {
    type Rejection = StatusCode;

    fn from_request_parts<'life0, 'life1, 'async_trait>(
        parts: &'life0 mut Parts,
        state: &'life1 Arc<AppState>,
    ) -> Pin<Box<dyn Future<Output = Result<Self, Self::Rejection>> + Send + 'async_trait>>
    where
        'life0: 'async_trait,
        'life1: 'async_trait,
        Self: 'async_trait,
    {
        let state = state.clone();
        let raw = parts
            .headers
            .get(header::AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.strip_prefix("Bearer "))
            .map(str::to_string);

        Box::pin(async move {
            let raw = raw.ok_or(StatusCode::UNAUTHORIZED)?;

            let token = api_token::validate_token(&state.db, &raw)
                .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)?
                .ok_or(StatusCode::UNAUTHORIZED)?;

            Ok(AdminUser {
                user_id: token.user_id,
            })
        })
    }
}
