use crate::services::{InvalidInput, SlugTaken};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    NotFound(String),
    #[error("{0}")]
    BadRequest(String),
    #[error("{0}")]
    Conflict(String),
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }
}

/// Maps a service-layer failure onto the HTTP taxonomy: slug races
/// become conflicts, rejected input becomes a 400, everything else is
/// masked as a 500.
pub fn service_error(err: anyhow::Error) -> AppError {
    if err.is::<SlugTaken>() {
        return AppError::Conflict(err.to_string());
    }
    if err.is::<InvalidInput>() {
        return AppError::BadRequest(err.to_string());
    }
    AppError::Internal(err)
}

impl From<rusqlite::Error> for AppError {
    fn from(err: rusqlite::Error) -> Self {
        Self::Internal(err.into())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, label) = match &self {
            Self::NotFound(_) => (StatusCode::NOT_FOUND, "Not Found"),
            Self::BadRequest(_) => (StatusCode::BAD_REQUEST, "Bad Request"),
            Self::Conflict(_) => (StatusCode::CONFLICT, "Conflict"),
            Self::Internal(err) => {
                tracing::error!("Application error: {:?}", err);
                let body = serde_json::json!({
                    "error": "Internal Server Error",
                    "message": "Internal server error",
                });
                return (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response();
            }
        };

        let body = serde_json::json!({
            "error": label,
            "message": self.to_string(),
        });
        (status, Json(body)).into_response()
    }
}

pub type AppResult<T> = Result<T, AppError>;
