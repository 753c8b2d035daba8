pub mod api_token;
pub mod articles;
pub mod assets;
pub mod listing;
pub mod maintenance;
pub mod pages;
pub mod projects;
pub mod slug;
pub mod storage;

/// A slug collision that survived the regenerate-and-retry pass. Two
/// creations raced on the same base title; the caller should surface
/// this as a conflict.
#[derive(Debug, thiserror::Error)]
#[error("slug already in use, try a different title")]
pub struct SlugTaken;

/// Rejected caller input (malformed payloads, disallowed types). The
/// HTTP layer maps this to a 400 instead of a masked 500.
#[derive(Debug, thiserror::Error)]
#[error("{0}")]
pub struct InvalidInput(pub String);

pub(crate) fn now() -> String {
    chrono::Utc::now().to_rfc3339()
}

pub(crate) fn is_unique_violation(err: &rusqlite::Error) -> bool {
    matches!(
        err,
        rusqlite::Error::SqliteFailure(e, _) if e.code == rusqlite::ErrorCode::ConstraintViolation
    )
}
