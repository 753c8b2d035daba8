use crate::models::{ApiToken, User};
use crate::Database;
use anyhow::Result;
use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine};
use rand::Rng;
use rusqlite::{params, Connection, OptionalExtension};
use sha2::{Digest, Sha256};
use uuid::Uuid;

const TOKEN_PREFIX: &str = "at_";
const TOKEN_BYTE_LENGTH: usize = 32;

/// Generate a raw random token string with the `at_` prefix.
fn generate_raw_token() -> String {
    let mut bytes = [0u8; TOKEN_BYTE_LENGTH];
    rand::thread_rng().fill(&mut bytes);
    format!("{}{}", TOKEN_PREFIX, URL_SAFE_NO_PAD.encode(bytes))
}

/// SHA-256 hash a raw token for storage.
fn hash_token(raw: &str) -> String {
    let digest = Sha256::digest(raw.as_bytes());
    hex::encode(digest)
}

/// Extract the short prefix (first 8 chars after `at_`) for display.
fn extract_prefix(raw: &str) -> String {
    let without_prefix = raw.strip_prefix(TOKEN_PREFIX).unwrap_or(raw);
    let end = without_prefix.len().min(8);
    format!("{}{}...", TOKEN_PREFIX, &without_prefix[..end])
}

/// Fetch a user by name, creating the record on first use.
pub fn ensure_user(conn: &Connection, username: &str) -> Result<User> {
    let existing = conn
        .query_row(
            "SELECT id, username, created_at FROM users WHERE username = ?",
            [username],
            row_to_user,
        )
        .optional()?;

    if let Some(user) = existing {
        return Ok(user);
    }

    let id = Uuid::new_v4().to_string();
    conn.execute(
        "INSERT INTO users (id, username) VALUES (?, ?)",
        params![id, username],
    )?;

    let user = conn.query_row(
        "SELECT id, username, created_at FROM users WHERE id = ?",
        [&id],
        row_to_user,
    )?;
    Ok(user)
}

/// Create a new API token bound to a user. Returns the raw token
/// string (shown once) and the stored record.
pub fn create_token(
    conn: &Connection,
    user_id: &str,
    name: &str,
    expires_at: Option<&str>,
) -> Result<(String, ApiToken)> {
    let raw_token = generate_raw_token();
    let token_hash = hash_token(&raw_token);
    let prefix = extract_prefix(&raw_token);

    conn.execute(
        "INSERT INTO api_tokens (user_id, name, token_hash, prefix, expires_at) \
         VALUES (?1, ?2, ?3, ?4, ?5)",
        params![user_id, name, token_hash, prefix, expires_at],
    )?;

    let id = conn.last_insert_rowid();
    let token = conn.query_row(
        "SELECT id, user_id, name, prefix, last_used_at, expires_at, created_at \
         FROM api_tokens WHERE id = ?",
        [id],
        row_to_token,
    )?;

    Ok((raw_token, token))
}

/// Validate a raw token string. Returns the token record if valid and
/// not expired.
pub fn validate_token(db: &Database, raw_token: &str) -> Result<Option<ApiToken>> {
    if !raw_token.starts_with(TOKEN_PREFIX) {
        return Ok(None);
    }

    let token_hash = hash_token(raw_token);
    let conn = db.get()?;

    let token = conn
        .query_row(
            "SELECT id, user_id, name, prefix, last_used_at, expires_at, created_at \
             FROM api_tokens WHERE token_hash = ?",
            [&token_hash],
            row_to_token,
        )
        .optional()?;

    let token = match token {
        Some(t) => t,
        None => return Ok(None),
    };

    if let Some(ref expires) = token.expires_at {
        let now = chrono::Utc::now().to_rfc3339();
        if *expires < now {
            return Ok(None);
        }
    }

    conn.execute(
        "UPDATE api_tokens SET last_used_at = CURRENT_TIMESTAMP WHERE id = ?",
        [token.id],
    )?;

    Ok(Some(token))
}

/// List all API tokens (without exposing hashes).
pub fn list_tokens(db: &Database) -> Result<Vec<ApiToken>> {
    let conn = db.get()?;
    let mut stmt = conn.prepare(
        "SELECT id, user_id, name, prefix, last_used_at, expires_at, created_at \
         FROM api_tokens ORDER BY created_at DESC",
    )?;

    let tokens = stmt
        .query_map([], row_to_token)?
        .collect::<Result<Vec<_>, _>>()?;
    Ok(tokens)
}

/// Revoke (delete) an API token by ID.
pub fn revoke_token(conn: &Connection, id: i64) -> Result<bool> {
    let deleted = conn.execute("DELETE FROM api_tokens WHERE id = ?", [id])?;
    Ok(deleted > 0)
}

fn row_to_user(row: &rusqlite::Row) -> rusqlite::Result<User> {
    Ok(User {
        id: row.get(0)?,
        username: row.get(1)?,
        created_at: row.get(2)?,
    })
}

fn row_to_token(row: &rusqlite::Row) -> rusqlite::Result<ApiToken> {
    Ok(ApiToken {
        id: row.get(0)?,
        user_id: row.get(1)?,
        name: row.get(2)?,
        prefix: row.get(3)?,
        last_used_at: row.get(4)?,
        expires_at: row.get(5)?,
        created_at: row.get(6)?,
    })
}
