use crate::models::{StaticAsset, UpdateAsset, UploadAsset};
use crate::services::listing::{FilterBuilder, ListQuery, Page, SortField};
use crate::services::storage::{
    object_file_name, parse_data_uri, ObjectStore, STATIC_ASSETS_FOLDER,
};
use crate::services::{now, InvalidInput};
use crate::Database;
use anyhow::Result;
use rusqlite::types::Value;
use rusqlite::{params, params_from_iter, Connection, OptionalExtension};
use uuid::Uuid;

const ALLOWED_MIME_TYPES: &[&str] = &[
    "image/jpeg",
    "image/png",
    "image/gif",
    "image/webp",
    "image/svg+xml",
    "application/pdf",
    "text/plain",
    "application/json",
    "video/mp4",
    "video/webm",
    "audio/mpeg",
    "audio/ogg",
];

const COLUMNS: &str = "id, name, description, url, created_at, updated_at";

/// Decode a data-URI upload, write it through the object store under a
/// content-addressed name, and record the asset row.
pub fn upload(
    conn: &Connection,
    store: &dyn ObjectStore,
    input: &UploadAsset,
    max_bytes: usize,
) -> Result<StaticAsset> {
    let (mime, bytes) = parse_data_uri(&input.file)?;

    if bytes.len() > max_bytes {
        return Err(InvalidInput(format!(
            "File too large: {} bytes (max {} bytes)",
            bytes.len(),
            max_bytes
        ))
        .into());
    }

    if !ALLOWED_MIME_TYPES.contains(&mime.as_str()) {
        return Err(InvalidInput(format!(
            "File type not allowed: {}. Allowed types: {}",
            mime,
            ALLOWED_MIME_TYPES.join(", ")
        ))
        .into());
    }

    let file_name = object_file_name(&bytes, &mime);
    store.put(STATIC_ASSETS_FOLDER, &file_name, &bytes, &mime)?;
    let url = store.url(STATIC_ASSETS_FOLDER, &file_name);

    let id = Uuid::new_v4().to_string();
    let timestamp = now();
    conn.execute(
        "INSERT INTO static_assets (id, name, description, url, created_at, updated_at) \
         VALUES (?, ?, ?, ?, ?, ?)",
        params![id, input.name, input.description, url, timestamp, timestamp],
    )?;

    Ok(StaticAsset {
        id,
        name: input.name.clone(),
        description: input.description.clone(),
        url,
        created_at: timestamp.clone(),
        updated_at: timestamp,
    })
}

/// Paginated asset listing with substring search over name and
/// description. Assets only sort by name or timestamps; other sort
/// fields fall back to creation time.
pub fn list(db: &Database, query: &ListQuery) -> Result<Page<StaticAsset>> {
    let mut filter = FilterBuilder::new();
    if let Some(search) = &query.search {
        filter.search(&["name", "description"], search);
    }

    let conn = db.get()?;
    let total: i64 = conn.query_row(
        &format!("SELECT COUNT(*) FROM static_assets{}", filter.where_sql()),
        params_from_iter(filter.params()),
        |row| row.get(0),
    )?;

    let mut stmt = conn.prepare(&format!(
        "SELECT {} FROM static_assets{} ORDER BY {} {} LIMIT ? OFFSET ?",
        COLUMNS,
        filter.where_sql(),
        sort_column(query.order_by),
        query.order.keyword(),
    ))?;

    let mut params = filter.params();
    params.push(Value::from(query.page_size as i64));
    params.push(Value::from(query.offset() as i64));

    let assets = stmt
        .query_map(params_from_iter(params), row_to_asset)?
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Page::new(assets, total, query))
}

pub fn get(db: &Database, id: &str) -> Result<Option<StaticAsset>> {
    let conn = db.get()?;
    let asset = conn
        .query_row(
            &format!("SELECT {} FROM static_assets WHERE id = ?", COLUMNS),
            [id],
            row_to_asset,
        )
        .optional()?;
    Ok(asset)
}

pub fn update(conn: &Connection, id: &str, input: &UpdateAsset) -> Result<Option<StaticAsset>> {
    let current = conn
        .query_row(
            &format!("SELECT {} FROM static_assets WHERE id = ?", COLUMNS),
            [id],
            row_to_asset,
        )
        .optional()?;

    let current = match current {
        Some(a) => a,
        None => return Ok(None),
    };

    let name = input.name.clone().unwrap_or(current.name);
    let description = input.description.clone().unwrap_or(current.description);
    let timestamp = now();

    conn.execute(
        "UPDATE static_assets SET name = ?, description = ?, updated_at = ? WHERE id = ?",
        params![name, description, timestamp, id],
    )?;

    Ok(Some(StaticAsset {
        id: current.id,
        name,
        description,
        url: current.url,
        created_at: current.created_at,
        updated_at: timestamp,
    }))
}

/// Deletes the stored object (addressed by the URL's trailing segment)
/// and then the row.
pub fn delete(conn: &Connection, store: &dyn ObjectStore, id: &str) -> Result<bool> {
    let url: Option<String> = conn
        .query_row("SELECT url FROM static_assets WHERE id = ?", [id], |row| {
            row.get(0)
        })
        .optional()?;

    let url = match url {
        Some(u) => u,
        None => return Ok(false),
    };

    if let Some(file_name) = url.rsplit('/').next() {
        store.delete(STATIC_ASSETS_FOLDER, file_name)?;
    }

    conn.execute("DELETE FROM static_assets WHERE id = ?", [id])?;
    Ok(true)
}

/// Resolve an asset id to its public URL. Missing or blank ids resolve
/// to None so content pointing at a deleted asset still renders.
pub fn resolve(db: &Database, asset_id: Option<&str>) -> Result<Option<String>> {
    let id = match asset_id {
        Some(id) if !id.is_empty() => id,
        _ => return Ok(None),
    };

    let conn = db.get()?;
    let url: Option<String> = conn
        .query_row("SELECT url FROM static_assets WHERE id = ?", [id], |row| {
            row.get(0)
        })
        .optional()?;

    if url.is_none() {
        tracing::warn!("Static asset not found: {}", id);
    }
    Ok(url)
}

fn sort_column(field: SortField) -> &'static str {
    match field {
        SortField::Title => "name",
        SortField::UpdatedAt => "updated_at",
        _ => "created_at",
    }
}

fn row_to_asset(row: &rusqlite::Row) -> rusqlite::Result<StaticAsset> {
    Ok(StaticAsset {
        id: row.get(0)?,
        name: row.get(1)?,
        description: row.get(2)?,
        url: row.get(3)?,
        created_at: row.get(4)?,
        updated_at: row.get(5)?,
    })
}
