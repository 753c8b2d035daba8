use crate::models::{MaintenanceMode, MaintenanceStatus, UpdateMaintenance};
use crate::services::{assets, now};
use crate::Database;
use anyhow::Result;
use rusqlite::{params, Connection, OptionalExtension};

const COLUMNS: &str = "id, is_active, message, from_date, to_date, hero_image_id, hero_title, \
     title, meta_title, is_permanent, updated_at";

const DEFAULT_MESSAGE: &str =
    "We are currently performing maintenance. Please check back soon.";

/// Public maintenance status with the hero asset resolved. None when
/// the singleton has never been configured.
pub fn get_status(db: &Database) -> Result<Option<MaintenanceStatus>> {
    let mode = match find(db)? {
        Some(m) => m,
        None => return Ok(None),
    };

    Ok(Some(MaintenanceStatus {
        hero_image: assets::resolve(db, mode.hero_image_id.as_deref())?,
        is_active: mode.is_active,
        message: mode.message,
        from_date: mode.from_date,
        to_date: mode.to_date,
        hero_title: mode.hero_title,
        title: mode.title,
        meta_title: mode.meta_title,
        is_permanent: mode.is_permanent,
    }))
}

/// Admin view; creates an inactive default row on first access.
pub fn get_admin(conn: &Connection) -> Result<MaintenanceMode> {
    if let Some(mode) = find_on(conn)? {
        return Ok(mode);
    }

    let from = now();
    let to = (chrono::Utc::now() + chrono::Duration::hours(24)).to_rfc3339();
    conn.execute(
        "INSERT INTO maintenance_mode (is_active, message, from_date, to_date, hero_title, \
         title, meta_title, is_permanent, updated_at) VALUES (0, ?, ?, ?, ?, ?, ?, 0, ?)",
        params![
            DEFAULT_MESSAGE,
            from,
            to,
            "Maintenance",
            "Under Maintenance",
            "Site Under Maintenance",
            now(),
        ],
    )?;

    find_on(conn)?.ok_or_else(|| anyhow::anyhow!("maintenance row vanished after insert"))
}

/// Update the singleton, creating it when absent. A permanent window
/// clears the date bounds; a timed one requires both.
pub fn update(conn: &Connection, input: &UpdateMaintenance) -> Result<MaintenanceMode> {
    let (from_date, to_date) = if input.is_permanent {
        (None, None)
    } else {
        (input.from_date.clone(), input.to_date.clone())
    };

    let existing = find_on(conn)?;
    match existing {
        Some(mode) => {
            conn.execute(
                "UPDATE maintenance_mode SET is_active = ?, message = ?, from_date = ?, \
                 to_date = ?, hero_image_id = ?, hero_title = ?, title = ?, meta_title = ?, \
                 is_permanent = ?, updated_at = ? WHERE id = ?",
                params![
                    input.is_active,
                    input.message,
                    from_date,
                    to_date,
                    input.hero_image_id,
                    input.hero_title,
                    input.title,
                    input.meta_title,
                    input.is_permanent,
                    now(),
                    mode.id,
                ],
            )?;
        }
        None => {
            conn.execute(
                "INSERT INTO maintenance_mode (is_active, message, from_date, to_date, \
                 hero_image_id, hero_title, title, meta_title, is_permanent, updated_at) \
                 VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?)",
                params![
                    input.is_active,
                    input.message,
                    from_date,
                    to_date,
                    input.hero_image_id,
                    input.hero_title,
                    input.title,
                    input.meta_title,
                    input.is_permanent,
                    now(),
                ],
            )?;
        }
    }

    find_on(conn)?.ok_or_else(|| anyhow::anyhow!("maintenance row vanished after update"))
}

fn find(db: &Database) -> Result<Option<MaintenanceMode>> {
    let conn = db.get()?;
    find_on(&conn)
}

fn find_on(conn: &Connection) -> Result<Option<MaintenanceMode>> {
    let mode = conn
        .query_row(
            &format!("SELECT {} FROM maintenance_mode ORDER BY id LIMIT 1", COLUMNS),
            [],
            row_to_mode,
        )
        .optional()?;
    Ok(mode)
}

fn row_to_mode(row: &rusqlite::Row) -> rusqlite::Result<MaintenanceMode> {
    Ok(MaintenanceMode {
        id: row.get(0)?,
        is_active: row.get(1)?,
        message: row.get(2)?,
        from_date: row.get(3)?,
        to_date: row.get(4)?,
        hero_image_id: row.get(5)?,
        hero_title: row.get(6)?,
        title: row.get(7)?,
        meta_title: row.get(8)?,
        is_permanent: row.get(9)?,
        updated_at: row.get(10)?,
    })
}
