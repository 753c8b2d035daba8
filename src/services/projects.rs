use crate::models::{
    CreateProject, Project, ProjectCard, ProjectSlugEntry, PublicProject, UpdateProject,
};
use crate::services::listing::{escape_like_pattern, FilterBuilder, ListQuery, Page};
use crate::services::{assets, is_unique_violation, now, slug, SlugTaken};
use crate::Database;
use anyhow::Result;
use rusqlite::types::Value;
use rusqlite::{params, params_from_iter, Connection, OptionalExtension};
use std::collections::HashSet;
use uuid::Uuid;

const COLUMNS: &str = "id, slug, title, description, content, tags, meta_keywords, project_type, \
     featured_image_id, published, featured, user_id, created_at, updated_at";

/// Create a project with a title-derived unique slug. Same contract as
/// article creation: the slug lookup and insert share the caller's
/// transaction, with one retry before [`SlugTaken`].
pub fn create(conn: &Connection, input: &CreateProject, user_id: &str) -> Result<Project> {
    let base = slug::normalize(&input.title);
    let mut existing = slugs_with_prefix(conn, &base)?;
    let mut unique = slug::make_unique(&base, &existing);

    let id = Uuid::new_v4().to_string();
    let timestamp = now();
    let tags_json = serde_json::to_string(&input.tags)?;

    for attempt in 0..2 {
        let inserted = conn.execute(
            "INSERT INTO projects (id, slug, title, description, content, tags, meta_keywords, \
             project_type, featured_image_id, published, featured, user_id, created_at, updated_at) \
             VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, 0, ?, ?, ?)",
            params![
                id,
                unique,
                input.title,
                input.description,
                input.content,
                tags_json,
                input.meta_keywords,
                input.project_type,
                input.featured_image_id,
                input.published,
                user_id,
                timestamp,
                timestamp,
            ],
        );

        match inserted {
            Ok(_) => {
                return get_by_id(conn, &id)?
                    .ok_or_else(|| anyhow::anyhow!("project vanished after insert"))
            }
            Err(e) if is_unique_violation(&e) && attempt == 0 => {
                existing = slugs_with_prefix(conn, &base)?;
                existing.insert(unique.clone());
                unique = slug::make_unique(&base, &existing);
            }
            Err(e) if is_unique_violation(&e) => return Err(SlugTaken.into()),
            Err(e) => return Err(e.into()),
        }
    }

    Err(SlugTaken.into())
}

pub fn update(conn: &Connection, id: &str, input: &UpdateProject) -> Result<Option<Project>> {
    let current = match get_by_id(conn, id)? {
        Some(p) => p,
        None => return Ok(None),
    };

    let title = input.title.clone().unwrap_or(current.title);
    let description = input.description.clone().unwrap_or(current.description);
    let content = input.content.clone().unwrap_or(current.content);
    let tags = input.tags.clone().unwrap_or(current.tags);
    let meta_keywords = input.meta_keywords.clone().or(current.meta_keywords);
    let project_type = input.project_type.clone().unwrap_or(current.project_type);
    let featured_image_id = input.featured_image_id.clone().or(current.featured_image_id);

    conn.execute(
        "UPDATE projects SET title = ?, description = ?, content = ?, tags = ?, \
         meta_keywords = ?, project_type = ?, featured_image_id = ?, updated_at = ? WHERE id = ?",
        params![
            title,
            description,
            content,
            serde_json::to_string(&tags)?,
            meta_keywords,
            project_type,
            featured_image_id,
            now(),
            id,
        ],
    )?;

    get_by_id(conn, id)
}

pub fn delete(conn: &Connection, id: &str) -> Result<bool> {
    let deleted = conn.execute("DELETE FROM projects WHERE id = ?", [id])?;
    Ok(deleted > 0)
}

pub fn toggle_published(conn: &Connection, id: &str) -> Result<Option<Project>> {
    let updated = conn.execute(
        "UPDATE projects SET published = NOT published, updated_at = ? WHERE id = ?",
        params![now(), id],
    )?;
    if updated == 0 {
        return Ok(None);
    }
    get_by_id(conn, id)
}

pub fn toggle_featured(conn: &Connection, id: &str) -> Result<Option<Project>> {
    let updated = conn.execute(
        "UPDATE projects SET featured = NOT featured, updated_at = ? WHERE id = ?",
        params![now(), id],
    )?;
    if updated == 0 {
        return Ok(None);
    }
    get_by_id(conn, id)
}

pub fn get_by_id(conn: &Connection, id: &str) -> Result<Option<Project>> {
    let project = conn
        .query_row(
            &format!("SELECT {} FROM projects WHERE id = ?", COLUMNS),
            [id],
            row_to_project,
        )
        .optional()?;
    Ok(project)
}

pub fn get_published_by_slug(db: &Database, slug: &str) -> Result<Option<PublicProject>> {
    let conn = db.get()?;
    let project = conn
        .query_row(
            &format!("SELECT {} FROM projects WHERE slug = ?", COLUMNS),
            [slug],
            row_to_project,
        )
        .optional()?;

    let project = match project {
        Some(p) if p.published => p,
        _ => return Ok(None),
    };

    Ok(Some(PublicProject {
        featured_image: assets::resolve(db, project.featured_image_id.as_deref())?,
        slug: project.slug,
        title: project.title,
        description: project.description,
        content: project.content,
        tags: project.tags,
        meta_keywords: project.meta_keywords,
        project_type: project.project_type,
        featured: project.featured,
        published: project.published,
        date: project.created_at,
    }))
}

pub fn get_by_slug_admin(db: &Database, slug: &str) -> Result<Option<Project>> {
    let conn = db.get()?;
    let project = conn
        .query_row(
            &format!("SELECT {} FROM projects WHERE slug = ?", COLUMNS),
            [slug],
            row_to_project,
        )
        .optional()?;
    Ok(project)
}

pub fn slugs(db: &Database) -> Result<Vec<ProjectSlugEntry>> {
    let conn = db.get()?;
    let mut stmt = conn.prepare(
        "SELECT slug, title, description, created_at, tags, project_type FROM projects \
         WHERE published = 1 ORDER BY created_at DESC",
    )?;
    let entries = stmt
        .query_map([], |row| {
            Ok(ProjectSlugEntry {
                slug: row.get(0)?,
                title: row.get(1)?,
                description: row.get(2)?,
                date: row.get(3)?,
                tags: parse_tags(row.get::<_, String>(4)?),
                project_type: row.get(5)?,
            })
        })?
        .collect::<Result<Vec<_>, _>>()?;
    Ok(entries)
}

/// Public projects listing: published only, search over title and
/// description, tag containment.
pub fn public_listing(db: &Database, query: &ListQuery) -> Result<Page<ProjectCard>> {
    let mut filter = FilterBuilder::new();
    filter.clause("published = 1", []);
    if let Some(search) = &query.search {
        filter.search(&["title", "description"], search);
    }
    if let Some(tag) = &query.tag {
        filter.tag("tags", tag);
    }

    let (projects, total) = fetch_filtered(db, &filter, query)?;
    let cards = projects
        .into_iter()
        .map(|p| to_card(db, p))
        .collect::<Result<Vec<_>>>()?;

    Ok(Page::new(cards, total, query))
}

pub fn admin_listing(db: &Database, user_id: &str, query: &ListQuery) -> Result<Page<Project>> {
    let mut filter = FilterBuilder::new();
    filter.clause("user_id = ?", [Value::from(user_id.to_string())]);
    if let Some(published) = query.published {
        filter.clause("published = ?", [Value::from(published)]);
    }
    if let Some(search) = &query.search {
        filter.search(&["title", "description", "content", "slug"], search);
    }
    if let Some(tag) = &query.tag {
        filter.tag("tags", tag);
    }

    let (projects, total) = fetch_filtered(db, &filter, query)?;
    Ok(Page::new(projects, total, query))
}

fn fetch_filtered(
    db: &Database,
    filter: &FilterBuilder,
    query: &ListQuery,
) -> Result<(Vec<Project>, i64)> {
    let conn = db.get()?;

    let total: i64 = conn.query_row(
        &format!("SELECT COUNT(*) FROM projects{}", filter.where_sql()),
        params_from_iter(filter.params()),
        |row| row.get(0),
    )?;

    let mut stmt = conn.prepare(&format!(
        "SELECT {} FROM projects{} ORDER BY {} {} LIMIT ? OFFSET ?",
        COLUMNS,
        filter.where_sql(),
        query.order_by.column(),
        query.order.keyword(),
    ))?;

    let mut params = filter.params();
    params.push(Value::from(query.page_size as i64));
    params.push(Value::from(query.offset() as i64));

    let projects = stmt
        .query_map(params_from_iter(params), row_to_project)?
        .collect::<Result<Vec<_>, _>>()?;

    Ok((projects, total))
}

fn slugs_with_prefix(conn: &Connection, prefix: &str) -> Result<HashSet<String>> {
    let mut stmt = conn.prepare("SELECT slug FROM projects WHERE slug LIKE ? ESCAPE '\\'")?;
    let pattern = format!("{}%", escape_like_pattern(prefix));
    let slugs = stmt
        .query_map([pattern], |row| row.get::<_, String>(0))?
        .collect::<Result<HashSet<_>, _>>()?;
    Ok(slugs)
}

fn to_card(db: &Database, project: Project) -> Result<ProjectCard> {
    Ok(ProjectCard {
        featured_image: assets::resolve(db, project.featured_image_id.as_deref())?,
        id: project.id,
        slug: project.slug,
        title: project.title,
        description: project.description,
        tags: project.tags,
        project_type: project.project_type,
        featured: project.featured,
        created_at: project.created_at,
        updated_at: project.updated_at,
    })
}

fn parse_tags(raw: String) -> Vec<String> {
    serde_json::from_str(&raw).unwrap_or_default()
}

fn row_to_project(row: &rusqlite::Row) -> rusqlite::Result<Project> {
    Ok(Project {
        id: row.get(0)?,
        slug: row.get(1)?,
        title: row.get(2)?,
        description: row.get(3)?,
        content: row.get(4)?,
        tags: parse_tags(row.get::<_, String>(5)?),
        meta_keywords: row.get(6)?,
        project_type: row.get(7)?,
        featured_image_id: row.get(8)?,
        published: row.get(9)?,
        featured: row.get(10)?,
        user_id: row.get(11)?,
        created_at: row.get(12)?,
        updated_at: row.get(13)?,
    })
}
