use crate::models::{
    Article, ArticleCard, ArticleSlugEntry, CreateArticle, PublicArticle, UpdateArticle,
};
use crate::services::listing::{
    escape_like_pattern, FilterBuilder, ListQuery, Page,
};
use crate::services::{assets, is_unique_violation, now, slug, SlugTaken};
use crate::Database;
use anyhow::Result;
use rusqlite::types::Value;
use rusqlite::{params, params_from_iter, Connection, OptionalExtension};
use std::collections::HashSet;
use uuid::Uuid;

const COLUMNS: &str = "id, slug, title, description, content, excerpt, tags, meta_keywords, \
     featured_image_id, published, featured, user_id, created_at, updated_at";

/// Create an article, generating a unique slug from the title. The
/// slug lookup and the insert share the caller's transaction; a lost
/// race against a concurrent creation is retried once with a fresh
/// slug set before surfacing [`SlugTaken`].
pub fn create(conn: &Connection, input: &CreateArticle, user_id: &str) -> Result<Article> {
    let base = slug::normalize(&input.title);
    let mut existing = slugs_with_prefix(conn, &base)?;
    let mut unique = slug::make_unique(&base, &existing);

    let id = Uuid::new_v4().to_string();
    let timestamp = now();
    let tags_json = serde_json::to_string(&input.tags)?;

    for attempt in 0..2 {
        let inserted = conn.execute(
            "INSERT INTO articles (id, slug, title, description, content, excerpt, tags, \
             meta_keywords, featured_image_id, published, featured, user_id, created_at, updated_at) \
             VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, 0, ?, ?, ?)",
            params![
                id,
                unique,
                input.title,
                input.description,
                input.content,
                input.excerpt,
                tags_json,
                input.meta_keywords,
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
                    .ok_or_else(|| anyhow::anyhow!("article vanished after insert"))
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

/// Update by id. The slug is intentionally left untouched so published
/// URLs stay stable.
pub fn update(conn: &Connection, id: &str, input: &UpdateArticle) -> Result<Option<Article>> {
    let current = match get_by_id(conn, id)? {
        Some(a) => a,
        None => return Ok(None),
    };

    let title = input.title.clone().unwrap_or(current.title);
    let description = input.description.clone().unwrap_or(current.description);
    let content = input.content.clone().unwrap_or(current.content);
    let excerpt = input.excerpt.clone().or(current.excerpt);
    let tags = input.tags.clone().unwrap_or(current.tags);
    let meta_keywords = input.meta_keywords.clone().or(current.meta_keywords);
    let featured_image_id = input.featured_image_id.clone().or(current.featured_image_id);

    conn.execute(
        "UPDATE articles SET title = ?, description = ?, content = ?, excerpt = ?, tags = ?, \
         meta_keywords = ?, featured_image_id = ?, updated_at = ? WHERE id = ?",
        params![
            title,
            description,
            content,
            excerpt,
            serde_json::to_string(&tags)?,
            meta_keywords,
            featured_image_id,
            now(),
            id,
        ],
    )?;

    get_by_id(conn, id)
}

pub fn delete(conn: &Connection, id: &str) -> Result<bool> {
    let deleted = conn.execute("DELETE FROM articles WHERE id = ?", [id])?;
    Ok(deleted > 0)
}

pub fn toggle_published(conn: &Connection, id: &str) -> Result<Option<Article>> {
    let updated = conn.execute(
        "UPDATE articles SET published = NOT published, updated_at = ? WHERE id = ?",
        params![now(), id],
    )?;
    if updated == 0 {
        return Ok(None);
    }
    get_by_id(conn, id)
}

pub fn toggle_featured(conn: &Connection, id: &str) -> Result<Option<Article>> {
    let updated = conn.execute(
        "UPDATE articles SET featured = NOT featured, updated_at = ? WHERE id = ?",
        params![now(), id],
    )?;
    if updated == 0 {
        return Ok(None);
    }
    get_by_id(conn, id)
}

pub fn get_by_id(conn: &Connection, id: &str) -> Result<Option<Article>> {
    let article = conn
        .query_row(
            &format!("SELECT {} FROM articles WHERE id = ?", COLUMNS),
            [id],
            row_to_article,
        )
        .optional()?;
    Ok(article)
}

/// Published article by slug for the public site; drafts read as
/// absent.
pub fn get_published_by_slug(db: &Database, slug: &str) -> Result<Option<PublicArticle>> {
    let conn = db.get()?;
    let article = conn
        .query_row(
            &format!("SELECT {} FROM articles WHERE slug = ?", COLUMNS),
            [slug],
            row_to_article,
        )
        .optional()?;

    let article = match article {
        Some(a) if a.published => a,
        _ => return Ok(None),
    };

    Ok(Some(PublicArticle {
        featured_image: assets::resolve(db, article.featured_image_id.as_deref())?,
        slug: article.slug,
        title: article.title,
        description: article.description,
        content: article.content,
        excerpt: article.excerpt,
        tags: article.tags,
        meta_keywords: article.meta_keywords,
        publish_date: article.created_at,
        updated_date: article.updated_at,
    }))
}

/// Any-state article by slug for the admin panel.
pub fn get_by_slug_admin(db: &Database, slug: &str) -> Result<Option<Article>> {
    let conn = db.get()?;
    let article = conn
        .query_row(
            &format!("SELECT {} FROM articles WHERE slug = ?", COLUMNS),
            [slug],
            row_to_article,
        )
        .optional()?;
    Ok(article)
}

/// All published articles as cards, newest first.
pub fn list_published(db: &Database) -> Result<Vec<ArticleCard>> {
    let conn = db.get()?;
    let mut stmt = conn.prepare(&format!(
        "SELECT {} FROM articles WHERE published = 1 ORDER BY created_at DESC",
        COLUMNS
    ))?;
    let articles = stmt
        .query_map([], row_to_article)?
        .collect::<Result<Vec<_>, _>>()?;

    articles.into_iter().map(|a| to_card(db, a)).collect()
}

/// Slug index for static front-end generation.
pub fn slugs(db: &Database) -> Result<Vec<ArticleSlugEntry>> {
    let conn = db.get()?;
    let mut stmt = conn.prepare(
        "SELECT slug, title, description, created_at, tags FROM articles \
         WHERE published = 1 ORDER BY created_at DESC",
    )?;
    let entries = stmt
        .query_map([], |row| {
            Ok(ArticleSlugEntry {
                slug: row.get(0)?,
                title: row.get(1)?,
                description: row.get(2)?,
                publish_date: row.get(3)?,
                tags: parse_tags(row.get::<_, String>(4)?),
            })
        })?
        .collect::<Result<Vec<_>, _>>()?;
    Ok(entries)
}

/// Public blog listing: published articles filtered by search text
/// (title, description, excerpt) and tag containment.
pub fn blog_listing(db: &Database, query: &ListQuery) -> Result<Page<ArticleCard>> {
    let mut filter = FilterBuilder::new();
    filter.clause("published = 1", []);
    if let Some(search) = &query.search {
        filter.search(&["title", "description", "excerpt"], search);
    }
    if let Some(tag) = &query.tag {
        filter.tag("tags", tag);
    }

    let (articles, total) = fetch_filtered(db, &filter, query)?;
    let cards = articles
        .into_iter()
        .map(|a| to_card(db, a))
        .collect::<Result<Vec<_>>>()?;

    Ok(Page::new(cards, total, query))
}

/// Admin listing scoped to the owning user, with the wider search
/// surface (content and slug included) and an optional explicit
/// published filter.
pub fn admin_listing(db: &Database, user_id: &str, query: &ListQuery) -> Result<Page<Article>> {
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

    let (articles, total) = fetch_filtered(db, &filter, query)?;
    Ok(Page::new(articles, total, query))
}

fn fetch_filtered(
    db: &Database,
    filter: &FilterBuilder,
    query: &ListQuery,
) -> Result<(Vec<Article>, i64)> {
    let conn = db.get()?;

    let total: i64 = conn.query_row(
        &format!("SELECT COUNT(*) FROM articles{}", filter.where_sql()),
        params_from_iter(filter.params()),
        |row| row.get(0),
    )?;

    let mut stmt = conn.prepare(&format!(
        "SELECT {} FROM articles{} ORDER BY {} {} LIMIT ? OFFSET ?",
        COLUMNS,
        filter.where_sql(),
        query.order_by.column(),
        query.order.keyword(),
    ))?;

    let mut params = filter.params();
    params.push(Value::from(query.page_size as i64));
    params.push(Value::from(query.offset() as i64));

    let articles = stmt
        .query_map(params_from_iter(params), row_to_article)?
        .collect::<Result<Vec<_>, _>>()?;

    Ok((articles, total))
}

fn slugs_with_prefix(conn: &Connection, prefix: &str) -> Result<HashSet<String>> {
    let mut stmt = conn.prepare("SELECT slug FROM articles WHERE slug LIKE ? ESCAPE '\\'")?;
    let pattern = format!("{}%", escape_like_pattern(prefix));
    let slugs = stmt
        .query_map([pattern], |row| row.get::<_, String>(0))?
        .collect::<Result<HashSet<_>, _>>()?;
    Ok(slugs)
}

fn to_card(db: &Database, article: Article) -> Result<ArticleCard> {
    Ok(ArticleCard {
        featured_image: assets::resolve(db, article.featured_image_id.as_deref())?,
        id: article.id,
        slug: article.slug,
        title: article.title,
        description: article.description,
        excerpt: article.excerpt,
        tags: article.tags,
        created_at: article.created_at,
        updated_at: article.updated_at,
    })
}

fn parse_tags(raw: String) -> Vec<String> {
    serde_json::from_str(&raw).unwrap_or_default()
}

fn row_to_article(row: &rusqlite::Row) -> rusqlite::Result<Article> {
    Ok(Article {
        id: row.get(0)?,
        slug: row.get(1)?,
        title: row.get(2)?,
        description: row.get(3)?,
        content: row.get(4)?,
        excerpt: row.get(5)?,
        tags: parse_tags(row.get::<_, String>(6)?),
        meta_keywords: row.get(7)?,
        featured_image_id: row.get(8)?,
        published: row.get(9)?,
        featured: row.get(10)?,
        user_id: row.get(11)?,
        created_at: row.get(12)?,
        updated_at: row.get(13)?,
    })
}
