use crate::models::{PageContent, PageLayout, PageSeo, PageText, PublicPage, UpsertPage};
use crate::services::{assets, now};
use crate::Database;
use anyhow::Result;
use rusqlite::{params, Connection, OptionalExtension};

/// The site's page singletons. Listing endpoints for blog and projects
/// pull their page content from here as well.
pub const PAGE_KEYS: &[&str] = &[
    "home",
    "about",
    "contact",
    "changelog",
    "license",
    "privacy",
    "menu",
    "faq",
    "blog",
    "projects",
    "not-found",
];

pub fn is_known_key(key: &str) -> bool {
    PAGE_KEYS.contains(&key)
}

const COLUMNS: &str = "page_key, title, subtitle, description, hero_image_main_id, \
     hero_image_secondary_id, hero_image_main_alt, hero_image_secondary_alt, logo_text, \
     breadcrumb_text, hero_title, meta_title, meta_description, meta_keywords, og_title, \
     og_description, og_image_id, structured_data, sections, updated_at";

pub fn get(db: &Database, key: &str) -> Result<Option<PageContent>> {
    let conn = db.get()?;
    let page = conn
        .query_row(
            &format!("SELECT {} FROM pages WHERE page_key = ?", COLUMNS),
            [key],
            row_to_page,
        )
        .optional()?;
    Ok(page)
}

/// Public page shape with hero and OG asset ids resolved to URLs.
pub fn get_public(db: &Database, key: &str) -> Result<Option<PublicPage>> {
    let page = match get(db, key)? {
        Some(p) => p,
        None => return Ok(None),
    };

    Ok(Some(PublicPage {
        page_content: PageText {
            title: page.title,
            subtitle: page.subtitle,
            description: page.description,
        },
        layout_data: PageLayout {
            hero_image_main: assets::resolve(db, page.hero_image_main_id.as_deref())?,
            hero_image_secondary: assets::resolve(db, page.hero_image_secondary_id.as_deref())?,
            hero_image_main_alt: page.hero_image_main_alt,
            hero_image_secondary_alt: page.hero_image_secondary_alt,
            logo_text: page.logo_text,
            breadcrumb_text: page.breadcrumb_text,
            hero_title: page.hero_title,
        },
        seo_data: PageSeo {
            meta_title: page.meta_title,
            meta_description: page.meta_description,
            meta_keywords: page.meta_keywords,
            og_title: page.og_title,
            og_description: page.og_description,
            og_image: assets::resolve(db, page.og_image_id.as_deref())?,
            structured_data: page.structured_data,
        },
        sections: page.sections,
    }))
}

/// Insert or replace a page singleton. The caller validates the key
/// against [`PAGE_KEYS`].
pub fn upsert(conn: &Connection, key: &str, input: &UpsertPage) -> Result<PageContent> {
    let structured_data = input
        .structured_data
        .clone()
        .unwrap_or(serde_json::json!({}));
    let sections = input.sections.clone().unwrap_or(serde_json::json!([]));

    conn.execute(
        "INSERT INTO pages (page_key, title, subtitle, description, hero_image_main_id, \
         hero_image_secondary_id, hero_image_main_alt, hero_image_secondary_alt, logo_text, \
         breadcrumb_text, hero_title, meta_title, meta_description, meta_keywords, og_title, \
         og_description, og_image_id, structured_data, sections, updated_at) \
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13, ?14, ?15, ?16, ?17, ?18, ?19, ?20) \
         ON CONFLICT(page_key) DO UPDATE SET title = ?2, subtitle = ?3, description = ?4, \
         hero_image_main_id = ?5, hero_image_secondary_id = ?6, hero_image_main_alt = ?7, \
         hero_image_secondary_alt = ?8, logo_text = ?9, breadcrumb_text = ?10, hero_title = ?11, \
         meta_title = ?12, meta_description = ?13, meta_keywords = ?14, og_title = ?15, \
         og_description = ?16, og_image_id = ?17, structured_data = ?18, sections = ?19, \
         updated_at = ?20",
        params![
            key,
            input.title,
            input.subtitle,
            input.description,
            input.hero_image_main_id,
            input.hero_image_secondary_id,
            input.hero_image_main_alt,
            input.hero_image_secondary_alt,
            input.logo_text,
            input.breadcrumb_text,
            input.hero_title,
            input.meta_title,
            input.meta_description,
            input.meta_keywords,
            input.og_title,
            input.og_description,
            input.og_image_id,
            serde_json::to_string(&structured_data)?,
            serde_json::to_string(&sections)?,
            now(),
        ],
    )?;

    let page = conn.query_row(
        &format!("SELECT {} FROM pages WHERE page_key = ?", COLUMNS),
        [key],
        row_to_page,
    )?;
    Ok(page)
}

fn row_to_page(row: &rusqlite::Row) -> rusqlite::Result<PageContent> {
    let structured_data: serde_json::Value =
        serde_json::from_str(&row.get::<_, String>(17)?).unwrap_or(serde_json::json!({}));
    let sections: serde_json::Value =
        serde_json::from_str(&row.get::<_, String>(18)?).unwrap_or(serde_json::json!([]));

    Ok(PageContent {
        page_key: row.get(0)?,
        title: row.get(1)?,
        subtitle: row.get(2)?,
        description: row.get(3)?,
        hero_image_main_id: row.get(4)?,
        hero_image_secondary_id: row.get(5)?,
        hero_image_main_alt: row.get(6)?,
        hero_image_secondary_alt: row.get(7)?,
        logo_text: row.get(8)?,
        breadcrumb_text: row.get(9)?,
        hero_title: row.get(10)?,
        meta_title: row.get(11)?,
        meta_description: row.get(12)?,
        meta_keywords: row.get(13)?,
        og_title: row.get(14)?,
        og_description: row.get(15)?,
        og_image_id: row.get(16)?,
        structured_data,
        sections,
        updated_at: row.get(19)?,
    })
}
