use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize)]
pub struct Article {
    pub id: String,
    pub slug: String,
    pub title: String,
    pub description: String,
    pub content: String,
    pub excerpt: Option<String>,
    pub tags: Vec<String>,
    pub meta_keywords: Option<String>,
    pub featured_image_id: Option<String>,
    pub published: bool,
    pub featured: bool,
    pub user_id: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

#[derive(Debug, Deserialize)]
pub struct CreateArticle {
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub content: String,
    pub excerpt: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    pub meta_keywords: Option<String>,
    pub featured_image_id: Option<String>,
    #[serde(default)]
    pub published: bool,
}

/// Partial update; the slug is never regenerated on update.
#[derive(Debug, Default, Deserialize)]
pub struct UpdateArticle {
    pub title: Option<String>,
    pub description: Option<String>,
    pub content: Option<String>,
    pub excerpt: Option<String>,
    pub tags: Option<Vec<String>>,
    pub meta_keywords: Option<String>,
    pub featured_image_id: Option<String>,
}

/// Public card shape used by index and blog listings.
#[derive(Debug, Clone, Serialize)]
pub struct ArticleCard {
    pub id: String,
    pub slug: String,
    pub title: String,
    pub description: String,
    pub excerpt: Option<String>,
    pub featured_image: Option<String>,
    pub tags: Vec<String>,
    pub created_at: String,
    pub updated_at: String,
}

/// Public detail shape for a published article.
#[derive(Debug, Clone, Serialize)]
pub struct PublicArticle {
    pub slug: String,
    pub title: String,
    pub description: String,
    pub content: String,
    pub excerpt: Option<String>,
    pub tags: Vec<String>,
    pub meta_keywords: Option<String>,
    pub featured_image: Option<String>,
    pub publish_date: String,
    pub updated_date: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ArticleSlugEntry {
    pub slug: String,
    pub title: String,
    pub description: String,
    pub publish_date: String,
    pub tags: Vec<String>,
}
