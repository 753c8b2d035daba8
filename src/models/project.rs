use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize)]
pub struct Project {
    pub id: String,
    pub slug: String,
    pub title: String,
    pub description: String,
    pub content: String,
    pub tags: Vec<String>,
    pub meta_keywords: Option<String>,
    pub project_type: String,
    pub featured_image_id: Option<String>,
    pub published: bool,
    pub featured: bool,
    pub user_id: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

#[derive(Debug, Deserialize)]
pub struct CreateProject {
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub tags: Vec<String>,
    pub meta_keywords: Option<String>,
    #[serde(default)]
    pub project_type: String,
    pub featured_image_id: Option<String>,
    #[serde(default)]
    pub published: bool,
}

#[derive(Debug, Default, Deserialize)]
pub struct UpdateProject {
    pub title: Option<String>,
    pub description: Option<String>,
    pub content: Option<String>,
    pub tags: Option<Vec<String>>,
    pub meta_keywords: Option<String>,
    pub project_type: Option<String>,
    pub featured_image_id: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ProjectCard {
    pub id: String,
    pub slug: String,
    pub title: String,
    pub description: String,
    pub featured_image: Option<String>,
    pub tags: Vec<String>,
    pub project_type: String,
    pub featured: bool,
    pub created_at: String,
    pub updated_at: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct PublicProject {
    pub slug: String,
    pub title: String,
    pub description: String,
    pub content: String,
    pub tags: Vec<String>,
    pub meta_keywords: Option<String>,
    pub project_type: String,
    pub featured_image: Option<String>,
    pub featured: bool,
    pub published: bool,
    pub date: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ProjectSlugEntry {
    pub slug: String,
    pub title: String,
    pub description: String,
    pub date: String,
    pub tags: Vec<String>,
    pub project_type: String,
}
