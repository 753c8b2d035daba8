use serde::{Deserialize, Serialize};

/// A site page singleton (home, about, contact, …) stored by key.
#[derive(Debug, Clone, Serialize)]
pub struct PageContent {
    pub page_key: String,
    pub title: String,
    pub subtitle: String,
    pub description: String,
    pub hero_image_main_id: Option<String>,
    pub hero_image_secondary_id: Option<String>,
    pub hero_image_main_alt: String,
    pub hero_image_secondary_alt: String,
    pub logo_text: String,
    pub breadcrumb_text: String,
    pub hero_title: String,
    pub meta_title: String,
    pub meta_description: String,
    pub meta_keywords: String,
    pub og_title: String,
    pub og_description: String,
    pub og_image_id: Option<String>,
    pub structured_data: serde_json::Value,
    pub sections: serde_json::Value,
    pub updated_at: String,
}

#[derive(Debug, Default, Deserialize)]
pub struct UpsertPage {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub subtitle: String,
    #[serde(default)]
    pub description: String,
    pub hero_image_main_id: Option<String>,
    pub hero_image_secondary_id: Option<String>,
    #[serde(default)]
    pub hero_image_main_alt: String,
    #[serde(default)]
    pub hero_image_secondary_alt: String,
    #[serde(default)]
    pub logo_text: String,
    #[serde(default)]
    pub breadcrumb_text: String,
    #[serde(default)]
    pub hero_title: String,
    #[serde(default)]
    pub meta_title: String,
    #[serde(default)]
    pub meta_description: String,
    #[serde(default)]
    pub meta_keywords: String,
    #[serde(default)]
    pub og_title: String,
    #[serde(default)]
    pub og_description: String,
    pub og_image_id: Option<String>,
    pub structured_data: Option<serde_json::Value>,
    pub sections: Option<serde_json::Value>,
}

/// Public rendering of a page with asset ids resolved to URLs.
#[derive(Debug, Clone, Serialize)]
pub struct PublicPage {
    pub page_content: PageText,
    pub layout_data: PageLayout,
    pub seo_data: PageSeo,
    pub sections: serde_json::Value,
}

#[derive(Debug, Clone, Serialize)]
pub struct PageText {
    pub title: String,
    pub subtitle: String,
    pub description: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct PageLayout {
    pub hero_image_main: Option<String>,
    pub hero_image_secondary: Option<String>,
    pub hero_image_main_alt: String,
    pub hero_image_secondary_alt: String,
    pub logo_text: String,
    pub breadcrumb_text: String,
    pub hero_title: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct PageSeo {
    pub meta_title: String,
    pub meta_description: String,
    pub meta_keywords: String,
    pub og_title: String,
    pub og_description: String,
    pub og_image: Option<String>,
    pub structured_data: serde_json::Value,
}
