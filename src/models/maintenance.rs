use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize)]
pub struct MaintenanceMode {
    pub id: i64,
    pub is_active: bool,
    pub message: String,
    pub from_date: Option<String>,
    pub to_date: Option<String>,
    pub hero_image_id: Option<String>,
    pub hero_title: String,
    pub title: String,
    pub meta_title: String,
    pub is_permanent: bool,
    pub updated_at: String,
}

/// Public status shape with the hero asset id resolved to a URL.
#[derive(Debug, Clone, Serialize)]
pub struct MaintenanceStatus {
    pub is_active: bool,
    pub message: String,
    pub from_date: Option<String>,
    pub to_date: Option<String>,
    pub hero_image: Option<String>,
    pub hero_title: String,
    pub title: String,
    pub meta_title: String,
    pub is_permanent: bool,
}

#[derive(Debug, Deserialize)]
pub struct UpdateMaintenance {
    pub is_active: bool,
    #[serde(default)]
    pub message: String,
    pub from_date: Option<String>,
    pub to_date: Option<String>,
    pub hero_image_id: Option<String>,
    #[serde(default)]
    pub hero_title: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub meta_title: String,
    #[serde(default)]
    pub is_permanent: bool,
}
