use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize)]
pub struct StaticAsset {
    pub id: String,
    pub name: String,
    pub description: String,
    pub url: String,
    pub created_at: String,
    pub updated_at: String,
}

/// Upload payload: `file` is a base64 data-URI
/// (`data:<mime>;base64,<payload>`).
#[derive(Debug, Deserialize)]
pub struct UploadAsset {
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub file: String,
}

#[derive(Debug, Default, Deserialize)]
pub struct UpdateAsset {
    pub name: Option<String>,
    pub description: Option<String>,
}
