use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Banner {
    #[serde(rename = "_id", default)]
    pub record_id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    /// Filename under the backend's `/images/` prefix.
    #[serde(rename = "imageUrl", default)]
    pub image_url: String,
    #[serde(rename = "createdAt", default)]
    pub created_at: String,
}
