use serde::{Deserialize, Serialize};

/// Notice as stored by the backend. Unlike the other collections this one
/// uses snake_case field names on the wire.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Notice {
    #[serde(rename = "_id", default)]
    pub record_id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub content: String,
    /// Recipient student record ids.
    #[serde(default)]
    pub student_ids: Vec<String>,
    #[serde(default)]
    pub student_names: Vec<String>,
    /// Filename under the backend's `/images/` prefix, empty when none.
    #[serde(default)]
    pub image: String,
    /// "low" | "medium" | "high"
    #[serde(default = "default_priority")]
    pub priority: String,
    #[serde(default = "default_true")]
    pub is_active: bool,
    #[serde(default)]
    pub date_posted: String,
}

fn default_priority() -> String {
    "medium".to_string()
}

fn default_true() -> bool {
    true
}

/// Body for `PUT /api/admin/notices/:id`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NoticeUpdate {
    pub title: String,
    pub content: String,
    pub priority: String,
    pub is_active: bool,
}
