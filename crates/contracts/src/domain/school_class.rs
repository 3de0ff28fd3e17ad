use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SchoolClass {
    #[serde(rename = "_id", default)]
    pub record_id: String,
    #[serde(rename = "className", default)]
    pub class_name: String,
    #[serde(rename = "classTeacher", default)]
    pub class_teacher: String,
}

/// Body for `POST /api/admin/new-class` and `PUT /api/admin/class/:id`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SchoolClassPayload {
    #[serde(rename = "className")]
    pub class_name: String,
    #[serde(rename = "classTeacher")]
    pub class_teacher: String,
}
