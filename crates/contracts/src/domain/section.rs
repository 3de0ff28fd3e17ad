use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Section {
    #[serde(rename = "_id", default)]
    pub record_id: String,
    #[serde(rename = "sectionName", default)]
    pub section_name: String,
    #[serde(rename = "sectionType", default)]
    pub section_type: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SectionPayload {
    #[serde(rename = "sectionName")]
    pub section_name: String,
    #[serde(rename = "sectionType")]
    pub section_type: String,
}
