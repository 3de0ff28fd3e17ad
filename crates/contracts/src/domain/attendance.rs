use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Wire format for one student's mark. Exactly one of the three status
/// flags is set on a completed sheet; the backend stores them as-is.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AttendanceMark {
    pub present: bool,
    pub absent: bool,
    pub late: bool,
    #[serde(default)]
    pub remarks: String,
}

/// Body for `POST /api/admin/attendance`: the whole roster in one request,
/// marks keyed by student record id.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AttendanceSubmission {
    #[serde(rename = "classId")]
    pub class_id: String,
    #[serde(rename = "sectionId")]
    pub section_id: Option<String>,
    pub date: String,
    pub attendance: BTreeMap<String, AttendanceMark>,
    #[serde(rename = "createdBy")]
    pub created_by: String,
}

/// Query for `GET /api/admin/search-students`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RosterQuery {
    #[serde(rename = "classId")]
    pub class_id: String,
    #[serde(rename = "sectionId", skip_serializing_if = "Option::is_none")]
    pub section_id: Option<String>,
}
