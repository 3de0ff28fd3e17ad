use serde::{Deserialize, Serialize};

/// Named exam type ("Half Yearly", "Final", ...) used by exam routines.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExamType {
    #[serde(rename = "_id", default)]
    pub record_id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub title: String,
}

/// Body for `POST /api/admin/exam-name`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExamTypePayload {
    pub name: String,
    pub title: String,
}

/// Body for `PUT /api/admin/exam-name/:id`. The backend's field names do
/// not line up with the stored document: `examType` updates `name` and
/// `examTitle` updates `title`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExamTypeUpdate {
    #[serde(rename = "examType")]
    pub name: String,
    #[serde(rename = "examTitle")]
    pub title: String,
}

/// Body for bulk `DELETE /api/admin/exam-name`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeleteExamTypesRequest {
    #[serde(rename = "examIds")]
    pub exam_ids: Vec<String>,
}
