use serde::{Deserialize, Serialize};

/// Daily-diary entry: what was taught, what was assigned.
///
/// `GET /auth/daily-diary` returns entries already flattened, each
/// carrying the parent diary document id alongside its own `_id`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LessonEntry {
    #[serde(rename = "_id", default)]
    pub record_id: String,
    #[serde(rename = "diaryId", default)]
    pub diary_id: String,
    #[serde(default)]
    pub day: String,
    #[serde(default)]
    pub date: String,
    #[serde(rename = "className", default)]
    pub class_name: String,
    #[serde(rename = "subjectName", default)]
    pub subject_name: String,
    #[serde(rename = "teacherName", default)]
    pub teacher_name: String,
    #[serde(rename = "topicCovered", default)]
    pub topic_covered: String,
    #[serde(default)]
    pub homework: String,
    #[serde(default)]
    pub note: String,
    #[serde(rename = "createdBy", default)]
    pub created_by: String,
    #[serde(rename = "teacher_id", default)]
    pub teacher_id: String,
}

/// Body for `POST /api/admin/daily-diary`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NewLessonRequest {
    pub entries: Vec<LessonEntry>,
}

/// Body for `PUT /api/admin/daily-diary/entry/:id`. The parent diary id
/// rides in the body, not the path.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LessonUpdate {
    #[serde(rename = "diaryId")]
    pub diary_id: String,
    #[serde(default)]
    pub day: String,
    #[serde(default)]
    pub date: String,
    #[serde(rename = "className", default)]
    pub class_name: String,
    #[serde(rename = "subjectName", default)]
    pub subject_name: String,
    #[serde(rename = "teacherName", default)]
    pub teacher_name: String,
    #[serde(rename = "topicCovered", default)]
    pub topic_covered: String,
    #[serde(default)]
    pub homework: String,
    #[serde(default)]
    pub note: String,
}

/// Body for `DELETE /api/admin/daily-diary/entry/:id`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeleteLessonRequest {
    #[serde(rename = "diaryId")]
    pub diary_id: String,
}
