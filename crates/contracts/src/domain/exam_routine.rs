use serde::{Deserialize, Serialize};

/// One scheduled exam inside an exam-routine document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExamEntry {
    #[serde(rename = "_id", default)]
    pub record_id: String,
    #[serde(rename = "examType", default)]
    pub exam_type: String,
    #[serde(default)]
    pub day: String,
    #[serde(default)]
    pub date: String,
    #[serde(rename = "timeStart", default)]
    pub time_start: String,
    #[serde(rename = "timeEnd", default)]
    pub time_end: String,
    #[serde(rename = "subjectName", default)]
    pub subject_name: String,
    #[serde(rename = "className", default)]
    pub class_name: String,
    #[serde(rename = "roomNumber", default)]
    pub room_number: String,
    #[serde(default)]
    pub supervisor: String,
    #[serde(rename = "createdBy", default)]
    pub created_by: String,
    #[serde(rename = "teacher_id", default)]
    pub teacher_id: String,
}

/// Parent document; entries are mutated through
/// `/api/admin/exam-routine/:id/entry/:entryId`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExamRoutineDoc {
    #[serde(rename = "_id", default)]
    pub record_id: String,
    #[serde(rename = "createdAt", default)]
    pub created_at: String,
    #[serde(rename = "examRoutine", default)]
    pub exam_routine: Vec<ExamEntry>,
}

/// Body for `POST /api/admin/new-exam-routine`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NewExamRoutineRequest {
    #[serde(rename = "examRoutine")]
    pub exam_routine: Vec<ExamEntry>,
}

/// Editable fields of an existing exam entry
/// (`PUT /api/admin/exam-routine/:id/entry/:entryId`).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExamEntryUpdate {
    #[serde(rename = "examType", default)]
    pub exam_type: String,
    #[serde(default)]
    pub day: String,
    #[serde(default)]
    pub date: String,
    #[serde(rename = "timeStart", default)]
    pub time_start: String,
    #[serde(rename = "timeEnd", default)]
    pub time_end: String,
    #[serde(rename = "subjectName", default)]
    pub subject_name: String,
    #[serde(rename = "className", default)]
    pub class_name: String,
    #[serde(rename = "roomNumber", default)]
    pub room_number: String,
    #[serde(default)]
    pub supervisor: String,
}
