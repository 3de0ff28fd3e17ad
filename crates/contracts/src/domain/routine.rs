use serde::{Deserialize, Serialize};

/// One period entry inside a routine document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RoutinePeriod {
    #[serde(rename = "_id", default)]
    pub record_id: String,
    #[serde(default)]
    pub day: String,
    #[serde(default)]
    pub period: String,
    #[serde(rename = "timeStart", default)]
    pub time_start: String,
    #[serde(rename = "timeEnd", default)]
    pub time_end: String,
    #[serde(rename = "subjectName", default)]
    pub subject_name: String,
    #[serde(rename = "teacherName", default)]
    pub teacher_name: String,
    #[serde(rename = "className", default)]
    pub class_name: String,
    #[serde(rename = "createdBy", default)]
    pub created_by: String,
    #[serde(rename = "teacher_id", default)]
    pub teacher_id: String,
}

/// Parent document holding an array of periods. Period edits and deletes
/// always address `{parent _id, period _id}`, never the period alone.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RoutineDoc {
    #[serde(rename = "_id", default)]
    pub record_id: String,
    #[serde(rename = "createdAt", default)]
    pub created_at: String,
    #[serde(default)]
    pub routine: Vec<RoutinePeriod>,
}

/// Body for `POST /api/admin/new-routine`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NewRoutineRequest {
    pub routine: Vec<RoutinePeriod>,
}

/// Fields an existing period can be edited to.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RoutinePeriodUpdate {
    #[serde(default)]
    pub day: String,
    #[serde(rename = "className", default)]
    pub class_name: String,
    #[serde(rename = "subjectName", default)]
    pub subject_name: String,
    #[serde(rename = "teacherName", default)]
    pub teacher_name: String,
    #[serde(rename = "timeStart", default)]
    pub time_start: String,
    #[serde(rename = "timeEnd", default)]
    pub time_end: String,
}

/// Body for `PUT /api/admin/routines/:routineId`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateRoutineItemRequest {
    #[serde(rename = "routineItemId")]
    pub routine_item_id: String,
    #[serde(rename = "updatedData")]
    pub updated_data: RoutinePeriodUpdate,
}

/// Body for `DELETE /api/admin/routines/:routineId`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeleteRoutineItemRequest {
    #[serde(rename = "routineItemId")]
    pub routine_item_id: String,
}
