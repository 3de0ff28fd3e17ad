use contracts::domain::exam_routine::{ExamEntryUpdate, ExamRoutineDoc, NewExamRoutineRequest};

use crate::shared::http;

pub async fn fetch_exam_routines() -> Result<Vec<ExamRoutineDoc>, String> {
    http::get_data("/auth/all-exam-routines").await
}

pub async fn create_exam_routine(request: &NewExamRoutineRequest) -> Result<(), String> {
    http::post_json("/api/admin/new-exam-routine", request).await
}

/// Entries are addressed by parent and entry id in the path.
pub async fn update_exam_entry(
    routine_id: &str,
    entry_id: &str,
    update: &ExamEntryUpdate,
) -> Result<(), String> {
    http::put_json(
        &format!("/api/admin/exam-routine/{}/entry/{}", routine_id, entry_id),
        update,
    )
    .await
}

pub async fn delete_exam_entry(routine_id: &str, entry_id: &str) -> Result<(), String> {
    http::delete(&format!(
        "/api/admin/exam-routine/{}/entry/{}",
        routine_id, entry_id
    ))
    .await
}
