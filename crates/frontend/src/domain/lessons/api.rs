use contracts::domain::lesson::{DeleteLessonRequest, LessonEntry, LessonUpdate, NewLessonRequest};

use crate::shared::http;

/// Entries come back already flattened, each carrying its parent diary id.
pub async fn fetch_lessons() -> Result<Vec<LessonEntry>, String> {
    http::get_data("/auth/daily-diary").await
}

pub async fn create_lessons(request: &NewLessonRequest) -> Result<(), String> {
    http::post_json("/api/admin/daily-diary", request).await
}

pub async fn update_lesson(entry_id: &str, update: &LessonUpdate) -> Result<(), String> {
    http::put_json(&format!("/api/admin/daily-diary/entry/{}", entry_id), update).await
}

pub async fn delete_lesson(entry_id: &str, diary_id: String) -> Result<(), String> {
    http::delete_json(
        &format!("/api/admin/daily-diary/entry/{}", entry_id),
        &DeleteLessonRequest { diary_id },
    )
    .await
}
