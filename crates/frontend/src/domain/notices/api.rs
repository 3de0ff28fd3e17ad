use contracts::domain::notice::{Notice, NoticeUpdate};
use web_sys::FormData;

use crate::shared::http;

pub async fn fetch_notices() -> Result<Vec<Notice>, String> {
    http::get_data("/api/admin/notices").await
}

/// Creation is multipart: the attachment image is optional but the
/// recipient ids ride as repeated `student_ids` fields either way.
pub async fn create_notice(form: FormData) -> Result<(), String> {
    http::post_form("/api/admin/notices", form).await
}

pub async fn update_notice(id: &str, payload: &NoticeUpdate) -> Result<(), String> {
    http::put_json(&format!("/api/admin/notices/{}", id), payload).await
}

pub async fn delete_notice(id: &str) -> Result<(), String> {
    http::delete(&format!("/api/admin/delete-notices/{}", id)).await
}
