use contracts::api::DeleteTeachersRequest;
use contracts::domain::teacher::Teacher;
use web_sys::FormData;

use crate::shared::http;

pub async fn fetch_teachers() -> Result<Vec<Teacher>, String> {
    http::get_data("/api/admin/all-teachers").await
}

pub async fn fetch_teacher(id: &str) -> Result<Teacher, String> {
    http::get_data(&format!("/api/admin/teacher/{}", id)).await
}

/// Multipart: carries profile picture and NID photo alongside the fields.
pub async fn create_teacher(form: FormData) -> Result<(), String> {
    http::post_form("/api/admin/create-teacher", form).await
}

pub async fn update_teacher(id: &str, form: FormData) -> Result<(), String> {
    http::put_form(&format!("/api/admin/teacher/{}", id), form).await
}

pub async fn delete_teacher(id: &str) -> Result<(), String> {
    http::delete(&format!("/api/admin/delete-teacher/{}", id)).await
}

pub async fn delete_teachers(ids: Vec<String>) -> Result<(), String> {
    http::delete_json("/api/admin/delete-all-teachers", &DeleteTeachersRequest { ids }).await
}
