use contracts::api::DeleteStudentsRequest;
use contracts::domain::attendance::RosterQuery;
use contracts::domain::student::Student;
use web_sys::FormData;

use crate::shared::http;

pub async fn fetch_students() -> Result<Vec<Student>, String> {
    http::get_data("/api/admin/students").await
}

pub async fn fetch_student(id: &str) -> Result<Student, String> {
    http::get_data(&format!("/api/admin/student/{}", id)).await
}

/// Roster for the attendance sheet, narrowed by class and optional section.
pub async fn search_students(query: &RosterQuery) -> Result<Vec<Student>, String> {
    let qs = serde_qs::to_string(query).map_err(|e| format!("Failed to build query: {}", e))?;
    http::get_data(&format!("/api/admin/search-students?{}", qs)).await
}

pub async fn create_student(form: FormData) -> Result<(), String> {
    http::post_form("/api/admin/create-student", form).await
}

pub async fn update_student(id: &str, form: FormData) -> Result<(), String> {
    http::put_form(&format!("/api/admin/update-student/{}", id), form).await
}

pub async fn delete_student(id: &str) -> Result<(), String> {
    http::delete(&format!("/api/admin/delete-student/{}", id)).await
}

pub async fn delete_students(ids: Vec<String>) -> Result<(), String> {
    http::delete_json("/api/admin/delete-students", &DeleteStudentsRequest { ids }).await
}
