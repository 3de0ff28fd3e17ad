use contracts::domain::exam_type::{
    DeleteExamTypesRequest, ExamType, ExamTypePayload, ExamTypeUpdate,
};

use crate::shared::http;

/// This endpoint returns a bare array, not the usual envelope.
pub async fn fetch_exam_types() -> Result<Vec<ExamType>, String> {
    http::get_plain("/api/admin/exam-name").await
}

pub async fn create_exam_type(payload: &ExamTypePayload) -> Result<(), String> {
    http::post_json("/api/admin/exam-name", payload).await
}

pub async fn update_exam_type(id: &str, payload: &ExamTypeUpdate) -> Result<(), String> {
    http::put_json(&format!("/api/admin/exam-name/{}", id), payload).await
}

pub async fn delete_exam_type(id: &str) -> Result<(), String> {
    http::delete(&format!("/api/admin/exam-name/{}", id)).await
}

pub async fn delete_exam_types(ids: Vec<String>) -> Result<(), String> {
    http::delete_json("/api/admin/exam-name", &DeleteExamTypesRequest { exam_ids: ids }).await
}
