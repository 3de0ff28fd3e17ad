use contracts::api::DeleteClassesRequest;
use contracts::domain::school_class::{SchoolClass, SchoolClassPayload};

use crate::shared::http;

pub async fn fetch_classes() -> Result<Vec<SchoolClass>, String> {
    http::get_data("/auth/all-classes").await
}

pub async fn create_class(payload: &SchoolClassPayload) -> Result<(), String> {
    http::post_json("/api/admin/new-class", payload).await
}

pub async fn update_class(id: &str, payload: &SchoolClassPayload) -> Result<(), String> {
    http::put_json(&format!("/api/admin/class/{}", id), payload).await
}

pub async fn delete_classes(ids: Vec<String>) -> Result<(), String> {
    http::delete_json("/api/admin/delete-all-classes", &DeleteClassesRequest { ids }).await
}
