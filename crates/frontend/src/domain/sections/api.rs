use contracts::api::DeleteSectionsRequest;
use contracts::domain::section::{Section, SectionPayload};

use crate::shared::http;

pub async fn fetch_sections() -> Result<Vec<Section>, String> {
    http::get_data("/auth/sections").await
}

pub async fn create_section(payload: &SectionPayload) -> Result<(), String> {
    http::post_json("/api/admin/sections", payload).await
}

pub async fn update_section(id: &str, payload: &SectionPayload) -> Result<(), String> {
    http::put_json(&format!("/api/admin/sections/{}", id), payload).await
}

pub async fn delete_section(id: &str) -> Result<(), String> {
    http::delete(&format!("/api/admin/sections/{}", id)).await
}

/// Bulk delete goes through POST, not DELETE, on this endpoint.
pub async fn delete_sections(ids: Vec<String>) -> Result<(), String> {
    http::post_json(
        "/api/admin/sections/delete-multiple",
        &DeleteSectionsRequest { ids },
    )
    .await
}
