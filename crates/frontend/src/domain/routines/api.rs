use contracts::domain::routine::{
    DeleteRoutineItemRequest, NewRoutineRequest, RoutineDoc, UpdateRoutineItemRequest,
};

use crate::shared::http;

pub async fn fetch_routines() -> Result<Vec<RoutineDoc>, String> {
    http::get_data("/auth/routines").await
}

pub async fn create_routine(request: &NewRoutineRequest) -> Result<(), String> {
    http::post_json("/api/admin/new-routine", request).await
}

/// Period edits address the parent document; the period id rides in the body.
pub async fn update_routine_item(
    routine_id: &str,
    request: &UpdateRoutineItemRequest,
) -> Result<(), String> {
    http::put_json(&format!("/api/admin/routines/{}", routine_id), request).await
}

pub async fn delete_routine_item(routine_id: &str, item_id: String) -> Result<(), String> {
    http::delete_json(
        &format!("/api/admin/routines/{}", routine_id),
        &DeleteRoutineItemRequest {
            routine_item_id: item_id,
        },
    )
    .await
}
