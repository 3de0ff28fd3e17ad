use serde::{Deserialize, Serialize};

/// Standard envelope the backend wraps list and detail payloads in.
///
/// `data` defaults so that bare `{ "success": true, "message": "..." }`
/// acknowledgements still deserialize.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de> + Default"))]
pub struct ApiResponse<T> {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default = "default_data")]
    pub data: T,
}

fn default_data<T: Default>() -> T {
    T::default()
}

/// Body for `DELETE /api/admin/delete-students`. Each bulk-delete endpoint
/// names its id array differently, so one struct per entity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeleteStudentsRequest {
    #[serde(rename = "studentIds")]
    pub ids: Vec<String>,
}

/// Body for `DELETE /api/admin/delete-all-teachers`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeleteTeachersRequest {
    #[serde(rename = "teacherIds")]
    pub ids: Vec<String>,
}

/// Body for `DELETE /api/admin/delete-all-classes`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeleteClassesRequest {
    #[serde(rename = "classIds")]
    pub ids: Vec<String>,
}

/// Body for `POST /api/admin/sections/delete-multiple`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeleteSectionsRequest {
    #[serde(rename = "sectionIds")]
    pub ids: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn envelope_without_data_field() {
        let resp: ApiResponse<Vec<String>> =
            serde_json::from_str(r#"{"success":true,"message":"ok"}"#).unwrap();
        assert!(resp.success);
        assert_eq!(resp.message.as_deref(), Some("ok"));
        assert!(resp.data.is_empty());
    }

    #[test]
    fn envelope_with_data() {
        let resp: ApiResponse<Vec<i32>> =
            serde_json::from_str(r#"{"success":true,"data":[1,2,3]}"#).unwrap();
        assert_eq!(resp.data, vec![1, 2, 3]);
        assert!(resp.message.is_none());
    }
}
