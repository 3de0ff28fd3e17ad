use contracts::domain::banner::Banner;
use web_sys::FormData;

use crate::shared::http;

pub async fn fetch_banners() -> Result<Vec<Banner>, String> {
    http::get_data("/api/admin/all-banners").await
}

/// Always multipart: the image is mandatory for a banner.
pub async fn create_banner(form: FormData) -> Result<(), String> {
    http::post_form("/api/admin/banner", form).await
}

pub async fn delete_banner(id: &str) -> Result<(), String> {
    http::delete(&format!("/api/admin/delete-banner/{}", id)).await
}
