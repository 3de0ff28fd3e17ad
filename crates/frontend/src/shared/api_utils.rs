//! API URL construction.
//!
//! The backend is a separate service; by default it is assumed to live on
//! the same host as the SPA, port 5000. A fixed base can be baked in at
//! build time through the `API_BASE_URL` environment variable.

/// Get the base URL for API requests.
pub fn api_base() -> String {
    if let Some(fixed) = option_env!("API_BASE_URL") {
        return fixed.trim_end_matches('/').to_string();
    }
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}:5000", protocol, hostname)
}

/// Build a full API URL from a path (should start with `/`).
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}

/// Resolve an uploaded image filename to a full URL.
///
/// The backend serves uploads under a fixed `/images/` prefix.
pub fn image_url(filename: &str) -> String {
    format!("{}/images/{}", api_base(), urlencoding::encode(filename))
}
