use contracts::auth::{AdminInfo, LoginRequest, LoginResponse};
use gloo_net::http::Request;

use crate::shared::api_utils::api_url;

/// Sign in against the backend. Deliberately bypasses the shared HTTP
/// layer: there is no token yet, and a 401 here means bad credentials,
/// not an expired session.
pub async fn login(email: String, password: String) -> Result<(AdminInfo, String), String> {
    let body = LoginRequest { email, password };

    let response = Request::post(&api_url("/auth/admin-login"))
        .json(&body)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    let parsed: LoginResponse = response
        .json()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))?;

    if !parsed.success {
        return Err(parsed
            .message
            .unwrap_or_else(|| "Login failed. Please check your credentials.".to_string()));
    }

    match (parsed.admin, parsed.token) {
        (Some(admin), Some(token)) => Ok((admin, token)),
        _ => Err("Login response was missing the session token.".to_string()),
    }
}
