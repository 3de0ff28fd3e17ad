//! Authenticated HTTP layer.
//!
//! Every backend call goes through here: the session token is attached as a
//! Bearer header on every request, server error messages are extracted in
//! one place, and a 401 forces a logout instead of leaving individual
//! screens to guess why their request failed.

use gloo_net::http::{Request, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::shared::api_utils::api_url;
use crate::system::auth::storage;
use contracts::api::ApiResponse;

fn authorized(builder: RequestBuilder) -> RequestBuilder {
    match storage::get_token() {
        Some(token) => builder.header("Authorization", &format!("Bearer {}", token)),
        None => builder,
    }
}

/// Pull a user-presentable message out of a failed response.
///
/// Tries the backend's `message` field first, falls back to the HTTP status.
async fn error_message(response: Response) -> String {
    let status = response.status();
    if let Ok(text) = response.text().await {
        if let Ok(value) = serde_json::from_str::<serde_json::Value>(&text) {
            if let Some(message) = value.get("message").and_then(|m| m.as_str()) {
                if !message.is_empty() {
                    return message.to_string();
                }
            }
        }
    }
    format!("Request failed (HTTP {})", status)
}

/// Shared response gate: forced logout on 401, message extraction otherwise.
async fn check(response: Response) -> Result<Response, String> {
    if response.status() == 401 {
        storage::clear_session();
        if let Some(window) = web_sys::window() {
            let _ = window.location().set_href("/");
        }
        return Err("Session expired. Please sign in again.".to_string());
    }
    if !response.ok() {
        return Err(error_message(response).await);
    }
    Ok(response)
}

async fn parse<T: DeserializeOwned>(response: Response) -> Result<T, String> {
    response
        .json::<T>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

/// GET an endpoint that wraps its payload in the standard envelope,
/// returning the inner `data`.
pub async fn get_data<T: DeserializeOwned + Default>(path: &str) -> Result<T, String> {
    let response = authorized(Request::get(&api_url(path)))
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;
    let response = check(response).await?;
    let envelope: ApiResponse<T> = parse(response).await?;
    if !envelope.success {
        return Err(envelope
            .message
            .unwrap_or_else(|| "Request failed".to_string()));
    }
    Ok(envelope.data)
}

/// GET an endpoint that returns its payload bare, without the envelope.
pub async fn get_plain<T: DeserializeOwned>(path: &str) -> Result<T, String> {
    let response = authorized(Request::get(&api_url(path)))
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;
    let response = check(response).await?;
    parse(response).await
}

pub async fn post_json<B: Serialize>(path: &str, body: &B) -> Result<(), String> {
    let response = authorized(Request::post(&api_url(path)))
        .json(body)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;
    check(response).await.map(|_| ())
}

pub async fn put_json<B: Serialize>(path: &str, body: &B) -> Result<(), String> {
    let response = authorized(Request::put(&api_url(path)))
        .json(body)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;
    check(response).await.map(|_| ())
}

pub async fn delete(path: &str) -> Result<(), String> {
    let response = authorized(Request::delete(&api_url(path)))
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;
    check(response).await.map(|_| ())
}

/// DELETE with a JSON body; used by the bulk-delete and parent+child
/// endpoints that identify their targets in the request body.
pub async fn delete_json<B: Serialize>(path: &str, body: &B) -> Result<(), String> {
    let response = authorized(Request::delete(&api_url(path)))
        .json(body)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;
    check(response).await.map(|_| ())
}

/// POST `multipart/form-data`; used whenever a file field is present.
/// The browser sets the content type (with boundary) itself.
pub async fn post_form(path: &str, form: web_sys::FormData) -> Result<(), String> {
    let response = authorized(Request::post(&api_url(path)))
        .body(form)
        .map_err(|e| format!("Failed to build request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;
    check(response).await.map(|_| ())
}

pub async fn put_form(path: &str, form: web_sys::FormData) -> Result<(), String> {
    let response = authorized(Request::put(&api_url(path)))
        .body(form)
        .map_err(|e| format!("Failed to build request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;
    check(response).await.map(|_| ())
}
