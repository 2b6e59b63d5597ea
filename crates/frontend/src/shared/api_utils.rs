//! HTTP plumbing shared by every resource gateway.
//!
//! All backend traffic is JSON over REST. Helpers here keep the per-resource
//! `api.rs` modules down to one short function per endpoint and give failures
//! a uniform shape: the JSON error body's `message` when the server sent one,
//! otherwise `HTTP <status>`.

use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;

/// Base URL of the REST backend, derived from the current window location.
///
/// The backend listens on port 3000 next to wherever the frontend is served:
/// "http://localhost:3000", "https://hr.example.vn:3000".
pub fn api_base() -> String {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}:3000", protocol, hostname)
}

pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}

/// Pick the user-facing message out of an error body.
///
/// The backend answers failures with `{"message": "..."}`; anything else
/// (HTML proxy pages, empty bodies) degrades to a plain status line.
pub fn extract_message(body: &str, status: u16) -> String {
    if let Ok(value) = serde_json::from_str::<serde_json::Value>(body) {
        if let Some(message) = value.get("message").and_then(|m| m.as_str()) {
            let message = message.trim();
            if !message.is_empty() {
                return message.to_string();
            }
        }
    }
    format!("HTTP {}", status)
}

async fn error_from(response: Response) -> String {
    let status = response.status();
    match response.text().await {
        Ok(body) => extract_message(&body, status),
        Err(_) => format!("HTTP {}", status),
    }
}

pub async fn get_json<T: DeserializeOwned>(url: &str) -> Result<T, String> {
    let response = Request::get(url)
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(error_from(response).await);
    }

    response
        .json::<T>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

pub async fn post_json<B: Serialize, T: DeserializeOwned>(url: &str, body: &B) -> Result<T, String> {
    let response = Request::post(url)
        .json(body)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(error_from(response).await);
    }

    response
        .json::<T>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

pub async fn put_json<B: Serialize, T: DeserializeOwned>(url: &str, body: &B) -> Result<T, String> {
    let response = Request::put(url)
        .json(body)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(error_from(response).await);
    }

    response
        .json::<T>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

pub async fn patch_json<B: Serialize, T: DeserializeOwned>(
    url: &str,
    body: &B,
) -> Result<T, String> {
    let response = Request::patch(url)
        .json(body)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(error_from(response).await);
    }

    response
        .json::<T>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

/// DELETE; the backend answers 204 or an empty body on success.
pub async fn del_json(url: &str) -> Result<(), String> {
    let response = Request::delete(url)
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(error_from(response).await);
    }

    Ok(())
}

/// POST with a JSON body whose response body is not interesting.
/// Tolerates 204 replies that `post_json` would fail to parse.
pub async fn post_json_discard<B: Serialize>(url: &str, body: &B) -> Result<(), String> {
    let response = Request::post(url)
        .json(body)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(error_from(response).await);
    }

    Ok(())
}

/// PUT counterpart of [`post_json_discard`].
pub async fn put_json_discard<B: Serialize>(url: &str, body: &B) -> Result<(), String> {
    let response = Request::put(url)
        .json(body)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(error_from(response).await);
    }

    Ok(())
}

/// Body-less POST for transition endpoints (check-in, reset-password).
pub async fn post_empty(url: &str) -> Result<(), String> {
    let response = Request::post(url)
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(error_from(response).await);
    }

    Ok(())
}

/// Body-less PUT for transition endpoints (approve, reject).
pub async fn put_empty(url: &str) -> Result<(), String> {
    let response = Request::put(url)
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(error_from(response).await);
    }

    Ok(())
}

/// POST that downloads a binary document (contract export).
pub async fn post_binary(url: &str) -> Result<Vec<u8>, String> {
    let response = Request::post(url)
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(error_from(response).await);
    }

    response
        .binary()
        .await
        .map_err(|e| format!("Failed to read response body: {}", e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_field_wins_over_status() {
        assert_eq!(
            extract_message(r#"{"message": "Nhân viên không tồn tại"}"#, 404),
            "Nhân viên không tồn tại"
        );
    }

    #[test]
    fn non_json_and_blank_messages_fall_back_to_status() {
        assert_eq!(extract_message("<html>Bad Gateway</html>", 502), "HTTP 502");
        assert_eq!(extract_message(r#"{"message": "  "}"#, 500), "HTTP 500");
        assert_eq!(extract_message(r#"{"error": "nope"}"#, 400), "HTTP 400");
        assert_eq!(extract_message("", 503), "HTTP 503");
    }
}
