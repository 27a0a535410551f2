//! Turning a failed call into something a person can read.

use reqwest::StatusCode;

use crate::remote::ApiError;

pub const DEFAULT_FALLBACK: &str = "An unexpected error occurred";

/// A non-empty string, or the text of any other non-null, non-false value.
fn present(value: &serde_json::Value) -> Option<String> {
    match value {
        serde_json::Value::Null | serde_json::Value::Bool(false) => None,
        serde_json::Value::String(s) if s.is_empty() => None,
        serde_json::Value::String(s) => Some(s.clone()),
        serde_json::Value::Number(n) if n.as_f64() == Some(0.0) => None,
        other => Some(other.to_string()),
    }
}

/// First match, in order: string body, `message`, one of
/// `error`/`detail`/`description`, the transport message, `fallback`.
pub fn extract_message(error: &ApiError, fallback: &str) -> String {
    if let Some(response) = error.response() {
        if let Some(text) = response.body.as_text()
            && !text.is_empty()
        {
            return text.to_string();
        }
        if let Some(body) = response.body.as_object() {
            if let Some(msg) = body.get("message").and_then(present) {
                return msg;
            }
            for key in ["error", "detail", "description"] {
                if let Some(msg) = body.get(key).and_then(present) {
                    return msg;
                }
            }
        }
    }

    let transport = error.to_string();
    if transport.is_empty() {
        fallback.to_string()
    } else {
        transport
    }
}

pub fn is_not_found(error: &ApiError) -> bool {
    error.status() == Some(StatusCode::NOT_FOUND)
}

pub fn is_bad_request(error: &ApiError) -> bool {
    error.status() == Some(StatusCode::BAD_REQUEST)
}

pub fn is_unauthorized(error: &ApiError) -> bool {
    error.status() == Some(StatusCode::UNAUTHORIZED)
}

pub fn is_server_error(error: &ApiError) -> bool {
    error.status().is_some_and(|s| s.as_u16() >= 500)
}

/// Coarse category of a failed call.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    NotFound,
    BadRequest,
    Unauthorized,
    ServerError,
    Other,
}

pub fn kind(error: &ApiError) -> ErrorKind {
    if is_not_found(error) {
        ErrorKind::NotFound
    } else if is_bad_request(error) {
        ErrorKind::BadRequest
    } else if is_unauthorized(error) {
        ErrorKind::Unauthorized
    } else if is_server_error(error) {
        ErrorKind::ServerError
    } else {
        ErrorKind::Other
    }
}

#[cfg(test)]
#[path = "tests/classify_tests.rs"]
mod tests;
