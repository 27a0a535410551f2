//! Responses and failures as the façade hands them back to callers.

use reqwest::StatusCode;
use reqwest::header::HeaderMap;

/// A response body, parsed as JSON when it is JSON.
#[derive(Clone, Debug, PartialEq)]
pub enum ResponseBody {
    Empty,
    Json(serde_json::Value),
    Text(String),
}

impl ResponseBody {
    pub(crate) fn from_bytes(bytes: &[u8]) -> Self {
        if bytes.iter().all(u8::is_ascii_whitespace) {
            return ResponseBody::Empty;
        }
        match serde_json::from_slice::<serde_json::Value>(bytes) {
            Ok(v) => ResponseBody::Json(v),
            Err(_) => ResponseBody::Text(String::from_utf8_lossy(bytes).into_owned()),
        }
    }

    /// The body when it is itself a string (plain text or a JSON string).
    pub fn as_text(&self) -> Option<&str> {
        match self {
            ResponseBody::Text(s) => Some(s),
            ResponseBody::Json(serde_json::Value::String(s)) => Some(s),
            _ => None,
        }
    }

    /// The body when it is a JSON object.
    pub fn as_object(&self) -> Option<&serde_json::Map<String, serde_json::Value>> {
        match self {
            ResponseBody::Json(serde_json::Value::Object(map)) => Some(map),
            _ => None,
        }
    }
}

#[derive(Clone, Debug)]
pub struct ApiResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: ResponseBody,
}

impl ApiResponse {
    pub(crate) fn read(resp: reqwest::blocking::Response) -> Result<Self, ApiError> {
        let status = resp.status();
        let headers = resp.headers().clone();
        let body = match resp.bytes() {
            Ok(bytes) => ResponseBody::from_bytes(&bytes),
            // A failed status still has to reach the response interceptors.
            Err(err) if !status.is_success() => {
                tracing::debug!(status = status.as_u16(), error = %err, "error body unreadable");
                ResponseBody::Empty
            }
            Err(err) => return Err(ApiError::transport(err)),
        };
        Ok(Self {
            status,
            headers,
            body,
        })
    }

    /// The body as a JSON value; text becomes a JSON string, empty becomes null.
    pub fn data(&self) -> serde_json::Value {
        match &self.body {
            ResponseBody::Empty => serde_json::Value::Null,
            ResponseBody::Json(v) => v.clone(),
            ResponseBody::Text(s) => serde_json::Value::String(s.clone()),
        }
    }

    pub fn json<T: serde::de::DeserializeOwned>(&self) -> Result<T, ApiError> {
        serde_json::from_value(self.data()).map_err(|e| ApiError::Decode(e.to_string()))
    }

    /// Number of items when the body is a JSON array, else zero.
    pub fn len(&self) -> usize {
        match &self.body {
            ResponseBody::Json(serde_json::Value::Array(items)) => items.len(),
            _ => 0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The server answered with a non-2xx status.
    #[error("request failed with status code {}", .response.status.as_u16())]
    Status { response: Box<ApiResponse> },

    /// No usable response: connection refused, DNS, TLS, body read.
    #[error("{message}")]
    Transport {
        message: String,
        #[source]
        source: Option<reqwest::Error>,
    },

    #[error("encode request: {0}")]
    Encode(String),

    #[error("decode response: {0}")]
    Decode(String),
}

impl ApiError {
    pub(crate) fn transport(err: reqwest::Error) -> Self {
        ApiError::Transport {
            message: err.to_string(),
            source: Some(err),
        }
    }

    pub fn response(&self) -> Option<&ApiResponse> {
        match self {
            ApiError::Status { response } => Some(response),
            _ => None,
        }
    }

    pub fn status(&self) -> Option<StatusCode> {
        self.response().map(|r| r.status)
    }
}

pub type ApiResult = Result<ApiResponse, ApiError>;
