//! HTTP access to the AMS backend.
//!
//! [`HttpClient`] owns the transport and the interceptor pipeline;
//! [`AmsClient`] is the façade with one method per backend endpoint. Façade
//! methods only choose the verb, build the path and body, and return the
//! client's result untouched.

use std::borrow::Cow;

use anyhow::Result;

use crate::config::ClientConfig;
use crate::session::SessionStore;

mod http_client;
mod interceptors;
mod response;

pub use self::http_client::{HttpClient, RequestBody, RequestConfig};
pub use self::interceptors::{
    BearerToken, OutgoingRequest, RequestInterceptor, ResponseInterceptor, SessionExpiry,
};
pub use self::response::{ApiError, ApiResponse, ApiResult, ResponseBody};

mod assets;
mod audits;
mod auth;
mod borrowings;
mod categories;
mod employees;
mod service_requests;

#[derive(Clone)]
pub struct AmsClient {
    http: HttpClient,
}

impl AmsClient {
    pub fn new(http: HttpClient) -> Self {
        Self { http }
    }

    pub fn from_config(config: &ClientConfig, session: SessionStore) -> Result<Self> {
        Ok(Self::new(HttpClient::new(config, session)?))
    }

    pub fn http(&self) -> &HttpClient {
        &self.http
    }
}

/// Percent-encodes a caller-supplied path segment.
fn seg(raw: &str) -> Cow<'_, str> {
    urlencoding::encode(raw)
}

#[cfg(test)]
#[path = "tests/remote/paths_tests.rs"]
mod tests;
