//! Hooks run on every outgoing request and every failed response.

use reqwest::header::{AUTHORIZATION, HeaderMap, HeaderValue};
use reqwest::{Method, StatusCode};

use crate::session::SessionStore;

use super::ApiError;

/// A request as interceptors see it, before it is sent.
#[derive(Debug)]
pub struct OutgoingRequest {
    pub method: Method,
    pub url: String,
    pub headers: HeaderMap,
}

pub trait RequestInterceptor: Send + Sync {
    fn intercept(&self, request: &mut OutgoingRequest);
}

pub trait ResponseInterceptor: Send + Sync {
    /// Runs before the error is returned to the caller; cannot swallow it.
    fn on_error(&self, error: &ApiError);
}

/// Sets `Authorization: Bearer <token>` when a token is stored.
pub struct BearerToken {
    session: SessionStore,
}

impl BearerToken {
    pub fn new(session: SessionStore) -> Self {
        Self { session }
    }
}

impl RequestInterceptor for BearerToken {
    fn intercept(&self, request: &mut OutgoingRequest) {
        let Some(token) = self.session.token() else {
            return;
        };
        match HeaderValue::from_str(&format!("Bearer {}", token)) {
            Ok(value) => {
                request.headers.insert(AUTHORIZATION, value);
            }
            Err(_) => {
                tracing::warn!("stored token is not a valid header value; sending unauthenticated");
            }
        }
    }
}

/// Clears the session (and hard-redirects) on any 401.
pub struct SessionExpiry {
    session: SessionStore,
}

impl SessionExpiry {
    pub fn new(session: SessionStore) -> Self {
        Self { session }
    }
}

impl ResponseInterceptor for SessionExpiry {
    fn on_error(&self, error: &ApiError) {
        if error.status() == Some(StatusCode::UNAUTHORIZED) {
            tracing::warn!("server rejected the session (401); clearing it");
            self.session.clear();
        }
    }
}
