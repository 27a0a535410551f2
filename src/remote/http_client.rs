use std::sync::Arc;

use anyhow::{Context, Result};
use reqwest::Method;
use reqwest::header::{CONTENT_TYPE, HeaderMap, HeaderName, HeaderValue};

use crate::config::ClientConfig;
use crate::session::SessionStore;

use super::interceptors::{
    BearerToken, OutgoingRequest, RequestInterceptor, ResponseInterceptor, SessionExpiry,
};
use super::{ApiError, ApiResponse, ApiResult};

/// Per-call extras: additional headers and query parameters.
#[derive(Clone, Debug, Default)]
pub struct RequestConfig {
    pub headers: Vec<(String, String)>,
    pub query: Vec<(String, String)>,
}

impl RequestConfig {
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    pub fn query(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.push((name.into(), value.into()));
        self
    }
}

pub enum RequestBody {
    None,
    Json(serde_json::Value),
    Multipart(reqwest::blocking::multipart::Form),
}

impl RequestBody {
    pub fn json<P: serde::Serialize + ?Sized>(payload: &P) -> Result<Self, ApiError> {
        serde_json::to_value(payload)
            .map(RequestBody::Json)
            .map_err(|e| ApiError::Encode(e.to_string()))
    }
}

/// The one configured HTTP client every façade call goes through.
#[derive(Clone)]
pub struct HttpClient {
    base_url: String,
    client: reqwest::blocking::Client,
    request_interceptors: Vec<Arc<dyn RequestInterceptor>>,
    response_interceptors: Vec<Arc<dyn ResponseInterceptor>>,
}

impl HttpClient {
    /// Client with the bearer-token and session-expiry interceptors installed.
    pub fn new(config: &ClientConfig, session: SessionStore) -> Result<Self> {
        Ok(Self::bare(&config.base_url)?
            .with_request_interceptor(Arc::new(BearerToken::new(session.clone())))
            .with_response_interceptor(Arc::new(SessionExpiry::new(session))))
    }

    /// Client with no interceptors.
    pub fn bare(base_url: &str) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        let client = reqwest::blocking::Client::builder()
            .user_agent(concat!("ams/", env!("CARGO_PKG_VERSION")))
            .default_headers(headers)
            .build()
            .context("build reqwest client")?;
        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
            request_interceptors: Vec::new(),
            response_interceptors: Vec::new(),
        })
    }

    pub fn with_request_interceptor(mut self, interceptor: Arc<dyn RequestInterceptor>) -> Self {
        self.request_interceptors.push(interceptor);
        self
    }

    pub fn with_response_interceptor(mut self, interceptor: Arc<dyn ResponseInterceptor>) -> Self {
        self.response_interceptors.push(interceptor);
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub(crate) fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub fn get_request(&self, path: &str, config: Option<&RequestConfig>) -> ApiResult {
        self.execute(Method::GET, path, RequestBody::None, config)
    }

    pub fn post_request(
        &self,
        path: &str,
        body: RequestBody,
        config: Option<&RequestConfig>,
    ) -> ApiResult {
        self.execute(Method::POST, path, body, config)
    }

    pub fn put_request(
        &self,
        path: &str,
        body: RequestBody,
        config: Option<&RequestConfig>,
    ) -> ApiResult {
        self.execute(Method::PUT, path, body, config)
    }

    pub fn delete_request(&self, path: &str, config: Option<&RequestConfig>) -> ApiResult {
        self.execute(Method::DELETE, path, RequestBody::None, config)
    }

    fn execute(
        &self,
        method: Method,
        path: &str,
        body: RequestBody,
        config: Option<&RequestConfig>,
    ) -> ApiResult {
        let mut outgoing = OutgoingRequest {
            method,
            url: self.url(path),
            headers: HeaderMap::new(),
        };
        if let Some(cfg) = config {
            for (name, value) in &cfg.headers {
                match (
                    HeaderName::from_bytes(name.as_bytes()),
                    HeaderValue::from_str(value),
                ) {
                    (Ok(name), Ok(value)) => {
                        outgoing.headers.insert(name, value);
                    }
                    _ => tracing::warn!(header = %name, "skipping invalid request header"),
                }
            }
        }
        for interceptor in &self.request_interceptors {
            interceptor.intercept(&mut outgoing);
        }

        tracing::debug!(method = %outgoing.method, url = %outgoing.url, "sending request");
        let mut req = self
            .client
            .request(outgoing.method.clone(), &outgoing.url)
            .headers(outgoing.headers);
        if let Some(cfg) = config
            && !cfg.query.is_empty()
        {
            req = req.query(&cfg.query);
        }
        req = match body {
            RequestBody::None => req,
            RequestBody::Json(value) => req.json(&value),
            RequestBody::Multipart(form) => req.multipart(form),
        };

        let result = match req.send() {
            Ok(resp) => ApiResponse::read(resp).and_then(|response| {
                if response.status.is_success() {
                    Ok(response)
                } else {
                    Err(ApiError::Status {
                        response: Box::new(response),
                    })
                }
            }),
            Err(err) => Err(ApiError::transport(err)),
        };

        if let Err(err) = &result {
            tracing::debug!(method = %outgoing.method, url = %outgoing.url, error = %err, "request failed");
            for interceptor in &self.response_interceptors {
                interceptor.on_error(err);
            }
        }
        result
    }
}
