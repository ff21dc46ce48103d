//! Proxy forwarder.
//!
//! # Responsibilities
//! - Rebuild the tracking server URL from the inbound path and query
//! - Forward method, body and exactly the Content-Type/User-Agent headers
//! - Buffer the backend reply for relaying
//!
//! # Design Decisions
//! - The credential is never forwarded on this leg
//! - Query strings are decoded and re-encoded, not passed through
//! - No streaming: both bodies are fully buffered

use axum::body::Bytes;
use axum::http::{header, HeaderMap, StatusCode};
use url::Url;

use crate::gateway::error::GatewayError;
use crate::http::request::InboundRequest;
use crate::util::{lstrip, reencode_query};

/// Inbound headers copied onto the backend request.
const FORWARDED_HEADERS: [header::HeaderName; 2] = [header::CONTENT_TYPE, header::USER_AGENT];

/// Reply from the tracking server, fully read.
#[derive(Debug, Clone)]
pub struct BackendResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Bytes,
}

/// Forwards authorized requests to one tracking server.
#[derive(Debug, Clone)]
pub struct Forwarder {
    http: reqwest::Client,
    base_url: String,
}

impl Forwarder {
    /// `base_url` must not end with '/'; the loader normalizes it.
    pub fn new(http: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self {
            http,
            base_url: base_url.into(),
        }
    }

    /// `<base>/<path without leading '/'>[?re-encoded query]`.
    pub fn target_url(&self, path: &str, query: Option<&str>) -> Result<Url, GatewayError> {
        let mut target = format!("{}/{}", self.base_url, lstrip(path, '/'));
        if let Some(encoded) = query.and_then(reencode_query) {
            target.push('?');
            target.push_str(&encoded);
        }
        Url::parse(&target).map_err(|source| GatewayError::InvalidTarget { url: target, source })
    }

    /// Send `request` to the tracking server and buffer its reply.
    pub async fn forward(&self, request: &InboundRequest) -> Result<BackendResponse, GatewayError> {
        let url = self.target_url(&request.path, request.query.as_deref())?;

        let mut headers = HeaderMap::new();
        for name in FORWARDED_HEADERS {
            if let Some(value) = request.headers.get(&name) {
                headers.insert(name, value.clone());
            }
        }

        tracing::debug!(method = %request.method, url = %url, "Forwarding to tracking server");

        let response = self
            .http
            .request(request.method.clone(), url)
            .headers(headers)
            .body(request.body.clone())
            .send()
            .await
            .map_err(GatewayError::from_backend)?;

        let status = response.status();
        let headers = response.headers().clone();
        let body = response.bytes().await.map_err(GatewayError::from_backend)?;

        Ok(BackendResponse { status, headers, body })
    }
}
