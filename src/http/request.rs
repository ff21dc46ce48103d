//! Inbound request model.
//!
//! # Responsibilities
//! - Capture method, normalized path, raw query, headers and the buffered body
//!
//! # Design Decisions
//! - The body is buffered once (bounded by the listener limit) and shared
//!   by reference with the forwarder
//! - The raw query is kept; the forwarder re-encodes it
//! - The path is normalized once here; the policy permission and the
//!   backend URL both read `InboundRequest::path`

use axum::body::Bytes;
use axum::extract::rejection::BytesRejection;
use axum::http::{HeaderMap, Method, StatusCode, Uri};

use crate::gateway::error::GatewayError;
use crate::util::{normalize_path, PathError};

/// Header carrying the request id set by the request-id layer.
pub const X_REQUEST_ID: &str = "x-request-id";

/// A fully buffered inbound request.
#[derive(Debug, Clone)]
pub struct InboundRequest {
    pub method: Method,
    pub path: String,
    pub query: Option<String>,
    pub headers: HeaderMap,
    pub body: Bytes,
}

impl InboundRequest {
    /// Fails when the path cannot be normalized (escapes the root, holds a
    /// backslash).
    pub fn new(method: Method, uri: &Uri, headers: HeaderMap, body: Bytes) -> Result<Self, PathError> {
        Ok(Self {
            method,
            path: normalize_path(uri.path())?,
            query: uri.query().map(str::to_string),
            headers,
            body,
        })
    }
}

/// Request id assigned by the request-id layer, or `"unknown"`.
pub fn request_id(headers: &HeaderMap) -> &str {
    headers
        .get(X_REQUEST_ID)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("unknown")
}

/// Map a body extraction failure onto a gateway error.
pub fn body_error(rejection: BytesRejection, limit: usize) -> GatewayError {
    if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
        GatewayError::BodyTooLarge { limit }
    } else {
        GatewayError::BodyRead(rejection.body_text())
    }
}
