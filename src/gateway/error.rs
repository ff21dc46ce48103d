//! Gateway error type and its HTTP mapping.
//!
//! Every failure past the credential check ends up here and becomes exactly
//! one plain-text response. Upstream bodies are never echoed.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

use crate::util::PathError;

#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("policy service unreachable: {0}")]
    PolicyUnreachable(#[source] reqwest::Error),

    #[error("policy service timed out")]
    PolicyTimeout,

    #[error("policy service returned a non-JSON body (status {status}): {source}")]
    MalformedDecision {
        status: StatusCode,
        #[source]
        source: serde_json::Error,
    },

    #[error("tracking server unreachable: {0}")]
    BackendUnreachable(#[source] reqwest::Error),

    #[error("tracking server timed out")]
    BackendTimeout,

    #[error("request body exceeds {limit} bytes")]
    BodyTooLarge { limit: usize },

    #[error("failed to read request body: {0}")]
    BodyRead(String),

    #[error("invalid request path: {0}")]
    InvalidPath(#[from] PathError),

    #[error("invalid tracking server URL '{url}': {source}")]
    InvalidTarget {
        url: String,
        #[source]
        source: url::ParseError,
    },
}

impl GatewayError {
    pub(crate) fn from_policy(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            GatewayError::PolicyTimeout
        } else {
            GatewayError::PolicyUnreachable(e)
        }
    }

    pub(crate) fn from_backend(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            GatewayError::BackendTimeout
        } else {
            GatewayError::BackendUnreachable(e)
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            GatewayError::PolicyUnreachable(_)
            | GatewayError::MalformedDecision { .. }
            | GatewayError::BackendUnreachable(_) => StatusCode::BAD_GATEWAY,
            GatewayError::PolicyTimeout | GatewayError::BackendTimeout => StatusCode::GATEWAY_TIMEOUT,
            GatewayError::BodyTooLarge { .. } => StatusCode::PAYLOAD_TOO_LARGE,
            GatewayError::BodyRead(_) | GatewayError::InvalidPath(_) => StatusCode::BAD_REQUEST,
            GatewayError::InvalidTarget { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Short client-facing message; details stay in the logs.
    pub fn public_message(&self) -> &'static str {
        match self {
            GatewayError::PolicyUnreachable(_) => "Authorization service unavailable.",
            GatewayError::PolicyTimeout => "Authorization service timed out.",
            GatewayError::MalformedDecision { .. } => "Invalid authorization service response.",
            GatewayError::BackendUnreachable(_) => "Upstream request failed.",
            GatewayError::BackendTimeout => "Upstream request timed out.",
            GatewayError::BodyTooLarge { .. } => "Request body too large.",
            GatewayError::BodyRead(_) => "Failed to read request body.",
            GatewayError::InvalidPath(_) => "Invalid request path.",
            GatewayError::InvalidTarget { .. } => "Gateway misconfigured.",
        }
    }
}

impl IntoResponse for GatewayError {
    fn into_response(self) -> Response {
        (self.status(), self.public_message()).into_response()
    }
}
