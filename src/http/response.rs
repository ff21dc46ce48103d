//! Terminal responses.
//!
//! # Responsibilities
//! - Fixed rejection for a missing credential (400)
//! - Denial carrying the full decision object (403)
//! - Relay of the tracking server reply (status, headers, body)
//!
//! # Design Decisions
//! - Backend headers are copied as-is, repeated values included
//! - Connection framing headers are left to the HTTP server; the body is
//!   already fully buffered so chunked framing from the backend no longer
//!   applies

use axum::body::Body;
use axum::http::{header, HeaderName, HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};

use crate::authz::Decision;
use crate::proxy::BackendResponse;

pub const MISSING_AUTHORIZATION: &str = "Missing authorization header.";

/// Headers owned by the connection, not by the relayed message.
const FRAMING_HEADERS: [&str; 3] = ["transfer-encoding", "connection", "keep-alive"];

pub fn missing_authorization() -> Response {
    (StatusCode::BAD_REQUEST, MISSING_AUTHORIZATION).into_response()
}

pub fn denied(decision: &Decision) -> Response {
    (
        StatusCode::FORBIDDEN,
        [(header::CONTENT_TYPE, HeaderValue::from_static("application/json"))],
        decision.to_json(),
    )
        .into_response()
}

fn is_framing(name: &HeaderName) -> bool {
    FRAMING_HEADERS.contains(&name.as_str())
}

impl IntoResponse for BackendResponse {
    fn into_response(self) -> Response {
        let mut response = Response::new(Body::from(self.body));
        *response.status_mut() = self.status;

        let headers = response.headers_mut();
        for (name, value) in self.headers.iter() {
            if is_framing(name) {
                continue;
            }
            headers.append(name.clone(), value.clone());
        }
        response
    }
}
