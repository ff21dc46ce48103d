//! The gateway request handler.

use std::time::Instant;

use axum::body::Bytes;
use axum::extract::rejection::BytesRejection;
use axum::extract::State;
use axum::http::{HeaderMap, HeaderValue, Method, Uri};
use axum::response::{IntoResponse, Response};

use crate::gateway::error::GatewayError;
use crate::gateway::state::AppState;
use crate::http::request::{body_error, request_id, InboundRequest};
use crate::http::response;

/// Authorize the request against the policy service, then forward it.
pub async fn authorize_and_forward(
    State(state): State<AppState>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: Result<Bytes, BytesRejection>,
) -> Response {
    let start_time = Instant::now();
    let request_id = request_id(&headers).to_string();

    let Some(credential) = headers.get(axum::http::header::AUTHORIZATION).cloned() else {
        tracing::info!(request_id = %request_id, method = %method, path = %uri.path(), "Rejected: missing authorization header");
        return response::missing_authorization();
    };

    let body = match body {
        Ok(body) => body,
        Err(rejection) => {
            let err = body_error(rejection, state.config.listener.max_body_bytes);
            tracing::warn!(request_id = %request_id, error = %err, "Failed to buffer request body");
            return err.into_response();
        }
    };

    let request = match InboundRequest::new(method, &uri, headers, body) {
        Ok(request) => request,
        Err(e) => {
            let err = GatewayError::from(e);
            tracing::warn!(request_id = %request_id, path = %uri.path(), error = %err, "Rejected request path");
            return err.into_response();
        }
    };

    match handle(&state, &request, &credential).await {
        Ok(response) => {
            tracing::info!(
                request_id = %request_id,
                method = %request.method,
                path = %request.path,
                status = response.status().as_u16(),
                elapsed_ms = start_time.elapsed().as_millis() as u64,
                "Request completed"
            );
            response
        }
        Err(err) => {
            tracing::error!(
                request_id = %request_id,
                method = %request.method,
                path = %request.path,
                error = %err,
                elapsed_ms = start_time.elapsed().as_millis() as u64,
                "Request failed"
            );
            err.into_response()
        }
    }
}

async fn handle(
    state: &AppState,
    request: &InboundRequest,
    credential: &HeaderValue,
) -> Result<Response, GatewayError> {
    let decision = state.policy.decide(credential, &request.path).await?;

    if !decision.is_allowed() {
        tracing::info!(path = %request.path, "Denied by policy");
        return Ok(response::denied(&decision));
    }

    let reply = state.forwarder.forward(request).await?;
    Ok(reply.into_response())
}
