//! Policy service client.
//!
//! # Responsibilities
//! - Build the UMA ticket grant for the requested path
//! - Pass the caller's credential through unchanged
//! - Parse the reply into a `Decision`
//!
//! # Design Decisions
//! - The reply is parsed as JSON whatever its status; Keycloak sends its
//!   denials as 403 with a JSON error object, which is a decision too
//! - A non-JSON reply is an error, never a denial

use axum::http::{header, HeaderValue};
use url::Url;

use crate::authz::decision::Decision;
use crate::gateway::error::GatewayError;
use crate::util::encode_pairs;

pub const UMA_TICKET_GRANT: &str = "urn:ietf:params:oauth:grant-type:uma-ticket";
pub const POLICY_USER_AGENT: &str = "nginx-intercept-js";
const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

/// Client for the UMA decision endpoint.
#[derive(Debug, Clone)]
pub struct PolicyClient {
    http: reqwest::Client,
    uma_url: Url,
    audience: String,
}

impl PolicyClient {
    pub fn new(http: reqwest::Client, uma_url: Url, audience: impl Into<String>) -> Self {
        Self {
            http,
            uma_url,
            audience: audience.into(),
        }
    }

    /// Form body of the UMA decision request for `permission`.
    pub fn grant_body(&self, permission: &str) -> String {
        encode_pairs([
            ("grant_type", UMA_TICKET_GRANT),
            ("audience", self.audience.as_str()),
            ("permission_resource_format", "uri"),
            ("permission_resource_matching_uri", "True"),
            ("response_mode", "decision"),
            ("permission", permission),
        ])
    }

    /// Ask the policy service whether `authorization` may access `permission`.
    pub async fn decide(
        &self,
        authorization: &HeaderValue,
        permission: &str,
    ) -> Result<Decision, GatewayError> {
        let response = self
            .http
            .post(self.uma_url.clone())
            .header(header::AUTHORIZATION, authorization.clone())
            .header(header::CONTENT_TYPE, FORM_CONTENT_TYPE)
            .header(header::USER_AGENT, POLICY_USER_AGENT)
            .body(self.grant_body(permission))
            .send()
            .await
            .map_err(GatewayError::from_policy)?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(status = %status, permission = %permission, "Policy service returned non-success status");
        }

        let body = response.bytes().await.map_err(GatewayError::from_policy)?;
        serde_json::from_slice::<Decision>(&body)
            .map_err(|source| GatewayError::MalformedDecision { status, source })
    }
}
