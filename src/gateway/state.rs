//! Shared, read-only handler state.

use std::sync::Arc;
use std::time::Duration;

use url::Url;

use crate::authz::PolicyClient;
use crate::config::{GatewayConfig, UpstreamConfig};
use crate::proxy::Forwarder;

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<GatewayConfig>,
    pub policy: PolicyClient,
    pub forwarder: Forwarder,
}

/// Error building the handler state.
#[derive(Debug, thiserror::Error)]
pub enum StateError {
    #[error("failed to build upstream HTTP client: {0}")]
    Client(#[from] reqwest::Error),

    #[error("invalid policy service URL: {0}")]
    PolicyUrl(#[from] url::ParseError),
}

impl AppState {
    /// Build the upstream clients from a validated configuration.
    pub fn from_config(config: Arc<GatewayConfig>) -> Result<Self, StateError> {
        let http = upstream_client(&config)?;
        let uma_url = Url::parse(&config.upstream.uma_url)?;

        if accept_invalid_certs(&config.upstream) {
            tracing::warn!("Upstream TLS certificate verification is disabled");
        }

        Ok(Self {
            policy: PolicyClient::new(http.clone(), uma_url, config.upstream.client_id.clone()),
            forwarder: Forwarder::new(http, config.upstream.tracking_server_url.clone()),
            config,
        })
    }
}

/// One pooled client for both upstreams.
///
/// Redirects are relayed to the caller instead of followed, and bodies are
/// never decompressed, so backend bytes pass through untouched.
fn upstream_client(config: &GatewayConfig) -> Result<reqwest::Client, reqwest::Error> {
    reqwest::Client::builder()
        .danger_accept_invalid_certs(accept_invalid_certs(&config.upstream))
        .connect_timeout(Duration::from_secs(config.timeouts.connect_secs))
        .timeout(Duration::from_secs(config.timeouts.upstream_secs))
        .redirect(reqwest::redirect::Policy::none())
        .build()
}

/// Certificate checks are skipped unless `verify_tls` is set.
fn accept_invalid_certs(upstream: &UpstreamConfig) -> bool {
    !upstream.verify_tls
}
