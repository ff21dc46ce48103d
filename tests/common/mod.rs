//! Shared utilities for integration testing.

#![allow(dead_code)]

use std::net::SocketAddr;
use std::time::Duration;

use mlflow_gateway::config::{load_config, Environment};
use mlflow_gateway::{GatewayConfig, GatewayServer, Shutdown};
use tokio::net::TcpListener;
use wiremock::MockServer;

/// Path of the UMA token endpoint on the mock policy service.
pub const TOKEN_PATH: &str = "/realms/ml/protocol/openid-connect/token";

/// Gateway configuration pointing at the two mock upstreams.
///
/// Goes through the real loader so trailing slashes get stripped the way
/// they are in production.
pub fn config_for(policy_base: &str, backend_base: &str) -> GatewayConfig {
    let env = Environment::from_pairs([
        ("MLFLOW_TRACKING_SERVER_URL", format!("{}/", backend_base)),
        ("KEYCLOAK_UMA_URL", format!("{}{}/", policy_base, TOKEN_PATH)),
        ("OIDC_CLIENT_ID", "mlflow".to_string()),
        ("OIDC_CLIENT_SECRET", "not-sent".to_string()),
        ("GATEWAY_BIND_ADDRESS", "127.0.0.1:0".to_string()),
    ]);
    let mut config = load_config(None, &env).unwrap();
    config.timeouts.connect_secs = 1;
    config.timeouts.upstream_secs = 2;
    config.timeouts.request_secs = 10;
    config
}

pub fn mock_config(policy: &MockServer, backend: &MockServer) -> GatewayConfig {
    config_for(&policy.uri(), &backend.uri())
}

/// A gateway served on an ephemeral port.
pub struct TestGateway {
    pub addr: SocketAddr,
    shutdown: Shutdown,
}

impl TestGateway {
    pub fn url(&self, path_and_query: &str) -> String {
        format!("http://{}{}", self.addr, path_and_query)
    }
}

impl Drop for TestGateway {
    fn drop(&mut self) {
        self.shutdown.trigger();
    }
}

pub async fn start_gateway(config: GatewayConfig) -> TestGateway {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let shutdown = Shutdown::new();
    let server_shutdown = shutdown.subscribe();
    let server = GatewayServer::new(config).unwrap();

    tokio::spawn(async move {
        let _ = server.run(listener, server_shutdown).await;
    });

    // Listener is already bound; give the accept loop a moment to start.
    tokio::time::sleep(Duration::from_millis(50)).await;

    TestGateway { addr, shutdown }
}

/// Test client that never reuses connections or honors proxy env vars.
pub fn client() -> reqwest::Client {
    reqwest::Client::builder()
        .pool_max_idle_per_host(0)
        .no_proxy()
        .build()
        .unwrap()
}

/// An address nothing is listening on.
pub async fn closed_addr() -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    addr
}
