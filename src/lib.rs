//! MLflow authorization gateway library.
//!
//! Every request is checked against a Keycloak UMA policy endpoint and, when
//! allowed, forwarded to the MLflow tracking server with the reply relayed
//! unchanged.

pub mod authz;
pub mod config;
pub mod gateway;
pub mod http;
pub mod lifecycle;
pub mod observability;
pub mod proxy;
pub mod util;

pub use config::GatewayConfig;
pub use http::GatewayServer;
pub use lifecycle::Shutdown;
