//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! optional TOML file
//!     → loader.rs (parse & deserialize)
//!     → environment overlay (MLFLOW_TRACKING_SERVER_URL, KEYCLOAK_UMA_URL, ...)
//!     → normalization (trailing '/' stripped from base URLs)
//!     → validation.rs (semantic checks)
//!     → GatewayConfig (validated, immutable)
//!     → shared via Arc to the request handler
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded; changes require a restart
//! - All fields have defaults to allow minimal configs
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, ConfigError, Environment};
pub use schema::GatewayConfig;
pub use schema::ListenerConfig;
pub use schema::LogFormat;
pub use schema::ObservabilityConfig;
pub use schema::TimeoutConfig;
pub use schema::UpstreamConfig;
