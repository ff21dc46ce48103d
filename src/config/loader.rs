//! Configuration loading from disk and the process environment.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use secrecy::SecretString;
use thiserror::Error;

use crate::config::schema::GatewayConfig;
use crate::config::validation::{validate_config, ValidationError};
use crate::util::rstrip;

pub const ENV_TRACKING_SERVER_URL: &str = "MLFLOW_TRACKING_SERVER_URL";
pub const ENV_UMA_URL: &str = "KEYCLOAK_UMA_URL";
pub const ENV_CLIENT_ID: &str = "OIDC_CLIENT_ID";
pub const ENV_CLIENT_SECRET: &str = "OIDC_CLIENT_SECRET";
pub const ENV_BIND_ADDRESS: &str = "GATEWAY_BIND_ADDRESS";

/// Error type for configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid configuration: {}", join_errors(.0))]
    Validation(Vec<ValidationError>),
}

fn join_errors(errors: &[ValidationError]) -> String {
    errors.iter().map(ToString::to_string).collect::<Vec<_>>().join(", ")
}

/// Snapshot of the environment variables the gateway reads.
///
/// Taken once at startup; tests build one from literal pairs instead of
/// mutating the process environment.
#[derive(Debug, Clone, Default)]
pub struct Environment {
    vars: HashMap<String, String>,
}

impl Environment {
    /// Capture the relevant variables from the running process.
    pub fn from_process() -> Self {
        let vars = [
            ENV_TRACKING_SERVER_URL,
            ENV_UMA_URL,
            ENV_CLIENT_ID,
            ENV_CLIENT_SECRET,
            ENV_BIND_ADDRESS,
        ]
        .iter()
        .filter_map(|key| std::env::var(key).ok().map(|v| (key.to_string(), v)))
        .collect();
        Self { vars }
    }

    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            vars: pairs.into_iter().map(|(k, v)| (k.into(), v.into())).collect(),
        }
    }

    /// Set one variable, replacing the captured value. Command-line
    /// overrides go through here so they are validated like the rest.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.vars.insert(key.into(), value.into());
    }

    fn get(&self, key: &str) -> Option<&str> {
        self.vars.get(key).map(String::as_str)
    }
}

/// Load, overlay, normalize and validate the gateway configuration.
///
/// The file is optional; without one every setting comes from defaults and
/// the environment.
pub fn load_config(path: Option<&Path>, env: &Environment) -> Result<GatewayConfig, ConfigError> {
    let mut config = match path {
        Some(path) => {
            let content = fs::read_to_string(path)?;
            toml::from_str(&content)?
        }
        None => GatewayConfig::default(),
    };

    apply_env(&mut config, env);
    normalize(&mut config);

    validate_config(&config).map_err(ConfigError::Validation)?;

    Ok(config)
}

/// Environment variables win over file values.
pub fn apply_env(config: &mut GatewayConfig, env: &Environment) {
    if let Some(v) = env.get(ENV_TRACKING_SERVER_URL) {
        config.upstream.tracking_server_url = v.to_string();
    }
    if let Some(v) = env.get(ENV_UMA_URL) {
        config.upstream.uma_url = v.to_string();
    }
    if let Some(v) = env.get(ENV_CLIENT_ID) {
        config.upstream.client_id = v.to_string();
    }
    if let Some(v) = env.get(ENV_CLIENT_SECRET) {
        config.upstream.client_secret = Some(SecretString::from(v.to_string()));
    }
    if let Some(v) = env.get(ENV_BIND_ADDRESS) {
        config.listener.bind_address = v.to_string();
    }
}

/// Strip one trailing '/' from both base URLs.
pub fn normalize(config: &mut GatewayConfig) {
    let upstream = &mut config.upstream;
    upstream.tracking_server_url = rstrip(&upstream.tracking_server_url, '/').to_string();
    upstream.uma_url = rstrip(&upstream.uma_url, '/').to_string();
}
