//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Check that both upstream base URLs are absolute http(s) URLs
//! - Validate value ranges (timeouts > 0, body limit > 0, bind address)
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: GatewayConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use std::net::SocketAddr;

use thiserror::Error;
use url::Url;

use crate::config::schema::GatewayConfig;

/// A single semantic problem with the configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{field} is required")]
    Missing { field: &'static str },

    #[error("{field} is not a valid http(s) URL: {value}")]
    InvalidUrl { field: &'static str, value: String },

    #[error("{field} must be greater than zero")]
    Zero { field: &'static str },

    #[error("listener.bind_address is not a socket address: {0}")]
    InvalidBindAddress(String),
}

pub fn validate_config(config: &GatewayConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    check_url(
        "upstream.tracking_server_url",
        &config.upstream.tracking_server_url,
        &mut errors,
    );
    check_url("upstream.uma_url", &config.upstream.uma_url, &mut errors);

    if config.upstream.client_id.trim().is_empty() {
        errors.push(ValidationError::Missing { field: "upstream.client_id" });
    }

    if config.listener.bind_address.parse::<SocketAddr>().is_err() {
        errors.push(ValidationError::InvalidBindAddress(
            config.listener.bind_address.clone(),
        ));
    }
    if config.listener.max_body_bytes == 0 {
        errors.push(ValidationError::Zero { field: "listener.max_body_bytes" });
    }

    let timeouts = &config.timeouts;
    for (field, value) in [
        ("timeouts.connect_secs", timeouts.connect_secs),
        ("timeouts.upstream_secs", timeouts.upstream_secs),
        ("timeouts.request_secs", timeouts.request_secs),
    ] {
        if value == 0 {
            errors.push(ValidationError::Zero { field });
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn check_url(field: &'static str, value: &str, errors: &mut Vec<ValidationError>) {
    if value.is_empty() {
        errors.push(ValidationError::Missing { field });
        return;
    }
    match Url::parse(value) {
        Ok(url) if matches!(url.scheme(), "http" | "https") && url.has_host() => {}
        _ => errors.push(ValidationError::InvalidUrl {
            field,
            value: value.to_string(),
        }),
    }
}
