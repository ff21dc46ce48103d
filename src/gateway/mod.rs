//! Authorize-then-forward request handling.
//!
//! # Data Flow
//! ```text
//! inbound request
//!     → handler.rs: Authorization header present?
//!         no  → 400 "Missing authorization header."
//!         yes → authz::PolicyClient::decide
//!             denied  → 403 + decision JSON
//!             allowed → proxy::Forwarder::forward → relayed backend reply
//!     → any upstream failure → error.rs (502 / 504)
//! ```
//!
//! # Design Decisions
//! - Exactly one terminal response per request
//! - The backend is only called after an allow decision

pub mod error;
pub mod handler;
pub mod state;

pub use error::GatewayError;
pub use handler::authorize_and_forward;
pub use state::AppState;
