//! Forwarding of authorized requests to the MLflow tracking server.
//!
//! # Data Flow
//! ```text
//! InboundRequest (already authorized)
//!     → forwarder.rs (target URL, method, body, Content-Type/User-Agent)
//!     → tracking server
//!     → BackendResponse (status, headers, fully buffered body)
//!     → http/response.rs relays it to the caller
//! ```

pub mod forwarder;

pub use forwarder::{BackendResponse, Forwarder};
