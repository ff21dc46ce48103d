//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, request ID, timeout, body limit)
//!     → request.rs (buffered InboundRequest, credential lookup)
//!     → gateway handler (authorize, then forward)
//!     → response.rs (rejections, relayed backend reply)
//!     → Send to client
//! ```

pub mod request;
pub mod response;
pub mod server;

pub use request::{InboundRequest, X_REQUEST_ID};
pub use server::GatewayServer;
