//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! handler, clients, server
//!     → tracing events with structured fields (request_id, method, path, status)
//!     → logging.rs subscriber (pretty or JSON, EnvFilter)
//!     → stdout
//! ```
//!
//! # Design Decisions
//! - Request ID flows from the request-id layer into every handler event
//! - Credentials and the client secret are never logged

pub mod logging;

pub use logging::init_logging;
