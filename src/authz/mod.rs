//! Authorization against the Keycloak UMA policy endpoint.
//!
//! # Data Flow
//! ```text
//! inbound Authorization header + request path
//!     → client.rs (UMA ticket grant, response_mode=decision)
//!     → decision.rs (JSON body kept whole, `result` inspected)
//!     → gateway handler branches on Decision::is_allowed
//! ```
//!
//! # Design Decisions
//! - One policy call per request; decisions are never cached
//! - The whole decision object is kept so a denial can echo it back

pub mod client;
pub mod decision;

pub use client::{PolicyClient, POLICY_USER_AGENT, UMA_TICKET_GRANT};
pub use decision::Decision;
