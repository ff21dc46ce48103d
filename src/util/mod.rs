//! Small string helpers shared by the policy client and the forwarder.
//!
//! # Responsibilities
//! - Trim a single leading/trailing character (URL joins)
//! - Encode key/value pairs as `application/x-www-form-urlencoded`
//! - Resolve dot segments so every consumer sees one request path

pub mod form;
pub mod path;
pub mod strings;

pub use form::{encode_pairs, reencode_query};
pub use path::{normalize_path, PathError};
pub use strings::{lstrip, rstrip};
