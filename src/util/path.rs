//! Request path normalization.
//!
//! The policy permission and the backend URL must name the same resource,
//! so dot segments are resolved once, up front. Percent-encoded dots
//! (`%2e`, any case) count as dots, matching how `url::Url` treats them.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PathError {
    #[error("path climbs above the root")]
    AboveRoot,

    #[error("path contains a backslash")]
    Backslash,
}

enum DotSegment {
    Current,
    Parent,
}

fn dot_segment(segment: &str) -> Option<DotSegment> {
    match segment.to_ascii_lowercase().replace("%2e", ".").as_str() {
        "." => Some(DotSegment::Current),
        ".." => Some(DotSegment::Parent),
        _ => None,
    }
}

/// Resolve `.` and `..` segments of an absolute request path.
///
/// Other segments are kept byte for byte, so percent-escapes survive. A
/// trailing dot segment leaves a trailing slash. Backslashes are rejected
/// since URL parsers read them as separators.
pub fn normalize_path(raw: &str) -> Result<String, PathError> {
    if raw.contains('\\') {
        return Err(PathError::Backslash);
    }

    let segments: Vec<&str> = raw.strip_prefix('/').unwrap_or(raw).split('/').collect();
    let last = segments.len() - 1;
    let mut resolved: Vec<&str> = Vec::with_capacity(segments.len());

    for (i, segment) in segments.iter().enumerate() {
        match dot_segment(segment) {
            Some(DotSegment::Current) => {}
            Some(DotSegment::Parent) => {
                if resolved.pop().is_none() {
                    return Err(PathError::AboveRoot);
                }
            }
            None => {
                resolved.push(segment);
                continue;
            }
        }
        if i == last {
            resolved.push("");
        }
    }

    Ok(format!("/{}", resolved.join("/")))
}
