//! Single-character trimming.
//!
//! Unlike `trim_start_matches`, these remove at most one occurrence, so
//! `"//a"` keeps one slash.

/// Remove one leading `ch` from `s`, if present.
pub fn lstrip(s: &str, ch: char) -> &str {
    s.strip_prefix(ch).unwrap_or(s)
}

/// Remove one trailing `ch` from `s`, if present.
pub fn rstrip(s: &str, ch: char) -> &str {
    s.strip_suffix(ch).unwrap_or(s)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lstrip_single_char() {
        assert_eq!(lstrip("/experiments/list", '/'), "experiments/list");
        assert_eq!(lstrip("experiments", '/'), "experiments");
        assert_eq!(lstrip("//double", '/'), "/double");
        assert_eq!(lstrip("/", '/'), "");
        assert_eq!(lstrip("", '/'), "");
    }

    #[test]
    fn test_rstrip_single_char() {
        assert_eq!(rstrip("http://mlflow:5000/", '/'), "http://mlflow:5000");
        assert_eq!(rstrip("http://mlflow:5000", '/'), "http://mlflow:5000");
        assert_eq!(rstrip("http://mlflow:5000//", '/'), "http://mlflow:5000/");
        assert_eq!(rstrip("", '/'), "");
    }
}
