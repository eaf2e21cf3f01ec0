//! Pattern normalization.
//!
//! # Responsibilities
//! - Lowercase configured patterns once, at construction time
//! - Preserve pattern order and count exactly (first match wins)
//! - Classify pattern segments (literal vs `:placeholder`)
//!
//! # Design Decisions
//! - Normalization returns a new collection instead of mutating the
//!   caller's list in place
//! - `PatternSet` is immutable after construction; safe to share
//!   read-only across concurrent requests
//! - A segment of exactly `:` is a literal, not a placeholder

/// An ordered, case-normalized set of path patterns.
///
/// Built once at configuration time; patterns are evaluated in order
/// during matching and the first full match wins.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatternSet {
    patterns: Vec<String>,
}

impl PatternSet {
    /// Normalize a raw pattern list into a `PatternSet`.
    ///
    /// Every pattern is lowercased; order and count are preserved.
    /// Idempotent: normalizing an already-normalized list yields an
    /// equal set.
    pub fn normalize(raw: Vec<String>) -> Self {
        Self {
            patterns: raw.iter().map(|p| p.to_lowercase()).collect(),
        }
    }

    /// Iterate patterns in configured order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.patterns.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }
}

/// Returns true if a pattern segment is a placeholder.
///
/// A placeholder has length > 1 and begins with `:`; a bare `:` is a
/// literal segment.
pub fn is_placeholder(segment: &str) -> bool {
    segment.len() > 1 && segment.starts_with(':')
}

/// The parameter name bound by a placeholder segment (text after `:`).
pub fn param_name(segment: &str) -> &str {
    &segment[1..]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_lowercases_and_preserves_order() {
        let set = PatternSet::normalize(vec![
            "/API/V1/Resource/:ResourceId".to_string(),
            "/Files/:Name".to_string(),
        ]);
        let patterns: Vec<&str> = set.iter().collect();
        assert_eq!(
            patterns,
            vec!["/api/v1/resource/:resourceid", "/files/:name"]
        );
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_normalize_is_idempotent() {
        let raw = vec!["/Shop/:Item".to_string(), "/a/B/c".to_string()];
        let once = PatternSet::normalize(raw);
        let twice = PatternSet::normalize(once.iter().map(String::from).collect());
        assert_eq!(once, twice);
    }

    #[test]
    fn test_normalize_empty_list() {
        let set = PatternSet::normalize(Vec::new());
        assert!(set.is_empty());
    }

    #[test]
    fn test_placeholder_classification() {
        assert!(is_placeholder(":id"));
        assert!(is_placeholder(":x"));
        assert!(!is_placeholder("users"));
        assert!(!is_placeholder(""));
        // Bare colon is a literal
        assert!(!is_placeholder(":"));
    }

    #[test]
    fn test_param_name() {
        assert_eq!(param_name(":resourceid"), "resourceid");
    }
}
