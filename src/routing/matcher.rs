//! Path-parameter matching logic.
//!
//! # Responsibilities
//! - Match the request path against configured patterns (case-insensitive)
//! - Capture `:placeholder` segment values into the per-request sink
//! - Resolve embedded template references before each comparison
//!
//! # Design Decisions
//! - Path matching is case-insensitive; patterns are lowercased once at
//!   configuration, the request path on every call
//! - Trailing `.` and ` ` are stripped from the path before matching
//!   (Windows ignores them when accessing files, so `x.php.` could
//!   otherwise slip past a `*.php` rule and be served as a static file)
//! - Exact segment-count matching only; no open-ended patterns
//! - Matching is total: every input yields true or false, never an error
//! - The sink and resolver are explicit parameters, not ambient context

use std::fmt;

use axum::body::Body;
use axum::http::Request;
use tracing::debug;

use crate::routing::pattern::{is_placeholder, param_name, PatternSet};
use crate::vars::{TemplateResolver, VariableSink};

/// Namespace prefix for captured path parameters.
///
/// A placeholder `:name` matched against segment value `v` is recorded as
/// `"http.matchers.pathparams.name" -> v`, so downstream stages can
/// address captures deterministically.
pub const CAPTURE_NAMESPACE: &str = "http.matchers.pathparams";

/// Trait for matching requests against conditions.
///
/// The variable sink and template resolver are per-request collaborators
/// passed in by the caller; implementations never reach into ambient
/// request context for them.
pub trait RequestMatcher: Send + Sync + fmt::Debug {
    /// Returns true if the request matches this condition.
    ///
    /// May write captured values into `vars` as a side effect.
    fn matches(
        &self,
        req: &Request<Body>,
        vars: &mut dyn VariableSink,
        templates: &dyn TemplateResolver,
    ) -> bool;
}

/// Matches the request path against an ordered list of patterns with
/// named placeholder segments, e.g. `/api/v1/resource/:resourceid`.
#[derive(Debug, Clone)]
pub struct PathParamsMatcher {
    patterns: PatternSet,
}

impl PathParamsMatcher {
    /// Create a matcher over an already-normalized pattern set.
    pub fn new(patterns: PatternSet) -> Self {
        Self { patterns }
    }

    /// Create a matcher from raw pattern tokens, normalizing them.
    pub fn from_tokens(tokens: Vec<String>) -> Self {
        Self::new(PatternSet::normalize(tokens))
    }

    pub fn patterns(&self) -> &PatternSet {
        &self.patterns
    }

    /// Match a request path against the configured patterns.
    ///
    /// The path has trailing `.`/` ` stripped and is lowercased, then each
    /// pattern is tried in order: template references are resolved fresh,
    /// segment counts must be equal, literal segments must compare equal,
    /// and placeholder segments capture the corresponding path segment
    /// into `vars` under [`CAPTURE_NAMESPACE`].
    ///
    /// Captures are written incrementally while a pattern is walked. If a
    /// later segment of the same pattern then fails to match, captures
    /// already written are not rolled back; they remain in the sink even
    /// though that pattern did not match. Downstream consumers observing
    /// the sink after a failed match can therefore see captures from
    /// abandoned patterns.
    pub fn match_path(
        &self,
        path: &str,
        vars: &mut dyn VariableSink,
        templates: &dyn TemplateResolver,
    ) -> bool {
        let trimmed = path.trim_end_matches(['.', ' ']);
        let lower_path = trimmed.to_lowercase();

        // A path of `/` or shorter cannot match any pattern: comparison
        // strips the leading `/` on both sides.
        if lower_path.len() <= 1 || !lower_path.starts_with('/') {
            debug!(path = %lower_path, "path too short or not rooted, no match");
            return false;
        }

        let path_segments: Vec<&str> = lower_path[1..].split('/').collect();

        for pattern in self.patterns.iter() {
            // Resolved fresh each call; patterns may be request-dependent
            let resolved = templates.resolve(pattern);
            let pattern_segments: Vec<&str> =
                resolved.get(1..).unwrap_or("").split('/').collect();

            if pattern_segments.len() != path_segments.len() {
                // Exact segment-count matching only
                continue;
            }

            let mut matched = true;
            for (pattern_segment, path_segment) in
                pattern_segments.iter().zip(path_segments.iter())
            {
                if is_placeholder(pattern_segment) {
                    let key =
                        format!("{}.{}", CAPTURE_NAMESPACE, param_name(pattern_segment));
                    vars.set(key, (*path_segment).to_string());
                } else if pattern_segment != path_segment {
                    matched = false;
                    break;
                }
            }

            if matched {
                debug!(pattern = %resolved, path = %lower_path, "path matched");
                return true;
            }
        }

        debug!(path = %lower_path, patterns = self.patterns.len(), "no pattern matched");
        false
    }
}

impl RequestMatcher for PathParamsMatcher {
    fn matches(
        &self,
        req: &Request<Body>,
        vars: &mut dyn VariableSink,
        templates: &dyn TemplateResolver,
    ) -> bool {
        self.match_path(req.uri().path(), vars, templates)
    }
}
