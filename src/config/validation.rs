//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Check that every pattern token can root a path comparison
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: MatcherConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system; a failed validation
//!   means no matcher is constructed at all

use crate::config::schema::MatcherConfig;

/// A single semantic configuration error.
#[derive(Debug, PartialEq, Eq)]
pub enum ValidationError {
    /// The pattern line produced an invalid token.
    InvalidPattern { token: String, reason: String },
    /// The pattern line itself failed to parse.
    MalformedPatternLine(String),
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationError::InvalidPattern { token, reason } => {
                write!(f, "invalid pattern '{}': {}", token, reason)
            }
            ValidationError::MalformedPatternLine(reason) => {
                write!(f, "{}", reason)
            }
        }
    }
}

/// Validate a parsed configuration, collecting every error.
pub fn validate_config(config: &MatcherConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    match config.matcher.parse_tokens() {
        Ok(tokens) => {
            for token in &tokens {
                // A template reference may expand to a rooted path at
                // request time, so `{` is an acceptable first character.
                if !token.starts_with('/') && !token.starts_with('{') {
                    errors.push(ValidationError::InvalidPattern {
                        token: token.clone(),
                        reason: "must begin with '/' or a template reference".to_string(),
                    });
                }
            }
        }
        Err(e) => errors.push(ValidationError::MalformedPatternLine(e.to_string())),
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
