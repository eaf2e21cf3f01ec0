//! Configuration schema definitions.
//!
//! This module defines the configuration structure for the matcher.
//! All types derive Serde traits for deserialization from config files.

use serde::{Deserialize, Serialize};

/// Root configuration for the path-parameter matcher.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct MatcherConfig {
    /// Pattern matcher settings.
    pub matcher: PathParamsConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

/// Pattern configuration for the path-parameter matcher.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct PathParamsConfig {
    /// Whitespace-separated pattern tokens, evaluated in order
    /// (e.g., `"/api/v1/resource/:resourceid /files/:name"`).
    pub patterns: String,
}

impl PathParamsConfig {
    /// Split the configured pattern line into ordered tokens.
    ///
    /// Tokens are separated by arbitrary whitespace. A block-open token
    /// (`{` standing alone) after the token list is a configuration
    /// error; template references embedded inside a token, such as
    /// `/{vars.tenant}/orders/:id`, are not blocks and pass through.
    pub fn parse_tokens(&self) -> Result<Vec<String>, TokenError> {
        let mut tokens = Vec::new();
        for token in self.patterns.split_whitespace() {
            if token == "{" {
                return Err(TokenError::BlockNotSupported);
            }
            tokens.push(token.to_string());
        }
        Ok(tokens)
    }
}

/// Error raised while splitting the pattern token line.
#[derive(Debug, PartialEq, Eq)]
pub enum TokenError {
    /// A `{` block followed the token list; blocks are not supported.
    BlockNotSupported,
}

impl std::fmt::Display for TokenError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TokenError::BlockNotSupported => {
                write!(f, "malformed path matcher: blocks are not supported")
            }
        }
    }
}

impl std::error::Error for TokenError {}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_tokens_splits_on_whitespace() {
        let config = PathParamsConfig {
            patterns: "/a/:x  /b/:y\t/c".to_string(),
        };
        assert_eq!(
            config.parse_tokens().unwrap(),
            vec!["/a/:x", "/b/:y", "/c"]
        );
    }

    #[test]
    fn test_parse_tokens_empty_line() {
        let config = PathParamsConfig::default();
        assert!(config.parse_tokens().unwrap().is_empty());
    }

    #[test]
    fn test_trailing_block_rejected() {
        let config = PathParamsConfig {
            patterns: "/a/:x {".to_string(),
        };
        assert_eq!(
            config.parse_tokens(),
            Err(TokenError::BlockNotSupported)
        );
    }

    #[test]
    fn test_embedded_template_reference_allowed() {
        let config = PathParamsConfig {
            patterns: "/{vars.tenant}/orders/:id".to_string(),
        };
        assert_eq!(
            config.parse_tokens().unwrap(),
            vec!["/{vars.tenant}/orders/:id"]
        );
    }

    #[test]
    fn test_minimal_toml_deserializes_with_defaults() {
        let config: MatcherConfig = toml::from_str("").unwrap();
        assert!(config.matcher.patterns.is_empty());
        assert_eq!(config.observability.log_level, "info");
    }
}
