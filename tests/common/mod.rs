//! Shared utilities for integration tests.

use std::path::PathBuf;

use pathparams_matcher::config::loader::load_config;
use pathparams_matcher::{MatcherConfig, PathParamsMatcher};

/// Write a config file to a unique temp path and return the path.
///
/// Files accumulate in the OS temp dir across runs; fine for tests.
pub fn write_config(name: &str, contents: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!(
        "pathparams-matcher-test-{}-{}.toml",
        std::process::id(),
        name
    ));
    std::fs::write(&path, contents).unwrap();
    path
}

/// Load a config from a literal TOML string via the on-disk loader.
pub fn load_from_str(name: &str, contents: &str) -> MatcherConfig {
    let path = write_config(name, contents);
    load_config(&path).unwrap()
}

/// Build a matcher straight from a pattern token line.
#[allow(dead_code)]
pub fn matcher_from_line(name: &str, line: &str) -> PathParamsMatcher {
    let config = load_from_str(
        name,
        &format!("[matcher]\npatterns = \"{}\"\n", line),
    );
    PathParamsMatcher::from_tokens(config.matcher.parse_tokens().unwrap())
}
