//! Per-request variable sink.

use std::collections::HashMap;

/// Write side of the per-request variable store.
///
/// The matcher writes captured placeholder values here; it never reads
/// them back. One sink per request, discarded with the request.
pub trait VariableSink {
    /// Record a variable for later pipeline stages.
    fn set(&mut self, key: String, value: String);
}

/// HashMap-backed per-request variable store.
#[derive(Debug, Default, Clone)]
pub struct RequestVars {
    values: HashMap<String, String>,
}

impl RequestVars {
    pub fn new() -> Self {
        Self::default()
    }

    /// Read a variable set earlier in the request.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterate all stored variables.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl VariableSink for RequestVars {
    fn set(&mut self, key: String, value: String) {
        self.values.insert(key, value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_and_get() {
        let mut vars = RequestVars::new();
        vars.set("http.matchers.pathparams.id".to_string(), "42".to_string());
        assert_eq!(vars.get("http.matchers.pathparams.id"), Some("42"));
        assert_eq!(vars.get("missing"), None);
        assert_eq!(vars.len(), 1);
    }

    #[test]
    fn test_last_write_wins() {
        let mut vars = RequestVars::new();
        vars.set("k".to_string(), "a".to_string());
        vars.set("k".to_string(), "b".to_string());
        assert_eq!(vars.get("k"), Some("b"));
    }
}
