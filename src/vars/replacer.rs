//! Template reference expansion for pattern strings.

use std::collections::HashMap;

/// Expands embedded variable references inside a pattern string.
///
/// Called fresh on every match attempt; patterns may be request-dependent
/// through templating, so resolved forms are never cached. Resolution
/// never fails from the matcher's perspective.
pub trait TemplateResolver {
    /// Expand all `{key}` references in `input` using request-scoped
    /// context. Unresolved references expand to the empty string.
    fn resolve(&self, input: &str) -> String;
}

/// Request-scoped `{key}` replacer.
///
/// Text without references passes through unchanged; an unterminated
/// `{` is left verbatim.
#[derive(Debug, Default, Clone)]
pub struct Replacer {
    values: HashMap<String, String>,
}

impl Replacer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a value available for expansion.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.values.insert(key.into(), value.into());
    }
}

impl TemplateResolver for Replacer {
    fn resolve(&self, input: &str) -> String {
        let mut out = String::with_capacity(input.len());
        let mut rest = input;
        while let Some(open) = rest.find('{') {
            out.push_str(&rest[..open]);
            match rest[open + 1..].find('}') {
                Some(close) => {
                    let key = &rest[open + 1..open + 1 + close];
                    if let Some(value) = self.values.get(key) {
                        out.push_str(value);
                    }
                    rest = &rest[open + close + 2..];
                }
                None => {
                    out.push_str(&rest[open..]);
                    rest = "";
                }
            }
        }
        out.push_str(rest);
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_text_passes_through() {
        let repl = Replacer::new();
        assert_eq!(repl.resolve("/api/v1/resource/:id"), "/api/v1/resource/:id");
    }

    #[test]
    fn test_known_reference_expanded() {
        let mut repl = Replacer::new();
        repl.set("vars.tenant", "acme");
        assert_eq!(repl.resolve("/{vars.tenant}/orders/:id"), "/acme/orders/:id");
    }

    #[test]
    fn test_unknown_reference_becomes_empty() {
        let repl = Replacer::new();
        assert_eq!(repl.resolve("/{vars.tenant}/orders"), "//orders");
    }

    #[test]
    fn test_unterminated_brace_left_verbatim() {
        let mut repl = Replacer::new();
        repl.set("a", "x");
        assert_eq!(repl.resolve("/{a}/tail{open"), "/x/tail{open");
    }

    #[test]
    fn test_multiple_references() {
        let mut repl = Replacer::new();
        repl.set("a", "1");
        repl.set("b", "2");
        assert_eq!(repl.resolve("/{a}/{b}/{c}"), "/1/2/");
    }
}
