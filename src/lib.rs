//! Path-parameter request matcher.
//!
//! Decides whether an incoming HTTP request path satisfies one of several
//! configured path patterns, where patterns may contain named placeholder
//! segments (`/api/v1/resource/:resourceid`) captured into a per-request
//! variable store for later pipeline stages.

pub mod config;
pub mod observability;
pub mod routing;
pub mod vars;

pub use config::loader::ConfigError;
pub use config::MatcherConfig;
pub use routing::{PathParamsMatcher, PatternSet, RequestMatcher, CAPTURE_NAMESPACE};
pub use vars::{Replacer, RequestVars, TemplateResolver, VariableSink};
