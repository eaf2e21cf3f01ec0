//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML)
//!     → loader.rs (parse & deserialize)
//!     → validation.rs (semantic checks)
//!     → MatcherConfig (validated, immutable)
//!     → pattern tokens → PatternSet (normalized once)
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded
//! - All fields have defaults to allow minimal configs
//! - Validation separates syntactic (serde) from semantic checks
//! - Pattern tokens are whitespace-separated; trailing blocks are a
//!   load-time error

pub mod loader;
pub mod schema;
pub mod validation;

pub use schema::MatcherConfig;
pub use schema::PathParamsConfig;
