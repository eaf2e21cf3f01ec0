//! Request matching subsystem.
//!
//! # Data Flow
//! ```text
//! Pattern Compilation (at configuration time):
//!     pattern tokens
//!     → PatternSet::normalize (lowercase, preserve order)
//!     → Freeze as immutable PatternSet
//!
//! Incoming Request (path):
//!     → matcher.rs (normalize path, walk patterns in order)
//!     → placeholder captures written to the per-request VariableSink
//!     → Return: matched / not matched
//! ```
//!
//! # Design Decisions
//! - Patterns normalized once at configuration, immutable at runtime
//! - No regex in the hot path (segment comparison only)
//! - Deterministic: same path always yields the same answer
//! - First match wins (patterns evaluated in configured order)

pub mod matcher;
pub mod pattern;

pub use matcher::{PathParamsMatcher, RequestMatcher, CAPTURE_NAMESPACE};
pub use pattern::PatternSet;
