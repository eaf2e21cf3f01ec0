//! Per-request variable storage and template expansion.
//!
//! # Data Flow
//! ```text
//! Request arrives
//!     → caller creates RequestVars (empty sink) + Replacer (request context)
//!     → matcher writes captures into the sink during matching
//!     → later pipeline stages read captures from the sink
//!     → sink and replacer dropped with the request
//! ```
//!
//! # Design Decisions
//! - The sink and the template resolver are separate, explicit parameters
//!   (no ambient per-request context slot)
//! - The matcher treats the sink as write-only; read access exists for
//!   downstream stages and tests
//! - Unresolved template references expand to the empty string

pub mod replacer;
pub mod sink;

pub use replacer::{Replacer, TemplateResolver};
pub use sink::{RequestVars, VariableSink};
