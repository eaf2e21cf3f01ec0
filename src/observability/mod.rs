//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! Matcher and config subsystems produce:
//!     → logging.rs (structured log events via tracing)
//!
//! Consumers:
//!     → Log aggregation (stdout, file, remote)
//! ```
//!
//! # Design Decisions
//! - Structured logging with field-based events
//! - Log level configurable via config and environment
//! - Matching itself stays allocation-light; events fire at debug level

pub mod logging;
