//! Structured logging.
//!
//! # Responsibilities
//! - Initialize the logging subsystem
//! - Configure log level from environment or config
//!
//! # Design Decisions
//! - Uses tracing crate for structured logging
//! - RUST_LOG takes precedence; the config-derived filter is the fallback

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize the tracing subscriber.
///
/// `default_filter` is used when `RUST_LOG` is not set, e.g.
/// `"pathparams_matcher=debug"` or the configured log level.
pub fn init_logging(default_filter: &str) {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}
