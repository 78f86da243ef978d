//! Tracing setup
//!
//! Service traffic is traced under [`HTTP_TARGET`]. That target is always
//! enabled at info, and a client's `logging` flag promotes its request
//! traces from debug to info, so the flag alone decides whether they show.

use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

/// Target of request and response traces
pub const HTTP_TARGET: &str = "e3db::http";

/// Filter directives used when `RUST_LOG` is unset
pub fn default_directives(debug: bool) -> String {
    let level = if debug { "debug" } else { "warn" };
    format!("{level},{HTTP_TARGET}=info")
}

/// `RUST_LOG` if set, otherwise [`default_directives`]
pub fn env_filter(debug: bool) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directives(debug)))
}

/// Install the global subscriber, writing to stderr
pub fn init(debug: bool) {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter(debug))
        .with_writer(std::io::stderr)
        .init();
}

/// Trace one line of service traffic
pub fn trace_request(logging: bool, message: std::fmt::Arguments<'_>) {
    if logging {
        info!(target: HTTP_TARGET, "{message}");
    } else {
        debug!(target: HTTP_TARGET, "{message}");
    }
}
