//! Tracing setup for binaries embedding the resolver.
//!
//! Resolution itself never touches the global subscriber; the resolved
//! [`Verbosity`] is handed back to the caller, who decides whether to
//! install one.

use appwrap_core::Verbosity;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Filter for a verbosity, preferring `RUST_LOG` when it is set.
#[must_use]
pub fn env_filter(verbosity: Verbosity) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(verbosity.filter_directive()))
}

/// Install the global fmt subscriber.
///
/// Returns `false` if a global subscriber was already installed, in which
/// case nothing changes.
pub fn init_tracing(verbosity: Verbosity) -> bool {
    tracing_subscriber::registry()
        .with(fmt::layer().with_target(true))
        .with(env_filter(verbosity))
        .try_init()
        .is_ok()
}
