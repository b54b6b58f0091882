//! Tracing setup.

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Default filter: debug output for this crate, info for everything else.
pub const DEFAULT_FILTER: &str = "accesskey_core=debug,info";

/// Install a stderr subscriber, falling back to `default_filter` when
/// `RUST_LOG` is unset or invalid.
///
/// Returns `false` if a global subscriber was already installed, so hosts
/// that set up tracing themselves can call this unconditionally.
///
/// ```rust
/// use accesskey_core::init_tracing;
///
/// init_tracing("accesskey_core=trace,warn");
/// ```
pub fn init_tracing(default_filter: &str) -> bool {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr).with_target(true))
        .with(filter)
        .try_init()
        .is_ok()
}
