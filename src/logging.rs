//! Logging setup for the binary.

use tracing_subscriber::EnvFilter;

/// Default filter when `RUST_LOG` is unset.
const DEFAULT_LEVEL: &str = "warn";
const VERBOSE_LEVEL: &str = "debug";

/// Install a stderr fmt subscriber.
///
/// `RUST_LOG` wins when set; otherwise `verbose` picks between warn and debug.
/// Calling this twice is harmless.
pub fn init(verbose: bool) {
    let fallback = if verbose { VERBOSE_LEVEL } else { DEFAULT_LEVEL };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
