//! Tracing/logging initialization.
//!
//! Logs go to stderr so they never interleave with the interactive menu on
//! stdout.

use tracing_subscriber::EnvFilter;

/// Filter used when `RUST_LOG` is unset. Console errors are already reported
/// to the user in plain text, so logging is opt-in.
pub const DEFAULT_FILTER: &str = "off";

/// Initialize tracing/logging for the process.
///
/// Safe to call multiple times (subsequent calls are no-ops).
pub fn init() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    // JSON logs + timestamps, configurable via RUST_LOG.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .json()
        .with_timer(tracing_subscriber::fmt::time::SystemTime)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}

#[cfg(test)]
mod tests {
    use tracing_subscriber::filter::LevelFilter;
    use tracing_subscriber::layer::Layer;
    use tracing_subscriber::{EnvFilter, Registry};

    #[test]
    fn default_filter_keeps_the_console_quiet() {
        let filter = EnvFilter::new(super::DEFAULT_FILTER);
        let hint = <EnvFilter as Layer<Registry>>::max_level_hint(&filter);
        assert_eq!(hint, Some(LevelFilter::OFF));
    }

    #[test]
    fn init_is_idempotent() {
        super::init();
        super::init();
        ::tracing::info!("still alive after double init");
    }
}
