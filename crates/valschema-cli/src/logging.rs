use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter, e.g. `VALSCHEMA_LOG=debug`
pub const LOG_ENV: &str = "VALSCHEMA_LOG";

/// Initializes `tracing` logging to stderr.
///
/// The filter comes from [`LOG_ENV`]; when it is unset, `--debug` selects
/// `debug` and everything else falls back to `warn`.
pub fn initialize_logging(debug: bool) {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(if debug { "debug" } else { "warn" }));

    // Keep an already installed subscriber
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
