use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter, e.g. `STAFFPAY_LOG=debug`.
pub const LOG_ENV: &str = "STAFFPAY_LOG";

/// Installs the global tracing subscriber.
///
/// Logs go to stderr so that stdout carries only the JSON result. Defaults to
/// `warn` when `STAFFPAY_LOG` is unset or unparsable.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .try_init();
}
