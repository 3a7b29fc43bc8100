use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter; `RUST_LOG` is the fallback.
pub const LOG_ENV: &str = "PARLEY_LOG";

/// Install the stderr diagnostics subscriber.
///
/// Filter precedence: `PARLEY_LOG`, then `RUST_LOG`, then `debug` with `-v`
/// and `warn` otherwise.
pub fn init(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| EnvFilter::new(format!("parley={}", default_level)));

    // A subscriber may already be set when running inside tests.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .try_init();
}
