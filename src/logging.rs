use tracing_subscriber::EnvFilter;

/// Environment variable holding a `tracing` filter directive, e.g. `debug`.
pub const LOG_ENV: &str = "MESSAGE_SHORTHAND_LOG";

/// Install the stderr subscriber.
///
/// Defaults to `warn` so a successful hook run stays silent; `verbose` forces
/// `debug` regardless of [`LOG_ENV`].
pub fn init(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    // A subscriber may already be installed when embedded; keep that one.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .try_init();
}
