use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter, e.g. `TANGRS_LOG=tangrs_core=debug`.
pub const LOG_ENV: &str = "TANGRS_LOG";

///
/// Install the stderr log subscriber.
///
/// `TANGRS_LOG` wins if it is set; otherwise the level is `debug` with
/// `verbose` and `info` without.
///
pub fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(verbose)
        .with_writer(std::io::stderr)
        .init();
}
