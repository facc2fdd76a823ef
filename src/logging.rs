//! Diagnostic logging setup

use tracing_subscriber::EnvFilter;

/// Environment variable overriding the log filter, e.g. `MAC_LATEST_MERGE_LOG=debug`
pub const LOG_ENV: &str = "MAC_LATEST_MERGE_LOG";

/// Pick the default filter from the CLI flags
pub fn default_level(verbose: bool, trace: bool) -> &'static str {
    if trace {
        "trace"
    } else if verbose {
        "debug"
    } else {
        "warn"
    }
}

/// Install the global subscriber; logs go to stderr so stdout stays clean for `--dry-run`
pub fn init(verbose: bool, trace: bool) {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(default_level(verbose, trace)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();
}
