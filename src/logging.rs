use std::io::Write;

use tracing_subscriber::EnvFilter;

/// Install the global fmt subscriber, writing to stderr
///
/// `RUST_LOG` takes precedence; otherwise `info`, or `debug` when `verbose`.
pub fn init(verbose: bool) {
    let default_directive = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Push buffered log output to the terminal
pub fn flush_log() {
    std::io::stdout().flush().ok();
    std::io::stderr().flush().ok();
}
