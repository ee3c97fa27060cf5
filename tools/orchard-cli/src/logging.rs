//! Tracing subscriber setup.

use tracing_subscriber::EnvFilter;

/// Install the global subscriber.
///
/// `RUST_LOG` wins when set. Otherwise the CLI logs warnings, or debug
/// output for the storefront crates with `--verbose`. Logs go to stderr.
pub fn init(verbose: bool) {
    let default_directive = if verbose {
        "warn,orchard_commerce=debug,orchard=debug"
    } else {
        "warn"
    };

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
