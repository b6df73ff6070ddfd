//! `tracing` subscriber setup.

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Installs a compact stderr logger.
///
/// `RUST_LOG` takes precedence; otherwise demo events are shown at `info`,
/// or at `debug` (including every executed statement) with `verbose`.
pub fn init_cli_logger(verbose: bool) {
    let default_directives = if verbose {
        "criteria_demo=debug,warn"
    } else {
        "criteria_demo=info"
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directives));

    // A second init (e.g. from tests) keeps the first subscriber.
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .compact(),
        )
        .try_init();
}
