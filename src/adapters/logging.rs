use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Compact stderr logger; stdout stays reserved for results.
pub fn init_cli_logger(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("rawcook=debug")
    } else {
        EnvFilter::new("rawcook=warn")
    };

    // no-op if a subscriber is already installed
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
