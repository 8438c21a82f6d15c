use tracing_subscriber::{EnvFilter, fmt};

/// Install the stderr log subscriber.
///
/// `RUST_LOG` wins when set; otherwise `default_level` is used. Output goes to
/// stderr so stdout only carries the run summary.
pub fn init_logging(default_level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
