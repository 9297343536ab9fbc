use tracing_subscriber::EnvFilter;

/// Install the stderr tracing subscriber.
///
/// Honors `RUST_LOG`; defaults to `merge_settings=warn` so a normal run prints
/// only its own confirmation or error line. Later calls are ignored.
pub fn init_logging() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("merge_settings=warn"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .try_init();
}
