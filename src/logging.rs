use tracing_subscriber::EnvFilter;

/// Install the stderr diagnostic logger.
///
/// `RUST_LOG` wins when set; otherwise `debug` picks between debug and
/// warn-level output for this crate.
pub fn init(debug: bool) {
    let default_filter = if debug { "simplesh=debug" } else { "simplesh=warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    // A second init (tests, embedding) keeps the first subscriber.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
