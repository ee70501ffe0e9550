use tracing_subscriber::EnvFilter;

/// Installs the global fmt subscriber, filtered by `RUST_LOG`.
///
/// Events go to stderr so they never interleave with the terminal UI on
/// stdout. Later calls are ignored.
pub fn init() {
    tracing::subscriber::set_global_default(
        tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::from_default_env())
            .with_writer(std::io::stderr)
            .finish(),
    )
    .ok();
}
