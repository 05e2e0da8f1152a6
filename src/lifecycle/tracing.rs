//! Observability setup.

/// Initializes structured logging for the whole process.
///
/// Verbosity is controlled through `RUST_LOG`:
/// - `RUST_LOG=info` - lifecycle events and activated searches
/// - `RUST_LOG=debug` - buffered edits, page requests, stale-response drops
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .init();
}
