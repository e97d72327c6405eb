use tracing_subscriber::{EnvFilter, FmtSubscriber};

/// Install the global `tracing` subscriber. Filtering follows `RUST_LOG`,
/// falling back to debug output for this crate. Calling it again is harmless.
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("marinebot=debug,info"));

    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_target(false)
        .with_ansi(true)
        .finish();

    if tracing::subscriber::set_global_default(subscriber).is_err() {
        tracing::debug!("Global subscriber already installed");
    }
}
