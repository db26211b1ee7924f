pub mod config;
pub mod models;
pub mod region;
pub mod catalog;
pub mod engine;
pub mod ml;

use tracing_subscriber::EnvFilter;

/// Initialize tracing for binaries embedding the engine.
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config::default_log_filter())),
        )
        .init();

    tracing::info!("CrowdAID starting v{}", config::APP_VERSION);
}
