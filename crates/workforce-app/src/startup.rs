//! Startup utilities: logging and the startup summary.

use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};
use workforce_config::{AppConfig, LoggingConfig};

/// Builds the log filter; `RUST_LOG` wins over the configured level.
#[must_use]
pub fn log_filter(config: &LoggingConfig) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.level))
}

/// Installs the global tracing subscriber.
///
/// Logs go to stderr so command output on stdout stays clean.
pub fn init_logging(config: &LoggingConfig) {
    let registry = tracing_subscriber::registry().with(log_filter(config));

    if config.is_json() {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(std::io::stderr),
            )
            .init();
    } else {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(true)
                    .with_writer(std::io::stderr),
            )
            .init();
    }
}

/// Logs where the application is reading its data from.
pub fn print_startup_info(config: &AppConfig) {
    info!("{} {} ({})", config.app.name, config.app.version, config.app.environment);
    info!("Database: {}", config.database.url);
}
