//! Structured logging initialisation.

use crate::config::LoggingConfig;
use std::sync::OnceLock;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

static LOGGER_INITIALIZED: OnceLock<()> = OnceLock::new();

/// Installs the global `tracing` subscriber.
///
/// `RUST_LOG` takes precedence over the configured level. Calling this more
/// than once, or after another subscriber was installed, is a no-op.
pub fn init(config: &LoggingConfig) {
    LOGGER_INITIALIZED.get_or_init(|| {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(config.level.as_str()));
        let registry = tracing_subscriber::registry().with(filter);
        let installed = if config.json {
            registry
                .with(fmt::layer().json().with_target(true))
                .try_init()
        } else {
            registry.with(fmt::layer().with_target(true)).try_init()
        };

        if installed.is_err() {
            tracing::debug!("global tracing subscriber already set; keeping it");
        }
        tracing::info!(level = %config.level, json = config.json, "logging initialised");
    });
}
