//! Logging bootstrap for processes embedding the token services

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::{LogFormat, LoggingConfig};

/// Install the global `tracing` subscriber described by `config`.
///
/// `RUST_LOG` takes precedence over the configured level. Returns `false` if a
/// global subscriber was already installed, in which case nothing changes.
pub fn init_tracing(config: &LoggingConfig) -> bool {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let registry = tracing_subscriber::registry().with(env_filter);

    let installed = match config.format {
        LogFormat::Json => registry
            .with(fmt::layer().json().flatten_event(true).with_ansi(false))
            .try_init()
            .is_ok(),
        LogFormat::Pretty => registry.with(fmt::layer().pretty()).try_init().is_ok(),
        LogFormat::Compact => registry.with(fmt::layer().compact()).try_init().is_ok(),
    };

    if installed {
        tracing::debug!(level = %config.level, format = ?config.format, "tracing initialized");
    }
    installed
}
