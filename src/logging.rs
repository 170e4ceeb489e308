//! Tracing subscriber setup.

use std::io::IsTerminal;

use tracing::subscriber::SetGlobalDefaultError;
use tracing_error::ErrorLayer;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::EnvFilter;

use crate::constants::DEFAULT_LOG_FILTER;
use crate::formatter::TickFormatter;

/// Builds the filter from `RUST_LOG`, falling back to [`DEFAULT_LOG_FILTER`].
pub fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER))
}

/// Installs the global subscriber: tick-aware formatting, env filtering, and span traces for errors.
pub fn setup_logging() -> Result<(), SetGlobalDefaultError> {
    let subscriber = tracing_subscriber::fmt()
        .with_ansi(std::io::stdout().is_terminal())
        .with_env_filter(env_filter())
        .event_format(TickFormatter)
        .finish()
        .with(ErrorLayer::default());

    tracing::subscriber::set_global_default(subscriber)
}
