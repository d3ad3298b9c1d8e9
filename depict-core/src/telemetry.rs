//! Tracing subscriber setup.

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::LoggingConfig;
use crate::error::CoreError;

/// Build the filter for a logging config. `RUST_LOG` wins over the configured level.
pub fn env_filter(config: &LoggingConfig) -> Result<EnvFilter, CoreError> {
    let from_env = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    filter_for(from_env.as_deref(), config)
}

/// The configured level is only used when no directive is given. An invalid
/// directive is an error whichever source it came from.
fn filter_for(directive: Option<&str>, config: &LoggingConfig) -> Result<EnvFilter, CoreError> {
    let (source, directive) = match directive {
        Some(directive) => (EnvFilter::DEFAULT_ENV, directive),
        None => ("logging.level", config.level.as_str()),
    };
    EnvFilter::try_new(directive)
        .map_err(|e| CoreError::telemetry(format!("invalid {source} '{directive}': {e}")))
}

/// Install the global tracing subscriber.
///
/// Fails instead of panicking when a subscriber is already installed, so
/// library consumers that set up their own tracing can ignore the error.
pub fn init_tracing(config: &LoggingConfig) -> Result<(), CoreError> {
    let filter = env_filter(config)?;

    let json_layer = config.json.then(|| {
        tracing_subscriber::fmt::layer()
            .json()
            .with_target(config.with_target)
    });
    let text_layer = (!config.json).then(|| {
        tracing_subscriber::fmt::layer()
            .with_target(config.with_target)
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(json_layer)
        .with(text_layer)
        .try_init()
        .map_err(|e| CoreError::telemetry(e.to_string()))
}
