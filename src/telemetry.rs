//! Tracing subscriber setup.

use tracing_subscriber::fmt::format::JsonFields;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

use crate::config::{LogFormat, LoggingConfig, ValidationError};

/// Installs the global subscriber.
///
/// `RUST_LOG` wins over the configured level when set. Calling this twice
/// leaves the first subscriber in place.
pub fn init_tracing(config: &LoggingConfig) -> Result<(), ValidationError> {
    let format = config.log_format()?;
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let layer = match format {
        LogFormat::Json => tracing_subscriber::fmt::layer()
            .fmt_fields(JsonFields::default())
            .event_format(tracing_subscriber::fmt::format().json().flatten_event(true))
            .with_filter(filter)
            .boxed(),
        LogFormat::Text => tracing_subscriber::fmt::layer()
            .with_target(true)
            .with_filter(filter)
            .boxed(),
    };

    if tracing_subscriber::registry().with(layer).try_init().is_err() {
        tracing::debug!("Tracing subscriber already installed");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_unknown_format_before_installing() {
        let config = LoggingConfig {
            format: "yaml".to_string(),
            ..Default::default()
        };
        assert!(init_tracing(&config).is_err());
    }

    #[test]
    fn second_init_is_harmless() {
        let config = LoggingConfig::default();
        assert!(init_tracing(&config).is_ok());
        assert!(init_tracing(&config).is_ok());
    }
}
