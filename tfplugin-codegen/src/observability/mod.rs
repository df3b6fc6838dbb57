//! Structured logging
//!
//! Generators emit `tracing` events; binaries embedding the crate call
//! [`init`] once to install a subscriber.

use crate::config::LoggingSettings;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initialize logging
///
/// `RUST_LOG` takes precedence over [`LoggingSettings::filter`]. Output is
/// JSON when [`LoggingSettings::json`] is set and human-readable otherwise.
///
/// # Errors
///
/// Returns an error if the configured filter is invalid or a global
/// subscriber is already installed.
///
/// # Example
///
/// ```rust,no_run
/// use tfplugin_codegen::config::GeneratorConfig;
/// use tfplugin_codegen::observability;
///
/// # fn main() -> anyhow::Result<()> {
/// let config = GeneratorConfig::load()?;
/// observability::init(&config.logging)?;
/// tracing::info!("Generator started");
/// # Ok(())
/// # }
/// ```
pub fn init(settings: &LoggingSettings) -> anyhow::Result<()> {
    let env_filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(&settings.filter)?,
    };

    let registry = tracing_subscriber::registry().with(env_filter);

    if settings.json {
        registry
            .with(tracing_subscriber::fmt::layer().json())
            .try_init()?;
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_target(false))
            .try_init()?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_filter_is_rejected() {
        if std::env::var_os("RUST_LOG").is_some() {
            return;
        }

        let settings = LoggingSettings {
            filter: "tfplugin_codegen=loud".to_string(),
            json: false,
        };
        assert!(init(&settings).is_err());
    }

    #[test]
    fn test_second_init_fails() {
        let settings = LoggingSettings::default();
        // the first call may lose to another test in this process
        let _ = init(&settings);

        assert!(init(&settings).is_err());
    }
}
