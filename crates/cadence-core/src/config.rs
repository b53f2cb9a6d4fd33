use anyhow::Result;
use config::Config;
use serde::Deserialize;

use crate::constants::DEFAULT_MAX_SEARCH_DAYS;
use crate::error::{CoreError, CoreResult};

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub server: ServerConfig,
    pub logging: LoggingConfig,
    pub scheduler: SchedulerConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    /// ## Summary
    /// Returns the bind address in the format "host:port".
    #[must_use]
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
}

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct SchedulerConfig {
    /// Upper bound on candidate days examined by weekly and monthly rules.
    pub max_search_days: u32,
}

impl Default for SchedulerConfig {
    fn default() -> Self {
        Self {
            max_search_days: DEFAULT_MAX_SEARCH_DAYS,
        }
    }
}

impl Settings {
    /// ## Summary
    /// Loads configuration from defaults, `CADENCE__`-prefixed environment
    /// variables and an optional `config.toml` into a `Settings`.
    ///
    /// ## Errors
    /// Returns an error if building the configuration, deserializing it, or
    /// validating it fails.
    pub fn load() -> Result<Self> {
        let settings = Config::builder()
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 7540)?
            .set_default("logging.level", "info")?
            .set_default(
                "scheduler.max_search_days",
                i64::from(DEFAULT_MAX_SEARCH_DAYS),
            )?
            .add_source(
                config::Environment::with_prefix("CADENCE")
                    .prefix_separator("__")
                    .separator("__")
                    .ignore_empty(true)
                    .try_parsing(true),
            )
            .add_source(config::File::with_name("config.toml").required(false))
            .build()?
            .try_deserialize::<Settings>()?;

        settings.validate()?;
        Ok(settings)
    }

    /// ## Summary
    /// Checks the values serde cannot constrain on its own.
    ///
    /// ## Errors
    /// Returns `CoreError::ConfigError` for an empty host or a zero search bound.
    pub fn validate(&self) -> CoreResult<()> {
        if self.server.host.trim().is_empty() {
            return Err(CoreError::ConfigError("server.host must not be empty".into()));
        }
        if self.scheduler.max_search_days == 0 {
            return Err(CoreError::ConfigError(
                "scheduler.max_search_days must be greater than zero".into(),
            ));
        }
        Ok(())
    }
}

/// ## Summary
/// Loads configuration from environment variables and `.env` file.
///
/// ## Errors
/// Returns an error if loading, deserializing or validating the configuration fails.
pub fn load_config() -> Result<Settings> {
    if let Err(err) = dotenvy::dotenv() {
        tracing::trace!(error = %err, "No .env file loaded");
    }

    Settings::load()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Settings {
        Settings {
            server: ServerConfig {
                host: "127.0.0.1".to_string(),
                port: 7540,
            },
            logging: LoggingConfig {
                level: "debug".to_string(),
            },
            scheduler: SchedulerConfig::default(),
        }
    }

    #[test_log::test]
    fn test_sample_settings_validate() {
        tracing::debug!("Validating sample settings");
        assert!(sample().validate().is_ok());
    }

    #[test]
    fn test_bind_addr() {
        assert_eq!(sample().server.bind_addr(), "127.0.0.1:7540");
    }

    #[test]
    fn test_zero_search_bound_rejected() {
        let mut settings = sample();
        settings.scheduler.max_search_days = 0;

        let err = settings.validate().unwrap_err();
        assert!(matches!(err, CoreError::ConfigError(_)));
        assert!(err.to_string().contains("max_search_days"));
    }

    #[test]
    fn test_blank_host_rejected() {
        let mut settings = sample();
        settings.server.host = "  ".to_string();

        assert!(matches!(
            settings.validate(),
            Err(CoreError::ConfigError(_))
        ));
    }

    #[test]
    fn test_scheduler_default_bound() {
        assert_eq!(
            SchedulerConfig::default().max_search_days,
            DEFAULT_MAX_SEARCH_DAYS
        );
    }
}
