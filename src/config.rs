use anyhow::Context;
use dotenvy::dotenv;
use std::env;
use std::time::Duration;

use crate::validation::ValidationPolicy;

/// Upper bound for `REQUEST_TIMEOUT_SECONDS`.
pub const MAX_REQUEST_TIMEOUT: Duration = Duration::from_secs(3600);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Json,
    Pretty,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub environment: String,
    pub server_port: u16,
    pub redis_url: String,
    pub event_stream: String,
    pub event_stream_max_len: Option<usize>,
    pub request_timeout: Duration,
    pub strict_operation_fields: bool,
    pub log_request_body: bool,
    pub log_format: LogFormat,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenv().ok(); // Load .env file if present
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str, default: &str| {
            lookup(key)
                .filter(|value| !value.trim().is_empty())
                .unwrap_or_else(|| default.to_string())
        };

        let environment = var("ENVIRONMENT", "development");
        let default_format = if environment == "production" { "json" } else { "pretty" };

        let config = Config {
            server_port: var("SERVER_PORT", "8080")
                .parse()
                .context("SERVER_PORT must be a port number")?,
            redis_url: var("REDIS_URL", "redis://127.0.0.1:6379"),
            event_stream: var("EVENT_STREAM", "transactions"),
            event_stream_max_len: lookup("EVENT_STREAM_MAXLEN")
                .filter(|value| !value.trim().is_empty())
                .map(|value| value.parse())
                .transpose()
                .context("EVENT_STREAM_MAXLEN must be a positive integer")?,
            request_timeout: Duration::from_secs(
                var("REQUEST_TIMEOUT_SECONDS", "30")
                    .parse()
                    .context("REQUEST_TIMEOUT_SECONDS must be a number of seconds")?,
            ),
            strict_operation_fields: parse_bool("STRICT_OPERATION_FIELDS", &var("STRICT_OPERATION_FIELDS", "false"))?,
            log_request_body: parse_bool("LOG_REQUEST_BODY", &var("LOG_REQUEST_BODY", "false"))?,
            log_format: parse_log_format(&var("LOG_FORMAT", default_format))?,
            environment,
        };

        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> anyhow::Result<()> {
        if self.server_port == 0 {
            anyhow::bail!("SERVER_PORT must be greater than 0");
        }
        if self.request_timeout.is_zero() {
            anyhow::bail!("REQUEST_TIMEOUT_SECONDS must be greater than 0");
        }
        if self.request_timeout > MAX_REQUEST_TIMEOUT {
            anyhow::bail!(
                "REQUEST_TIMEOUT_SECONDS must be at most {}",
                MAX_REQUEST_TIMEOUT.as_secs()
            );
        }
        if self.event_stream.trim().is_empty() {
            anyhow::bail!("EVENT_STREAM must not be empty");
        }
        url::Url::parse(&self.redis_url).context("REDIS_URL is not a valid URL")?;

        Ok(())
    }

    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    pub fn validation_policy(&self) -> ValidationPolicy {
        ValidationPolicy {
            enforce_operation_fields: self.strict_operation_fields,
        }
    }
}

fn parse_bool(key: &str, raw: &str) -> anyhow::Result<bool> {
    raw.trim()
        .to_lowercase()
        .parse::<bool>()
        .with_context(|| format!("{} must be true or false", key))
}

fn parse_log_format(raw: &str) -> anyhow::Result<LogFormat> {
    match raw.trim().to_lowercase().as_str() {
        "json" => Ok(LogFormat::Json),
        "pretty" | "text" => Ok(LogFormat::Pretty),
        other => anyhow::bail!("LOG_FORMAT must be json or pretty, got '{}'", other),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(vars: &[(&str, &str)]) -> anyhow::Result<Config> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = config_from(&[]).unwrap();

        assert_eq!(config.environment, "development");
        assert_eq!(config.server_port, 8080);
        assert_eq!(config.redis_url, "redis://127.0.0.1:6379");
        assert_eq!(config.event_stream, "transactions");
        assert_eq!(config.event_stream_max_len, None);
        assert_eq!(config.request_timeout, Duration::from_secs(30));
        assert!(!config.strict_operation_fields);
        assert!(!config.log_request_body);
        assert_eq!(config.log_format, LogFormat::Pretty);
    }

    #[test]
    fn test_production_defaults_to_json_logs() {
        let config = config_from(&[("ENVIRONMENT", "production")]).unwrap();
        assert!(config.is_production());
        assert_eq!(config.log_format, LogFormat::Json);
    }

    #[test]
    fn test_overrides() {
        let config = config_from(&[
            ("SERVER_PORT", "9000"),
            ("EVENT_STREAM", "chain-events"),
            ("EVENT_STREAM_MAXLEN", "5000"),
            ("REQUEST_TIMEOUT_SECONDS", "5"),
            ("STRICT_OPERATION_FIELDS", "TRUE"),
            ("LOG_FORMAT", "json"),
        ])
        .unwrap();

        assert_eq!(config.server_port, 9000);
        assert_eq!(config.event_stream, "chain-events");
        assert_eq!(config.event_stream_max_len, Some(5000));
        assert_eq!(config.request_timeout, Duration::from_secs(5));
        assert!(config.validation_policy().enforce_operation_fields);
        assert_eq!(config.log_format, LogFormat::Json);
    }

    #[test]
    fn test_invalid_values_are_rejected() {
        assert!(config_from(&[("SERVER_PORT", "eighty")]).is_err());
        assert!(config_from(&[("SERVER_PORT", "0")]).is_err());
        assert!(config_from(&[("REQUEST_TIMEOUT_SECONDS", "0")]).is_err());
        assert!(config_from(&[("EVENT_STREAM_MAXLEN", "-1")]).is_err());
        assert!(config_from(&[("STRICT_OPERATION_FIELDS", "maybe")]).is_err());
        assert!(config_from(&[("LOG_FORMAT", "xml")]).is_err());
        assert!(config_from(&[("REDIS_URL", "not a url")]).is_err());
    }

    #[test]
    fn test_request_timeout_is_bounded() {
        assert!(config_from(&[("REQUEST_TIMEOUT_SECONDS", "18446744073709551615")]).is_err());
        assert!(config_from(&[("REQUEST_TIMEOUT_SECONDS", "3601")]).is_err());

        let config = config_from(&[("REQUEST_TIMEOUT_SECONDS", "3600")]).unwrap();
        assert_eq!(config.request_timeout, MAX_REQUEST_TIMEOUT);
    }
}
