use std::time::Duration;

use thiserror::Error;
use url::Url;

use crate::constants::{DEFAULT_API_URL, DEFAULT_REFRESH_SECS};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {name}: {message}")]
    InvalidValue { name: String, message: String },
    #[error("failed to parse {name} as integer: {source}")]
    ParseInt {
        name: String,
        #[source]
        source: std::num::ParseIntError,
    },
}

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    // Remote endpoint
    pub api_url: String,
    pub refresh_interval: Duration,
    /// `None` means requests never time out.
    pub request_timeout: Option<Duration>,

    // Web Server
    pub web_host: String,
    pub web_port: u16,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if a numeric variable cannot be parsed.
    pub fn from_env() -> Result<Self, ConfigError> {
        let timeout_secs = parse_env_u64("REQUEST_TIMEOUT_SECS", 0)?;

        Ok(Self {
            api_url: env_or_default("BOARD_API_URL", DEFAULT_API_URL),
            refresh_interval: Duration::from_secs(parse_env_u64(
                "REFRESH_INTERVAL_SECS",
                DEFAULT_REFRESH_SECS,
            )?),
            request_timeout: (timeout_secs > 0).then(|| Duration::from_secs(timeout_secs)),

            web_host: env_or_default("WEB_HOST", "127.0.0.1"),
            web_port: parse_env_u16("WEB_PORT", 8080)?,
        })
    }

    /// Configuration pointing at `api_url` with every other value defaulted.
    #[must_use]
    pub fn for_endpoint(api_url: impl Into<String>) -> Self {
        Self {
            api_url: api_url.into(),
            refresh_interval: Duration::from_secs(DEFAULT_REFRESH_SECS),
            request_timeout: None,
            web_host: "127.0.0.1".to_string(),
            web_port: 8080,
        }
    }

    /// Validate that the configuration is usable.
    ///
    /// # Errors
    ///
    /// Returns an error if the endpoint is not an http(s) URL or the refresh
    /// interval is zero.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.api_url.is_empty() {
            return Err(ConfigError::InvalidValue {
                name: "BOARD_API_URL".to_string(),
                message: "cannot be empty".to_string(),
            });
        }
        match Url::parse(&self.api_url) {
            Ok(url) if matches!(url.scheme(), "http" | "https") => {}
            Ok(url) => {
                return Err(ConfigError::InvalidValue {
                    name: "BOARD_API_URL".to_string(),
                    message: format!("unsupported scheme '{}'", url.scheme()),
                });
            }
            Err(e) => {
                return Err(ConfigError::InvalidValue {
                    name: "BOARD_API_URL".to_string(),
                    message: e.to_string(),
                });
            }
        }
        if self.refresh_interval.is_zero() {
            return Err(ConfigError::InvalidValue {
                name: "REFRESH_INTERVAL_SECS".to_string(),
                message: "must be at least 1".to_string(),
            });
        }
        Ok(())
    }
}

fn env_or_default(name: &str, default: &str) -> String {
    std::env::var(name)
        .ok()
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| default.to_string())
}

fn parse_env_u64(name: &str, default: u64) -> Result<u64, ConfigError> {
    match std::env::var(name) {
        Ok(val) if !val.is_empty() => val.parse().map_err(|e| ConfigError::ParseInt {
            name: name.to_string(),
            source: e,
        }),
        _ => Ok(default),
    }
}

fn parse_env_u16(name: &str, default: u16) -> Result<u16, ConfigError> {
    match std::env::var(name) {
        Ok(val) if !val.is_empty() => val.parse().map_err(|e| ConfigError::ParseInt {
            name: name.to_string(),
            source: e,
        }),
        _ => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn clear_env() {
        for name in [
            "BOARD_API_URL",
            "REFRESH_INTERVAL_SECS",
            "REQUEST_TIMEOUT_SECS",
            "WEB_HOST",
            "WEB_PORT",
        ] {
            std::env::remove_var(name);
        }
    }

    #[test]
    #[serial]
    fn test_defaults_without_env() {
        clear_env();
        let config = Config::from_env().unwrap();

        assert_eq!(config.api_url, DEFAULT_API_URL);
        assert_eq!(config.refresh_interval, Duration::from_secs(30));
        assert!(config.request_timeout.is_none());
        assert_eq!(config.web_port, 8080);
        assert!(config.validate().is_ok());
    }

    #[test]
    #[serial]
    fn test_env_overrides() {
        clear_env();
        std::env::set_var("BOARD_API_URL", "http://localhost:9000/exec");
        std::env::set_var("REFRESH_INTERVAL_SECS", "5");
        std::env::set_var("REQUEST_TIMEOUT_SECS", "12");
        let config = Config::from_env().unwrap();
        clear_env();

        assert_eq!(config.api_url, "http://localhost:9000/exec");
        assert_eq!(config.refresh_interval, Duration::from_secs(5));
        assert_eq!(config.request_timeout, Some(Duration::from_secs(12)));
    }

    #[test]
    #[serial]
    fn test_bad_port_is_parse_error() {
        clear_env();
        std::env::set_var("WEB_PORT", "not-a-port");
        let result = Config::from_env();
        clear_env();

        assert!(matches!(result, Err(ConfigError::ParseInt { .. })));
    }

    #[test]
    fn test_validate_rejects_bad_endpoints() {
        assert!(Config::for_endpoint("").validate().is_err());
        assert!(Config::for_endpoint("ftp://example.com/exec").validate().is_err());
        assert!(Config::for_endpoint("not a url").validate().is_err());
        assert!(Config::for_endpoint("https://example.com/exec").validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_zero_interval() {
        let config = Config {
            refresh_interval: Duration::ZERO,
            ..Config::for_endpoint("https://example.com/exec")
        };
        assert!(config.validate().is_err());
    }
}
