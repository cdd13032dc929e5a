use std::time::Duration;

use crate::error::ConfigError;
use crate::retry::RetryPolicy;

/// Default API root. Resource paths such as `/experts` are appended to it.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8080/api";

/// Client-wide timeout applied to every call.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Physical connection settings shared by every call.
#[derive(Debug, Clone, PartialEq)]
pub struct TransportConfig {
    /// API root, e.g. `https://experts.example.org/api`.
    pub base_url: String,
    /// Applied uniformly to every request.
    pub timeout: Duration,
    /// Headers sent with every request unless the request overrides them.
    pub default_headers: Vec<(String, String)>,
    /// Keep and resend cookies across calls.
    pub with_credentials: bool,
}

impl Default for TransportConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
            default_headers: vec![("Content-Type".to_string(), "application/json".to_string())],
            with_credentials: false,
        }
    }
}

/// Full client configuration.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ClientConfig {
    pub transport: TransportConfig,
    /// Verbose request/response logging.
    pub debug: bool,
    /// Retry policy for callers that opt into retries.
    pub retry: RetryPolicy,
}

impl ClientConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                     | Default                     |
    /// |-----------------------------|-----------------------------|
    /// | `EXPERTDB_API_URL`          | `http://localhost:8080/api` |
    /// | `EXPERTDB_TIMEOUT_SECS`     | `10`                        |
    /// | `EXPERTDB_WITH_CREDENTIALS` | `false`                     |
    /// | `EXPERTDB_DEBUG`            | `false`                     |
    /// | `EXPERTDB_RETRY_ATTEMPTS`   | `1`                         |
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Same as [`from_env`](Self::from_env) but reads variables through
    /// `lookup`.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = TransportConfig::default();

        let base_url = lookup("EXPERTDB_API_URL")
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .unwrap_or(defaults.base_url);

        let timeout = match lookup("EXPERTDB_TIMEOUT_SECS") {
            Some(raw) => {
                let secs: u64 = parse_var("EXPERTDB_TIMEOUT_SECS", &raw)?;
                // A zero timeout would fail every call.
                if secs == 0 {
                    return Err(ConfigError::InvalidVar {
                        var: "EXPERTDB_TIMEOUT_SECS",
                        value: raw,
                    });
                }
                Duration::from_secs(secs)
            }
            None => defaults.timeout,
        };

        let with_credentials = match lookup("EXPERTDB_WITH_CREDENTIALS") {
            Some(raw) => parse_bool("EXPERTDB_WITH_CREDENTIALS", &raw)?,
            None => defaults.with_credentials,
        };

        let debug = match lookup("EXPERTDB_DEBUG") {
            Some(raw) => parse_bool("EXPERTDB_DEBUG", &raw)?,
            None => false,
        };

        let retry = match lookup("EXPERTDB_RETRY_ATTEMPTS") {
            Some(raw) => {
                let attempts: u32 = parse_var("EXPERTDB_RETRY_ATTEMPTS", &raw)?;
                if attempts == 0 {
                    return Err(ConfigError::InvalidVar {
                        var: "EXPERTDB_RETRY_ATTEMPTS",
                        value: raw,
                    });
                }
                RetryPolicy {
                    max_attempts: attempts,
                    ..RetryPolicy::default()
                }
            }
            None => RetryPolicy::none(),
        };

        Ok(Self {
            transport: TransportConfig {
                base_url,
                timeout,
                default_headers: defaults.default_headers,
                with_credentials,
            },
            debug,
            retry,
        })
    }
}

fn parse_var<T: std::str::FromStr>(var: &'static str, raw: &str) -> Result<T, ConfigError> {
    raw.trim().parse().map_err(|_| ConfigError::InvalidVar {
        var,
        value: raw.to_string(),
    })
}

fn parse_bool(var: &'static str, raw: &str) -> Result<bool, ConfigError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" | "" => Ok(false),
        _ => Err(ConfigError::InvalidVar {
            var,
            value: raw.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use assert_matches::assert_matches;

    use super::*;

    fn config_from(vars: &[(&str, &str)]) -> Result<ClientConfig, ConfigError> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        ClientConfig::from_lookup(|var| map.get(var).cloned())
    }

    #[test]
    fn defaults_when_nothing_set() {
        let config = config_from(&[]).unwrap();
        assert_eq!(config.transport.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.transport.timeout, Duration::from_secs(10));
        assert!(!config.transport.with_credentials);
        assert!(!config.debug);
        assert_eq!(config.retry.max_attempts, 1);
        assert_eq!(
            config.transport.default_headers,
            vec![("Content-Type".to_string(), "application/json".to_string())]
        );
    }

    #[test]
    fn overrides_are_applied() {
        let config = config_from(&[
            ("EXPERTDB_API_URL", "https://experts.example.org/api"),
            ("EXPERTDB_TIMEOUT_SECS", "3"),
            ("EXPERTDB_WITH_CREDENTIALS", "true"),
            ("EXPERTDB_DEBUG", "1"),
            ("EXPERTDB_RETRY_ATTEMPTS", "4"),
        ])
        .unwrap();
        assert_eq!(config.transport.base_url, "https://experts.example.org/api");
        assert_eq!(config.transport.timeout, Duration::from_secs(3));
        assert!(config.transport.with_credentials);
        assert!(config.debug);
        assert_eq!(config.retry.max_attempts, 4);
    }

    #[test]
    fn unparseable_timeout_is_rejected() {
        assert_matches!(
            config_from(&[("EXPERTDB_TIMEOUT_SECS", "ten")]),
            Err(ConfigError::InvalidVar { var: "EXPERTDB_TIMEOUT_SECS", .. })
        );
    }

    #[test]
    fn zero_timeout_is_rejected() {
        assert_matches!(
            config_from(&[("EXPERTDB_TIMEOUT_SECS", "0")]),
            Err(ConfigError::InvalidVar { var: "EXPERTDB_TIMEOUT_SECS", value }) if value == "0"
        );
    }

    #[test]
    fn zero_retry_attempts_is_rejected() {
        assert_matches!(
            config_from(&[("EXPERTDB_RETRY_ATTEMPTS", "0")]),
            Err(ConfigError::InvalidVar { var: "EXPERTDB_RETRY_ATTEMPTS", .. })
        );
    }

    #[test]
    fn blank_url_falls_back_to_default() {
        let config = config_from(&[("EXPERTDB_API_URL", "  ")]).unwrap();
        assert_eq!(config.transport.base_url, DEFAULT_BASE_URL);
    }
}
