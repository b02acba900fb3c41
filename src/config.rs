//! Client configuration.
//!
//! Resolved once at startup from command-line overrides, then the process
//! environment, then defaults, and passed into [`crate::client::ApiClient`].

use std::time::Duration;

use crate::error::{ApiError, ApiResult};

pub const DEFAULT_BASE_URL: &str = "https://api.mediconnect.io";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

pub const BASE_URL_ENV: &str = "MEDICONNECT_BASE_URL";
pub const API_KEY_ENV: &str = "MEDICONNECT_API_KEY";
pub const TIMEOUT_ENV: &str = "MEDICONNECT_TIMEOUT_SECS";

#[derive(Clone, Debug)]
pub struct ClientConfig {
    base_url: String,
    api_key: Option<String>,
    timeout: Duration,
}

/// Values supplied explicitly, e.g. from command-line flags.
#[derive(Clone, Debug, Default)]
pub struct ConfigOverrides {
    pub base_url: Option<String>,
    pub api_key: Option<String>,
    pub timeout_secs: Option<u64>,
}

impl ClientConfig {
    pub fn new(
        base_url: impl Into<String>,
        api_key: Option<String>,
        timeout: Duration,
    ) -> ApiResult<Self> {
        let base_url: String = base_url.into();
        let base_url = base_url.trim().trim_end_matches('/').to_string();
        if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            return Err(ApiError::InvalidConfig(format!(
                "base URL must start with http:// or https:// (got '{base_url}')"
            )));
        }
        if timeout.is_zero() {
            return Err(ApiError::InvalidConfig(
                "timeout must be greater than zero".into(),
            ));
        }

        let api_key = api_key
            .map(|key| key.trim().to_string())
            .filter(|key| !key.is_empty());

        Ok(Self {
            base_url,
            api_key,
            timeout,
        })
    }

    /// Resolve from overrides, then `lookup` (normally the environment).
    pub fn resolve(
        overrides: ConfigOverrides,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> ApiResult<Self> {
        let base_url = overrides
            .base_url
            .or_else(|| lookup(BASE_URL_ENV))
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        let api_key = overrides.api_key.or_else(|| lookup(API_KEY_ENV));

        let timeout = match overrides.timeout_secs {
            Some(secs) => Duration::from_secs(secs),
            None => match lookup(TIMEOUT_ENV) {
                Some(raw) => raw.trim().parse::<u64>().map(Duration::from_secs).map_err(|_| {
                    ApiError::InvalidConfig(format!("{TIMEOUT_ENV} must be a whole number of seconds"))
                })?,
                None => DEFAULT_TIMEOUT,
            },
        };

        Self::new(base_url, api_key, timeout)
    }

    pub fn from_env(overrides: ConfigOverrides) -> ApiResult<Self> {
        Self::resolve(overrides, |key| std::env::var(key).ok())
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn api_key(&self) -> Option<&str> {
        self.api_key.as_deref()
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> + use<> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn defaults_apply_without_overrides_or_env() {
        let config = ClientConfig::resolve(ConfigOverrides::default(), env(&[])).expect("config");
        assert_eq!(config.base_url(), DEFAULT_BASE_URL);
        assert_eq!(config.api_key(), None);
        assert_eq!(config.timeout(), DEFAULT_TIMEOUT);
    }

    #[test]
    fn overrides_win_over_environment() {
        let overrides = ConfigOverrides {
            base_url: Some("http://127.0.0.1:9000/".into()),
            api_key: Some("flag-key".into()),
            timeout_secs: Some(5),
        };
        let lookup = env(&[
            (BASE_URL_ENV, "https://env.example"),
            (API_KEY_ENV, "env-key"),
            (TIMEOUT_ENV, "60"),
        ]);

        let config = ClientConfig::resolve(overrides, lookup).expect("config");
        assert_eq!(config.base_url(), "http://127.0.0.1:9000");
        assert_eq!(config.api_key(), Some("flag-key"));
        assert_eq!(config.timeout(), Duration::from_secs(5));
        assert_eq!(config.endpoint("/api/convert"), "http://127.0.0.1:9000/api/convert");
    }

    #[test]
    fn environment_fills_missing_values() {
        let lookup = env(&[(API_KEY_ENV, "env-key"), (TIMEOUT_ENV, " 12 ")]);
        let config = ClientConfig::resolve(ConfigOverrides::default(), lookup).expect("config");
        assert_eq!(config.api_key(), Some("env-key"));
        assert_eq!(config.timeout(), Duration::from_secs(12));
    }

    #[test]
    fn rejects_bad_values() {
        let lookup = env(&[(TIMEOUT_ENV, "soon")]);
        assert!(matches!(
            ClientConfig::resolve(ConfigOverrides::default(), lookup),
            Err(ApiError::InvalidConfig(_))
        ));
        assert!(ClientConfig::new("ftp://example", None, DEFAULT_TIMEOUT).is_err());
        assert!(ClientConfig::new(DEFAULT_BASE_URL, None, Duration::ZERO).is_err());
    }

    #[test]
    fn blank_api_key_is_dropped() {
        let config =
            ClientConfig::new(DEFAULT_BASE_URL, Some("   ".into()), DEFAULT_TIMEOUT).expect("config");
        assert_eq!(config.api_key(), None);
    }
}
