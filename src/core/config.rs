//! Application configuration from environment variables.
//!
//! Load configuration using `Config::from_env()` after calling `dotenvy::dotenv()`.

use std::time::Duration;

/// Upstream API used when `PUJANTE_API_URL` is not set
pub const DEFAULT_API_URL: &str = "http://localhost:8000/api";

/// Upstream request timeout used when `PUJANTE_API_TIMEOUT_SECS` is not set
pub const DEFAULT_API_TIMEOUT_SECS: u64 = 30;

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Base URL of the Pujante API that `/api/*` is forwarded to
    /// Example: https://api.pujante.com.br/api
    pub api_base_url: String,

    /// Timeout for a single upstream request
    pub api_timeout: Duration,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Call `dotenvy::dotenv()` before this to load from `.env` file.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the configuration from any key lookup
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let api_base_url = lookup("PUJANTE_API_URL")
            .map(|url| url.trim().trim_end_matches('/').to_string())
            .filter(|url| !url.is_empty())
            .unwrap_or_else(|| DEFAULT_API_URL.to_string());

        let timeout_secs = lookup("PUJANTE_API_TIMEOUT_SECS")
            .and_then(|v| v.trim().parse::<u64>().ok())
            .filter(|secs| *secs > 0)
            .unwrap_or(DEFAULT_API_TIMEOUT_SECS);

        Self {
            api_base_url,
            api_timeout: Duration::from_secs(timeout_secs),
        }
    }

    /// Check if the upstream is the built-in local default
    pub fn uses_default_api(&self) -> bool {
        self.api_base_url == DEFAULT_API_URL
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = Config::from_lookup(lookup_from(&[]));
        assert_eq!(config.api_base_url, DEFAULT_API_URL);
        assert_eq!(
            config.api_timeout,
            Duration::from_secs(DEFAULT_API_TIMEOUT_SECS)
        );
        assert!(config.uses_default_api());
    }

    #[test]
    fn test_api_url_trailing_slash_trimmed() {
        let config = Config::from_lookup(lookup_from(&[(
            "PUJANTE_API_URL",
            " https://api.pujante.com.br/api/ ",
        )]));
        assert_eq!(config.api_base_url, "https://api.pujante.com.br/api");
        assert!(!config.uses_default_api());
    }

    #[test]
    fn test_blank_api_url_falls_back() {
        let config = Config::from_lookup(lookup_from(&[("PUJANTE_API_URL", "   ")]));
        assert_eq!(config.api_base_url, DEFAULT_API_URL);
    }

    #[test]
    fn test_timeout_parsing() {
        let config = Config::from_lookup(lookup_from(&[("PUJANTE_API_TIMEOUT_SECS", "5")]));
        assert_eq!(config.api_timeout, Duration::from_secs(5));

        let config = Config::from_lookup(lookup_from(&[("PUJANTE_API_TIMEOUT_SECS", "zero")]));
        assert_eq!(
            config.api_timeout,
            Duration::from_secs(DEFAULT_API_TIMEOUT_SECS)
        );

        let config = Config::from_lookup(lookup_from(&[("PUJANTE_API_TIMEOUT_SECS", "0")]));
        assert_eq!(
            config.api_timeout,
            Duration::from_secs(DEFAULT_API_TIMEOUT_SECS)
        );
    }
}
