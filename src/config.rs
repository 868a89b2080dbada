//! Configuration Module
//!
//! Handles loading and managing server configuration from environment variables.

use std::env;
use std::time::Duration;

/// Server configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP server port
    pub server_port: u16,
    /// Upper bound on the cache's estimated total size in bytes
    pub cache_max_bytes: usize,
    /// Default TTL for cached package/readme responses
    pub cache_default_ttl: Duration,
    /// TTL for cached search responses (shorter than package data)
    pub search_ttl: Duration,
    /// Background expiry sweep interval
    pub sweep_interval: Duration,
    /// Total per-request timeout for upstream calls
    pub request_timeout: Duration,
    /// Optional GitHub API token for the README fallback
    pub github_token: Option<String>,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `SERVER_PORT` - HTTP server port (default: 3000)
    /// - `CACHE_MAX_BYTES` - Estimated cache size bound (default: 104857600, 100 MB)
    /// - `CACHE_DEFAULT_TTL_SECS` - Default entry TTL (default: 3600)
    /// - `SEARCH_TTL_SECS` - Search entry TTL (default: 600)
    /// - `SWEEP_INTERVAL_SECS` - Expiry sweep frequency (default: 300)
    /// - `REQUEST_TIMEOUT_SECS` - Upstream request timeout (default: 30)
    /// - `GITHUB_TOKEN` - GitHub API token (default: unset)
    pub fn from_env() -> Self {
        Self {
            server_port: parse_env("SERVER_PORT", 3000),
            cache_max_bytes: parse_env("CACHE_MAX_BYTES", 104_857_600),
            cache_default_ttl: Duration::from_secs(parse_env("CACHE_DEFAULT_TTL_SECS", 3600)),
            search_ttl: Duration::from_secs(parse_env("SEARCH_TTL_SECS", 600)),
            sweep_interval: Duration::from_secs(parse_env("SWEEP_INTERVAL_SECS", 300)),
            request_timeout: Duration::from_secs(parse_env("REQUEST_TIMEOUT_SECS", 30)),
            github_token: env::var("GITHUB_TOKEN").ok().filter(|t| !t.is_empty()),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server_port: 3000,
            cache_max_bytes: 104_857_600,
            cache_default_ttl: Duration::from_secs(3600),
            search_ttl: Duration::from_secs(600),
            sweep_interval: Duration::from_secs(300),
            request_timeout: Duration::from_secs(30),
            github_token: None,
        }
    }
}

fn parse_env<T: std::str::FromStr>(name: &str, default: T) -> T {
    env::var(name)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.server_port, 3000);
        assert_eq!(config.cache_max_bytes, 104_857_600);
        assert_eq!(config.cache_default_ttl, Duration::from_secs(3600));
        assert_eq!(config.search_ttl, Duration::from_secs(600));
        assert_eq!(config.sweep_interval, Duration::from_secs(300));
        assert!(config.github_token.is_none());
    }

    #[test]
    fn test_config_from_env_defaults() {
        env::remove_var("SERVER_PORT");
        env::remove_var("CACHE_MAX_BYTES");
        env::remove_var("CACHE_DEFAULT_TTL_SECS");
        env::remove_var("SEARCH_TTL_SECS");
        env::remove_var("SWEEP_INTERVAL_SECS");
        env::remove_var("REQUEST_TIMEOUT_SECS");
        env::remove_var("GITHUB_TOKEN");

        let config = Config::from_env();
        assert_eq!(config.server_port, 3000);
        assert_eq!(config.cache_default_ttl, Duration::from_secs(3600));
        assert_eq!(config.request_timeout, Duration::from_secs(30));
    }
}
