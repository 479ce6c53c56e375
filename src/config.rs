//! Configuration Module
//!
//! Handles loading and managing server configuration from environment variables.

use std::env;
use std::str::FromStr;

/// Server configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Maximum number of entries the cache can hold, 0 = unbounded
    pub max_entries: usize,
    /// Default TTL in seconds for entries without explicit TTL
    pub default_ttl: u64,
    /// HTTP server port
    pub server_port: u16,
    /// Janitor sweep interval in seconds, 0 = lazy expiry only
    pub cleanup_interval: u64,
    /// Whether permanent entries may be evicted at capacity
    pub evict_permanent: bool,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `MAX_ENTRIES` - Maximum cache entries (default: 10)
    /// - `DEFAULT_TTL` - Default TTL in seconds (default: 300)
    /// - `SERVER_PORT` - HTTP server port (default: 8080)
    /// - `CLEANUP_INTERVAL` - Janitor frequency in seconds (default: 0, disabled)
    /// - `EVICT_PERMANENT` - `true`/`false` (default: true)
    ///
    /// Unparseable values fall back to the default.
    pub fn from_env() -> Self {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Builds a Config from an arbitrary variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        Self {
            max_entries: parse_or(&lookup, "MAX_ENTRIES", defaults.max_entries),
            default_ttl: parse_or(&lookup, "DEFAULT_TTL", defaults.default_ttl),
            server_port: parse_or(&lookup, "SERVER_PORT", defaults.server_port),
            cleanup_interval: parse_or(&lookup, "CLEANUP_INTERVAL", defaults.cleanup_interval),
            evict_permanent: parse_or(&lookup, "EVICT_PERMANENT", defaults.evict_permanent),
        }
    }
}

fn parse_or<T: FromStr>(lookup: &impl Fn(&str) -> Option<String>, name: &str, default: T) -> T {
    lookup(name)
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(default)
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_entries: 10,
            default_ttl: 300,
            server_port: 8080,
            cleanup_interval: 0,
            evict_permanent: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| vars.get(name).cloned()
    }

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.max_entries, 10);
        assert_eq!(config.default_ttl, 300);
        assert_eq!(config.server_port, 8080);
        assert_eq!(config.cleanup_interval, 0);
        assert!(config.evict_permanent);
    }

    #[test]
    fn test_config_empty_source_uses_defaults() {
        let config = Config::from_lookup(lookup_from(&[]));
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_config_overrides() {
        let config = Config::from_lookup(lookup_from(&[
            ("MAX_ENTRIES", "0"),
            ("DEFAULT_TTL", "60"),
            ("SERVER_PORT", "3000"),
            ("CLEANUP_INTERVAL", "5"),
            ("EVICT_PERMANENT", "false"),
        ]));
        assert_eq!(config.max_entries, 0);
        assert_eq!(config.default_ttl, 60);
        assert_eq!(config.server_port, 3000);
        assert_eq!(config.cleanup_interval, 5);
        assert!(!config.evict_permanent);
    }

    #[test]
    fn test_config_invalid_values_fall_back() {
        let config = Config::from_lookup(lookup_from(&[
            ("MAX_ENTRIES", "-1"),
            ("SERVER_PORT", "99999"),
            ("EVICT_PERMANENT", "maybe"),
        ]));
        assert_eq!(config.max_entries, 10);
        assert_eq!(config.server_port, 8080);
        assert!(config.evict_permanent);
    }
}
