//! Configuration Module
//!
//! Handles loading and validating server configuration from environment variables.

use std::env;
use std::str::FromStr;

use crate::cache::{DEFAULT_CAPACITY, DEFAULT_MAX_ENTRY_SIZE_BYTES};
use crate::error::ConfigError;

/// Server configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Maximum number of entries the cache can hold
    pub capacity: usize,
    /// Largest value in bytes the cache accepts
    pub max_entry_size_bytes: usize,
    /// Number of independently locked cache shards
    pub shards: usize,
    /// HTTP server port
    pub server_port: u16,
    /// Metrics report interval in seconds, 0 disables the reporter
    pub metrics_interval: u64,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// Missing values fall back to the defaults. A variable that is set but
    /// does not parse is reported as `ConfigError::InvalidValue`.
    ///
    /// # Environment Variables
    /// - `CACHE_CAPACITY` - Maximum cache entries (default: 1000)
    /// - `CACHE_MAX_ENTRY_SIZE_BYTES` - Maximum value size (default: 1048576)
    /// - `CACHE_SHARDS` - Lock shards (default: 1)
    /// - `SERVER_PORT` - HTTP server port (default: 8080)
    /// - `METRICS_INTERVAL` - Metrics log frequency in seconds (default: 60)
    pub fn from_env() -> Result<Self, ConfigError> {
        let defaults = Self::default();
        Ok(Self {
            capacity: env_or("CACHE_CAPACITY", defaults.capacity)?,
            max_entry_size_bytes: env_or("CACHE_MAX_ENTRY_SIZE_BYTES", defaults.max_entry_size_bytes)?,
            shards: env_or("CACHE_SHARDS", defaults.shards)?,
            server_port: env_or("SERVER_PORT", defaults.server_port)?,
            metrics_interval: env_or("METRICS_INTERVAL", defaults.metrics_interval)?,
        })
    }

    /// Checks the cache parameters before anything is constructed.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.capacity == 0 {
            return Err(ConfigError::ZeroCapacity);
        }
        if self.max_entry_size_bytes == 0 {
            return Err(ConfigError::ZeroEntrySize);
        }
        if self.shards == 0 || self.shards > self.capacity {
            return Err(ConfigError::InvalidShards {
                shards: self.shards,
                capacity: self.capacity,
            });
        }
        Ok(())
    }
}

fn env_or<T: FromStr>(name: &str, default: T) -> Result<T, ConfigError> {
    match env::var(name) {
        Ok(raw) => match raw.trim().parse() {
            Ok(value) => Ok(value),
            Err(_) => Err(ConfigError::InvalidValue {
                name: name.to_string(),
                value: raw,
            }),
        },
        Err(env::VarError::NotPresent) => Ok(default),
        Err(env::VarError::NotUnicode(raw)) => Err(ConfigError::InvalidValue {
            name: name.to_string(),
            value: raw.to_string_lossy().into_owned(),
        }),
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_CAPACITY,
            max_entry_size_bytes: DEFAULT_MAX_ENTRY_SIZE_BYTES,
            shards: 1,
            server_port: 8080,
            metrics_interval: 60,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.capacity, 1000);
        assert_eq!(config.max_entry_size_bytes, 1024 * 1024);
        assert_eq!(config.shards, 1);
        assert_eq!(config.server_port, 8080);
        assert_eq!(config.metrics_interval, 60);
        assert!(config.validate().is_ok());
    }

    // Single test touching the real variables, so parallel tests never race on them
    #[test]
    fn test_config_from_env() {
        // Clear any existing env vars to test defaults
        env::remove_var("CACHE_CAPACITY");
        env::remove_var("CACHE_MAX_ENTRY_SIZE_BYTES");
        env::remove_var("CACHE_SHARDS");
        env::remove_var("SERVER_PORT");
        env::remove_var("METRICS_INTERVAL");

        assert_eq!(Config::from_env(), Ok(Config::default()));

        env::set_var("CACHE_CAPACITY", "-5");
        assert_eq!(
            Config::from_env(),
            Err(ConfigError::InvalidValue {
                name: "CACHE_CAPACITY".to_string(),
                value: "-5".to_string()
            })
        );

        env::set_var("CACHE_CAPACITY", "abc");
        assert!(matches!(
            Config::from_env(),
            Err(ConfigError::InvalidValue { name, .. }) if name == "CACHE_CAPACITY"
        ));

        env::set_var("CACHE_CAPACITY", "250");
        env::set_var("CACHE_MAX_ENTRY_SIZE_BYTES", "4096");
        let config = Config::from_env().unwrap();
        assert_eq!(config.capacity, 250);
        assert_eq!(config.max_entry_size_bytes, 4096);

        env::remove_var("CACHE_CAPACITY");
        env::remove_var("CACHE_MAX_ENTRY_SIZE_BYTES");
    }

    #[test]
    fn test_env_or_parses_and_rejects_garbage() {
        env::set_var("TITAN_TEST_NUMBER", " 42 ");
        env::set_var("TITAN_TEST_GARBAGE", "forty-two");

        assert_eq!(env_or("TITAN_TEST_NUMBER", 7usize), Ok(42));
        assert_eq!(
            env_or("TITAN_TEST_GARBAGE", 7usize),
            Err(ConfigError::InvalidValue {
                name: "TITAN_TEST_GARBAGE".to_string(),
                value: "forty-two".to_string()
            })
        );
        assert_eq!(env_or("TITAN_TEST_MISSING", 7usize), Ok(7));

        env::remove_var("TITAN_TEST_NUMBER");
        env::remove_var("TITAN_TEST_GARBAGE");
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let zero_capacity = Config {
            capacity: 0,
            ..Config::default()
        };
        assert_eq!(zero_capacity.validate(), Err(ConfigError::ZeroCapacity));

        let zero_size = Config {
            max_entry_size_bytes: 0,
            ..Config::default()
        };
        assert_eq!(zero_size.validate(), Err(ConfigError::ZeroEntrySize));

        let too_many_shards = Config {
            capacity: 4,
            shards: 8,
            ..Config::default()
        };
        assert_eq!(
            too_many_shards.validate(),
            Err(ConfigError::InvalidShards {
                shards: 8,
                capacity: 4
            })
        );
    }
}
