//! Configuration for the stock selection tool

use crate::error::{Result, SelectorError};
use std::path::PathBuf;
use std::time::Duration;

/// Environment variable overriding the credential file location
pub const ENV_USER_FILE: &str = "STOCK_SELECTOR_USER_FILE";
/// Environment variable overriding the saved-results directory
pub const ENV_RESULTS_DIR: &str = "STOCK_SELECTOR_RESULTS_DIR";
/// Environment variable overriding the price cache TTL, in seconds
pub const ENV_CACHE_TTL_SECS: &str = "STOCK_SELECTOR_CACHE_TTL_SECS";

/// Configuration for the stock selection tool
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectorConfig {
    /// CSV file holding `Email,Password` rows
    pub user_file: PathBuf,

    /// Directory holding one `<user>_<ticker>.csv` per saved analysis
    pub results_dir: PathBuf,

    /// How long fetched price series are reused
    pub cache_ttl: Duration,

    /// Whether fetched price series are cached at all
    pub cache_enabled: bool,
}

impl Default for SelectorConfig {
    fn default() -> Self {
        Self {
            user_file: PathBuf::from("users.csv"),
            results_dir: PathBuf::from("stock_data"),
            cache_ttl: Duration::from_secs(300), // 5 minutes
            cache_enabled: true,
        }
    }
}

impl SelectorConfig {
    /// Create a new configuration builder
    pub fn builder() -> SelectorConfigBuilder {
        SelectorConfigBuilder::default()
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.user_file.as_os_str().is_empty() {
            return Err(SelectorError::ConfigError(
                "user_file must not be empty".to_string(),
            ));
        }

        if self.results_dir.as_os_str().is_empty() {
            return Err(SelectorError::ConfigError(
                "results_dir must not be empty".to_string(),
            ));
        }

        if self.cache_enabled && self.cache_ttl.is_zero() {
            return Err(SelectorError::ConfigError(
                "cache_ttl must be greater than 0 when caching is enabled".to_string(),
            ));
        }

        Ok(())
    }
}

/// Builder for SelectorConfig
#[derive(Debug, Default)]
pub struct SelectorConfigBuilder {
    user_file: Option<PathBuf>,
    results_dir: Option<PathBuf>,
    cache_ttl: Option<Duration>,
    cache_enabled: Option<bool>,
}

impl SelectorConfigBuilder {
    /// Set the credential file
    pub fn user_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.user_file = Some(path.into());
        self
    }

    /// Set the saved-results directory
    pub fn results_dir(mut self, path: impl Into<PathBuf>) -> Self {
        self.results_dir = Some(path.into());
        self
    }

    /// Set the price cache TTL
    pub fn cache_ttl(mut self, duration: Duration) -> Self {
        self.cache_ttl = Some(duration);
        self
    }

    /// Enable or disable the price cache
    pub fn cache_enabled(mut self, enabled: bool) -> Self {
        self.cache_enabled = Some(enabled);
        self
    }

    /// Set the price cache TTL in seconds; 0 disables the cache
    pub fn cache_ttl_secs(self, secs: u64) -> Self {
        self.cache_ttl(Duration::from_secs(secs))
            .cache_enabled(secs > 0)
    }

    /// Load overrides from `STOCK_SELECTOR_*` environment variables
    ///
    /// Unparseable TTL values are ignored with a warning.
    pub fn with_env(self) -> Self {
        self.with_vars(|key| std::env::var(key).ok())
    }

    fn with_vars(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(path) = lookup(ENV_USER_FILE) {
            self.user_file = Some(path.into());
        }
        if let Some(path) = lookup(ENV_RESULTS_DIR) {
            self.results_dir = Some(path.into());
        }
        if let Some(raw) = lookup(ENV_CACHE_TTL_SECS) {
            match raw.trim().parse::<u64>() {
                Ok(secs) => self = self.cache_ttl_secs(secs),
                Err(e) => tracing::warn!(value = %raw, error = %e, "Ignoring invalid {}", ENV_CACHE_TTL_SECS),
            }
        }
        self
    }

    /// Build the configuration
    pub fn build(self) -> Result<SelectorConfig> {
        let defaults = SelectorConfig::default();

        let config = SelectorConfig {
            user_file: self.user_file.unwrap_or(defaults.user_file),
            results_dir: self.results_dir.unwrap_or(defaults.results_dir),
            cache_ttl: self.cache_ttl.unwrap_or(defaults.cache_ttl),
            cache_enabled: self.cache_enabled.unwrap_or(defaults.cache_enabled),
        };

        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_default_config() {
        let config = SelectorConfig::default();
        assert_eq!(config.user_file, PathBuf::from("users.csv"));
        assert_eq!(config.results_dir, PathBuf::from("stock_data"));
        assert!(config.cache_enabled);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_builder() {
        let config = SelectorConfig::builder()
            .user_file("/tmp/accounts.csv")
            .results_dir("/tmp/results")
            .cache_ttl(Duration::from_secs(60))
            .build()
            .unwrap();

        assert_eq!(config.user_file, PathBuf::from("/tmp/accounts.csv"));
        assert_eq!(config.results_dir, PathBuf::from("/tmp/results"));
        assert_eq!(config.cache_ttl, Duration::from_secs(60));
    }

    #[test]
    fn test_validation_empty_paths() {
        let config = SelectorConfig {
            user_file: PathBuf::new(),
            ..Default::default()
        };
        assert!(config.validate().is_err());

        let config = SelectorConfig {
            results_dir: PathBuf::new(),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    fn vars(pairs: &[(&'static str, &'static str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<&str, &str> = pairs.iter().copied().collect();
        move |key: &str| map.get(key).map(|v| (*v).to_string())
    }

    #[test]
    fn test_env_overrides() {
        let config = SelectorConfig::builder()
            .with_vars(vars(&[
                (ENV_USER_FILE, "/data/users.csv"),
                (ENV_RESULTS_DIR, "/data/results"),
                (ENV_CACHE_TTL_SECS, " 60 "),
            ]))
            .build()
            .unwrap();

        assert_eq!(config.user_file, PathBuf::from("/data/users.csv"));
        assert_eq!(config.results_dir, PathBuf::from("/data/results"));
        assert_eq!(config.cache_ttl, Duration::from_secs(60));
        assert!(config.cache_enabled);
    }

    #[test]
    fn test_env_zero_ttl_disables_cache() {
        let config = SelectorConfig::builder()
            .with_vars(vars(&[(ENV_CACHE_TTL_SECS, "0")]))
            .build()
            .unwrap();

        assert!(!config.cache_enabled);
        assert_eq!(config.cache_ttl, Duration::ZERO);
    }

    #[test]
    fn test_env_invalid_ttl_is_ignored() {
        let config = SelectorConfig::builder()
            .with_vars(vars(&[(ENV_CACHE_TTL_SECS, "soon")]))
            .build()
            .unwrap();

        assert_eq!(config.cache_ttl, SelectorConfig::default().cache_ttl);
    }

    #[test]
    fn test_cache_ttl_secs() {
        let config = SelectorConfig::builder().cache_ttl_secs(0).build().unwrap();
        assert!(!config.cache_enabled);

        let config = SelectorConfig::builder().cache_ttl_secs(30).build().unwrap();
        assert!(config.cache_enabled);
        assert_eq!(config.cache_ttl, Duration::from_secs(30));
    }

    #[test]
    fn test_validation_zero_ttl() {
        let result = SelectorConfig::builder()
            .cache_ttl(Duration::ZERO)
            .build();
        assert!(matches!(result, Err(SelectorError::ConfigError(_))));

        let config = SelectorConfig::builder()
            .cache_ttl(Duration::ZERO)
            .cache_enabled(false)
            .build();
        assert!(config.is_ok());
    }
}
