use serde::Deserialize;
use std::path::Path;
use std::time::Duration;
use thiserror::Error;

pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8080";
pub const DEFAULT_TIMEOUT_MS: u64 = 10_000;

/// Transport configuration for the account service. The workflow layer never
/// reads this directly; it only shapes the HTTP client.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    pub base_url: String,
    pub timeout_ms: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_ms: DEFAULT_TIMEOUT_MS,
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config file: {0}")]
    Parse(#[from] serde_yaml::Error),
}

impl Config {
    /// Load from `$ONBOARD_CONFIG`, falling back to `./onboard.yaml`.
    /// A missing file means defaults, not an error.
    pub fn load() -> Result<Self, ConfigError> {
        let path = std::env::var("ONBOARD_CONFIG").unwrap_or_else(|_| "onboard.yaml".to_string());
        Self::load_path(Path::new(&path))
    }

    pub fn load_path(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let raw = std::fs::read_to_string(path)?;
        Ok(serde_yaml::from_str(&raw)?)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms.max(1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_partial_yaml_with_defaults() {
        let config: Config = serde_yaml::from_str("base_url: http://acct.test:9000\n").unwrap();
        assert_eq!(config.base_url, "http://acct.test:9000");
        assert_eq!(config.timeout_ms, DEFAULT_TIMEOUT_MS);
    }

    #[test]
    fn missing_file_yields_defaults() {
        let config = Config::load_path(Path::new("does-not-exist.yaml")).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn timeout_is_clamped_to_at_least_one_ms() {
        let config = Config {
            timeout_ms: 0,
            ..Config::default()
        };
        assert_eq!(config.timeout(), Duration::from_millis(1));
    }
}
