//! Configuration types for the reputation checker.

use crate::providers::abuseipdb::CHECK_ENDPOINT_URL;
use crate::risk::DEFAULT_THRESHOLD;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Root configuration.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Config {
    /// AbuseIPDB connection settings.
    #[serde(default)]
    pub abuseipdb: AbuseIPDBConfig,

    /// Risk thresholds.
    #[serde(default)]
    pub thresholds: Thresholds,
}

/// AbuseIPDB connection settings.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct AbuseIPDBConfig {
    /// API key (supports ${ENV_VAR} syntax).
    #[serde(default)]
    pub api_key: Option<String>,

    /// Check endpoint URL.
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    /// Request timeout in seconds.
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u64,
}

impl Default for AbuseIPDBConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            endpoint: default_endpoint(),
            timeout_seconds: default_timeout(),
        }
    }
}

impl AbuseIPDBConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }
}

fn default_endpoint() -> String {
    CHECK_ENDPOINT_URL.to_string()
}

fn default_timeout() -> u64 {
    60
}

/// Risk thresholds.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Thresholds {
    /// `HIGH` risk if score >= this value.
    #[serde(default = "default_confidence")]
    pub confidence: f64,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            confidence: default_confidence(),
        }
    }
}

fn default_confidence() -> f64 {
    DEFAULT_THRESHOLD
}

impl Config {
    /// Load configuration from a YAML file.
    pub fn load(path: &std::path::Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Parse configuration from YAML text after expanding ${VAR} references.
    pub fn from_yaml(content: &str) -> anyhow::Result<Self> {
        let expanded = expand_env_vars(content)?;
        let config: Config = serde_yaml::from_str(&expanded)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration.
    pub fn validate(&self) -> anyhow::Result<()> {
        if !self.thresholds.confidence.is_finite() {
            anyhow::bail!(
                "confidence threshold must be a finite number, got {}",
                self.thresholds.confidence
            );
        }

        if self.abuseipdb.timeout_seconds == 0 {
            anyhow::bail!("timeout_seconds must be greater than zero");
        }

        let endpoint = &self.abuseipdb.endpoint;
        if !endpoint.starts_with("http://") && !endpoint.starts_with("https://") {
            anyhow::bail!("endpoint must be an http(s) URL: {}", endpoint);
        }

        Ok(())
    }

    /// Generate example configuration YAML.
    pub fn example() -> String {
        r#"# IP reputation check configuration
#
# Command-line flags and environment variables override these values.

abuseipdb:
  api_key: "${ABUSEIPDB_API_KEY}"   # Use environment variable
  endpoint: "https://api.abuseipdb.com/api/v2/check"
  timeout_seconds: 60

thresholds:
  confidence: 70                    # HIGH risk if score >= 70
"#
        .to_string()
    }
}

/// Expand environment variables in the format ${VAR_NAME}.
fn expand_env_vars(content: &str) -> anyhow::Result<String> {
    let re = regex::Regex::new(r"\$\{([^}]+)\}")?;
    let expanded = re.replace_all(content, |caps: &regex::Captures| {
        std::env::var(&caps[1]).unwrap_or_default()
    });
    Ok(expanded.into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert!(config.abuseipdb.api_key.is_none());
        assert_eq!(config.abuseipdb.endpoint, CHECK_ENDPOINT_URL);
        assert_eq!(config.abuseipdb.timeout(), Duration::from_secs(60));
        assert_eq!(config.thresholds.confidence, 70.0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_expand_env_vars() {
        std::env::set_var("IPREP_TEST_API_KEY", "secret123");
        let result = expand_env_vars("api_key: \"${IPREP_TEST_API_KEY}\"").unwrap();
        assert_eq!(result, "api_key: \"secret123\"");
        std::env::remove_var("IPREP_TEST_API_KEY");
    }

    #[test]
    fn test_expand_env_vars_missing() {
        let result = expand_env_vars("api_key: \"${IPREP_NONEXISTENT_VAR}\"").unwrap();
        assert_eq!(result, "api_key: \"\"");
    }

    #[test]
    fn test_parse_config_yaml() {
        let yaml = r#"
abuseipdb:
  api_key: "abc"
  timeout_seconds: 5

thresholds:
  confidence: 55.5
"#;
        let config = Config::from_yaml(yaml).unwrap();
        assert_eq!(config.abuseipdb.api_key.as_deref(), Some("abc"));
        assert_eq!(config.abuseipdb.timeout_seconds, 5);
        assert_eq!(config.abuseipdb.endpoint, CHECK_ENDPOINT_URL);
        assert_eq!(config.thresholds.confidence, 55.5);
    }

    #[test]
    fn test_parse_empty_sections() {
        let config = Config::from_yaml("thresholds: {}\n").unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_example_parses() {
        let config = Config::from_yaml(&Config::example()).unwrap();
        assert_eq!(config.thresholds.confidence, 70.0);
        assert_eq!(config.abuseipdb.timeout_seconds, 60);
    }

    #[test]
    fn test_validate_timeout() {
        let mut config = Config::default();
        config.abuseipdb.timeout_seconds = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_endpoint() {
        let mut config = Config::default();
        config.abuseipdb.endpoint = "ftp://example.com".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_threshold() {
        let mut config = Config::default();
        config.thresholds.confidence = f64::NAN;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_invalid_field_type_rejected() {
        let config = Config::from_yaml("abuseipdb:\n  timeout_seconds: \"soon\"\n");
        assert!(config.is_err());
    }
}
