use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;
use tokio::fs;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    #[serde(default = "default_blocklist_endpoint")]
    pub blocklist_endpoint: String,

    #[serde(default)]
    pub updates: UpdateConfig,

    #[serde(default)]
    pub checker: CheckerConfig,

    #[serde(default)]
    pub api: ApiConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct UpdateConfig {
    #[serde(default = "default_update_interval")]
    pub interval_seconds: u64,
    #[serde(default = "default_request_timeout_ms")]
    pub request_timeout_ms: u64,
}

#[derive(Debug, Deserialize, Clone)]
pub struct CheckerConfig {
    #[serde(default = "default_malicious_domains")]
    pub malicious_domains: Vec<String>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ApiConfig {
    #[serde(default = "default_api_enable")]
    pub enable: bool,
    #[serde(default = "default_api_host")]
    pub host: String,
    #[serde(default = "default_api_port")]
    pub port: u16,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
}

// Defaults
fn default_blocklist_endpoint() -> String {
    "http://localhost:5000/blocklist".to_string()
}
fn default_update_interval() -> u64 {
    60
}
fn default_request_timeout_ms() -> u64 {
    5000
}
fn default_malicious_domains() -> Vec<String> {
    vec![
        "example-malicious.com".to_string(),
        "phishing-site.net".to_string(),
        "bad-site.org".to_string(),
        "youtube.com".to_string(),
    ]
}
fn default_api_enable() -> bool {
    true
}
fn default_api_host() -> String {
    "127.0.0.1".to_string()
}
fn default_api_port() -> u16 {
    5000
}
fn default_log_level() -> String {
    "info".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            blocklist_endpoint: default_blocklist_endpoint(),
            updates: UpdateConfig::default(),
            checker: CheckerConfig::default(),
            api: ApiConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl Default for UpdateConfig {
    fn default() -> Self {
        Self {
            interval_seconds: default_update_interval(),
            request_timeout_ms: default_request_timeout_ms(),
        }
    }
}

impl Default for CheckerConfig {
    fn default() -> Self {
        Self {
            malicious_domains: default_malicious_domains(),
        }
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            enable: default_api_enable(),
            host: default_api_host(),
            port: default_api_port(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

impl Config {
    pub async fn load(path: impl AsRef<Path>) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .await
            .context("Failed to read config file")?;
        let config: Config = toml::from_str(&contents).context("Failed to parse config TOML")?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.blocklist_endpoint, "http://localhost:5000/blocklist");
        assert_eq!(config.updates.interval_seconds, 60);
        assert_eq!(config.api.port, 5000);
        assert!(config
            .checker
            .malicious_domains
            .contains(&"bad-site.org".to_string()));
    }

    #[test]
    fn test_parse_partial_toml() {
        let toml_str = r#"
            blocklist_endpoint = "http://127.0.0.1:9000/blocklist"

            [updates]
            interval_seconds = 5
        "#;
        let config: Config = toml::from_str(toml_str).unwrap();
        assert_eq!(config.blocklist_endpoint, "http://127.0.0.1:9000/blocklist");
        assert_eq!(config.updates.interval_seconds, 5);
        // Unspecified sections fall back to defaults
        assert_eq!(config.updates.request_timeout_ms, 5000);
        assert_eq!(config.checker.malicious_domains.len(), 4);
        assert!(config.api.enable);
    }

    #[tokio::test]
    async fn test_load_from_file() {
        use std::io::Write;
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "blocklist_endpoint = \"http://localhost:5001/bl\"").unwrap();

        let config = Config::load(file.path()).await.unwrap();
        assert_eq!(config.blocklist_endpoint, "http://localhost:5001/bl");
    }
}
