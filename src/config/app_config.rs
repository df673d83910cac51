use std::env;
use std::fs;
use std::path::Path;
use std::sync::OnceLock;
use tracing::error;
use tracing::{debug, warn};

use serde::{Deserialize, Serialize};

static CONFIG: OnceLock<AppConfig> = OnceLock::new();

/// Application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub api: ApiConfig,
    pub http: HttpConfig,
    pub logging: LoggingConfig,
}

/// Remote shorten service configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Shorten endpoint URL
    pub endpoint: String,
    /// Short-link domain sent with every request
    pub domain: String,
    /// Bearer token. Never commit this; prefer the BITSNIP_ACCESS_TOKEN
    /// environment variable or an untracked config file.
    pub access_token: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            endpoint: "https://api-ssl.bitly.com/v4/shorten".to_string(),
            domain: "bit.ly".to_string(),
            access_token: String::new(),
        }
    }
}

/// HTTP transport configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HttpConfig {
    /// Global request timeout in seconds
    pub timeout_secs: u64,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self { timeout_secs: 10 }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level filter (EnvFilter syntax)
    pub level: String,
    /// Log file path; empty or absent logs to stderr
    pub file: Option<String>,
    /// "plain" or "json"
    pub format: String,
    /// Rotate the log file daily
    pub enable_rotation: bool,
    /// Rotated files to keep
    pub max_backups: u32,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            file: None,
            format: "plain".to_string(),
            enable_rotation: true,
            max_backups: 7,
        }
    }
}

impl AppConfig {
    /// Load configuration from TOML file with environment variable fallback
    pub fn load(explicit_path: Option<&str>) -> Self {
        let mut config = Self::load_from_file(explicit_path);
        config.override_with_env();
        config
    }

    /// Load configuration from TOML file
    fn load_from_file(explicit_path: Option<&str>) -> Self {
        let default_paths = [
            "config.toml",
            "bitsnip.toml",
            "config/config.toml",
            "/etc/bitsnip/config.toml",
        ];

        let candidates: Vec<&str> = match explicit_path {
            Some(path) => vec![path],
            None => default_paths.to_vec(),
        };

        for path in candidates {
            if Path::new(path).exists() {
                debug!("Loading config from: {}", path);
                match fs::read_to_string(path) {
                    Ok(content) => match toml::from_str::<AppConfig>(&content) {
                        Ok(config) => {
                            debug!("Successfully loaded config from: {}", path);
                            return config;
                        }
                        Err(e) => {
                            warn!("Failed to parse config file {}: {}", path, e);
                        }
                    },
                    Err(e) => {
                        warn!("Failed to read config file {}: {}", path, e);
                    }
                }
            } else if explicit_path.is_some() {
                warn!("Config file not found: {}", path);
            }
        }

        debug!("No config file found, using defaults");
        Self::default()
    }

    /// Override configuration with environment variables
    fn override_with_env(&mut self) {
        // API config
        if let Ok(endpoint) = env::var("BITSNIP_API_ENDPOINT") {
            self.api.endpoint = endpoint;
        }
        if let Ok(domain) = env::var("BITSNIP_DOMAIN") {
            self.api.domain = domain;
        }
        if let Ok(token) = env::var("BITSNIP_ACCESS_TOKEN") {
            self.api.access_token = token;
        }

        // HTTP config
        if let Ok(timeout) = env::var("HTTP_TIMEOUT_SECS") {
            if let Ok(t) = timeout.parse::<u64>() {
                self.http.timeout_secs = t;
            } else {
                error!("Invalid HTTP_TIMEOUT_SECS: {}", timeout);
            }
        }

        // Logging config
        if let Ok(log_level) = env::var("RUST_LOG") {
            self.logging.level = log_level;
        }
        if let Ok(log_file) = env::var("LOG_FILE") {
            self.logging.file = Some(log_file);
        }
    }

    /// Generate a sample TOML configuration file
    pub fn generate_sample_config() -> String {
        let sample_config = AppConfig::default();
        toml::to_string_pretty(&sample_config)
            .unwrap_or_else(|e| format!("Error generating sample config: {}", e))
    }

    /// Save current configuration to a TOML file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> crate::errors::Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| crate::errors::BitsnipError::serialization(e.to_string()))?;
        fs::write(path, content)?;
        Ok(())
    }
}

// Global configuration instance

/// Get the global configuration instance
pub fn get_config() -> &'static AppConfig {
    CONFIG.get_or_init(|| AppConfig::load(None))
}

/// Initialize the global configuration from an explicit file path
pub fn init_config_with(path: Option<&str>) -> &'static AppConfig {
    CONFIG.get_or_init(|| AppConfig::load(path))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_api_config() {
        let config = AppConfig::default();
        assert_eq!(config.api.endpoint, "https://api-ssl.bitly.com/v4/shorten");
        assert_eq!(config.api.domain, "bit.ly");
        assert!(config.api.access_token.is_empty());
    }

    #[test]
    fn test_sample_config_round_trips() {
        let sample = AppConfig::generate_sample_config();
        let parsed: AppConfig = toml::from_str(&sample).unwrap();
        assert_eq!(parsed.api.domain, "bit.ly");
        assert_eq!(parsed.http.timeout_secs, 10);
        assert_eq!(parsed.logging.level, "info");
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let parsed: AppConfig = toml::from_str(
            r#"
            [api]
            access_token = "secret"
            "#,
        )
        .unwrap();
        assert_eq!(parsed.api.access_token, "secret");
        assert_eq!(parsed.api.domain, "bit.ly");
        assert_eq!(parsed.http.timeout_secs, 10);
    }
}
