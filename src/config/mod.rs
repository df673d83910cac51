//! Configuration management
//!
//! Configuration is loaded from a TOML file with environment variable
//! fallback, then frozen in a process-wide instance.

mod app_config;

pub use app_config::{ApiConfig, AppConfig, HttpConfig, LoggingConfig};
pub use app_config::{get_config, init_config_with};
