mod api_config;
mod config;
mod error;
mod log_level;
mod logging_config;
mod storage_config;

#[cfg(test)]
mod tests;

pub use api_config::ApiConfig;
pub use config::Config;
pub use error::{ConfigError, ConfigResult};
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use storage_config::StorageConfig;

const DEFAULT_API_URL: &str = "http://127.0.0.1:8000";
const DEFAULT_LOG_LEVEL: LogLevel = LogLevel::Info;
const CONFIG_DIR_ENV: &str = "FP_CONFIG_DIR";
const CONFIG_FILE_NAME: &str = "config.toml";
const APP_DIR_NAME: &str = "fp-admin";
