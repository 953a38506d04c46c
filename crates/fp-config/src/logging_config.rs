use crate::{DEFAULT_LOG_LEVEL, LogLevel};

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: LogLevel,
    /// Colored output when logging to a TTY.
    pub colored: bool,
    /// Optional log file name inside the data directory. None = stderr only.
    pub file: Option<String>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: DEFAULT_LOG_LEVEL,
            colored: true,
            file: None,
        }
    }
}
