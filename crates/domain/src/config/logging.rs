use serde::{Deserialize, Serialize};

const LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Logging configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    /// Log level (default: "warn")
    /// Options: "trace", "debug", "info", "warn", "error"
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl LoggingConfig {
    pub fn is_valid_level(level: &str) -> bool {
        LEVELS.contains(&level.to_ascii_lowercase().as_str())
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

// Rows go to stdout; keep stderr quiet unless asked.
fn default_log_level() -> String {
    "warn".to_string()
}
