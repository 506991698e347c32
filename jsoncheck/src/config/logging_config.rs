use json_tree::impl_from_json;

/// Logging configuration
#[derive(Debug, Clone, PartialEq)]
pub struct LoggingConfig {
    /// No file logging when absent.
    pub log_file_path: Option<String>,
    pub log_level: String,
    pub enable_console: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        LoggingConfig {
            log_file_path: None,
            log_level: "warn".to_string(),
            enable_console: true,
        }
    }
}

impl_from_json! {
    LoggingConfig {
        log_file_path: Option<String>,
        log_level: String,
        enable_console: bool,
    }
}
