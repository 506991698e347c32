//! A single log record and its text layout.

use crate::log_level::LogLevel;
use chrono::{DateTime, Local};

#[derive(Debug, Clone)]
pub(crate) struct LogMessage {
    pub timestamp: DateTime<Local>,
    pub level: LogLevel,
    pub component: Option<String>,
    pub message: String,
}

impl LogMessage {
    pub fn new(level: LogLevel, component: Option<&str>, message: &str) -> Self {
        Self {
            timestamp: Local::now(),
            level,
            component: component.map(str::to_string),
            message: message.to_string(),
        }
    }

    /// `[timestamp] LEVEL [component: X]: message\n`
    pub fn format(&self) -> String {
        let timestamp = self.timestamp.format("%Y-%m-%d %H:%M:%S%.3f");
        match self.component {
            Some(ref component) => format!(
                "[{}] {} [component: {}]: {}\n",
                timestamp, self.level, component, self.message
            ),
            None => format!("[{}] {}: {}\n", timestamp, self.level, self.message),
        }
    }
}
