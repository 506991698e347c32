//! Thread-safe logger handle.

use crate::error::Result;
use crate::log_level::LogLevel;
use crate::log_message::LogMessage;
use crate::log_writer::LogWriter;
use std::path::Path;
use std::sync::{Arc, Mutex};

/// Cloneable logger. Clones and [`Logger::for_component`] children share one
/// writer, so lines from different components interleave in a single file.
///
/// Writes are synchronous; a line is on disk when the call returns.
///
/// # Examples
///
/// ```
/// use logging::{LogLevel, Logger};
///
/// let logger = Logger::console(LogLevel::Warn);
/// let parser_log = logger.for_component("Parser");
/// parser_log.debug("filtered out");
/// ```
#[derive(Clone)]
pub struct Logger {
    writer: Arc<Mutex<LogWriter>>,
    level: LogLevel,
    component: Option<String>,
}

impl Logger {
    /// Logs to `log_path` only.
    ///
    /// # Errors
    ///
    /// Returns error if the log file cannot be created or opened.
    pub fn new(log_path: &Path, level: LogLevel) -> Result<Self> {
        Self::with_component(Some(log_path), level, None, false)
    }

    /// Logs to stderr only.
    pub fn console(level: LogLevel) -> Self {
        Logger {
            writer: Arc::new(Mutex::new(LogWriter::stderr())),
            level,
            component: None,
        }
    }

    /// Full constructor: optional file, optional component tag, optional
    /// mirroring to stderr.
    ///
    /// # Errors
    ///
    /// Returns error if the log file cannot be created or opened.
    pub fn with_component(
        log_path: Option<&Path>,
        level: LogLevel,
        component: Option<&str>,
        console_output: bool,
    ) -> Result<Self> {
        let writer = LogWriter::new(log_path, console_output)?;
        Ok(Logger {
            writer: Arc::new(Mutex::new(writer)),
            level,
            component: component.map(str::to_string),
        })
    }

    /// A logger tagged with `component` that writes through the same sink.
    pub fn for_component(&self, component: &str) -> Self {
        Logger {
            writer: Arc::clone(&self.writer),
            level: self.level,
            component: Some(component.to_string()),
        }
    }

    pub fn level(&self) -> LogLevel {
        self.level
    }

    pub fn enabled(&self, level: LogLevel) -> bool {
        level >= self.level
    }

    pub fn trace(&self, message: &str) {
        self.log(LogLevel::Trace, message);
    }

    pub fn debug(&self, message: &str) {
        self.log(LogLevel::Debug, message);
    }

    pub fn info(&self, message: &str) {
        self.log(LogLevel::Info, message);
    }

    pub fn warn(&self, message: &str) {
        self.log(LogLevel::Warn, message);
    }

    pub fn error(&self, message: &str) {
        self.log(LogLevel::Error, message);
    }

    fn log(&self, level: LogLevel, message: &str) {
        if !self.enabled(level) {
            return;
        }
        let record = LogMessage::new(level, self.component.as_deref(), message);
        // Poisoned lock: drop the record
        if let Ok(mut writer) = self.writer.lock() {
            writer.write_message(&record);
        }
    }
}
