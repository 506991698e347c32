//! Destination of formatted log lines.

use crate::error::Result;
use crate::log_message::LogMessage;
use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::Path;

/// Writes each record to an append-mode file and/or stderr.
///
/// Stdout is left alone so a command can print its own output there.
pub(crate) struct LogWriter {
    file: Option<File>,
    console: bool,
}

impl LogWriter {
    /// Opens (or creates) `log_path` in append mode when one is given.
    pub fn new(log_path: Option<&Path>, console: bool) -> Result<Self> {
        let file = match log_path {
            Some(path) => Some(OpenOptions::new().create(true).append(true).open(path)?),
            None => None,
        };
        Ok(Self { file, console })
    }

    pub fn stderr() -> Self {
        Self {
            file: None,
            console: true,
        }
    }

    pub fn write_message(&mut self, message: &LogMessage) {
        let line = message.format();

        if let Some(ref mut file) = self.file {
            if let Err(e) = file.write_all(line.as_bytes()).and_then(|_| file.flush()) {
                eprintln!("Error writing log: {}", e);
            }
        }

        if self.console {
            let _ = io::stderr().write_all(line.as_bytes());
        }
    }
}
