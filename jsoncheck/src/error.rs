//! Errors of the command-line driver. Syntax errors in the checked document
//! are not errors here; they are a normal outcome of a check.

use json_tree::ValueError;
use logging::LoggingError;
use std::fmt;
use std::io;

#[derive(Debug)]
pub enum CheckError {
    /// Bad command line
    Usage(String),
    /// Input document could not be read
    Read { input: String, error: io::Error },
    /// Configuration file could not be read or understood
    Config(ConfigError),
    Logging(LoggingError),
}

impl fmt::Display for CheckError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CheckError::Usage(msg) => write!(f, "{}", msg),
            CheckError::Read { input, error } => write!(f, "cannot read {}: {}", input, error),
            CheckError::Config(err) => write!(f, "{}", err),
            CheckError::Logging(err) => write!(f, "cannot set up logging: {}", err),
        }
    }
}

impl std::error::Error for CheckError {}

impl From<ConfigError> for CheckError {
    fn from(err: ConfigError) -> Self {
        CheckError::Config(err)
    }
}

impl From<LoggingError> for CheckError {
    fn from(err: LoggingError) -> Self {
        CheckError::Logging(err)
    }
}

#[derive(Debug)]
pub enum ConfigError {
    Read { path: String, error: io::Error },
    Invalid { path: String, error: ValueError },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Read { path, error } => {
                write!(f, "cannot read config file {}: {}", path, error)
            }
            ConfigError::Invalid { path, error } => {
                write!(f, "invalid config file {}: {}", path, error)
            }
        }
    }
}

impl std::error::Error for ConfigError {}
