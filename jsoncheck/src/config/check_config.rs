use json_tree::{from_str, impl_from_json};
use std::fs;
use std::path::{Path, PathBuf};

use crate::config::{LoggingConfig, ParserConfig};
use crate::error::ConfigError;

/// Environment variable naming a config file when `--config` is not given.
pub const CONFIG_ENV_VAR: &str = "JSONCHECK_CONFIG";

/// jsoncheck configuration
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CheckConfig {
    pub parser: ParserConfig,
    pub logging: LoggingConfig,
}

impl_from_json! {
    CheckConfig {
        parser: ParserConfig,
        logging: LoggingConfig,
    }
}

impl CheckConfig {
    /// Load configuration from a JSON file
    pub fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|error| ConfigError::Read {
            path: path.display().to_string(),
            error,
        })?;
        from_str(&content).map_err(|error| ConfigError::Invalid {
            path: path.display().to_string(),
            error,
        })
    }

    /// Picks the config file to use: the explicit path first, then the
    /// environment variable's value. None means built-in defaults.
    pub fn locate(explicit: Option<&Path>, env_value: Option<String>) -> Option<PathBuf> {
        explicit
            .map(Path::to_path_buf)
            .or_else(|| env_value.filter(|v| !v.is_empty()).map(PathBuf::from))
    }
}
