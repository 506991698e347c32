//! Checker configuration

pub mod check_config;
pub mod logging_config;
pub mod parser_config;

pub use check_config::{CONFIG_ENV_VAR, CheckConfig};
pub use logging_config::LoggingConfig;
pub use parser_config::ParserConfig;
