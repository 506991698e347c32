//! jsoncheck: validates a JSON document and reports where it breaks.
//!
//! The binary in `main.rs` only wires configuration and logging; the check
//! itself lives here so it can be driven from tests.

pub mod args;
pub mod config;
pub mod error;
pub mod report;

use args::{CliArgs, InputSource, OutputMode};
use config::CheckConfig;
use error::CheckError;
use json_tree::{ParseError, Parser, ParserOptions, to_string_pretty};
use logging::{LogLevel, Logger};
use report::{DocumentStats, render_diagnostic};
use std::fs;
use std::io::{self, Read};
use std::path::Path;

pub const EXIT_VALID: i32 = 0;
pub const EXIT_INVALID: i32 = 1;
pub const EXIT_FAILURE: i32 = 2;

/// Result of checking one document.
#[derive(Debug)]
pub enum Outcome {
    /// Text to print on stdout.
    Valid { output: String },
    /// Caret diagnostic for stderr.
    Invalid {
        diagnostic: String,
        error: ParseError,
    },
}

impl Outcome {
    pub fn exit_code(&self) -> i32 {
        match self {
            Outcome::Valid { .. } => EXIT_VALID,
            Outcome::Invalid { .. } => EXIT_INVALID,
        }
    }
}

/// Parses `text` and renders it according to `mode`.
pub fn check(
    source_name: &str,
    text: String,
    mode: OutputMode,
    options: ParserOptions,
    logger: &Logger,
) -> Outcome {
    let mut parser = Parser::with_options(text, options).with_logger(logger.for_component("Parser"));

    match parser.parse() {
        Ok(document) => {
            let output = match mode {
                OutputMode::Summary => DocumentStats::collect(document).to_string(),
                OutputMode::Compact => document.to_string(),
                OutputMode::Pretty => to_string_pretty(document),
            };
            Outcome::Valid { output }
        }
        Err(error) => Outcome::Invalid {
            diagnostic: render_diagnostic(source_name, parser.input(), &error),
            error,
        },
    }
}

/// Reads the whole input document.
pub fn read_input(source: &InputSource) -> Result<String, CheckError> {
    let read_error = |error| CheckError::Read {
        input: source.display_name(),
        error,
    };
    match source {
        InputSource::Stdin => {
            let mut text = String::new();
            io::stdin().read_to_string(&mut text).map_err(read_error)?;
            Ok(text)
        }
        InputSource::File(path) => fs::read_to_string(path).map_err(read_error),
    }
}

/// Loads the config file named by `--config` or by `env_value`, or returns
/// default values when neither is set.
pub fn load_config(args: &CliArgs, env_value: Option<String>) -> Result<CheckConfig, CheckError> {
    match CheckConfig::locate(args.config_path.as_deref(), env_value) {
        Some(path) => Ok(CheckConfig::load_from_file(&path)?),
        None => Ok(CheckConfig::default()),
    }
}

/// Initializes the main logger from configuration
pub fn initialize_logger(config: &CheckConfig) -> Result<Logger, CheckError> {
    let log_level: LogLevel = config.logging.log_level.parse()?;
    let log_path = config.logging.log_file_path.as_deref().map(Path::new);

    Ok(Logger::with_component(
        log_path,
        log_level,
        Some("Main"),
        config.logging.enable_console,
    )?)
}

/// Depth limit from the command line, else from the config file.
pub fn effective_options(args: &CliArgs, config: &CheckConfig) -> ParserOptions {
    let mut options = config.parser.to_options();
    if let Some(depth) = args.max_depth {
        options.max_depth = depth;
    }
    options
}

/// Runs one check and returns the process exit code.
pub fn run(args: &CliArgs, config: &CheckConfig, logger: &Logger) -> i32 {
    let source_name = args.input.display_name();

    let text = match read_input(&args.input) {
        Ok(text) => text,
        Err(e) => {
            logger.error(&e.to_string());
            eprintln!("jsoncheck: {}", e);
            return EXIT_FAILURE;
        }
    };

    logger.info(&format!("Checking {} ({} bytes)", source_name, text.len()));

    let outcome = check(
        &source_name,
        text,
        args.mode,
        effective_options(args, config),
        logger,
    );
    match &outcome {
        Outcome::Valid { output } => {
            logger.info(&format!("{} is valid", source_name));
            println!("{}", output);
        }
        Outcome::Invalid { diagnostic, error } => {
            logger.warn(&format!("{} is invalid: {}", source_name, error));
            eprintln!("{}", diagnostic);
        }
    }
    outcome.exit_code()
}
