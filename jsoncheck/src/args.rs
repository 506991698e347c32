//! Command-line parsing

use crate::error::CheckError;
use std::path::PathBuf;

pub const USAGE: &str = "\
Usage: jsoncheck [OPTIONS] [FILE|-]

Checks that FILE (or standard input) holds one well-formed JSON document.

Options:
  --summary          Print root type and value counts (default)
  --compact          Print the document re-serialized on one line
  --pretty           Print the document re-serialized with indentation
  --max-depth N      Maximum nesting depth of arrays and objects
  --config PATH      Read settings from a JSON config file
  -h, --help         Show this message";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    #[default]
    Summary,
    Compact,
    Pretty,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum InputSource {
    #[default]
    Stdin,
    File(PathBuf),
}

impl InputSource {
    /// Name used in diagnostics.
    pub fn display_name(&self) -> String {
        match self {
            InputSource::Stdin => "<stdin>".to_string(),
            InputSource::File(path) => path.display().to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CliArgs {
    pub mode: OutputMode,
    pub input: InputSource,
    /// Overrides the configured depth limit.
    pub max_depth: Option<usize>,
    pub config_path: Option<PathBuf>,
    pub help: bool,
}

/// Parses arguments, excluding the program name.
pub fn parse_args<I>(args: I) -> Result<CliArgs, CheckError>
where
    I: IntoIterator<Item = String>,
{
    let mut parsed = CliArgs::default();
    let mut input: Option<InputSource> = None;
    let mut args = args.into_iter();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-h" | "--help" => parsed.help = true,
            "--summary" => parsed.mode = OutputMode::Summary,
            "--compact" => parsed.mode = OutputMode::Compact,
            "--pretty" => parsed.mode = OutputMode::Pretty,
            "--max-depth" => {
                let raw = option_value(&mut args, "--max-depth")?;
                let depth = raw.parse::<usize>().map_err(|_| {
                    CheckError::Usage(format!("invalid value for --max-depth: {}", raw))
                })?;
                parsed.max_depth = Some(depth);
            }
            "--config" => {
                parsed.config_path = Some(PathBuf::from(option_value(&mut args, "--config")?));
            }
            "-" => set_input(&mut input, InputSource::Stdin)?,
            other if other.starts_with('-') => {
                return Err(CheckError::Usage(format!("unknown option: {}", other)));
            }
            path => set_input(&mut input, InputSource::File(PathBuf::from(path)))?,
        }
    }

    parsed.input = input.unwrap_or_default();
    Ok(parsed)
}

fn option_value<I>(args: &mut I, name: &str) -> Result<String, CheckError>
where
    I: Iterator<Item = String>,
{
    args.next()
        .ok_or_else(|| CheckError::Usage(format!("missing value for {}", name)))
}

fn set_input(slot: &mut Option<InputSource>, source: InputSource) -> Result<(), CheckError> {
    if slot.is_some() {
        return Err(CheckError::Usage("only one input may be given".to_string()));
    }
    *slot = Some(source);
    Ok(())
}
