use std::path::PathBuf;

use crate::error::CliError;

pub const USAGE: &str = "\
Usage: nhledit [FILES...] [OPTIONS]
  FILES                      Item scripts, compiled in order
  -b, --base <path>          Start from an existing layer file
  -o, --output <path>        Write the compiled layer to <path>
      --drop-group <n>       Items per printed drop command (default: 4)
      --drop-command <pfx>   Prefix for printed drop commands (default: !)
      --stack-sizes <path>   Stack size table (default: res/stacksize.txt)
      --config <path>        Load a RON run configuration
      --json                 Print the drop report as JSON
  -h, --help                 Show this help";

/// Command-line values. Anything left as None falls back to the run
/// configuration and then to the built-in defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CliArgs {
    pub scripts: Vec<PathBuf>,
    pub base: Option<PathBuf>,
    pub output: Option<PathBuf>,
    pub drop_group: Option<usize>,
    pub drop_command: Option<String>,
    pub stack_sizes: Option<PathBuf>,
    pub config: Option<PathBuf>,
    pub json: bool,
    pub help: bool,
}

/// Parse arguments, without the program name.
pub fn parse_args(args: &[String]) -> Result<CliArgs, CliError> {
    let mut parsed = CliArgs::default();

    let mut i = 0;
    while i < args.len() {
        let arg = args[i].as_str();
        match arg {
            "-b" | "--base" => {
                i += 1;
                parsed.base = Some(PathBuf::from(value(args, i, arg)?));
            }
            "-o" | "--output" => {
                i += 1;
                parsed.output = Some(PathBuf::from(value(args, i, arg)?));
            }
            "--drop-group" => {
                i += 1;
                let raw = value(args, i, arg)?;
                parsed.drop_group = Some(drop_group(arg, raw)?);
            }
            "--drop-command" => {
                i += 1;
                parsed.drop_command = Some(value(args, i, arg)?.to_string());
            }
            "--stack-sizes" => {
                i += 1;
                parsed.stack_sizes = Some(PathBuf::from(value(args, i, arg)?));
            }
            "--config" => {
                i += 1;
                parsed.config = Some(PathBuf::from(value(args, i, arg)?));
            }
            "--json" => parsed.json = true,
            "-h" | "--help" => parsed.help = true,
            other if other.starts_with('-') && other.len() > 1 => {
                return Err(CliError::UnknownArgument(other.to_string()));
            }
            script => parsed.scripts.push(PathBuf::from(script)),
        }
        i += 1;
    }

    Ok(parsed)
}

/// Parse a drop group size. Zero would never emit anything.
fn drop_group(flag: &str, raw: &str) -> Result<usize, CliError> {
    match raw.parse::<usize>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(CliError::InvalidValue {
            flag: flag.to_string(),
            value: raw.to_string(),
        }),
    }
}

fn value<'a>(args: &'a [String], i: usize, flag: &str) -> Result<&'a str, CliError> {
    args.get(i)
        .map(String::as_str)
        .ok_or_else(|| CliError::MissingValue(flag.to_string()))
}
