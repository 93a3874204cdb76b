use std::path::{Path, PathBuf};

use ron::extensions::Extensions;
use serde::{Deserialize, Serialize};

use crate::args::CliArgs;
use crate::error::CliError;

pub const DEFAULT_DROP_GROUP: usize = 4;
pub const DEFAULT_DROP_COMMAND: &str = "!";
pub const DEFAULT_STACK_SIZES: &str = "res/stacksize.txt";

/// Run configuration loaded from a RON file. Every field is optional.
///
/// ```text
/// (
///     base: "island.nhl",
///     scripts: ["shop.txt", "museum.txt"],
///     drop_group: 8,
/// )
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RunConfig {
    pub base: Option<PathBuf>,
    pub output: Option<PathBuf>,
    pub scripts: Vec<PathBuf>,
    pub stack_sizes: Option<PathBuf>,
    pub drop_group: Option<usize>,
    pub drop_command: Option<String>,
}

impl RunConfig {
    /// Parse a configuration. Optional fields may be written bare or as
    /// `Some(..)`.
    pub fn from_ron_str(ron_str: &str) -> Result<Self, String> {
        let options = ron::Options::default().with_default_extension(Extensions::IMPLICIT_SOME);
        options.from_str(ron_str).map_err(|e| e.to_string())
    }

    /// Read and parse a configuration file.
    pub fn load(path: &Path) -> Result<Self, CliError> {
        let text = std::fs::read_to_string(path).map_err(|e| CliError::io(path, e))?;
        let config = Self::from_ron_str(&text).map_err(|message| CliError::Config {
            path: path.to_path_buf(),
            message,
        })?;
        log::info!("Loaded run config from {}", path.display());
        Ok(config)
    }
}

/// Fully resolved settings for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSettings {
    pub base: Option<PathBuf>,
    pub output: Option<PathBuf>,
    pub scripts: Vec<PathBuf>,
    pub stack_sizes: PathBuf,
    pub drop_group: usize,
    pub drop_command: String,
    pub json: bool,
}

impl RunSettings {
    /// Merge command-line values over a configuration. Scripts named on the
    /// command line run after the configured ones.
    pub fn resolve(config: RunConfig, args: CliArgs) -> Result<Self, CliError> {
        let drop_group = match (args.drop_group, config.drop_group) {
            (Some(n), _) => n,
            (None, Some(0)) => {
                return Err(CliError::InvalidValue {
                    flag: "drop_group".to_string(),
                    value: "0".to_string(),
                })
            }
            (None, Some(n)) => n,
            (None, None) => DEFAULT_DROP_GROUP,
        };

        let mut scripts = config.scripts;
        scripts.extend(args.scripts);

        Ok(Self {
            base: args.base.or(config.base),
            output: args.output.or(config.output),
            scripts,
            stack_sizes: args
                .stack_sizes
                .or(config.stack_sizes)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_STACK_SIZES)),
            drop_group,
            drop_command: args
                .drop_command
                .or(config.drop_command)
                .unwrap_or_else(|| DEFAULT_DROP_COMMAND.to_string()),
            json: args.json,
        })
    }
}
