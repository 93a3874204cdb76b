pub mod args;
pub mod config;
pub mod error;
pub mod report;
pub mod runner;

pub use args::{parse_args, CliArgs, USAGE};
pub use config::{RunConfig, RunSettings};
pub use error::CliError;
pub use runner::run;
