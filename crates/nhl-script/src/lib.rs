pub mod compiler;
pub mod context;
pub mod error;
pub mod grammar;
pub mod loader;
pub mod runner;
pub mod script;

pub use compiler::Compiler;
pub use context::{ContextModes, PlacementContext};
pub use error::{ScriptError, StackTableError};
pub use grammar::{parse_command, Command};
pub use loader::{load_stack_sizes, parse_stack_sizes};
pub use runner::{run_sources, RunError, RunSummary, ScriptSource};
pub use script::{parse_script, ScriptLine};
