use thiserror::Error;

use crate::compiler::Compiler;
use crate::error::ScriptError;
use crate::script::parse_script;

/// A named script text, e.g. the contents of one script file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptSource {
    pub name: String,
    pub text: String,
}

impl ScriptSource {
    pub fn new(name: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            text: text.into(),
        }
    }
}

/// A script failure located in its source.
#[derive(Debug, Error)]
pub enum RunError {
    #[error("{script}:{line}: `{command}`: {error}")]
    Script {
        script: String,
        line: usize,
        command: String,
        #[source]
        error: ScriptError,
    },
}

/// Totals for a completed run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub sources: usize,
    pub commands: usize,
}

/// Compile each source in order. Every source starts from the default
/// context; the first failing command aborts the run, leaving cells written
/// before it in place.
pub fn run_sources(
    compiler: &mut Compiler,
    sources: &[ScriptSource],
) -> Result<RunSummary, RunError> {
    let mut summary = RunSummary::default();

    for source in sources {
        compiler.reset_context();
        let lines = parse_script(&source.text);
        log::info!("Running {} ({} commands)", source.name, lines.len());

        for line in &lines {
            compiler
                .apply_command(&line.tokens)
                .map_err(|error| RunError::Script {
                    script: source.name.clone(),
                    line: line.number,
                    command: line.text(),
                    error,
                })?;
        }

        summary.sources += 1;
        summary.commands += lines.len();
    }

    log::info!(
        "Compiled {} commands from {} scripts, {} items placed",
        summary.commands,
        summary.sources,
        compiler.layer().placed_count()
    );
    Ok(summary)
}
