use std::io::{self, Write};
use std::path::{Path, PathBuf};

use nhl_core::ItemLayer;
use nhl_script::{load_stack_sizes, run_sources, Compiler, ScriptSource};

use crate::args::CliArgs;
use crate::config::{RunConfig, RunSettings};
use crate::error::CliError;
use crate::report::DropReport;

/// Run `nhledit` end to end. Drop commands (or the JSON report) go to `out`
/// unless an output layer path is set.
pub fn run(args: CliArgs, out: &mut impl Write) -> Result<(), CliError> {
    let config = match &args.config {
        Some(path) => RunConfig::load(path)?,
        None => RunConfig::default(),
    };
    let settings = RunSettings::resolve(config, args)?;

    let layer = load_base(settings.base.as_deref())?;
    let stack_sizes = load_stack_sizes(&settings.stack_sizes)?;
    let sources = read_sources(&settings.scripts)?;

    let mut compiler = Compiler::new(layer, stack_sizes);
    run_sources(&mut compiler, &sources)?;
    let layer = compiler.into_layer();

    match &settings.output {
        Some(path) => {
            std::fs::write(path, nhl_persist::save(&layer)).map_err(|e| CliError::io(path, e))?;
            log::info!(
                "Wrote {} items to {}",
                layer.placed_count(),
                path.display()
            );
        }
        None => write_report(&layer, &settings, out)?,
    }
    Ok(())
}

/// Load the starting layer. A missing file starts from an empty layer.
pub fn load_base(path: Option<&Path>) -> Result<ItemLayer, CliError> {
    let Some(path) = path else {
        return Ok(ItemLayer::new());
    };

    let bytes = match std::fs::read(path) {
        Ok(bytes) => bytes,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            log::warn!(
                "Base layer not found: {}, starting empty",
                path.display()
            );
            return Ok(ItemLayer::new());
        }
        Err(e) => return Err(CliError::io(path, e)),
    };

    let layer = nhl_persist::load(&bytes).map_err(|source| CliError::Persist {
        path: path.to_path_buf(),
        source,
    })?;
    log::info!(
        "Loaded base layer {} ({} items)",
        path.display(),
        layer.placed_count()
    );
    Ok(layer)
}

/// Read each script file as UTF-8, named by its path.
pub fn read_sources(paths: &[PathBuf]) -> Result<Vec<ScriptSource>, CliError> {
    paths
        .iter()
        .map(|path| {
            let text = std::fs::read_to_string(path).map_err(|e| CliError::io(path, e))?;
            Ok(ScriptSource::new(path.display().to_string(), text))
        })
        .collect()
}

fn write_report(
    layer: &ItemLayer,
    settings: &RunSettings,
    out: &mut impl Write,
) -> Result<(), CliError> {
    let report = DropReport::new(
        &layer.items(true),
        settings.drop_group,
        &settings.drop_command,
    );
    if settings.json {
        writeln!(out, "{}", report.to_json()?).map_err(CliError::Report)?;
    } else {
        for line in report.lines() {
            writeln!(out, "{line}").map_err(CliError::Report)?;
        }
    }
    Ok(())
}
