use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use super::{CommandResult, ExtractSummary};
use crate::cli::args::{ExtractArgs, ExtractCommand};
use crate::config::{Config, load_config};
use crate::core::{ExtractOptions, collect_keys, render_template, run_extraction};

/// Run extraction from `cwd`: load config, apply CLI overrides, scan, write.
pub fn extract(cmd: ExtractCommand, cwd: &Path) -> Result<CommandResult> {
    let args = cmd.args;
    let loaded = load_config(cwd)?;
    let root = loaded.root.as_path();
    let config = apply_overrides(loaded.config, &args)?;

    let targets: Vec<PathBuf> = if args.targets.is_empty() {
        config_paths(&config, root)
    } else {
        // CLI paths are relative to where the user is, not to the config file
        args.targets.iter().map(|t| cwd.join(t)).collect()
    };
    let output = match &args.output {
        Some(output) => cwd.join(output),
        None => root.join(&config.output),
    };

    let options = ExtractOptions {
        targets,
        extension: config.extension,
        function: config.function,
    };

    let (mut extraction, dry_run_output) = if args.dry_run {
        let extraction = collect_keys(&options)?;
        let document = render_template(&extraction.keys);
        (extraction, Some(document))
    } else {
        (run_extraction(&options, &output)?, None)
    };

    for file in &mut extraction.files {
        file.path = display_path(&file.path, cwd);
    }

    Ok(CommandResult::extract(ExtractSummary {
        extraction,
        output: display_path(&output, cwd),
        dry_run_output,
        config_path: loaded.path.map(|p| display_path(&p, cwd)),
    }))
}

/// Merge `--extension` and `--function` into the config and re-validate, so
/// overrides are held to the same rules as the config file.
fn apply_overrides(config: Config, args: &ExtractArgs) -> Result<Config> {
    let config = Config {
        extension: args.extension.clone().unwrap_or(config.extension),
        function: args.function.clone().unwrap_or(config.function),
        ..config
    };
    config
        .validate()
        .context("Invalid command-line options")?;
    Ok(config)
}

fn config_paths(config: &Config, root: &Path) -> Vec<PathBuf> {
    config.scan_targets.iter().map(|t| root.join(t)).collect()
}

/// Show paths under `cwd` relative to it.
pub fn display_path(path: &Path, cwd: &Path) -> PathBuf {
    path.strip_prefix(cwd)
        .map(Path::to_path_buf)
        .unwrap_or_else(|_| path.to_path_buf())
}
