use std::{env, path::Path};

use anyhow::{Context, Result};

use super::{
    args::{Arguments, Command},
    commands::{CommandResult, extract::extract, init::init},
};

/// Dispatch to the command handler, resolving paths against the process's
/// current directory.
pub fn run(args: Arguments) -> Result<CommandResult> {
    let cwd = env::current_dir().context("Failed to determine current directory")?;
    run_in(args, &cwd)
}

/// Dispatch with an explicit working directory.
pub fn run_in(args: Arguments, cwd: &Path) -> Result<CommandResult> {
    match args.into_command() {
        Command::Extract(cmd) => extract(cmd, cwd),
        Command::Init => init(cwd),
    }
}
