//! CLI argument definitions using clap.
//!
//! ## Commands
//!
//! - `extract`: Scan sources for translation calls and write the template (default)
//! - `init`: Initialize potscan configuration file

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None, args_conflicts_with_subcommands = true)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Arguments for `extract` when no command is given.
    #[command(flatten)]
    pub extract: ExtractArgs,
}

impl Arguments {
    /// The command to run; a bare invocation means `extract`.
    pub fn into_command(self) -> Command {
        self.command
            .unwrap_or(Command::Extract(ExtractCommand { args: self.extract }))
    }

    /// Get the verbose flag from the command's args.
    pub fn verbose(&self) -> bool {
        match &self.command {
            Some(Command::Extract(cmd)) => cmd.args.verbose,
            Some(Command::Init) => false,
            None => self.extract.verbose,
        }
    }
}

#[derive(Debug, Clone, Default, Args)]
pub struct ExtractArgs {
    /// Files or directories to scan (overrides config file)
    #[arg(value_name = "TARGETS")]
    pub targets: Vec<PathBuf>,

    /// Extension of files to scan inside directories (overrides config file)
    #[arg(long)]
    pub extension: Option<String>,

    /// Translation function name (overrides config file)
    #[arg(long)]
    pub function: Option<String>,

    /// Template file to write (overrides config file)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Print the template to stdout instead of writing it
    #[arg(long)]
    pub dry_run: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Args)]
pub struct ExtractCommand {
    #[command(flatten)]
    pub args: ExtractArgs,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Extract translation keys and write a gettext template
    Extract(ExtractCommand),
    /// Initialize a new .potscanrc.json configuration file
    Init,
}
