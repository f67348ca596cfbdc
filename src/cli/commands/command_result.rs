use std::path::PathBuf;

use crate::core::Extraction;

#[derive(Debug)]
pub enum CommandSummary {
    Extract(ExtractSummary),
    Init(InitSummary),
}

#[derive(Debug)]
pub struct ExtractSummary {
    pub extraction: Extraction,
    /// Output path as shown to the user.
    pub output: PathBuf,
    /// Rendered template when running with `--dry-run`; `None` once written.
    pub dry_run_output: Option<String>,
    /// Config file the run was configured from, if any.
    pub config_path: Option<PathBuf>,
}

impl ExtractSummary {
    pub fn key_count(&self) -> usize {
        self.extraction.keys.len()
    }

    pub fn file_count(&self) -> usize {
        self.extraction.files.len()
    }
}

#[derive(Debug)]
pub struct InitSummary {
    pub created: bool,
}

/// Result of running potscan commands
#[derive(Debug)]
pub struct CommandResult {
    pub summary: CommandSummary,
}

impl CommandResult {
    pub fn extract(summary: ExtractSummary) -> Self {
        Self {
            summary: CommandSummary::Extract(summary),
        }
    }

    pub fn init(created: bool) -> Self {
        Self {
            summary: CommandSummary::Init(InitSummary { created }),
        }
    }
}
