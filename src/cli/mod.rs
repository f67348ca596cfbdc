//! Command-line interface layer.
//!
//! Parsing (`args`), dispatch (`run`), the commands themselves and console
//! output (`report`).

use anyhow::Result;

mod args;
pub mod commands;
mod exit_status;
mod report;
mod run;

pub use args::{Arguments, Command, ExtractArgs, ExtractCommand};
pub use exit_status::ExitStatus;
pub use report::{SUCCESS_MARK, print_to};
pub use run::{run, run_in};

use commands::{CommandResult, CommandSummary};

pub fn run_cli(args: Arguments) -> Result<ExitStatus> {
    let verbose = args.verbose();

    let result = run(args)?;
    report::print(&result, verbose);

    Ok(exit_status_from_result(&result))
}

pub fn exit_status_from_result(result: &CommandResult) -> ExitStatus {
    match &result.summary {
        CommandSummary::Init(summary) if !summary.created => ExitStatus::Failure,
        _ => ExitStatus::Success,
    }
}
