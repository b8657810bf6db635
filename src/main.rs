//! Command-line entry point for `partstitch`.
//!
//! Parses CLI arguments, runs a split or a stitch, and prints one progress
//! line per completed group.

mod cli;

use std::{
    io::{self, Write},
    process::ExitCode,
};

use clap::Parser;
use partstitch::{BaseMatch, SplitConfig, StitchConfig, split_file, stitch_all};

use crate::cli::Cli;

/// Overall result of one invocation, mapped onto the process exit code.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum RunStatus {
    /// Every requested group (or the split) completed.
    Success,
    /// A fatal error occurred or at least one group failed.
    Failure,
}

impl From<RunStatus> for ExitCode {
    fn from(status: RunStatus) -> Self {
        match status {
            RunStatus::Success => ExitCode::SUCCESS,
            RunStatus::Failure => ExitCode::FAILURE,
        }
    }
}

fn main() -> ExitCode {
    // Library code logs through `log`; the subscriber bridges those records.
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    run(&cli, &mut io::stdout().lock()).into()
}

/// Execute `cli`, writing progress lines to `out` and errors to stderr.
fn run(cli: &Cli, out: &mut impl Write) -> RunStatus {
    if let Some(input) = &cli.split {
        let mut config = SplitConfig::default();
        if let Some(part_size) = cli.part_size {
            config.part_size = part_size;
        }
        return match split_file(input, &cli.directory, &config) {
            Ok(parts) => {
                report_line(
                    out,
                    format_args!("Split {} into {} parts", input.display(), parts.len()),
                );
                RunStatus::Success
            }
            Err(err) => {
                tracing::error!(error = %err, "split failed");
                eprintln!("error: {err}");
                RunStatus::Failure
            }
        };
    }

    let base_match = if cli.prefix_match {
        BaseMatch::Prefix
    } else {
        BaseMatch::Exact
    };
    let config = StitchConfig::default().with_base_match(base_match);

    let report = match stitch_all(
        &cli.directory,
        cli.base_filename.as_deref(),
        cli.output_file.as_deref(),
        &config,
    ) {
        Ok(report) => report,
        Err(err) => {
            tracing::error!(error = %err, "stitch failed");
            eprintln!("error: {err}");
            return RunStatus::Failure;
        }
    };

    for outcome in report.outcomes() {
        match outcome.result() {
            Ok(count) => report_line(
                out,
                format_args!(
                    "Stitched {count} parts into {}",
                    outcome.output().display()
                ),
            ),
            Err(err) => eprintln!("error: group {:?}: {err}", outcome.base_name()),
        }
    }

    if report.has_failures() {
        RunStatus::Failure
    } else {
        RunStatus::Success
    }
}

fn report_line(out: &mut impl Write, line: std::fmt::Arguments<'_>) {
    if let Err(err) = writeln!(out, "{line}") {
        tracing::warn!(error = %err, "failed to write progress line");
    }
}
