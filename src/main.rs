//! Waypath - weighted graph pathfinding CLI
//!
//! Runs breadth-first, depth-first and Dijkstra searches over built-in
//! sample graphs or graphs given on the command line.

mod cli;
mod commands;

use std::env;
use std::process::ExitCode;
use std::time::Instant;

use clap::Parser;

use cli::Cli;
use waypath_core::error::{ExitCode as WaypathExitCode, WaypathError};
use waypath_core::logging;

fn main() -> ExitCode {
    let start = Instant::now();

    let argv_format_json = argv_requests_json();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            // clap can fail before `Cli.format` exists; honour a JSON request
            // seen on the raw command line
            if argv_format_json {
                let error = match err.kind() {
                    clap::error::ErrorKind::DisplayHelp
                    | clap::error::ErrorKind::DisplayVersion => err.exit(),
                    _ => WaypathError::UsageError(err.to_string()),
                };

                eprintln!("{}", error.to_json());
                return ExitCode::from(error.exit_code() as u8);
            }

            err.exit();
        }
    };

    if let Err(e) = logging::init_tracing(cli.verbose, cli.log_level.as_deref(), cli.log_json) {
        eprintln!("Warning: Failed to initialize logging: {}", e);
    }

    tracing::debug!(elapsed = ?start.elapsed(), "parse_args");

    match commands::dispatch::run(&cli, start) {
        Ok(()) => ExitCode::from(WaypathExitCode::Success as u8),
        Err(e) => {
            let exit_code = e.exit_code();

            if cli.format.is_json() {
                eprintln!("{}", e.to_json());
            } else if !cli.quiet {
                eprintln!("error: {}", e);
            }

            ExitCode::from(exit_code as u8)
        }
    }
}

fn argv_requests_json() -> bool {
    requests_json(env::args().skip(1))
}

/// Whether `--format json` (in any case) appears among `args`
fn requests_json(args: impl IntoIterator<Item = String>) -> bool {
    let mut args = args.into_iter();
    while let Some(arg) = args.next() {
        if arg == "--format" {
            if args.next().is_some_and(|v| v.eq_ignore_ascii_case("json")) {
                return true;
            }
        } else if let Some(value) = arg.strip_prefix("--format=") {
            if value.eq_ignore_ascii_case("json") {
                return true;
            }
        }
    }
    false
}
