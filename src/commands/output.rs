//! Report printing shared by the commands

use serde::Serialize;
use std::fmt::Display;

use crate::cli::Cli;
use waypath_core::error::Result;
use waypath_core::search::SearchReport;

/// A report tagged with the sample graph it came from
#[derive(Debug, Serialize)]
pub struct LabeledReport<V> {
    pub graph: String,
    pub report: SearchReport<V>,
}

/// Print one search report
pub fn print_report<V: Display + Serialize>(cli: &Cli, report: &SearchReport<V>) -> Result<()> {
    if cli.format.is_json() {
        println!("{}", serde_json::to_string_pretty(report)?);
    } else {
        print!("{}", report);
    }
    Ok(())
}

/// Print several reports, each under its graph name
pub fn print_labeled<V: Display + Serialize>(cli: &Cli, reports: &[LabeledReport<V>]) -> Result<()> {
    if cli.format.is_json() {
        println!("{}", serde_json::to_string_pretty(reports)?);
        return Ok(());
    }

    for (i, labeled) in reports.iter().enumerate() {
        if i > 0 {
            println!();
        }
        if !cli.quiet {
            println!("== {} ==", labeled.graph);
        }
        print!("{}", labeled.report);
    }
    Ok(())
}
