//! Command dispatch logic for waypath

use std::time::Instant;

use crate::cli::{Cli, Commands};
use crate::commands;
use tracing::debug;
use waypath_core::config::WaypathConfig;
use waypath_core::error::Result;

pub fn run(cli: &Cli, start: Instant) -> Result<()> {
    let config = load_config(cli)?;

    debug!(elapsed = ?start.elapsed(), "load_config");

    match &cli.command {
        None => {
            println!("waypath {}", env!("CARGO_PKG_VERSION"));
            println!();
            println!("Weighted graph pathfinding with BFS, DFS and Dijkstra.");
            println!();
            println!("Run `waypath --help` for usage information.");
            Ok(())
        }
        Some(Commands::Demo { strategy }) => commands::demo::execute(cli, &config, *strategy),
        Some(Commands::Search(args)) => commands::search::execute(cli, &config, args),
    }
}

/// Configuration from `--config`, or the defaults
fn load_config(cli: &Cli) -> Result<WaypathConfig> {
    match &cli.config {
        Some(path) => WaypathConfig::load(path),
        None => Ok(WaypathConfig::default()),
    }
}
