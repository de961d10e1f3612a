//! CLI argument parsing for waypath
//!
//! Global flags: --config, --format, --quiet, --verbose, --log-level, --log-json

pub mod args;
pub mod parse;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub use args::SearchArgs;
use parse::{parse_format, parse_strategy};
use waypath_core::format::OutputFormat;
use waypath_core::search::Strategy;

/// Waypath - weighted graph pathfinding
#[derive(Parser, Debug)]
#[command(name = "waypath")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Configuration file (TOML)
    #[arg(long, global = true, env = "WAYPATH_CONFIG")]
    pub config: Option<PathBuf>,

    /// Output format (human, json)
    #[arg(long, global = true, value_parser = parse_format, default_value = "human")]
    pub format: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Log search progress at debug level
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log level or filter directive (overrides --verbose)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Emit logs as JSON on stderr
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run sample searches on the built-in graphs
    Demo {
        /// Run only this strategy on every sample graph (bfs, dfs, dijkstra)
        #[arg(long, short, value_parser = parse_strategy)]
        strategy: Option<Strategy>,
    },

    /// Search a graph described by --edge and --vertex arguments
    Search(SearchArgs),
}
