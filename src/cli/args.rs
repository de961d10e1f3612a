use clap::Args;

use super::parse::{parse_edge, parse_strategy, EdgeSpec};
use waypath_core::search::Strategy;

/// Arguments for the search command
#[derive(Args, Debug, Clone)]
pub struct SearchArgs {
    /// Edge as FROM:TO or FROM:TO:COST (can be specified multiple times)
    #[arg(long = "edge", short = 'e', value_parser = parse_edge, action = clap::ArgAction::Append)]
    pub edges: Vec<EdgeSpec>,

    /// Vertex to add even if no edge mentions it (can be specified multiple times)
    #[arg(long = "vertex", allow_negative_numbers = true, action = clap::ArgAction::Append)]
    pub vertices: Vec<i64>,

    /// Search source
    #[arg(long, allow_negative_numbers = true)]
    pub from: i64,

    /// Stop once this vertex is reached
    #[arg(long, allow_negative_numbers = true)]
    pub to: Option<i64>,

    /// Search strategy (bfs, dfs, dijkstra); defaults to the configured one
    #[arg(long, short, value_parser = parse_strategy)]
    pub strategy: Option<Strategy>,

    /// Treat edges as one-way
    #[arg(long)]
    pub directed: bool,
}
