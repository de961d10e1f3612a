//! `waypath search` command - run one search over a graph given as arguments
//!
//! - `--edge FROM:TO[:COST]` adds both vertices and the edge
//! - `--vertex V` adds an isolated vertex
//! - `--from S [--to T]` picks the source and optional target

use tracing::debug;

use crate::cli::{Cli, SearchArgs};
use crate::commands::output::print_report;
use waypath_core::config::{GraphConfig, WaypathConfig};
use waypath_core::error::Result;
use waypath_core::graph::Graph;
use waypath_core::search::{Pathfinder, SearchOptions, Searchable};

/// Execute the search command
pub fn execute(cli: &Cli, config: &WaypathConfig, args: &SearchArgs) -> Result<()> {
    let graph = build_graph(&config.graph, args)?;
    debug!(
        vertices = graph.size(),
        edges = graph.edge_count(),
        directed = graph.is_directed(),
        "graph_built"
    );

    let options = SearchOptions::new(args.strategy.unwrap_or(config.search.strategy))
        .with_tie_break(config.search.tie_break);
    let mut finder = Pathfinder::new(&graph, options);
    finder.search_to(&args.from, args.to.as_ref())?;

    print_report(cli, &finder.summary())
}

/// Build the graph described by the arguments
///
/// `--directed` forces a directed graph; otherwise the configuration decides.
pub fn build_graph(config: &GraphConfig, args: &SearchArgs) -> Result<Graph<i64>> {
    let config = GraphConfig {
        directed: config.directed || args.directed,
        ..config.clone()
    };
    let mut graph = Graph::with_config(&config);

    for vertex in &args.vertices {
        graph.add_vertex(*vertex);
    }
    for edge in &args.edges {
        graph.add_vertex(edge.from);
        graph.add_vertex(edge.to);
        match edge.cost {
            Some(cost) => graph.add_edge_with_cost(edge.from, edge.to, cost)?,
            None => graph.add_edge(edge.from, edge.to)?,
        }
    }
    Ok(graph)
}
