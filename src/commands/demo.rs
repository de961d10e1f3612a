//! `waypath demo` command - sample searches on built-in graphs
//!
//! - a directed tree searched breadth-first and depth-first
//! - an undirected 8-vertex graph searched breadth-first
//! - a weighted 9-vertex graph searched with Dijkstra
//!
//! `--strategy` runs that one strategy on every graph instead.

use std::time::Instant;

use crate::cli::Cli;
use crate::commands::output::{print_labeled, LabeledReport};
use waypath_core::config::WaypathConfig;
use waypath_core::error::Result;
use waypath_core::graph::Graph;
use waypath_core::search::{Pathfinder, SearchOptions, Searchable, Strategy};
use waypath_core::trace_time;

/// A sample graph with the source and strategies it is shown with
pub struct SampleGraph {
    pub name: &'static str,
    pub graph: Graph<i64>,
    pub source: i64,
    pub strategies: &'static [Strategy],
}

/// Execute the demo command
pub fn execute(cli: &Cli, config: &WaypathConfig, strategy: Option<Strategy>) -> Result<()> {
    let start = Instant::now();
    let mut reports = Vec::new();

    for sample in sample_graphs()? {
        let strategies = match strategy {
            Some(ref s) => std::slice::from_ref(s),
            None => sample.strategies,
        };
        for &strategy in strategies {
            let options = SearchOptions::new(strategy).with_tie_break(config.search.tie_break);
            let mut finder = Pathfinder::new(&sample.graph, options);
            finder.search_from(&sample.source)?;
            reports.push(LabeledReport {
                graph: format!("{} ({})", sample.name, strategy),
                report: finder.summary(),
            });
        }
    }
    trace_time!(start, "demo_searches", runs = reports.len());

    print_labeled(cli, &reports)
}

/// The built-in sample graphs
pub fn sample_graphs() -> Result<Vec<SampleGraph>> {
    Ok(vec![
        SampleGraph {
            name: "tree",
            graph: tree()?,
            source: 1,
            strategies: &[Strategy::BreadthFirst, Strategy::DepthFirst],
        },
        SampleGraph {
            name: "fan",
            graph: fan()?,
            source: 0,
            strategies: &[Strategy::BreadthFirst],
        },
        SampleGraph {
            name: "weighted",
            graph: weighted()?,
            source: 0,
            strategies: &[Strategy::Dijkstra],
        },
    ])
}

/// Directed tree: 1 -> 2, 1 -> 3, 2 -> 4, 2 -> 5
fn tree() -> Result<Graph<i64>> {
    let mut graph = Graph::directed();
    for v in 1..=5 {
        graph.add_vertex(v);
    }
    for (from, to) in [(1, 2), (1, 3), (2, 4), (2, 5)] {
        graph.add_edge(from, to)?;
    }
    Ok(graph)
}

/// Undirected unit-cost graph with two routes to 7
fn fan() -> Result<Graph<i64>> {
    let mut graph = Graph::new();
    for v in 0..8 {
        graph.add_vertex(v);
    }
    for (from, to) in [(0, 1), (0, 2), (0, 3), (1, 4), (1, 5), (2, 6), (2, 7), (3, 7)] {
        graph.add_edge(from, to)?;
    }
    Ok(graph)
}

/// Undirected weighted graph over 0..9
fn weighted() -> Result<Graph<i64>> {
    let mut graph = Graph::new();
    for v in 0..9 {
        graph.add_vertex(v);
    }
    for (from, to, cost) in [
        (0, 1, 4),
        (0, 7, 8),
        (1, 2, 8),
        (1, 7, 11),
        (2, 3, 7),
        (2, 5, 4),
        (2, 8, 2),
        (3, 4, 9),
        (3, 5, 14),
        (4, 5, 10),
        (5, 6, 2),
        (6, 7, 1),
        (6, 8, 6),
        (7, 8, 7),
    ] {
        graph.add_edge_with_cost(from, to, cost)?;
    }
    Ok(graph)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_graph_shapes() {
        let samples = sample_graphs().unwrap();
        let shapes: Vec<(&str, usize, usize)> = samples
            .iter()
            .map(|s| (s.name, s.graph.size(), s.graph.edge_count()))
            .collect();
        assert_eq!(
            shapes,
            vec![("tree", 5, 4), ("fan", 8, 8), ("weighted", 9, 14)]
        );
        assert!(samples[0].graph.is_directed());
    }

    #[test]
    fn test_weighted_sample_costs() {
        let samples = sample_graphs().unwrap();
        let weighted = &samples[2];
        let mut finder = Pathfinder::new(&weighted.graph, Strategy::Dijkstra);
        finder.search_from(&weighted.source).unwrap();
        let costs: Vec<u64> = (0..9).map(|v| finder.path_cost_to(&v).value()).collect();
        assert_eq!(costs, vec![0, 4, 12, 19, 21, 11, 9, 8, 14]);
    }
}
