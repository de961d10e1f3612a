//! Single-source pathfinding over a [`Graph`]
//!
//! A [`Pathfinder`] is bound to one graph and one [`Strategy`]. It snapshots
//! the graph's vertices into a [`NodeTable`] at construction, runs exactly
//! one search, and then answers cost and path queries through the
//! [`Searchable`] trait.
//!
//! ```ignore
//! let mut graph = Graph::new();
//! graph.add_vertex(0);
//! graph.add_vertex(1);
//! graph.add_edge_with_cost(0, 1, 4)?;
//!
//! let mut finder = Pathfinder::new(&graph, Strategy::Dijkstra);
//! finder.search_from(&0)?;
//! assert_eq!(finder.path_cost_to(&1).value(), 4);
//! ```

pub mod algos;
pub mod node;
pub mod ordering;
pub mod report;
mod types;


use crate::bail_state;
use crate::error::{Result, WaypathError};
use crate::graph::{Cost, Graph, Vertex};
use crate::path::Path;
use algos::SearchContext;
use std::cmp::Ordering;
use std::fmt;
use std::time::Instant;

pub use node::{NodeId, NodeTable, SearchNode};
pub use ordering::VertexOrdering;
pub use report::{ReportEntry, SearchReport};
pub use types::{SearchOptions, SearchStats, Strategy, TieBreak};

/// Query interface shared by every search strategy
pub trait Searchable<V> {
    /// Explore everything reachable from `source`
    fn search_from(&mut self, source: &V) -> Result<()> {
        self.search_to(source, None)
    }

    /// Explore from `source`, stopping once `target` is processed
    fn search_to(&mut self, source: &V, target: Option<&V>) -> Result<()>;

    /// Recorded cost of `vertex`, unreachable if it was never part of the graph
    fn path_cost_to(&self, vertex: &V) -> Cost;

    /// Route from the source to `vertex`, empty if it was never visited
    fn path_to(&self, vertex: &V) -> Path<V>;
}

/// Bookkeeping for the one search a pathfinder may run
#[derive(Debug, Clone)]
struct SearchRun<V> {
    source: NodeId,
    target: Option<V>,
    stats: SearchStats,
}

/// A search strategy bound to a graph
pub struct Pathfinder<'g, V: Vertex> {
    graph: &'g Graph<V>,
    table: NodeTable<'g, V>,
    options: SearchOptions,
    ordering: Option<VertexOrdering<'g, V>>,
    run: Option<SearchRun<V>>,
}

impl<'g, V: Vertex + Ord> Pathfinder<'g, V> {
    /// Build a pathfinder ordering vertices by their own `Ord`
    pub fn new(graph: &'g Graph<V>, options: impl Into<SearchOptions>) -> Self {
        Self::build(graph, options.into(), Some(VertexOrdering::natural()))
    }
}

impl<'g, V: Vertex> Pathfinder<'g, V> {
    /// Build a pathfinder ordering vertices with `compare`
    pub fn with_comparator<F>(graph: &'g Graph<V>, options: impl Into<SearchOptions>, compare: F) -> Self
    where
        F: Fn(&V, &V) -> Ordering + 'g,
    {
        Self::build(graph, options.into(), Some(VertexOrdering::from_fn(compare)))
    }

    /// Build a pathfinder with no vertex ordering
    ///
    /// Fails with `InvalidState` for strategies that need one. Neighbors are
    /// then explored in unspecified order.
    pub fn unordered(graph: &'g Graph<V>, options: impl Into<SearchOptions>) -> Result<Self> {
        let options = options.into();
        if options.strategy.requires_ordering() {
            bail_state!(format!(
                "{} search requires a vertex ordering; use Pathfinder::new or Pathfinder::with_comparator",
                options.strategy
            ));
        }
        Ok(Self::build(graph, options, None))
    }

    /// Unordered breadth-first pathfinder
    pub fn breadth_first(graph: &'g Graph<V>) -> Self {
        Self::build(graph, Strategy::BreadthFirst.into(), None)
    }

    /// Unordered depth-first pathfinder
    pub fn depth_first(graph: &'g Graph<V>) -> Self {
        Self::build(graph, Strategy::DepthFirst.into(), None)
    }

    fn build(
        graph: &'g Graph<V>,
        options: SearchOptions,
        ordering: Option<VertexOrdering<'g, V>>,
    ) -> Self {
        Self {
            graph,
            table: NodeTable::from_graph(graph),
            options,
            ordering,
            run: None,
        }
    }

    pub fn options(&self) -> SearchOptions {
        self.options
    }

    pub fn strategy(&self) -> Strategy {
        self.options.strategy
    }

    pub fn graph(&self) -> &'g Graph<V> {
        self.graph
    }

    pub fn ordering(&self) -> Option<&VertexOrdering<'g, V>> {
        self.ordering.as_ref()
    }

    /// Whether the one allowed search has already run
    pub fn has_searched(&self) -> bool {
        self.run.is_some()
    }

    /// Counters from the completed search
    pub fn stats(&self) -> Option<SearchStats> {
        self.run.as_ref().map(|run| run.stats)
    }

    /// Source of the completed search
    pub fn source(&self) -> Option<&'g V> {
        self.run.as_ref().map(|run| self.table.vertex(run.source))
    }

    pub fn is_visited(&self, vertex: &V) -> bool {
        self.table.get(vertex).is_some_and(|node| node.visited)
    }

    /// Node state for `vertex`
    pub fn node(&self, vertex: &V) -> Option<&SearchNode<'g, V>> {
        self.table.get(vertex)
    }

    /// Structured listing of every vertex with its cost and path
    ///
    /// Entries follow the vertex ordering when there is one.
    pub fn summary(&self) -> SearchReport<V> {
        let mut ids: Vec<NodeId> = self.table.ids().collect();
        if let Some(ordering) = &self.ordering {
            ids.sort_by(|a, b| ordering.compare(self.table.vertex(*a), self.table.vertex(*b)));
        }

        let entries = ids
            .into_iter()
            .map(|id| {
                let node = self.table.node(id);
                ReportEntry {
                    vertex: node.vertex.clone(),
                    cost: node.cost.reachable(),
                    visited: node.visited,
                    path: self.table.path_to(id),
                }
            })
            .collect();

        SearchReport {
            strategy: self.options.strategy,
            source: self.source().cloned(),
            target: self.run.as_ref().and_then(|run| run.target.clone()),
            stats: self.stats(),
            entries,
        }
    }

    /// Text table of [`Pathfinder::summary`]
    pub fn report(&self) -> String
    where
        V: fmt::Display,
    {
        self.summary().to_string()
    }
}

impl<'g, V: Vertex> Searchable<V> for Pathfinder<'g, V> {
    #[tracing::instrument(skip(self, source, target), fields(strategy = %self.options.strategy, source = ?source))]
    fn search_to(&mut self, source: &V, target: Option<&V>) -> Result<()> {
        if self.run.is_some() {
            bail_state!("pathfinder has already searched; build a new one for another run");
        }

        let source_id = self
            .table
            .id_of(source)
            .ok_or_else(|| WaypathError::vertex_not_found(source))?;
        let target_id = target.and_then(|t| self.table.id_of(t));
        if let (Some(target), None) = (target, target_id) {
            tracing::debug!(target = ?target, "target not in graph, exploring all reachable vertices");
        }

        let start = Instant::now();
        let ctx = SearchContext {
            graph: self.graph,
            source: source_id,
            target: target_id,
            ordering: self.ordering.as_ref(),
            tie_break: self.options.tie_break,
        };
        let stats = match self.options.strategy {
            Strategy::BreadthFirst => algos::bfs::search(&ctx, &mut self.table),
            Strategy::DepthFirst => algos::dfs::search(&ctx, &mut self.table),
            Strategy::Dijkstra => algos::dijkstra::search(&ctx, &mut self.table),
        };
        crate::trace_time!(start, "search");

        tracing::debug!(
            expanded = stats.expanded,
            relaxed = stats.relaxed,
            stale_skipped = stats.stale_skipped,
            reached_target = stats.reached_target,
            visited = self.table.visited_count(),
            "search_complete"
        );

        self.run = Some(SearchRun {
            source: source_id,
            target: target.cloned(),
            stats,
        });
        Ok(())
    }

    fn path_cost_to(&self, vertex: &V) -> Cost {
        self.table
            .get(vertex)
            .map(|node| node.cost)
            .unwrap_or(Cost::UNREACHABLE)
    }

    fn path_to(&self, vertex: &V) -> Path<V> {
        self.table
            .id_of(vertex)
            .map(|id| self.table.path_to(id))
            .unwrap_or_default()
    }
}

impl<V: Vertex> fmt::Debug for Pathfinder<'_, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Pathfinder")
            .field("options", &self.options)
            .field("ordering", &self.ordering)
            .field("vertices", &self.table.len())
            .field("searched", &self.run.is_some())
            .finish()
    }
}
