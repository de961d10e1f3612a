//! Strategy implementations
//!
//! Each strategy drives the same [`NodeTable`] from a different frontier:
//! - `bfs`: FIFO queue
//! - `dfs`: explicit stack
//! - `dijkstra`: min-heap keyed by tentative cost

pub mod bfs;
pub mod dfs;
pub mod dijkstra;

use crate::graph::{Cost, Graph, Vertex};
use crate::search::node::{NodeId, NodeTable};
use crate::search::ordering::VertexOrdering;
use crate::search::types::TieBreak;

/// Inputs shared by every strategy for one run
pub struct SearchContext<'a, 'g, V: Vertex> {
    pub graph: &'g Graph<V>,
    pub source: NodeId,
    pub target: Option<NodeId>,
    pub ordering: Option<&'a VertexOrdering<'g, V>>,
    pub tie_break: TieBreak,
}

impl<'g, V: Vertex> SearchContext<'_, 'g, V> {
    pub fn is_target(&self, id: NodeId) -> bool {
        self.target == Some(id)
    }

    /// Outgoing edges of `id` as table ids with their costs
    ///
    /// Neighbors are sorted by the vertex ordering when one is available so
    /// that traversal order is deterministic.
    pub fn neighbors(&self, table: &NodeTable<'g, V>, id: NodeId) -> Vec<(NodeId, Cost)> {
        let mut neighbors: Vec<(NodeId, Cost)> = self
            .graph
            .edges_from(table.vertex(id))
            .filter_map(|(neighbor, cost)| table.id_of(neighbor).map(|nid| (nid, cost)))
            .collect();

        if let Some(ordering) = self.ordering {
            neighbors.sort_by(|a, b| ordering.compare(table.vertex(a.0), table.vertex(b.0)));
        }
        neighbors
    }
}
