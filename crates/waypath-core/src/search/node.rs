//! Per-vertex search state
//!
//! The table is an arena: nodes live in a `Vec` and refer to their parent by
//! [`NodeId`], so the parent chain is a tree of indices rather than a graph
//! of owning pointers.

use crate::graph::{Cost, Graph, Vertex};
use crate::path::Path;
use std::collections::HashMap;

/// Index of a node in a [`NodeTable`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    pub fn index(self) -> usize {
        self.0
    }
}

/// Search state for one graph vertex
#[derive(Debug, Clone)]
pub struct SearchNode<'g, V> {
    pub vertex: &'g V,
    pub cost: Cost,
    pub visited: bool,
    pub parent: Option<NodeId>,
}

impl<'g, V> SearchNode<'g, V> {
    fn new(vertex: &'g V) -> Self {
        Self {
            vertex,
            cost: Cost::UNREACHABLE,
            visited: false,
            parent: None,
        }
    }
}

/// One [`SearchNode`] per vertex of the graph at construction time
#[derive(Debug, Clone)]
pub struct NodeTable<'g, V> {
    nodes: Vec<SearchNode<'g, V>>,
    index: HashMap<&'g V, NodeId>,
}

impl<'g, V: Vertex> NodeTable<'g, V> {
    /// Snapshot the current vertex set of `graph`
    pub fn from_graph(graph: &'g Graph<V>) -> Self {
        let mut nodes = Vec::with_capacity(graph.size());
        let mut index = HashMap::with_capacity(graph.size());
        for vertex in graph.vertices() {
            index.insert(vertex, NodeId(nodes.len()));
            nodes.push(SearchNode::new(vertex));
        }
        Self { nodes, index }
    }

    pub fn id_of(&self, vertex: &V) -> Option<NodeId> {
        self.index.get(vertex).copied()
    }

    pub fn node(&self, id: NodeId) -> &SearchNode<'g, V> {
        &self.nodes[id.0]
    }

    pub fn get(&self, vertex: &V) -> Option<&SearchNode<'g, V>> {
        self.id_of(vertex).map(|id| self.node(id))
    }

    /// The vertex a node stands for, borrowed from the graph
    pub fn vertex(&self, id: NodeId) -> &'g V {
        self.nodes[id.0].vertex
    }

    pub fn cost(&self, id: NodeId) -> Cost {
        self.nodes[id.0].cost
    }

    pub fn is_visited(&self, id: NodeId) -> bool {
        self.nodes[id.0].visited
    }

    pub fn visit(&mut self, id: NodeId) {
        self.nodes[id.0].visited = true;
    }

    /// Record a (possibly new) best route to `id` through `parent`
    pub fn relax(&mut self, id: NodeId, cost: Cost, parent: NodeId) {
        let node = &mut self.nodes[id.0];
        node.cost = cost;
        node.parent = Some(parent);
    }

    /// Mark `id` as the search source
    pub fn start(&mut self, id: NodeId) {
        let node = &mut self.nodes[id.0];
        node.cost = Cost::ZERO;
        node.parent = None;
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn ids(&self) -> impl Iterator<Item = NodeId> {
        (0..self.nodes.len()).map(NodeId)
    }

    pub fn visited_count(&self) -> usize {
        self.nodes.iter().filter(|n| n.visited).count()
    }

    /// Walk parent references from `id` back to the source
    ///
    /// Returns an empty path if the node was never visited.
    pub fn path_to(&self, id: NodeId) -> Path<V> {
        let mut path = Path::new();
        if !self.is_visited(id) {
            return path;
        }

        let mut current = Some(id);
        // A parent chain can never be longer than the table
        let mut remaining = self.nodes.len();
        while let Some(node_id) = current {
            if remaining == 0 {
                break;
            }
            remaining -= 1;
            let node = self.node(node_id);
            path.prepend(node.vertex.clone());
            current = node.parent;
        }
        path
    }
}
