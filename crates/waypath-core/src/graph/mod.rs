//! Weighted graph storage
//!
//! A [`Graph`] maps every vertex to a map of neighbor → [`Cost`]. Vertices are
//! keyed by value, so any `Clone + Eq + Hash + Debug` type can be a vertex.
//! Undirected graphs store each logical edge on both endpoints and always
//! update the two sides together.

pub mod types;


use crate::bail_invalid;
use crate::config::GraphConfig;
use crate::error::{Result, WaypathError};
use std::collections::{HashMap, HashSet};
use std::fmt::Debug;
use std::hash::Hash;

pub use types::Cost;

/// Bound required of graph vertices
pub trait Vertex: Clone + Eq + Hash + Debug {}

impl<T: Clone + Eq + Hash + Debug> Vertex for T {}

/// A collection of vertices and the weighted edges connecting them
#[derive(Debug, Clone)]
pub struct Graph<V: Vertex> {
    adjacency: HashMap<V, HashMap<V, Cost>>,
    directed: bool,
    default_edge_cost: Cost,
}

impl<V: Vertex> Default for Graph<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: Vertex> Graph<V> {
    /// Cost used by [`Graph::add_edge`] unless configured otherwise
    pub const DEFAULT_EDGE_COST: Cost = Cost::new(1);

    /// Create an empty undirected graph
    pub fn new() -> Self {
        Self {
            adjacency: HashMap::new(),
            directed: false,
            default_edge_cost: Self::DEFAULT_EDGE_COST,
        }
    }

    /// Create an empty directed graph
    pub fn directed() -> Self {
        Self {
            directed: true,
            ..Self::new()
        }
    }

    /// Create an empty graph from configuration
    pub fn with_config(config: &GraphConfig) -> Self {
        Self {
            adjacency: HashMap::new(),
            directed: config.directed,
            default_edge_cost: Cost::new(config.default_edge_cost),
        }
    }

    pub fn is_directed(&self) -> bool {
        self.directed
    }

    /// Cost applied by [`Graph::add_edge`]
    pub fn default_edge_cost(&self) -> Cost {
        self.default_edge_cost
    }

    /// Add a vertex with no edges
    ///
    /// Returns `true` if the vertex was newly inserted, `false` if it was
    /// already present (its edges are left untouched).
    pub fn add_vertex(&mut self, vertex: V) -> bool {
        if self.adjacency.contains_key(&vertex) {
            return false;
        }
        tracing::trace!(vertex = ?vertex, "add_vertex");
        self.adjacency.insert(vertex, HashMap::new());
        true
    }

    /// Remove a vertex and every edge that references it
    ///
    /// Returns `false` if the vertex was not present.
    pub fn remove_vertex(&mut self, vertex: &V) -> bool {
        if self.adjacency.remove(vertex).is_none() {
            return false;
        }
        for neighbors in self.adjacency.values_mut() {
            neighbors.remove(vertex);
        }
        tracing::trace!(vertex = ?vertex, "remove_vertex");
        true
    }

    /// Add an edge with the graph's default cost
    pub fn add_edge(&mut self, from: V, to: V) -> Result<()> {
        let cost = self.default_edge_cost;
        self.insert_edge(from, to, cost)
    }

    /// Add an edge with an explicit cost
    ///
    /// Both endpoints must already be vertices of the graph. An existing edge
    /// between the same pair has its cost overwritten. Undirected graphs
    /// record the edge in both directions.
    pub fn add_edge_with_cost(&mut self, from: V, to: V, cost: u64) -> Result<()> {
        self.insert_edge(from, to, Cost::new(cost))
    }

    fn insert_edge(&mut self, from: V, to: V, cost: Cost) -> Result<()> {
        // Check both endpoints before touching either side
        if !self.adjacency.contains_key(&from) {
            bail_invalid!("edge source (not in graph)", format!("{:?}", from));
        }
        if !self.adjacency.contains_key(&to) {
            bail_invalid!("edge target (not in graph)", format!("{:?}", to));
        }

        tracing::trace!(from = ?from, to = ?to, cost = cost.value(), "add_edge");

        if !self.directed {
            if let Some(back) = self.adjacency.get_mut(&to) {
                back.insert(from.clone(), cost);
            }
        }
        if let Some(forward) = self.adjacency.get_mut(&from) {
            forward.insert(to, cost);
        }
        Ok(())
    }

    /// Remove the edge between two vertices (both sides when undirected)
    ///
    /// Returns `true` if an edge was removed.
    pub fn remove_edge(&mut self, from: &V, to: &V) -> bool {
        let removed = self
            .adjacency
            .get_mut(from)
            .and_then(|neighbors| neighbors.remove(to))
            .is_some();
        if removed && !self.directed {
            if let Some(back) = self.adjacency.get_mut(to) {
                back.remove(from);
            }
        }
        removed
    }

    /// Vertices directly reachable from `vertex`
    ///
    /// An absent vertex has no neighbors; this is not an error.
    pub fn neighbors(&self, vertex: &V) -> HashSet<&V> {
        self.adjacency
            .get(vertex)
            .map(|neighbors| neighbors.keys().collect())
            .unwrap_or_default()
    }

    /// Iterate over the outgoing edges of `vertex` as `(neighbor, cost)` pairs
    pub fn edges_from<'a>(&'a self, vertex: &V) -> impl Iterator<Item = (&'a V, Cost)> + 'a {
        self.adjacency
            .get(vertex)
            .into_iter()
            .flat_map(|neighbors| neighbors.iter().map(|(v, cost)| (v, *cost)))
    }

    /// Cost of the edge from `from` to `to`
    ///
    /// Fails if either vertex is missing from the graph. Returns `Ok(None)`
    /// when both are present but not connected.
    pub fn edge_cost(&self, from: &V, to: &V) -> Result<Option<Cost>> {
        let neighbors = self
            .adjacency
            .get(from)
            .ok_or_else(|| WaypathError::vertex_not_found(from))?;
        if !self.adjacency.contains_key(to) {
            return Err(WaypathError::vertex_not_found(to));
        }
        Ok(neighbors.get(to).copied())
    }

    pub fn has_edge(&self, from: &V, to: &V) -> bool {
        self.adjacency
            .get(from)
            .is_some_and(|neighbors| neighbors.contains_key(to))
    }

    pub fn contains_vertex(&self, vertex: &V) -> bool {
        self.adjacency.contains_key(vertex)
    }

    /// Number of vertices
    pub fn size(&self) -> usize {
        self.adjacency.len()
    }

    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }

    /// Number of logical edges (an undirected pair counts once)
    pub fn edge_count(&self) -> usize {
        let stored: usize = self.adjacency.values().map(HashMap::len).sum();
        if self.directed {
            return stored;
        }
        // Self-loops are stored once, every other undirected edge twice
        let loops = self
            .adjacency
            .iter()
            .filter(|(v, neighbors)| neighbors.contains_key(*v))
            .count();
        (stored + loops) / 2
    }

    /// Iterate over all vertices, in no particular order
    pub fn vertices(&self) -> impl Iterator<Item = &V> {
        self.adjacency.keys()
    }
}
