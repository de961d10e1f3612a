//! Dijkstra strategy
//!
//! The frontier is a min-heap keyed by each entry's tentative cost at push
//! time. Decrease-key is lazy: an improved vertex is pushed again and the
//! outdated entry is skipped when popped, because its cost no longer matches
//! the table. A vertex is marked visited when its first valid entry is
//! popped, at which point its cost is final for non-negative edge costs.

use super::SearchContext;
use crate::graph::{Cost, Vertex};
use crate::search::node::{NodeId, NodeTable};
use crate::search::types::{SearchStats, TieBreak};
use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

/// Entry in the priority queue, ordered by cost, then rank, then push order
#[derive(Debug, Clone, Copy)]
pub struct HeapEntry {
    pub node: NodeId,
    pub cost: Cost,
    /// Position of the vertex in the resolved ordering (0 for every vertex
    /// when ties are broken by insertion order)
    pub rank: usize,
    pub seq: u64,
}

impl HeapEntry {
    fn key(&self) -> (Cost, usize, u64) {
        (self.cost, self.rank, self.seq)
    }
}

impl PartialEq for HeapEntry {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for HeapEntry {}

impl PartialOrd for HeapEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for HeapEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        self.key().cmp(&other.key())
    }
}

/// State tracked during one Dijkstra run
struct DijkstraState {
    heap: BinaryHeap<Reverse<HeapEntry>>,
    ranks: Vec<usize>,
    next_seq: u64,
}

impl DijkstraState {
    fn new<'g, V: Vertex>(ctx: &SearchContext<'_, 'g, V>, table: &NodeTable<'g, V>) -> Self {
        Self {
            heap: BinaryHeap::new(),
            ranks: vertex_ranks(ctx, table),
            next_seq: 0,
        }
    }

    fn push(&mut self, node: NodeId, cost: Cost) {
        let entry = HeapEntry {
            node,
            cost,
            rank: self.ranks[node.index()],
            seq: self.next_seq,
        };
        self.next_seq += 1;
        self.heap.push(Reverse(entry));
    }

    fn pop(&mut self) -> Option<HeapEntry> {
        self.heap.pop().map(|Reverse(entry)| entry)
    }
}

/// Rank every node by the vertex ordering, or give all nodes rank 0
fn vertex_ranks<'g, V: Vertex>(ctx: &SearchContext<'_, 'g, V>, table: &NodeTable<'g, V>) -> Vec<usize> {
    let mut ranks = vec![0; table.len()];
    let ordering = match (ctx.tie_break, ctx.ordering) {
        (TieBreak::Vertex, Some(ordering)) => ordering,
        _ => return ranks,
    };

    let mut ids: Vec<NodeId> = table.ids().collect();
    ids.sort_by(|a, b| ordering.compare(table.vertex(*a), table.vertex(*b)));
    for (rank, id) in ids.into_iter().enumerate() {
        ranks[id.index()] = rank;
    }
    ranks
}

pub fn search<'g, V: Vertex>(
    ctx: &SearchContext<'_, 'g, V>,
    table: &mut NodeTable<'g, V>,
) -> SearchStats {
    let mut stats = SearchStats::default();
    let mut state = DijkstraState::new(ctx, table);

    table.start(ctx.source);
    state.push(ctx.source, Cost::ZERO);

    while let Some(entry) = state.pop() {
        let current = entry.node;
        if table.is_visited(current) || entry.cost != table.cost(current) {
            stats.stale_skipped += 1;
            continue;
        }
        table.visit(current);

        if ctx.is_target(current) {
            stats.reached_target = true;
            break;
        }

        stats.expanded += 1;

        for (neighbor, edge_cost) in ctx.neighbors(table, current) {
            let candidate = entry.cost + edge_cost;
            if candidate < table.cost(neighbor) {
                table.relax(neighbor, candidate, current);
                state.push(neighbor, candidate);
                stats.relaxed += 1;
            }
        }
    }

    stats
}

#[cfg(test)]
mod tests;
