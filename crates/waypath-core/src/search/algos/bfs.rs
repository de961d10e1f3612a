//! Breadth-first strategy
//!
//! Vertices are marked visited when first discovered and expanded in FIFO
//! order. A visited neighbor reached more cheaply has its cost and parent
//! updated but is not queued again, so the improvement does not reach nodes
//! already expanded from it. Costs are therefore exact hop counts on
//! unit-cost graphs and a best-effort traversal otherwise.

use super::SearchContext;
use crate::graph::Vertex;
use crate::search::node::NodeTable;
use crate::search::types::SearchStats;
use std::collections::VecDeque;

pub fn search<'g, V: Vertex>(
    ctx: &SearchContext<'_, 'g, V>,
    table: &mut NodeTable<'g, V>,
) -> SearchStats {
    let mut stats = SearchStats::default();
    let mut queue = VecDeque::new();

    table.start(ctx.source);
    table.visit(ctx.source);
    queue.push_back(ctx.source);

    while let Some(current) = queue.pop_front() {
        if ctx.is_target(current) {
            stats.reached_target = true;
            break;
        }

        stats.expanded += 1;
        let current_cost = table.cost(current);

        for (neighbor, edge_cost) in ctx.neighbors(table, current) {
            let candidate = current_cost + edge_cost;
            if !table.is_visited(neighbor) {
                table.relax(neighbor, candidate, current);
                table.visit(neighbor);
                queue.push_back(neighbor);
                stats.relaxed += 1;
            } else if candidate < table.cost(neighbor) {
                table.relax(neighbor, candidate, current);
                stats.relaxed += 1;
            }
        }
    }

    stats
}
