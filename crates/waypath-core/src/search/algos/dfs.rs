//! Depth-first strategy
//!
//! Uses an explicit stack. A vertex is marked visited when it is popped, not
//! when it is pushed, so the same vertex may sit on the stack more than once;
//! later copies are discarded. Every push overwrites the neighbor's cost and
//! parent with the route through the node being expanded. Visited neighbors
//! are only relaxed when strictly cheaper and are never pushed again, so as
//! with breadth-first the costs are exact on trees but not in general.
//!
//! When a vertex ordering is available, neighbors are pushed largest first so
//! the smallest neighbor is explored next.

use super::SearchContext;
use crate::graph::Vertex;
use crate::search::node::NodeTable;
use crate::search::types::SearchStats;

pub fn search<'g, V: Vertex>(
    ctx: &SearchContext<'_, 'g, V>,
    table: &mut NodeTable<'g, V>,
) -> SearchStats {
    let mut stats = SearchStats::default();
    let mut stack = vec![ctx.source];

    table.start(ctx.source);

    while let Some(current) = stack.pop() {
        if table.is_visited(current) {
            stats.stale_skipped += 1;
            continue;
        }
        table.visit(current);

        if ctx.is_target(current) {
            stats.reached_target = true;
            break;
        }

        stats.expanded += 1;
        let current_cost = table.cost(current);

        for (neighbor, edge_cost) in ctx.neighbors(table, current).into_iter().rev() {
            let candidate = current_cost + edge_cost;
            if !table.is_visited(neighbor) {
                table.relax(neighbor, candidate, current);
                stack.push(neighbor);
                stats.relaxed += 1;
            } else if candidate < table.cost(neighbor) {
                table.relax(neighbor, candidate, current);
                stats.relaxed += 1;
            }
        }
    }

    stats
}
