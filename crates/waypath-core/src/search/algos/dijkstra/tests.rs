use super::*;
use crate::graph::Graph;
use crate::search::ordering::VertexOrdering;

fn run<'g>(
    graph: &'g Graph<u32>,
    ordering: &VertexOrdering<'g, u32>,
    tie_break: TieBreak,
    source: u32,
    target: Option<u32>,
) -> (NodeTable<'g, u32>, SearchStats) {
    let mut table = NodeTable::from_graph(graph);
    let ctx = SearchContext {
        graph,
        source: table.id_of(&source).unwrap(),
        target: target.and_then(|t| table.id_of(&t)),
        ordering: Some(ordering),
        tie_break,
    };
    let stats = search(&ctx, &mut table);
    (table, stats)
}

fn costs(table: &NodeTable<'_, u32>, vertices: impl IntoIterator<Item = u32>) -> Vec<u64> {
    vertices
        .into_iter()
        .map(|v| table.get(&v).unwrap().cost.value())
        .collect()
}

fn weighted_nine() -> Graph<u32> {
    let mut graph = Graph::new();
    for v in 0..9 {
        graph.add_vertex(v);
    }
    for (u, v, c) in [
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
        graph.add_edge_with_cost(u, v, c).unwrap();
    }
    graph
}

/// Test HeapEntry comparison ordering
#[test]
fn test_heap_entry_ordering() {
    let entry = |cost: u64, rank: usize, seq: u64| HeapEntry {
        node: NodeId(0),
        cost: Cost::new(cost),
        rank,
        seq,
    };

    // Lower cost compares as less regardless of rank and sequence
    assert_eq!(entry(1, 9, 9).cmp(&entry(2, 0, 0)), Ordering::Less);
    // Equal costs fall back to rank, then push order
    assert_eq!(entry(3, 0, 5).cmp(&entry(3, 1, 0)), Ordering::Less);
    assert_eq!(entry(3, 1, 2).cmp(&entry(3, 1, 7)), Ordering::Less);
    assert_eq!(entry(3, 1, 2), entry(3, 1, 2));

    // Reverse turns the max-heap into a min-heap
    let mut heap = BinaryHeap::new();
    heap.push(Reverse(entry(5, 0, 0)));
    heap.push(Reverse(entry(1, 0, 1)));
    heap.push(Reverse(entry(3, 0, 2)));
    assert_eq!(heap.pop().unwrap().0.cost.value(), 1);
    assert_eq!(heap.pop().unwrap().0.cost.value(), 3);
}

#[test]
fn test_dijkstra_weighted_nine() {
    let graph = weighted_nine();
    let ordering = VertexOrdering::natural();
    let (table, stats) = run(&graph, &ordering, TieBreak::InsertionOrder, 0, None);

    assert_eq!(costs(&table, 0..9), vec![0, 4, 12, 19, 21, 11, 9, 8, 14]);
    assert_eq!(stats.expanded, 9);
    assert!(!stats.reached_target);
    assert_eq!(table.visited_count(), 9);
    assert_eq!(
        table.path_to(table.id_of(&4).unwrap()).to_vec(),
        vec![0, 7, 6, 5, 4]
    );
}

#[test]
fn test_dijkstra_result_independent_of_tie_break() {
    let graph = weighted_nine();
    let natural = VertexOrdering::natural();
    let reversed = VertexOrdering::from_fn(|a: &u32, b: &u32| b.cmp(a));

    let (by_insertion, _) = run(&graph, &natural, TieBreak::InsertionOrder, 0, None);
    let (by_vertex, _) = run(&graph, &natural, TieBreak::Vertex, 0, None);
    let (by_reversed, _) = run(&graph, &reversed, TieBreak::Vertex, 0, None);

    let expected = costs(&by_insertion, 0..9);
    assert_eq!(costs(&by_vertex, 0..9), expected);
    assert_eq!(costs(&by_reversed, 0..9), expected);
}

#[test]
fn test_dijkstra_skips_stale_entries() {
    // 1 is first pushed at cost 10, then again at cost 2 via 3; the cost 10
    // entry must be discarded
    let mut graph = Graph::directed();
    for v in 0..4 {
        graph.add_vertex(v);
    }
    graph.add_edge_with_cost(0, 1, 10).unwrap();
    graph.add_edge_with_cost(0, 3, 1).unwrap();
    graph.add_edge_with_cost(3, 1, 1).unwrap();
    graph.add_edge_with_cost(1, 2, 1).unwrap();

    let ordering = VertexOrdering::natural();
    let (table, stats) = run(&graph, &ordering, TieBreak::InsertionOrder, 0, None);

    assert_eq!(costs(&table, 0..4), vec![0, 2, 3, 1]);
    assert_eq!(stats.stale_skipped, 1);
    assert_eq!(stats.expanded, 4);
    assert_eq!(
        table.path_to(table.id_of(&2).unwrap()).to_vec(),
        vec![0, 3, 1, 2]
    );
}

#[test]
fn test_dijkstra_tie_break_by_vertex() {
    // 0 -> 1 and 0 -> 2 both cost 1; the target is 2
    let mut graph = Graph::directed();
    for v in 0..3 {
        graph.add_vertex(v);
    }
    graph.add_edge_with_cost(0, 1, 1).unwrap();
    graph.add_edge_with_cost(0, 2, 1).unwrap();

    // Natural order pops 1 before 2
    let natural = VertexOrdering::natural();
    let (_, stats) = run(&graph, &natural, TieBreak::Vertex, 0, Some(2));
    assert!(stats.reached_target);
    assert_eq!(stats.expanded, 2);

    // Reversed order pops 2 first
    let reversed = VertexOrdering::from_fn(|a: &u32, b: &u32| b.cmp(a));
    let (table, stats) = run(&graph, &reversed, TieBreak::Vertex, 0, Some(2));
    assert!(stats.reached_target);
    assert_eq!(stats.expanded, 1);
    assert!(!table.get(&1).unwrap().visited);
}

#[test]
fn test_dijkstra_early_exit_leaves_tentative_costs() {
    let mut graph = Graph::new();
    for v in 0..3 {
        graph.add_vertex(v);
    }
    graph.add_edge_with_cost(0, 1, 1).unwrap();
    graph.add_edge_with_cost(0, 2, 5).unwrap();
    graph.add_edge_with_cost(1, 2, 1).unwrap();

    let ordering = VertexOrdering::natural();
    let (table, stats) = run(&graph, &ordering, TieBreak::InsertionOrder, 0, Some(1));

    assert!(stats.reached_target);
    assert_eq!(table.get(&1).unwrap().cost.value(), 1);
    // 2 was only discovered from 0; the cheaper route through 1 was never relaxed
    let two = table.get(&2).unwrap();
    assert_eq!(two.cost.value(), 5);
    assert!(!two.visited);
    assert!(table.path_to(table.id_of(&2).unwrap()).is_empty());
}

#[test]
fn test_dijkstra_zero_cost_edges() {
    let mut graph = Graph::new();
    for v in 0..4 {
        graph.add_vertex(v);
    }
    graph.add_edge_with_cost(0, 1, 0).unwrap();
    graph.add_edge_with_cost(1, 2, 0).unwrap();
    graph.add_edge_with_cost(2, 0, 0).unwrap();
    graph.add_edge_with_cost(2, 3, 3).unwrap();

    let ordering = VertexOrdering::natural();
    let (table, _) = run(&graph, &ordering, TieBreak::InsertionOrder, 0, None);
    assert_eq!(costs(&table, 0..4), vec![0, 0, 0, 3]);
    let path = table.path_to(table.id_of(&3).unwrap());
    assert_eq!(path.source(), Some(&0));
    assert_eq!(path.destination(), Some(&3));
}

#[test]
fn test_dijkstra_unreachable_component() {
    let mut graph = weighted_nine();
    graph.add_vertex(100);
    graph.add_vertex(101);
    graph.add_edge_with_cost(100, 101, 1).unwrap();

    let ordering = VertexOrdering::natural();
    let (table, _) = run(&graph, &ordering, TieBreak::InsertionOrder, 0, None);
    for v in [100, 101] {
        let node = table.get(&v).unwrap();
        assert!(node.cost.is_unreachable());
        assert!(!node.visited);
        assert!(node.parent.is_none());
    }
}
