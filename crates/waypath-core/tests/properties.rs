//! Search properties checked on small generated graphs
//!
//! Graphs come from a fixed-seed generator so failures are reproducible. The
//! reference distances are computed by exhaustive relaxation.

use waypath_core::search::{Pathfinder, SearchOptions, Searchable, Strategy, TieBreak};
use waypath_core::{Cost, Graph, WaypathError};

/// Linear congruential generator, enough for reproducible test graphs
struct Lcg(u64);

impl Lcg {
    fn next_u64(&mut self) -> u64 {
        self.0 = self
            .0
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        self.0 >> 33
    }

    fn below(&mut self, bound: u64) -> u64 {
        self.next_u64() % bound
    }
}

/// Random graph over `0..n` with costs below `max_cost` (unit costs if 0)
fn generate(rng: &mut Lcg, n: u32, directed: bool, max_cost: u64) -> Graph<u32> {
    let mut graph = if directed {
        Graph::directed()
    } else {
        Graph::new()
    };
    for v in 0..n {
        graph.add_vertex(v);
    }
    for u in 0..n {
        for v in 0..n {
            if u != v && rng.below(100) < 35 {
                let cost = if max_cost == 0 { 1 } else { rng.below(max_cost) };
                graph.add_edge_with_cost(u, v, cost).unwrap();
            }
        }
    }
    graph
}

/// Shortest distances from `source` by repeated relaxation of every edge
fn reference_distances(graph: &Graph<u32>, source: u32, n: u32) -> Vec<Cost> {
    let mut dist = vec![Cost::UNREACHABLE; n as usize];
    dist[source as usize] = Cost::ZERO;
    for _ in 0..n {
        for u in 0..n {
            if dist[u as usize].is_unreachable() {
                continue;
            }
            for (v, cost) in graph.edges_from(&u) {
                let candidate = dist[u as usize] + cost;
                if candidate < dist[*v as usize] {
                    dist[*v as usize] = candidate;
                }
            }
        }
    }
    dist
}

/// Sum of edge costs along a reconstructed path
fn path_cost(graph: &Graph<u32>, steps: &[u32]) -> Cost {
    steps.windows(2).fold(Cost::ZERO, |acc, pair| {
        acc + graph.edge_cost(&pair[0], &pair[1]).unwrap().unwrap()
    })
}

#[test]
fn test_dijkstra_matches_reference_distances() {
    let mut rng = Lcg(7);
    for round in 0..60 {
        let n = 2 + (round % 7);
        let directed = round % 2 == 0;
        let graph = generate(&mut rng, n, directed, 10);
        let source = rng.below(n as u64) as u32;
        let expected = reference_distances(&graph, source, n);

        for tie_break in [TieBreak::InsertionOrder, TieBreak::Vertex] {
            let options = SearchOptions::new(Strategy::Dijkstra).with_tie_break(tie_break);
            let mut finder = Pathfinder::new(&graph, options);
            finder.search_from(&source).unwrap();

            for v in 0..n {
                assert_eq!(
                    finder.path_cost_to(&v),
                    expected[v as usize],
                    "round {} vertex {} ({:?})",
                    round,
                    v,
                    tie_break
                );
                assert_eq!(finder.is_visited(&v), !expected[v as usize].is_unreachable());
            }
        }
    }
}

#[test]
fn test_dijkstra_paths_agree_with_costs() {
    let mut rng = Lcg(11);
    for round in 0..40 {
        let n = 3 + (round % 6);
        let graph = generate(&mut rng, n, round % 3 == 0, 8);
        let mut finder = Pathfinder::new(&graph, Strategy::Dijkstra);
        finder.search_from(&0).unwrap();

        for v in 0..n {
            let path = finder.path_to(&v).to_vec();
            if !finder.is_visited(&v) {
                assert!(path.is_empty());
                continue;
            }
            assert_eq!(path.first(), Some(&0));
            assert_eq!(path.last(), Some(&v));
            assert_eq!(path_cost(&graph, &path), finder.path_cost_to(&v));
        }
    }
}

#[test]
fn test_breadth_first_equals_dijkstra_on_unit_costs() {
    let mut rng = Lcg(23);
    for round in 0..40 {
        let n = 2 + (round % 8);
        let graph = generate(&mut rng, n, round % 2 == 1, 0);

        let mut bfs = Pathfinder::new(&graph, Strategy::BreadthFirst);
        let mut dijkstra = Pathfinder::new(&graph, Strategy::Dijkstra);
        bfs.search_from(&0).unwrap();
        dijkstra.search_from(&0).unwrap();

        for v in 0..n {
            assert_eq!(bfs.path_cost_to(&v), dijkstra.path_cost_to(&v), "round {}", round);
            let path = bfs.path_to(&v).to_vec();
            if !path.is_empty() {
                assert_eq!(path_cost(&graph, &path), bfs.path_cost_to(&v));
            }
        }
    }
}

#[test]
fn test_depth_first_is_exact_on_trees() {
    // Random directed trees: every vertex above 0 gets one parent below it
    let mut rng = Lcg(31);
    for round in 0..30 {
        let n = 2 + (round % 9);
        let mut graph = Graph::directed();
        for v in 0..n {
            graph.add_vertex(v);
        }
        for v in 1..n {
            let parent = rng.below(v as u64) as u32;
            graph.add_edge_with_cost(parent, v, 1 + rng.below(9)).unwrap();
        }

        let expected = reference_distances(&graph, 0, n);
        let mut dfs = Pathfinder::new(&graph, Strategy::DepthFirst);
        dfs.search_from(&0).unwrap();
        for v in 0..n {
            assert!(dfs.is_visited(&v));
            assert_eq!(dfs.path_cost_to(&v), expected[v as usize]);
        }
    }
}

#[test]
fn test_visited_vertices_are_reachable() {
    let mut rng = Lcg(47);
    for round in 0..30 {
        let n = 2 + (round % 7);
        let graph = generate(&mut rng, n, true, 5);
        let expected = reference_distances(&graph, 0, n);

        for strategy in Strategy::ALL {
            let mut finder = Pathfinder::new(&graph, strategy);
            finder.search_from(&0).unwrap();
            for v in 0..n {
                let reachable = !expected[v as usize].is_unreachable();
                assert_eq!(finder.is_visited(&v), reachable, "{} vertex {}", strategy, v);
                if !reachable {
                    assert!(finder.path_cost_to(&v).is_unreachable());
                    assert!(finder.path_to(&v).is_empty());
                }
            }
        }
    }
}

#[test]
fn test_isolated_source() {
    let mut graph = Graph::new();
    for v in 0..3u32 {
        graph.add_vertex(v);
    }
    graph.add_edge(1, 2).unwrap();

    for strategy in Strategy::ALL {
        let mut finder = Pathfinder::new(&graph, strategy);
        finder.search_from(&0).unwrap();
        assert_eq!(finder.path_cost_to(&0), Cost::ZERO);
        assert_eq!(finder.path_to(&0).to_vec(), vec![0]);
        assert!(finder.path_cost_to(&2).is_unreachable());
        assert_eq!(finder.stats().unwrap().expanded, 1);
    }
}

#[test]
fn test_error_contract() {
    let mut graph = Graph::new();
    graph.add_vertex(1u32);
    graph.add_vertex(2u32);

    assert!(matches!(
        graph.add_edge(1, 3),
        Err(WaypathError::InvalidArgument { .. })
    ));
    assert!(matches!(
        graph.edge_cost(&1, &3),
        Err(WaypathError::InvalidArgument { .. })
    ));
    assert_eq!(graph.edge_cost(&1, &2).unwrap(), None);

    assert!(matches!(
        Pathfinder::unordered(&graph, Strategy::Dijkstra),
        Err(WaypathError::InvalidState(_))
    ));

    let mut finder = Pathfinder::new(&graph, Strategy::BreadthFirst);
    assert!(matches!(
        finder.search_from(&5),
        Err(WaypathError::InvalidArgument { .. })
    ));
    finder.search_from(&1).unwrap();
    assert!(matches!(
        finder.search_from(&1),
        Err(WaypathError::InvalidState(_))
    ));
}
