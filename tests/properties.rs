//! Property-based tests for the traversal and shortest-path engines.
//!
//! Properties verified on random small graphs:
//! - Distances match brute-force enumeration of simple paths
//! - Distances are symmetric and both selection strategies agree
//! - DFS and BFS cover exactly the reachable component

use proptest::prelude::*;
use road_network::network::{GraphTraversal, RoadGraph, SelectionStrategy, ShortestPathEngine};
use road_network::types::UNREACHABLE;
use std::collections::HashSet;

fn city(index: usize) -> String {
    format!("c{index}")
}

/// Node count plus a list of (from, to, distance) declarations
fn arb_network() -> impl Strategy<Value = (usize, Vec<(usize, usize, u32)>)> {
    (1usize..7).prop_flat_map(|nodes| {
        (
            Just(nodes),
            prop::collection::vec((0..nodes, 0..nodes, 0u32..20), 0..12),
        )
    })
}

fn build(nodes: usize, roads: &[(usize, usize, u32)]) -> RoadGraph {
    let mut graph = RoadGraph::new();
    for index in 0..nodes {
        graph.add_node(&city(index));
    }
    for &(from, to, distance) in roads {
        graph.add_edge(&city(from), &city(to), f64::from(distance));
    }
    graph
}

/// Minimum length over every simple path from `source` to `target`
fn brute_force(graph: &RoadGraph, source: &str, target: &str) -> f64 {
    fn walk(
        graph: &RoadGraph,
        current: &str,
        target: &str,
        so_far: f64,
        visited: &mut HashSet<String>,
        best: &mut f64,
    ) {
        if current == target {
            *best = best.min(so_far);
            return;
        }
        for (neighbor, distance) in graph.neighbors(current) {
            if visited.insert(neighbor.to_string()) {
                walk(graph, neighbor, target, so_far + distance, visited, best);
                visited.remove(neighbor);
            }
        }
    }

    let mut best = UNREACHABLE;
    let mut visited = HashSet::from([source.to_string()]);
    walk(graph, source, target, 0.0, &mut visited, &mut best);
    best
}

const STRATEGIES: [SelectionStrategy; 2] =
    [SelectionStrategy::LinearScan, SelectionStrategy::BinaryHeap];

proptest! {
    /// Property: every distance equals the cheapest simple path, and the
    /// source is at distance zero
    #[test]
    fn prop_distances_match_brute_force((nodes, roads) in arb_network()) {
        let graph = build(nodes, &roads);
        let source = city(0);

        for strategy in STRATEGIES {
            let distances = ShortestPathEngine::new(strategy).shortest_paths(&graph, &source);
            prop_assert_eq!(distances.get(&source), Some(0.0));
            prop_assert_eq!(distances.len(), nodes);

            for target in graph.nodes() {
                let expected = brute_force(&graph, &source, target);
                prop_assert_eq!(distances.distance_to(target), expected, "target {}", target);
            }
        }
    }

    /// Property: d(a, b) == d(b, a) on an undirected graph
    #[test]
    fn prop_distances_are_symmetric((nodes, roads) in arb_network()) {
        let graph = build(nodes, &roads);
        let all = ShortestPathEngine::default().all_sources(&graph);

        for (a, from_a) in &all {
            for (b, from_b) in &all {
                prop_assert_eq!(from_a.distance_to(b), from_b.distance_to(a));
            }
        }
    }

    /// Property: both strategies produce identical maps, and repeated calls
    /// return identical results
    #[test]
    fn prop_strategies_agree_and_are_idempotent(
        (nodes, roads) in arb_network(),
        source_index in 0usize..7,
    ) {
        let graph = build(nodes, &roads);
        let source = city(source_index % nodes);

        let linear = ShortestPathEngine::new(SelectionStrategy::LinearScan);
        let heap = ShortestPathEngine::new(SelectionStrategy::BinaryHeap);

        let first = linear.shortest_paths(&graph, &source);
        prop_assert_eq!(&first, &linear.shortest_paths(&graph, &source));
        prop_assert_eq!(&first, &heap.shortest_paths(&graph, &source));
    }

    /// Property: DFS and BFS visit exactly the reachable component and emit
    /// one tree edge per non-source city in it
    #[test]
    fn prop_traversals_cover_component((nodes, roads) in arb_network()) {
        let graph = build(nodes, &roads);
        let source = city(0);

        let distances = ShortestPathEngine::default().shortest_paths(&graph, &source);
        let component: HashSet<&str> = graph
            .nodes()
            .filter(|c| distances.is_reachable(c))
            .collect();

        let dfs = GraphTraversal::dfs_edges(&graph, &source);
        let bfs = GraphTraversal::bfs_edges(&graph, &source);

        prop_assert_eq!(dfs.len(), component.len() - 1);
        prop_assert_eq!(bfs.len(), component.len() - 1);

        let mut dfs_nodes: HashSet<&str> = dfs.iter().map(|(_, to)| to).collect();
        dfs_nodes.insert(&source);
        let mut bfs_nodes: HashSet<&str> = bfs.iter().map(|(_, to)| to).collect();
        bfs_nodes.insert(&source);

        prop_assert_eq!(&dfs_nodes, &component);
        prop_assert_eq!(&bfs_nodes, &component);
        prop_assert_eq!(dfs, GraphTraversal::dfs_edges(&graph, &source));
    }
}

#[test]
fn test_two_components_scenario() {
    let graph = build(4, &[(0, 1, 1), (2, 3, 1)]);
    let distances = ShortestPathEngine::default().shortest_paths(&graph, "c0");

    assert_eq!(distances.get("c1"), Some(1.0));
    assert_eq!(distances.get("c3"), Some(UNREACHABLE));
}

#[test]
fn test_degree_scenario() {
    let graph = build(3, &[(0, 1, 4), (0, 2, 9)]);
    assert_eq!(graph.degree("c0"), 2);
}
