use crate::network::graph::RoadGraph;
use crate::types::{City, TraversalSequence};
use serde::{Deserialize, Serialize};
use std::collections::{HashSet, VecDeque};
use tracing::{debug, warn};

/// Graph traversal utilities for road networks
pub struct GraphTraversal;

impl GraphTraversal {
    /// Run the traversal selected by `order` from `source`
    pub fn traverse(graph: &RoadGraph, source: &str, order: TraversalOrder) -> TraversalSequence {
        match order {
            TraversalOrder::DepthFirst => Self::dfs_edges(graph, source),
            TraversalOrder::BreadthFirst => Self::bfs_edges(graph, source),
        }
    }

    /// Depth-first tree edges from `source`.
    ///
    /// Each city's neighbors are explored in adjacency order, and a branch is
    /// followed to its end before the next neighbor is considered. The
    /// frontier is an explicit stack of neighbor iterators.
    pub fn dfs_edges(graph: &RoadGraph, source: &str) -> TraversalSequence {
        let mut sequence = TraversalSequence::new();
        if !graph.contains(source) {
            warn!("DFS source {} is not in the graph", source);
            return sequence;
        }

        let mut visited = HashSet::new();
        visited.insert(source);

        let mut stack = vec![(source, graph.neighbors(source).into_iter())];

        while let Some((current, neighbors)) = stack.last_mut() {
            let current = *current;
            match neighbors.next() {
                Some((neighbor, _)) => {
                    if visited.insert(neighbor) {
                        sequence.push(current, neighbor);
                        stack.push((neighbor, graph.neighbors(neighbor).into_iter()));
                    }
                }
                None => {
                    stack.pop();
                }
            }
        }

        debug!("DFS from {} followed {} edges", source, sequence.len());
        sequence
    }

    /// Breadth-first tree edges from `source`
    pub fn bfs_edges(graph: &RoadGraph, source: &str) -> TraversalSequence {
        let mut sequence = TraversalSequence::new();
        if !graph.contains(source) {
            warn!("BFS source {} is not in the graph", source);
            return sequence;
        }

        let mut visited = HashSet::new();
        let mut queue = VecDeque::new();

        queue.push_back(source);
        visited.insert(source);

        while let Some(current) = queue.pop_front() {
            for (neighbor, _) in graph.neighbors(current) {
                if visited.insert(neighbor) {
                    sequence.push(current, neighbor);
                    queue.push_back(neighbor);
                }
            }
        }

        debug!("BFS from {} followed {} edges", source, sequence.len());
        sequence
    }

    /// Cities in the connected component of `source`, in BFS discovery order.
    ///
    /// Includes `source` itself; empty when `source` is not in the graph.
    pub fn reachable_nodes(graph: &RoadGraph, source: &str) -> Vec<City> {
        if !graph.contains(source) {
            return Vec::new();
        }

        let mut reachable = vec![source.to_string()];
        reachable.extend(
            Self::bfs_edges(graph, source)
                .iter()
                .map(|(_, to)| to.to_string()),
        );
        reachable
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TraversalOrder {
    DepthFirst,
    BreadthFirst,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::network::table;

    fn create_test_graph() -> RoadGraph {
        //   A
        //  / \
        // B   C
        // |   |
        // D   E     F - G
        let mut graph = RoadGraph::new();
        graph.add_edge("A", "B", 1.0);
        graph.add_edge("A", "C", 1.0);
        graph.add_edge("B", "D", 1.0);
        graph.add_edge("C", "E", 1.0);
        graph.add_edge("F", "G", 1.0);
        graph
    }

    fn pairs(sequence: &TraversalSequence) -> Vec<(&str, &str)> {
        sequence.iter().collect()
    }

    #[test]
    fn test_dfs_goes_deep_first() {
        let graph = create_test_graph();
        let dfs = GraphTraversal::dfs_edges(&graph, "A");

        assert_eq!(
            pairs(&dfs),
            vec![("A", "B"), ("B", "D"), ("A", "C"), ("C", "E")]
        );
    }

    #[test]
    fn test_bfs_goes_level_by_level() {
        let graph = create_test_graph();
        let bfs = GraphTraversal::bfs_edges(&graph, "A");

        assert_eq!(
            pairs(&bfs),
            vec![("A", "B"), ("A", "C"), ("B", "D"), ("C", "E")]
        );
    }

    #[test]
    fn test_traversals_stay_in_component() {
        let graph = create_test_graph();

        for order in [TraversalOrder::DepthFirst, TraversalOrder::BreadthFirst] {
            let sequence = GraphTraversal::traverse(&graph, "A", order);
            assert_eq!(sequence.len(), 4);
            assert!(sequence.iter().all(|(from, to)| from != "F" && to != "G"));
        }

        let other = GraphTraversal::dfs_edges(&graph, "G");
        assert_eq!(pairs(&other), vec![("G", "F")]);
    }

    #[test]
    fn test_cycle_edges_are_skipped() {
        let mut graph = RoadGraph::new();
        graph.add_edge("A", "B", 1.0);
        graph.add_edge("B", "C", 2.0);
        graph.add_edge("A", "C", 5.0);

        let dfs = GraphTraversal::dfs_edges(&graph, "A");
        assert_eq!(pairs(&dfs), vec![("A", "B"), ("B", "C")]);

        let bfs = GraphTraversal::bfs_edges(&graph, "A");
        assert_eq!(pairs(&bfs), vec![("A", "B"), ("A", "C")]);
    }

    #[test]
    fn test_unknown_source_is_empty() {
        let graph = create_test_graph();

        assert!(GraphTraversal::dfs_edges(&graph, "Z").is_empty());
        assert!(GraphTraversal::bfs_edges(&graph, "Z").is_empty());
        assert!(GraphTraversal::reachable_nodes(&graph, "Z").is_empty());
    }

    #[test]
    fn test_isolated_source_has_no_edges() {
        let mut graph = RoadGraph::new();
        graph.add_node("A");

        assert!(GraphTraversal::dfs_edges(&graph, "A").is_empty());
        assert_eq!(GraphTraversal::reachable_nodes(&graph, "A"), vec!["A"]);
    }

    #[test]
    fn test_reachable_nodes() {
        let graph = create_test_graph();
        let reachable = GraphTraversal::reachable_nodes(&graph, "A");

        assert_eq!(reachable, vec!["A", "B", "C", "D", "E"]);
    }

    #[test]
    fn test_ukraine_dfs_from_kyiv() {
        let graph = table::ukraine().unwrap();
        let dfs = GraphTraversal::dfs_edges(&graph, "Київ");

        assert_eq!(
            pairs(&dfs),
            vec![
                ("Київ", "Чернігів"),
                ("Чернігів", "Суми"),
                ("Суми", "Полтава"),
                ("Полтава", "Харків"),
                ("Харків", "Дніпро"),
                ("Дніпро", "Кропивницький"),
                ("Кропивницький", "Черкаси"),
                ("Кропивницький", "Миколаїв"),
                ("Київ", "Житомир"),
                ("Житомир", "Рівне"),
                ("Рівне", "Луцьк"),
                ("Луцьк", "Тернопіль"),
                ("Тернопіль", "Хмельницький"),
                ("Хмельницький", "Вінниця"),
                ("Вінниця", "Чернівці"),
                ("Чернівці", "Львів"),
                ("Чернівці", "Івано-Франківськ"),
            ]
        );
    }

    #[test]
    fn test_ukraine_bfs_from_kyiv() {
        let graph = table::ukraine().unwrap();
        let bfs = GraphTraversal::bfs_edges(&graph, "Київ");

        assert_eq!(
            pairs(&bfs),
            vec![
                ("Київ", "Чернігів"),
                ("Київ", "Житомир"),
                ("Київ", "Черкаси"),
                ("Київ", "Полтава"),
                ("Чернігів", "Суми"),
                ("Житомир", "Рівне"),
                ("Житомир", "Вінниця"),
                ("Житомир", "Луцьк"),
                ("Черкаси", "Кропивницький"),
                ("Полтава", "Харків"),
                ("Рівне", "Тернопіль"),
                ("Вінниця", "Хмельницький"),
                ("Вінниця", "Чернівці"),
                ("Кропивницький", "Миколаїв"),
                ("Кропивницький", "Дніпро"),
                ("Чернівці", "Львів"),
                ("Чернівці", "Івано-Франківськ"),
            ]
        );
    }
}
