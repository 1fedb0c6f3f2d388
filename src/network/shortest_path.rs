use crate::network::graph::RoadGraph;
use crate::types::{City, DistanceMap, UNREACHABLE};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap, HashSet};
use tracing::{debug, warn};

/// How the next city to settle is chosen.
///
/// Both strategies produce identical distances; they differ only in cost.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum SelectionStrategy {
    /// Scan every unvisited city for the minimum, O(V²)
    #[default]
    LinearScan,
    /// Min-heap with lazy deletion, O((V + E) log V)
    BinaryHeap,
}

/// Single-source shortest distances by greedy relaxation (Dijkstra).
///
/// Distances are only correct for non-negative road lengths. Graphs built
/// through [`crate::network::NetworkBuilder`] satisfy that.
#[derive(Debug, Clone, Copy, Default)]
pub struct ShortestPathEngine {
    strategy: SelectionStrategy,
}

impl ShortestPathEngine {
    pub fn new(strategy: SelectionStrategy) -> Self {
        Self { strategy }
    }

    pub fn strategy(&self) -> SelectionStrategy {
        self.strategy
    }

    /// Distance from `source` to every city in the graph.
    ///
    /// Cities in other components map to [`UNREACHABLE`]. An unknown source
    /// yields a map where every city is unreachable.
    pub fn shortest_paths(&self, graph: &RoadGraph, source: &str) -> DistanceMap {
        if !graph.contains(source) {
            warn!("Shortest-path source {} is not in the graph", source);
            return graph
                .nodes()
                .map(|city| (city.to_string(), UNREACHABLE))
                .collect();
        }

        let distances = match self.strategy {
            SelectionStrategy::LinearScan => linear_scan(graph, source),
            SelectionStrategy::BinaryHeap => binary_heap(graph, source),
        };

        let map: DistanceMap = distances
            .into_iter()
            .map(|(city, distance)| (city.to_string(), distance))
            .collect();

        debug!(
            "Shortest paths from {}: {} of {} cities reachable",
            source,
            map.reachable_count(),
            map.len()
        );
        map
    }

    /// One distance map per city, with sources in graph order
    pub fn all_sources(&self, graph: &RoadGraph) -> Vec<(City, DistanceMap)> {
        graph
            .nodes()
            .map(|source| (source.to_string(), self.shortest_paths(graph, source)))
            .collect()
    }
}

/// Settle cities by scanning the unvisited list for its minimum.
///
/// Ties go to the city that comes first in graph order. Once the minimum is
/// infinite the loop stops, leaving every remaining city unreachable.
fn linear_scan<'g>(graph: &'g RoadGraph, source: &str) -> HashMap<&'g str, f64> {
    let mut distances: HashMap<&str, f64> = graph.nodes().map(|city| (city, UNREACHABLE)).collect();
    let mut unvisited: Vec<&str> = graph.nodes().collect();

    if let Some(distance) = distances.get_mut(source) {
        *distance = 0.0;
    }

    while !unvisited.is_empty() {
        let mut closest: Option<(usize, f64)> = None;
        for (position, city) in unvisited.iter().enumerate() {
            let distance = distances.get(city).copied().unwrap_or(UNREACHABLE);
            if closest.map_or(true, |(_, best)| distance < best) {
                closest = Some((position, distance));
            }
        }

        let Some((position, current_distance)) = closest else {
            break;
        };
        if current_distance.is_infinite() {
            break;
        }

        let current = unvisited.remove(position);
        for (neighbor, road) in graph.neighbors(current) {
            let candidate = current_distance + road;
            if let Some(known) = distances.get_mut(neighbor) {
                if candidate < *known {
                    *known = candidate;
                }
            }
        }
    }

    distances
}

/// Heap entry ordered so that `BinaryHeap` pops the nearest city first,
/// breaking ties by graph order
#[derive(Debug, Clone, Copy)]
struct HeapEntry<'g> {
    distance: f64,
    order: usize,
    city: &'g str,
}

impl PartialEq for HeapEntry<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for HeapEntry<'_> {}

impl PartialOrd for HeapEntry<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for HeapEntry<'_> {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .distance
            .total_cmp(&self.distance)
            .then_with(|| other.order.cmp(&self.order))
    }
}

fn binary_heap<'g>(graph: &'g RoadGraph, source: &str) -> HashMap<&'g str, f64> {
    let order: HashMap<&str, usize> = graph
        .nodes()
        .enumerate()
        .map(|(position, city)| (city, position))
        .collect();
    let mut distances: HashMap<&str, f64> = graph.nodes().map(|city| (city, UNREACHABLE)).collect();
    let mut settled = HashSet::new();
    let mut heap = BinaryHeap::new();

    if let Some((&city, &position)) = order.get_key_value(source) {
        distances.insert(city, 0.0);
        heap.push(HeapEntry {
            distance: 0.0,
            order: position,
            city,
        });
    }

    while let Some(HeapEntry { distance, city, .. }) = heap.pop() {
        if !settled.insert(city) {
            continue;
        }

        for (neighbor, road) in graph.neighbors(city) {
            let candidate = distance + road;
            let known = distances.get(neighbor).copied().unwrap_or(UNREACHABLE);
            if candidate < known {
                distances.insert(neighbor, candidate);
                heap.push(HeapEntry {
                    distance: candidate,
                    order: order.get(neighbor).copied().unwrap_or(usize::MAX),
                    city: neighbor,
                });
            }
        }
    }

    distances
}
