use crate::network::shortest_path::SelectionStrategy;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Core types for road network analysis

/// A city name. Nodes compare and hash by value.
pub type City = String;

/// Distance reported for a city that cannot be reached from the source
pub const UNREACHABLE: f64 = f64::INFINITY;

/// An undirected road between two distinct cities
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Road {
    pub from: City,
    pub to: City,
    pub distance: f64,
}

impl Road {
    pub fn new(from: impl Into<City>, to: impl Into<City>, distance: f64) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            distance,
        }
    }

    /// Whether this road joins `a` and `b`, in either direction
    pub fn connects(&self, a: &str, b: &str) -> bool {
        (self.from == a && self.to == b) || (self.from == b && self.to == a)
    }
}

/// Edges in the order a traversal followed them
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TraversalSequence {
    edges: Vec<(City, City)>,
}

impl TraversalSequence {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn push(&mut self, from: &str, to: &str) {
        self.edges.push((from.to_string(), to.to_string()));
    }

    pub fn len(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    pub fn edges(&self) -> &[(City, City)] {
        &self.edges
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.edges.iter().map(|(from, to)| (from.as_str(), to.as_str()))
    }

    /// Cities touched by the sequence: the first tail, then every head in order
    pub fn visited_cities(&self) -> Vec<&str> {
        let mut cities = Vec::with_capacity(self.edges.len() + 1);
        if let Some((first, _)) = self.edges.first() {
            cities.push(first.as_str());
        }
        cities.extend(self.edges.iter().map(|(_, to)| to.as_str()));
        cities
    }
}

impl<'a> IntoIterator for &'a TraversalSequence {
    type Item = &'a (City, City);
    type IntoIter = std::slice::Iter<'a, (City, City)>;

    fn into_iter(self) -> Self::IntoIter {
        self.edges.iter()
    }
}

/// Shortest distance from one source to every city in the graph.
///
/// Unreachable cities hold [`UNREACHABLE`]. Each map is built fresh per call.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DistanceMap {
    distances: HashMap<City, f64>,
}

impl DistanceMap {
    /// Distance to `city`, or `None` if the city is not part of the graph
    pub fn get(&self, city: &str) -> Option<f64> {
        self.distances.get(city).copied()
    }

    /// Distance to `city`, treating unknown cities as unreachable
    pub fn distance_to(&self, city: &str) -> f64 {
        self.get(city).unwrap_or(UNREACHABLE)
    }

    pub fn is_reachable(&self, city: &str) -> bool {
        self.distance_to(city).is_finite()
    }

    pub fn reachable_count(&self) -> usize {
        self.distances.values().filter(|d| d.is_finite()).count()
    }

    pub fn len(&self) -> usize {
        self.distances.len()
    }

    pub fn is_empty(&self) -> bool {
        self.distances.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.distances.iter().map(|(city, d)| (city.as_str(), *d))
    }
}

impl FromIterator<(City, f64)> for DistanceMap {
    fn from_iter<I: IntoIterator<Item = (City, f64)>>(iter: I) -> Self {
        Self {
            distances: iter.into_iter().collect(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CityDegree {
    pub city: City,
    pub degree: usize,
}

/// Structural description of the network: nodes, roads and degrees
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GraphSummary {
    pub node_count: usize,
    pub edge_count: usize,
    pub nodes: Vec<City>,
    pub roads: Vec<Road>,
    pub degrees: Vec<CityDegree>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TraversalReport {
    pub source: City,
    pub dfs: TraversalSequence,
    pub bfs: TraversalSequence,
}

/// One entry of a rendered distance map; `None` means unreachable
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DistanceEntry {
    pub city: City,
    pub distance: Option<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceDistances {
    pub source: City,
    pub distances: Vec<DistanceEntry>,
}

impl SourceDistances {
    /// Lay out `map` in the given city order
    pub fn from_map<'a>(
        source: &str,
        map: &DistanceMap,
        order: impl IntoIterator<Item = &'a str>,
    ) -> Self {
        let distances = order
            .into_iter()
            .map(|city| DistanceEntry {
                city: city.to_string(),
                distance: Some(map.distance_to(city)).filter(|d| d.is_finite()),
            })
            .collect();

        Self {
            source: source.to_string(),
            distances,
        }
    }
}

/// Everything the reporting layer needs to render one run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NetworkReport {
    pub summary: GraphSummary,
    pub statistics: crate::network::graph::GraphStatistics,
    pub traversal: Option<TraversalReport>,
    pub shortest_paths: Vec<SourceDistances>,
    pub strategy: SelectionStrategy,
    pub generated_at: DateTime<Utc>,
}
