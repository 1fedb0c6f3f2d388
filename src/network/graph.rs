use crate::types::{City, CityDegree, GraphSummary, Road};
use petgraph::graph::{EdgeIndex, NodeIndex, UnGraph};
use petgraph::visit::EdgeRef;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::debug;

/// Wrapper around petgraph UnGraph for the road network.
///
/// Nodes iterate in insertion order. Each city's neighbors iterate in the
/// order their roads were first declared. Removing nodes or edges is not
/// supported, so indices stay stable.
#[derive(Debug, Clone, Default)]
pub struct RoadGraph {
    graph: UnGraph<City, f64>,
    node_map: HashMap<City, NodeIndex>,
}

impl RoadGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a city if absent; returns its index either way
    pub fn add_node(&mut self, city: &str) -> NodeIndex {
        if let Some(&index) = self.node_map.get(city) {
            return index;
        }

        let index = self.graph.add_node(city.to_string());
        self.node_map.insert(city.to_string(), index);
        index
    }

    /// Record an undirected road, inserting both cities if needed.
    ///
    /// Re-declaring an existing road overwrites its distance (last write
    /// wins). Self-loops are ignored and yield `None`.
    pub fn add_edge(&mut self, a: &str, b: &str, distance: f64) -> Option<EdgeIndex> {
        if a == b {
            debug!("Ignoring self-loop on {}", a);
            return None;
        }

        let a_index = self.add_node(a);
        let b_index = self.add_node(b);
        Some(self.graph.update_edge(a_index, b_index, distance))
    }

    pub fn contains(&self, city: &str) -> bool {
        self.node_map.contains_key(city)
    }

    /// Get the number of nodes in the graph
    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    /// Get the number of edges in the graph
    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Cities in insertion order
    pub fn nodes(&self) -> impl Iterator<Item = &str> + '_ {
        self.graph
            .node_indices()
            .map(move |index| self.graph[index].as_str())
    }

    /// Roads in declaration order, with endpoints as first declared
    pub fn edges(&self) -> Vec<Road> {
        self.graph
            .edge_references()
            .map(|edge| {
                Road::new(
                    self.graph[edge.source()].clone(),
                    self.graph[edge.target()].clone(),
                    *edge.weight(),
                )
            })
            .collect()
    }

    /// Adjacent cities with road distances; empty for unknown cities
    pub fn neighbors(&self, city: &str) -> Vec<(&str, f64)> {
        let Some(&index) = self.node_map.get(city) else {
            return Vec::new();
        };

        // petgraph walks adjacency newest-first; edge indices restore declaration order
        let mut incident: Vec<(EdgeIndex, NodeIndex, f64)> = self
            .graph
            .edges(index)
            .map(|edge| {
                let other = if edge.source() == index {
                    edge.target()
                } else {
                    edge.source()
                };
                (edge.id(), other, *edge.weight())
            })
            .collect();
        incident.sort_by_key(|(id, _, _)| *id);

        incident
            .into_iter()
            .map(|(_, other, distance)| (self.graph[other].as_str(), distance))
            .collect()
    }

    /// Number of roads incident to `city`; zero for unknown cities
    pub fn degree(&self, city: &str) -> usize {
        self.node_map
            .get(city)
            .map(|&index| self.graph.edges(index).count())
            .unwrap_or(0)
    }

    /// Distance of the road between `a` and `b`, if one exists
    pub fn distance(&self, a: &str, b: &str) -> Option<f64> {
        let a_index = *self.node_map.get(a)?;
        let b_index = *self.node_map.get(b)?;
        self.graph
            .find_edge(a_index, b_index)
            .and_then(|edge| self.graph.edge_weight(edge).copied())
    }

    pub(crate) fn inner(&self) -> &UnGraph<City, f64> {
        &self.graph
    }

    /// Nodes, roads and per-city degree, in graph order
    pub fn summary(&self) -> GraphSummary {
        GraphSummary {
            node_count: self.node_count(),
            edge_count: self.edge_count(),
            nodes: self.nodes().map(str::to_string).collect(),
            roads: self.edges(),
            degrees: self
                .nodes()
                .map(|city| CityDegree {
                    city: city.to_string(),
                    degree: self.degree(city),
                })
                .collect(),
        }
    }

    /// Get graph statistics
    pub fn get_statistics(&self) -> GraphStatistics {
        let total_nodes = self.node_count();
        let total_edges = self.edge_count();

        let degrees: Vec<usize> = self.nodes().map(|city| self.degree(city)).collect();
        let isolated_nodes = degrees.iter().filter(|&&d| d == 0).count();
        let max_degree = degrees.iter().copied().max().unwrap_or(0);

        let average_degree = if total_nodes > 0 {
            degrees.iter().sum::<usize>() as f64 / total_nodes as f64
        } else {
            0.0
        };

        let total_distance = self
            .graph
            .edge_references()
            .map(|edge| *edge.weight())
            .sum::<f64>();

        GraphStatistics {
            total_nodes,
            total_edges,
            isolated_nodes,
            max_degree,
            average_degree,
            total_distance,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GraphStatistics {
    pub total_nodes: usize,
    pub total_edges: usize,
    pub isolated_nodes: usize,
    pub max_degree: usize,
    pub average_degree: f64,
    pub total_distance: f64,
}
