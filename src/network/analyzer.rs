use crate::network::graph::RoadGraph;
use crate::network::shortest_path::ShortestPathEngine;
use crate::network::traversal::GraphTraversal;
use crate::types::*;
use chrono::Utc;
use tracing::info;

/// Runs the traversal and shortest-path engines against one road network
/// and collects their results for reporting
#[derive(Debug)]
pub struct NetworkAnalyzer {
    graph: RoadGraph,
    engine: ShortestPathEngine,
}

impl NetworkAnalyzer {
    pub fn new(graph: RoadGraph, engine: ShortestPathEngine) -> Self {
        Self { graph, engine }
    }

    pub fn graph(&self) -> &RoadGraph {
        &self.graph
    }

    pub fn engine(&self) -> &ShortestPathEngine {
        &self.engine
    }

    /// DFS and BFS tree edges from `source`
    pub fn traversal(&self, source: &str) -> TraversalReport {
        TraversalReport {
            source: source.to_string(),
            dfs: GraphTraversal::dfs_edges(&self.graph, source),
            bfs: GraphTraversal::bfs_edges(&self.graph, source),
        }
    }

    /// Distances from `source`, laid out in graph order
    pub fn distances_from(&self, source: &str) -> SourceDistances {
        let map = self.engine.shortest_paths(&self.graph, source);
        SourceDistances::from_map(source, &map, self.graph.nodes())
    }

    /// Distances from every city, sources and entries in graph order
    pub fn distances_from_all(&self) -> Vec<SourceDistances> {
        self.engine
            .all_sources(&self.graph)
            .iter()
            .map(|(source, map)| SourceDistances::from_map(source, map, self.graph.nodes()))
            .collect()
    }

    /// Assemble a report; sections are included according to `request`
    pub fn report(&self, request: &ReportRequest) -> NetworkReport {
        let traversal = request
            .traversal_source
            .as_deref()
            .map(|source| self.traversal(source));

        let shortest_paths = match &request.distances {
            DistanceScope::Omit => Vec::new(),
            DistanceScope::From(source) => vec![self.distances_from(source)],
            DistanceScope::AllSources => self.distances_from_all(),
        };

        info!(
            "Report assembled: traversal={}, {} distance maps",
            traversal.is_some(),
            shortest_paths.len()
        );

        NetworkReport {
            summary: self.graph.summary(),
            statistics: self.graph.get_statistics(),
            traversal,
            shortest_paths,
            strategy: self.engine.strategy(),
            generated_at: Utc::now(),
        }
    }
}

/// Which sections a [`NetworkReport`] should carry
#[derive(Debug, Clone, Default)]
pub struct ReportRequest {
    pub traversal_source: Option<City>,
    pub distances: DistanceScope,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub enum DistanceScope {
    #[default]
    Omit,
    From(City),
    AllSources,
}
