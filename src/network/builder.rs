use crate::error::{NetworkError, NetworkResult};
use crate::network::graph::RoadGraph;
use crate::types::Road;
use tracing::{debug, info};

/// Folds a static distance table into a [`RoadGraph`].
///
/// Every declaration goes through [`RoadGraph::add_edge`], so a road listed
/// from both endpoints collapses into one edge carrying the last distance.
#[derive(Debug, Default)]
pub struct NetworkBuilder {
    graph: RoadGraph,
    declarations: usize,
}

impl NetworkBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare a city, connected or not
    pub fn city(&mut self, name: &str) -> NetworkResult<&mut Self> {
        if name.trim().is_empty() {
            return Err(NetworkError::EmptyCityName);
        }
        self.graph.add_node(name);
        Ok(self)
    }

    /// Declare a road; distances must be finite and non-negative
    pub fn road(&mut self, from: &str, to: &str, distance: f64) -> NetworkResult<&mut Self> {
        validate_road(from, to, distance)?;
        self.graph.add_edge(from, to, distance);
        self.declarations += 1;
        Ok(self)
    }

    /// Build from explicit `(city, neighbor, distance)` triples
    pub fn from_roads<I>(roads: I) -> NetworkResult<RoadGraph>
    where
        I: IntoIterator<Item = Road>,
    {
        let mut builder = Self::new();
        for road in roads {
            builder.road(&road.from, &road.to, road.distance)?;
        }
        Ok(builder.build())
    }

    /// Build from an adjacency table: each row names a city and its neighbors.
    ///
    /// The row's city is inserted before its neighbors, so node order follows
    /// the table's row order.
    pub fn from_adjacency<'a, I, R>(table: I) -> NetworkResult<RoadGraph>
    where
        I: IntoIterator<Item = (&'a str, R)>,
        R: IntoIterator<Item = (&'a str, f64)>,
    {
        let mut builder = Self::new();
        for (city, connections) in table {
            builder.city(city)?;
            for (neighbor, distance) in connections {
                builder.road(city, neighbor, distance)?;
            }
        }
        Ok(builder.build())
    }

    pub fn build(self) -> RoadGraph {
        info!(
            "Road network built with {} nodes and {} edges from {} declarations",
            self.graph.node_count(),
            self.graph.edge_count(),
            self.declarations
        );
        self.graph
    }
}

fn validate_road(from: &str, to: &str, distance: f64) -> NetworkResult<()> {
    if from.trim().is_empty() || to.trim().is_empty() {
        return Err(NetworkError::EmptyCityName);
    }

    if from == to {
        return Err(NetworkError::SelfLoop {
            from: from.to_string(),
            to: to.to_string(),
        });
    }

    if !distance.is_finite() {
        return Err(NetworkError::NonFiniteDistance {
            from: from.to_string(),
            to: to.to_string(),
            distance,
        });
    }

    if distance < 0.0 {
        return Err(NetworkError::NegativeDistance {
            from: from.to_string(),
            to: to.to_string(),
            distance,
        });
    }

    debug!("Accepted road {} -> {} ({})", from, to, distance);
    Ok(())
}
