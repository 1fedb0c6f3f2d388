pub mod analyzer;
pub mod builder;
pub mod graph;
pub mod shortest_path;
pub mod table;
pub mod traversal;

pub use analyzer::{DistanceScope, NetworkAnalyzer, ReportRequest};
pub use builder::NetworkBuilder;
pub use graph::RoadGraph;
pub use shortest_path::{SelectionStrategy, ShortestPathEngine};
pub use traversal::{GraphTraversal, TraversalOrder};
