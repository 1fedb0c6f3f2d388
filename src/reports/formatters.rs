use crate::network::graph::RoadGraph;
use crate::types::{NetworkReport, SourceDistances, TraversalSequence};
use anyhow::Result;
use petgraph::dot::Dot;
use std::fmt::Write;

/// Trait for report formatters
pub trait ReportFormatter {
    fn format(&self, report: &NetworkReport) -> Result<String>;
}

/// Markdown formatter
pub struct MarkdownFormatter;

impl ReportFormatter for MarkdownFormatter {
    fn format(&self, report: &NetworkReport) -> Result<String> {
        let summary = &report.summary;
        let mut out = String::new();

        writeln!(out, "# Road Network Report\n")?;
        writeln!(out, "- **Nodes**: {}", summary.node_count)?;
        writeln!(out, "- **Edges**: {}", summary.edge_count)?;
        writeln!(
            out,
            "- **Average Degree**: {:.2}",
            report.statistics.average_degree
        )?;
        writeln!(
            out,
            "- **Total Road Length**: {}",
            format_distance(report.statistics.total_distance)
        )?;

        writeln!(out, "\n## Roads\n")?;
        writeln!(out, "| From | To | Distance |")?;
        writeln!(out, "|------|----|----------|")?;
        for road in &summary.roads {
            writeln!(
                out,
                "| {} | {} | {} |",
                road.from,
                road.to,
                format_distance(road.distance)
            )?;
        }

        writeln!(out, "\n## Degrees\n")?;
        for entry in &summary.degrees {
            writeln!(out, "- {}: {}", entry.city, entry.degree)?;
        }

        if let Some(traversal) = &report.traversal {
            writeln!(out, "\n## Traversal from {}\n", traversal.source)?;
            writeln!(out, "**DFS**: {}\n", format_sequence(&traversal.dfs))?;
            writeln!(out, "**BFS**: {}\n", format_sequence(&traversal.bfs))?;
            writeln!(
                out,
                "DFS follows one branch to its end before backtracking; \
                 BFS visits every city at the current depth before going deeper."
            )?;
        }

        if !report.shortest_paths.is_empty() {
            writeln!(out, "\n## Shortest Distances ({:?})", report.strategy)?;
            for entry in &report.shortest_paths {
                writeln!(out, "\n### From {}\n", entry.source)?;
                for distance in &entry.distances {
                    writeln!(
                        out,
                        "- {}: {}",
                        distance.city,
                        format_optional_distance(distance.distance)
                    )?;
                }
            }
        }

        writeln!(
            out,
            "\n---\n*Generated at: {}*",
            report.generated_at.format("%Y-%m-%d %H:%M:%S UTC")
        )?;
        Ok(out)
    }
}

/// JSON formatter
pub struct JsonFormatter;

impl ReportFormatter for JsonFormatter {
    fn format(&self, report: &NetworkReport) -> Result<String> {
        Ok(serde_json::to_string_pretty(report)?)
    }
}

/// Plain text formatter
pub struct TextFormatter;

impl ReportFormatter for TextFormatter {
    fn format(&self, report: &NetworkReport) -> Result<String> {
        let summary = &report.summary;
        let mut out = String::new();

        writeln!(out, "Number of nodes: {}", summary.node_count)?;
        writeln!(out, "Number of edges: {}", summary.edge_count)?;
        writeln!(out, "Nodes: {}", summary.nodes.join(", "))?;

        let roads: Vec<String> = summary
            .roads
            .iter()
            .map(|road| format!("({}, {}, {})", road.from, road.to, format_distance(road.distance)))
            .collect();
        writeln!(out, "Edges: {}", roads.join(", "))?;

        for entry in &summary.degrees {
            writeln!(out, "Degree of {}: {}", entry.city, entry.degree)?;
        }

        if let Some(traversal) = &report.traversal {
            writeln!(out)?;
            writeln!(out, "DFS path from {}: {}", traversal.source, format_sequence(&traversal.dfs))?;
            writeln!(out, "BFS path from {}: {}", traversal.source, format_sequence(&traversal.bfs))?;
        }

        if !report.shortest_paths.is_empty() {
            writeln!(out)?;
            for entry in &report.shortest_paths {
                writeln!(out, "Shortest paths from `{}`: {}", entry.source, format_distances(entry))?;
            }
        }

        Ok(out)
    }
}

/// Graphviz DOT formatter; renders the network itself, not the analysis
pub struct DotFormatter;

impl ReportFormatter for DotFormatter {
    fn format(&self, report: &NetworkReport) -> Result<String> {
        let mut graph = RoadGraph::new();
        for city in &report.summary.nodes {
            graph.add_node(city);
        }
        for road in &report.summary.roads {
            graph.add_edge(&road.from, &road.to, road.distance);
        }

        Ok(render_dot(&graph))
    }
}

/// Undirected DOT rendering with city names on nodes and distances on edges
pub fn render_dot(graph: &RoadGraph) -> String {
    format!("{}", Dot::new(graph.inner()))
}

/// Whole-number distances print without a fractional part
pub fn format_distance(distance: f64) -> String {
    if !distance.is_finite() {
        "unreachable".to_string()
    } else if distance.fract() == 0.0 {
        format!("{:.0}", distance)
    } else {
        format!("{:.2}", distance)
    }
}

fn format_optional_distance(distance: Option<f64>) -> String {
    distance.map_or_else(|| "unreachable".to_string(), format_distance)
}

fn format_sequence(sequence: &TraversalSequence) -> String {
    if sequence.is_empty() {
        return "(none)".to_string();
    }

    sequence
        .iter()
        .map(|(from, to)| format!("{} -> {}", from, to))
        .collect::<Vec<_>>()
        .join(", ")
}

fn format_distances(entry: &SourceDistances) -> String {
    let parts: Vec<String> = entry
        .distances
        .iter()
        .map(|d| format!("{}: {}", d.city, format_optional_distance(d.distance)))
        .collect();
    format!("{{{}}}", parts.join(", "))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::network::{DistanceScope, NetworkAnalyzer, ReportRequest, ShortestPathEngine};

    fn create_report() -> NetworkReport {
        let mut graph = RoadGraph::new();
        graph.add_edge("A", "B", 1.0);
        graph.add_edge("B", "C", 2.5);
        graph.add_node("D");

        NetworkAnalyzer::new(graph, ShortestPathEngine::default()).report(&ReportRequest {
            traversal_source: Some("A".to_string()),
            distances: DistanceScope::From("A".to_string()),
        })
    }

    #[test]
    fn test_format_distance() {
        assert_eq!(format_distance(145.0), "145");
        assert_eq!(format_distance(2.5), "2.50");
        assert_eq!(format_distance(f64::INFINITY), "unreachable");
    }

    #[test]
    fn test_text_formatter() {
        let text = TextFormatter.format(&create_report()).unwrap();

        assert!(text.contains("Number of nodes: 4"));
        assert!(text.contains("Number of edges: 2"));
        assert!(text.contains("Degree of B: 2"));
        assert!(text.contains("Degree of D: 0"));
        assert!(text.contains("DFS path from A: A -> B, B -> C"));
        assert!(text.contains("Shortest paths from `A`: {A: 0, B: 1, C: 3.50, D: unreachable}"));
    }

    #[test]
    fn test_markdown_formatter() {
        let markdown = MarkdownFormatter.format(&create_report()).unwrap();

        assert!(markdown.starts_with("# Road Network Report"));
        assert!(markdown.contains("| B | C | 2.50 |"));
        assert!(markdown.contains("### From A"));
        assert!(markdown.contains("- D: unreachable"));
    }

    #[test]
    fn test_json_formatter_uses_null_for_unreachable() {
        let json = JsonFormatter.format(&create_report()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        let distances = &value["shortest_paths"][0]["distances"];
        assert_eq!(distances[0]["distance"], 0.0);
        assert!(distances[3]["distance"].is_null());
        assert_eq!(value["strategy"], "linear_scan");
        assert_eq!(value["traversal"]["dfs"][0][0], "A");
    }

    #[test]
    fn test_dot_formatter() {
        let dot = DotFormatter.format(&create_report()).unwrap();

        assert!(dot.starts_with("graph {"));
        assert!(dot.contains("label = \"A\""));
        assert!(dot.contains("label = \"2.5\""));
        assert!(dot.contains(" -- "));
    }
}
