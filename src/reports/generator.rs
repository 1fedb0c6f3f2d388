use crate::reports::formatters::{
    DotFormatter, JsonFormatter, MarkdownFormatter, ReportFormatter, TextFormatter,
};
use crate::types::NetworkReport;
use anyhow::Result;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Output formats supported by the report generator
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    #[default]
    Text,
    Markdown,
    Json,
    Dot,
}

impl FromStr for ReportFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "markdown" | "md" => Ok(Self::Markdown),
            "json" => Ok(Self::Json),
            "dot" => Ok(Self::Dot),
            _ => Err(anyhow::anyhow!("Unsupported format: {}", s)),
        }
    }
}

/// Report generator for creating various output formats
pub struct ReportGenerator;

impl ReportGenerator {
    pub fn new() -> Self {
        Self
    }

    /// Generate report in the specified format
    pub fn generate(&self, report: &NetworkReport, format: ReportFormat) -> Result<String> {
        self.formatter(format).format(report)
    }

    fn formatter(&self, format: ReportFormat) -> Box<dyn ReportFormatter> {
        match format {
            ReportFormat::Text => Box::new(TextFormatter),
            ReportFormat::Markdown => Box::new(MarkdownFormatter),
            ReportFormat::Json => Box::new(JsonFormatter),
            ReportFormat::Dot => Box::new(DotFormatter),
        }
    }
}

impl Default for ReportGenerator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::network::{table, NetworkAnalyzer, ReportRequest, ShortestPathEngine};

    #[test]
    fn test_parse_format() {
        assert_eq!("JSON".parse::<ReportFormat>().unwrap(), ReportFormat::Json);
        assert_eq!("md".parse::<ReportFormat>().unwrap(), ReportFormat::Markdown);
        assert!("pdf".parse::<ReportFormat>().is_err());
    }

    #[test]
    fn test_generate_every_format() {
        let analyzer = NetworkAnalyzer::new(table::ukraine().unwrap(), ShortestPathEngine::default());
        let report = analyzer.report(&ReportRequest::default());
        let generator = ReportGenerator::new();

        for format in [
            ReportFormat::Text,
            ReportFormat::Markdown,
            ReportFormat::Json,
            ReportFormat::Dot,
        ] {
            let rendered = generator.generate(&report, format).unwrap();
            assert!(rendered.contains("Київ"), "{format:?} output is missing cities");
        }
    }
}
