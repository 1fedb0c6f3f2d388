/// Configuration management for the road network analyzer
use crate::network::shortest_path::SelectionStrategy;
use crate::network::table::DEFAULT_SOURCE;
use crate::reports::ReportFormat;
use crate::types::Road;
use anyhow::{Context, Result};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub network: NetworkSettings,
    pub shortest_path: ShortestPathSettings,
    pub report: ReportSettings,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct NetworkSettings {
    pub source: String,
    /// YAML road table; the built-in network is used when absent
    pub roads_file: Option<PathBuf>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ShortestPathSettings {
    pub strategy: SelectionStrategy,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportSettings {
    pub format: ReportFormat,
    pub all_sources: bool,
}

impl Default for NetworkSettings {
    fn default() -> Self {
        Self {
            source: DEFAULT_SOURCE.to_string(),
            roads_file: None,
        }
    }
}

impl Config {
    /// Load configuration from file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;
        let config: Config = serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {:?}", path))?;
        Ok(config)
    }

    /// Save configuration to file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content = serde_yaml::to_string(self)?;
        fs::write(path.as_ref(), content)
            .with_context(|| format!("Failed to write config file: {:?}", path.as_ref()))?;
        Ok(())
    }

    /// Load configuration from environment variables
    pub fn load_from_env() -> Result<Self> {
        let mut config = Config::default();

        // Override with environment variables if present
        if let Ok(source) = std::env::var("ROAD_NETWORK_SOURCE") {
            config.network.source = source;
        }

        if let Ok(roads_file) = std::env::var("ROAD_NETWORK_ROADS_FILE") {
            config.network.roads_file = Some(PathBuf::from(roads_file));
        }

        if let Ok(format) = std::env::var("ROAD_NETWORK_FORMAT") {
            config.report.format = format.parse()?;
        }

        if let Ok(strategy) = std::env::var("ROAD_NETWORK_STRATEGY") {
            config.shortest_path.strategy = SelectionStrategy::from_str(&strategy, true)
                .map_err(|e| anyhow::anyhow!("Invalid ROAD_NETWORK_STRATEGY: {}", e))?;
        }

        if let Ok(all_sources) = std::env::var("ROAD_NETWORK_ALL_SOURCES") {
            config.report.all_sources = all_sources
                .parse()
                .context("ROAD_NETWORK_ALL_SOURCES must be true or false")?;
        }

        Ok(config)
    }

    /// Merge with another configuration (other takes precedence)
    pub fn merge_with(&mut self, other: Config) {
        if other.network.source != DEFAULT_SOURCE {
            self.network.source = other.network.source;
        }
        if other.network.roads_file.is_some() {
            self.network.roads_file = other.network.roads_file;
        }

        if other.shortest_path.strategy != SelectionStrategy::default() {
            self.shortest_path.strategy = other.shortest_path.strategy;
        }

        if other.report.format != ReportFormat::default() {
            self.report.format = other.report.format;
        }
        self.report.all_sources |= other.report.all_sources;
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.network.source.trim().is_empty() {
            return Err(anyhow::anyhow!("Source city must not be empty"));
        }

        if let Some(path) = &self.network.roads_file {
            if !path.exists() {
                return Err(anyhow::anyhow!("Roads file not found: {:?}", path));
            }
        }

        Ok(())
    }
}

/// External road table: a YAML document with a `roads` list
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RoadTable {
    pub roads: Vec<Road>,
}

impl RoadTable {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read roads file: {:?}", path))?;
        let table: RoadTable = serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse roads file: {:?}", path))?;
        Ok(table)
    }
}
