//! Configuration for waypath
//!
//! Configuration is read from a TOML file:
//!
//! ```toml
//! [graph]
//! directed = true
//! default_edge_cost = 1
//!
//! [search]
//! strategy = "dijkstra"
//! tie_break = "vertex"
//! ```

pub mod types;

use std::fs;
use std::path::Path;

use crate::error::Result;
use crate::search::SearchOptions;

pub use types::{GraphConfig, SearchConfig, WaypathConfig};

impl WaypathConfig {
    /// Load configuration from a file
    #[tracing::instrument(skip(path), fields(path = %path.display()))]
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Parse configuration from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: WaypathConfig = toml::from_str(content)?;
        tracing::debug!(
            directed = config.graph.directed,
            default_edge_cost = config.graph.default_edge_cost,
            strategy = %config.search.strategy,
            "config_loaded"
        );
        Ok(config)
    }

    /// Search options described by this configuration
    pub fn search_options(&self) -> SearchOptions {
        SearchOptions::from(&self.search)
    }
}
