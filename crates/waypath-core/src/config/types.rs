//! Configuration type definitions

use crate::search::{Strategy, TieBreak};
use serde::{Deserialize, Serialize};

/// Top-level waypath configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WaypathConfig {
    /// Graph construction defaults
    #[serde(default)]
    pub graph: GraphConfig,

    /// Search defaults
    #[serde(default)]
    pub search: SearchConfig,
}

/// Defaults applied when building a graph
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphConfig {
    /// Build directed graphs (edges are one-way)
    #[serde(default)]
    pub directed: bool,

    /// Cost of an edge added without an explicit cost
    #[serde(default = "default_edge_cost")]
    pub default_edge_cost: u64,
}

fn default_edge_cost() -> u64 {
    1
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self {
            directed: false,
            default_edge_cost: default_edge_cost(),
        }
    }
}

/// Defaults applied when running a search
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Traversal strategy
    #[serde(default)]
    pub strategy: Strategy,

    /// Secondary key for equal tentative costs in the priority strategy
    #[serde(default)]
    pub tie_break: TieBreak,
}
